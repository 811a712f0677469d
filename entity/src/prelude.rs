pub use super::acp_server::Entity as AcpServer;
pub use super::acp_submission::Entity as AcpSubmission;
pub use super::category::Entity as Category;
pub use super::job::Entity as Job;
pub use super::service_request::Entity as ServiceRequest;
pub use super::waitlist_entry::Entity as WaitlistEntry;
