pub mod prelude;

pub mod acp_server;
pub mod acp_submission;
pub mod category;
pub mod job;
pub mod sea_orm_active_enums;
pub mod service_request;
pub mod waitlist_entry;
