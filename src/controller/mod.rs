//! HTTP request handlers.
//!
//! Controllers validate access, convert request DTOs, delegate to the service
//! layer, and shape HTTP responses. No business logic lives here.

pub mod categories;
pub mod jobs;
pub mod servers;
pub mod services;
pub mod submissions;
pub mod waitlist;
pub mod webhooks;
