//! Entity factories for constructing test data.
//!
//! Each factory creates an entity with sensible defaults and a builder-style
//! interface for overriding individual fields in specific test scenarios.

pub mod acp_server;
pub mod acp_submission;
pub mod category;
pub mod helpers;
pub mod job;
