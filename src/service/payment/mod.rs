//! Payment collaborator integration.
//!
//! `client` talks to the provider's REST API, `event` parses and verifies
//! signed webhook notifications, and `reconcile` applies confirmed events to
//! local state idempotently.

pub mod client;
pub mod event;
pub mod reconcile;

pub use client::{CheckoutMode, CheckoutSession, CheckoutSessionParams, PaymentClient};
