//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. The payment client is
//! constructed explicitly at startup and injected here so handlers never
//! reach for a lazily-built global; when payments are unconfigured the field
//! is `None` and the affected endpoints return an explicit error.

use sea_orm::DatabaseConnection;

use crate::service::payment::PaymentClient;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types: `DatabaseConnection` is a connection
/// pool (clones share the pool), `PaymentClient` wraps a `reqwest::Client`
/// which is internally reference-counted, and the remaining fields are plain
/// strings cloned per request.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Client for the payment collaborator API, if configured.
    pub payments: Option<PaymentClient>,

    /// Shared secret for verifying webhook event signatures, if configured.
    pub webhook_secret: Option<String>,

    /// Shared secret for administrative endpoints.
    pub admin_api_key: String,

    /// Application base URL for constructing checkout redirect targets.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after all dependencies have been
    /// initialized; the resulting state is then provided to the Axum router.
    pub fn new(
        db: DatabaseConnection,
        payments: Option<PaymentClient>,
        webhook_secret: Option<String>,
        admin_api_key: String,
        app_url: String,
    ) -> Self {
        Self {
            db,
            payments,
            webhook_secret,
            admin_api_key,
            app_url,
        }
    }
}
