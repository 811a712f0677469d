use crate::error::{config::ConfigError, AppError};

/// Credentials for the external payment collaborator.
///
/// Both values are required for any paid-listing flow; when either is absent
/// the application runs with payments disabled and the affected endpoints
/// return an explicit "not configured" error instead of silently skipping
/// payment processing.
pub struct PaymentConfig {
    /// Secret API key used to create and retrieve checkout sessions.
    pub secret_key: String,
    /// Shared secret used to verify webhook event signatures.
    pub webhook_secret: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Application base URL used to construct checkout redirect targets.
    pub app_url: String,

    /// Shared secret for administrative endpoints, compared against the
    /// `X-Admin-Key` request header.
    pub admin_api_key: String,

    pub payment: Option<PaymentConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let payment = match (
            std::env::var("STRIPE_SECRET_KEY"),
            std::env::var("STRIPE_WEBHOOK_SECRET"),
        ) {
            (Ok(secret_key), Ok(webhook_secret)) => Some(PaymentConfig {
                secret_key,
                webhook_secret,
            }),
            _ => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            app_url: std::env::var("APP_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            admin_api_key: std::env::var("ADMIN_API_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("ADMIN_API_KEY".to_string()))?,
            payment,
        })
    }
}
