mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;
mod util;

use tower_http::cors::CorsLayer;

use crate::{config::Config, service::payment::PaymentClient, state::AppState};

#[tokio::main]
async fn main() -> Result<(), error::AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config.database_url).await?;
    let http_client = startup::setup_reqwest_client();

    let payments = match &config.payment {
        Some(payment) => Some(PaymentClient::new(
            http_client,
            payment.secret_key.clone(),
        )),
        None => {
            tracing::warn!("Payment provider is not configured; paid listings are disabled");
            None
        }
    };
    let webhook_secret = config.payment.as_ref().map(|p| p.webhook_secret.clone());

    let state = AppState::new(
        db,
        payments,
        webhook_secret,
        config.admin_api_key.clone(),
        config.app_url.clone(),
    );

    let app = router::router()
        .with_state(state)
        .layer(CorsLayer::permissive());

    tracing::info!("Starting server on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| error::AppError::InternalError(format!("Failed to bind listener: {}", e)))?;
    axum::serve(listener, app)
        .await
        .map_err(|e| error::AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}
