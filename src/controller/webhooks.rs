use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Serialize;

use crate::{
    error::{payment::PaymentError, AppError},
    service::payment::{
        event::{parse_event, verify_signature, SIGNATURE_HEADER},
        reconcile::PaymentReconciler,
    },
    state::AppState,
};

#[derive(Serialize)]
struct ReceivedDto {
    received: bool,
}

/// POST /api/webhooks/payments
/// Consume a signed payment event and apply it to local state.
///
/// The signature is verified against the shared secret before any payload
/// field is trusted; delivery is at-least-once, so the reconciler treats
/// redelivered events as no-ops.
pub async fn payment_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let Some(secret) = state.webhook_secret.as_deref() else {
        tracing::error!("Webhook received but no webhook secret is configured");
        return Err(PaymentError::NotConfigured.into());
    };

    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or(PaymentError::MissingSignature)?;

    verify_signature(&body, signature, secret, Utc::now())?;

    let (event_id, event) = parse_event(&body)?;
    tracing::info!("Processing payment event {}", event_id);

    let reconciler = PaymentReconciler::new(&state.db);
    reconciler.apply(event).await?;

    Ok((StatusCode::OK, Json(ReceivedDto { received: true })))
}
