use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum PaymentError {
    /// Payment credentials are absent from the environment.
    ///
    /// Paid-listing endpoints and the webhook endpoint refuse to operate
    /// rather than silently skipping payment processing. Results in a
    /// 503 Service Unavailable response.
    #[error("Payment processing is not configured. Please contact support.")]
    NotConfigured,

    /// Webhook request arrived without a signature header.
    ///
    /// Results in a 400 Bad Request response; the event is not processed.
    #[error("Missing webhook signature")]
    MissingSignature,

    /// Webhook signature did not verify against the shared secret.
    ///
    /// Results in a 400 Bad Request response; the event is not processed and
    /// no local retry is triggered.
    #[error("Webhook signature verification failed: {0}")]
    InvalidSignature(String),

    /// The payment collaborator API returned an error or was unreachable.
    ///
    /// Results in a 502 Bad Gateway response. The caller may retry; the
    /// application itself never retries a state-mutating call.
    #[error("Payment provider request failed: {0}")]
    Api(String),
}

/// Converts payment errors into HTTP responses.
///
/// Signature problems map to 400 so the collaborator's delivery system treats
/// the event as rejected, while missing configuration maps to 503 and upstream
/// API failures to 502. API failure details are logged server-side and replaced
/// with a generic message in the response body.
impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        match self {
            Self::NotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::MissingSignature | Self::InvalidSignature(_) => {
                tracing::warn!("Webhook rejected: {}", self);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "Invalid signature".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Api(msg) => {
                tracing::error!("Payment provider error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Payment provider request failed".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
