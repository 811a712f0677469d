//! Webhook event parsing and signature verification.
//!
//! Events arrive as JSON envelopes signed with an HMAC-SHA256 header of the
//! form `t=<unix>,v1=<hex digest of "{t}.{payload}">`. Verification happens
//! before any payload field is trusted.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

use crate::error::{payment::PaymentError, AppError};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the webhook signature.
pub const SIGNATURE_HEADER: &str = "stripe-signature";

/// Maximum accepted age (and clock skew) of a signed timestamp, in seconds.
const SIGNATURE_TOLERANCE_SECS: i64 = 300;

/// Verifies a webhook signature header against the shared secret.
///
/// Accepts the event when any `v1` candidate matches the HMAC of
/// `"{t}.{payload}"` and the signed timestamp is within tolerance of `now`.
///
/// # Returns
/// - `Ok(())` - Signature valid
/// - `Err(PaymentError::InvalidSignature)` - Malformed header, stale
///   timestamp, or digest mismatch
pub fn verify_signature(
    payload: &[u8],
    header: &str,
    secret: &str,
    now: DateTime<Utc>,
) -> Result<(), PaymentError> {
    let mut timestamp: Option<i64> = None;
    let mut candidates: Vec<&str> = Vec::new();

    for part in header.split(',') {
        match part.trim().split_once('=') {
            Some(("t", value)) => {
                timestamp = value.parse().ok();
            }
            Some(("v1", value)) => candidates.push(value),
            _ => {}
        }
    }

    let timestamp = timestamp
        .ok_or_else(|| PaymentError::InvalidSignature("missing timestamp".to_string()))?;
    if candidates.is_empty() {
        return Err(PaymentError::InvalidSignature(
            "missing v1 signature".to_string(),
        ));
    }

    if (now.timestamp() - timestamp).abs() > SIGNATURE_TOLERANCE_SECS {
        return Err(PaymentError::InvalidSignature(
            "timestamp outside tolerance".to_string(),
        ));
    }

    for candidate in &candidates {
        let Ok(bytes) = hex::decode(candidate) else {
            continue;
        };

        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|e| PaymentError::InvalidSignature(e.to_string()))?;
        mac.update(timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);

        if mac.verify_slice(&bytes).is_ok() {
            return Ok(());
        }
    }

    Err(PaymentError::InvalidSignature(
        "digest mismatch".to_string(),
    ))
}

/// Computes a valid signature header for a payload.
///
/// Counterpart of `verify_signature` for exercising the webhook path in
/// tests and local tooling.
pub fn sign_payload(payload: &[u8], secret: &str, at: DateTime<Utc>) -> String {
    let timestamp = at.timestamp();
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key size");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);

    format!("t={},v1={}", timestamp, hex::encode(mac.finalize().into_bytes()))
}

/// Checkout session object carried by `checkout.session.completed`.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSessionObject {
    pub id: String,
    pub mode: String,
    #[serde(default)]
    pub payment_intent: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// Subscription object carried by `customer.subscription.*` events.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionObject {
    pub id: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// A webhook event the reconciler knows how to apply.
#[derive(Debug, Clone)]
pub enum PaymentEvent {
    CheckoutCompleted(CheckoutSessionObject),
    SubscriptionUpdated(SubscriptionObject),
    SubscriptionDeleted(SubscriptionObject),
    InvoicePaymentFailed { invoice_id: String },
    /// Event kinds the application does not act on; accepted and logged.
    Unhandled { kind: String },
}

#[derive(Deserialize)]
struct EventEnvelope {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    data: EventData,
}

#[derive(Deserialize)]
struct EventData {
    object: serde_json::Value,
}

#[derive(Deserialize)]
struct InvoiceObject {
    id: String,
}

/// Parses a verified webhook payload into an event.
///
/// # Returns
/// - `Ok((event_id, PaymentEvent))` - Parsed event, `Unhandled` for kinds the
///   application ignores
/// - `Err(AppError::BadRequest)` - Payload is not a valid event envelope
pub fn parse_event(payload: &[u8]) -> Result<(String, PaymentEvent), AppError> {
    let envelope: EventEnvelope = serde_json::from_slice(payload)
        .map_err(|e| AppError::BadRequest(format!("Invalid event payload: {}", e)))?;

    let event = match envelope.kind.as_str() {
        "checkout.session.completed" => {
            let object: CheckoutSessionObject = serde_json::from_value(envelope.data.object)
                .map_err(|e| AppError::BadRequest(format!("Invalid checkout session: {}", e)))?;
            PaymentEvent::CheckoutCompleted(object)
        }
        "customer.subscription.updated" => {
            let object: SubscriptionObject = serde_json::from_value(envelope.data.object)
                .map_err(|e| AppError::BadRequest(format!("Invalid subscription: {}", e)))?;
            PaymentEvent::SubscriptionUpdated(object)
        }
        "customer.subscription.deleted" => {
            let object: SubscriptionObject = serde_json::from_value(envelope.data.object)
                .map_err(|e| AppError::BadRequest(format!("Invalid subscription: {}", e)))?;
            PaymentEvent::SubscriptionDeleted(object)
        }
        "invoice.payment_failed" => {
            let object: InvoiceObject = serde_json::from_value(envelope.data.object)
                .map_err(|e| AppError::BadRequest(format!("Invalid invoice: {}", e)))?;
            PaymentEvent::InvoicePaymentFailed {
                invoice_id: object.id,
            }
        }
        other => PaymentEvent::Unhandled {
            kind: other.to_string(),
        },
    };

    Ok((envelope.id, event))
}
