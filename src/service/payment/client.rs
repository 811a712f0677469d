use serde::Deserialize;

use crate::error::{payment::PaymentError, AppError};

const CHECKOUT_SESSIONS_URL: &str = "https://api.stripe.com/v1/checkout/sessions";

/// Whether a checkout collects a one-time payment or starts a monthly
/// subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutMode {
    Payment,
    Subscription,
}

impl CheckoutMode {
    fn as_str(self) -> &'static str {
        match self {
            CheckoutMode::Payment => "payment",
            CheckoutMode::Subscription => "subscription",
        }
    }
}

/// Inputs for creating a checkout session.
///
/// `metadata` pairs are echoed back verbatim in later webhook events and are
/// the only way the reconciler can find the local record a payment belongs to.
#[derive(Debug, Clone)]
pub struct CheckoutSessionParams {
    pub mode: CheckoutMode,
    pub product_name: String,
    pub product_description: String,
    /// Price in cents.
    pub unit_amount: i32,
    pub success_url: String,
    pub cancel_url: String,
    pub customer_email: String,
    pub metadata: Vec<(String, String)>,
}

/// Subset of the provider's checkout session object the application reads.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: Option<String>,
    pub payment_status: Option<String>,
    pub payment_intent: Option<String>,
}

/// Client for the payment collaborator's REST API.
///
/// Constructed explicitly at startup and injected through the application
/// state so request handlers and tests receive it as a dependency.
#[derive(Clone)]
pub struct PaymentClient {
    http: reqwest::Client,
    secret_key: String,
}

impl PaymentClient {
    pub fn new(http: reqwest::Client, secret_key: String) -> Self {
        Self { http, secret_key }
    }

    /// Creates a checkout session and returns its id and redirect URL.
    ///
    /// The request is form-encoded per the provider's API conventions. A
    /// non-success response surfaces as `PaymentError::Api`; nothing is
    /// retried locally.
    pub async fn create_checkout_session(
        &self,
        params: CheckoutSessionParams,
    ) -> Result<CheckoutSession, AppError> {
        let mut form: Vec<(String, String)> = vec![
            ("mode".to_string(), params.mode.as_str().to_string()),
            (
                "payment_method_types[0]".to_string(),
                "card".to_string(),
            ),
            (
                "line_items[0][price_data][currency]".to_string(),
                "usd".to_string(),
            ),
            (
                "line_items[0][price_data][product_data][name]".to_string(),
                params.product_name,
            ),
            (
                "line_items[0][price_data][product_data][description]".to_string(),
                params.product_description,
            ),
            (
                "line_items[0][price_data][unit_amount]".to_string(),
                params.unit_amount.to_string(),
            ),
            ("line_items[0][quantity]".to_string(), "1".to_string()),
            ("success_url".to_string(), params.success_url),
            ("cancel_url".to_string(), params.cancel_url),
            ("customer_email".to_string(), params.customer_email),
        ];

        if params.mode == CheckoutMode::Subscription {
            form.push((
                "line_items[0][price_data][recurring][interval]".to_string(),
                "month".to_string(),
            ));
        }

        for (key, value) in params.metadata {
            form.push((format!("metadata[{}]", key), value));
        }

        let response = self
            .http
            .post(CHECKOUT_SESSIONS_URL)
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;

        Self::read_session(response).await
    }

    /// Retrieves a checkout session by id for synchronous verification.
    pub async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<CheckoutSession, AppError> {
        let response = self
            .http
            .get(format!("{}/{}", CHECKOUT_SESSIONS_URL, session_id))
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        Self::read_session(response).await
    }

    async fn read_session(response: reqwest::Response) -> Result<CheckoutSession, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PaymentError::Api(format!("{}: {}", status, body)).into());
        }

        Ok(response.json::<CheckoutSession>().await?)
    }
}
