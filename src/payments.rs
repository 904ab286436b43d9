use serde::Deserialize;

/// Minimal client for the payment processor's payment-intent REST API.
///
/// Constructed once at startup and shared through app data. When no secret
/// key is configured the payment path is disabled and handlers answer 503.
#[derive(Clone)]
pub struct PaymentClient {
    http: reqwest::Client,
    secret_key: Option<String>,
}

/// The subset of the payment-intent response the server needs.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

const PAYMENT_INTENTS_URL: &str = "https://api.stripe.com/v1/payment_intents";

impl PaymentClient {
    pub fn new(secret_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key,
        }
    }

    /// Whether a secret key is configured.
    pub fn is_enabled(&self) -> bool {
        self.secret_key.is_some()
    }

    /// Create a payment intent for the given amount in the smallest currency
    /// unit. Fails with a message when the path is disabled or the processor
    /// rejects the request.
    pub async fn create_payment_intent(
        &self,
        amount_minor_units: i64,
        currency: &str,
    ) -> Result<PaymentIntent, String> {
        let secret_key = self
            .secret_key
            .as_deref()
            .ok_or_else(|| "Payments are temporarily disabled".to_string())?;

        let params = [
            ("amount", amount_minor_units.to_string()),
            ("currency", currency.to_string()),
            ("automatic_payment_methods[enabled]", "true".to_string()),
        ];

        let response = self
            .http
            .post(PAYMENT_INTENTS_URL)
            .bearer_auth(secret_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| format!("Payment processor request failed: {e}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("Payment processor returned {status}: {body}"));
        }

        response
            .json::<PaymentIntent>()
            .await
            .map_err(|e| format!("Invalid payment processor response: {e}"))
    }
}
