use std::time::Duration;

use async_trait::async_trait;
use mealkit_shared::{Error, Result};
use reqwest::{StatusCode, header::AUTHORIZATION};
use serde::{Deserialize, Serialize};

/// Body sent to the payment service. The item arrays are parallel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRequest {
    pub amount: f64,
    pub name: Vec<String>,
    pub qty: Vec<i64>,
    pub price: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PaymentData {
    pub id: i64,
    pub reference_id: String,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub status: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct PaymentResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<PaymentData>,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
    /// Opens a payment session on behalf of the caller. `authorization` is
    /// the caller's raw `Authorization` header value.
    async fn create_payment(
        &self,
        authorization: &str,
        request: &PaymentRequest,
    ) -> Result<PaymentData>;
}

#[derive(Clone)]
pub struct HttpPaymentGateway {
    client: reqwest::Client,
    url: String,
}

impl HttpPaymentGateway {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| Error::Internal(err.into()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn create_payment(
        &self,
        authorization: &str,
        request: &PaymentRequest,
    ) -> Result<PaymentData> {
        let response = self
            .client
            .post(&self.url)
            .header(AUTHORIZATION, authorization)
            .json(request)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "payment service unreachable");
                Error::Payment(err.to_string())
            })?;

        let status = response.status();
        if status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, body = %body, "payment service refused the request");

            return Err(Error::Payment(format!("unexpected status {status}")));
        }

        let body = response
            .json::<PaymentResponse>()
            .await
            .map_err(|err| Error::Payment(format!("invalid response: {err}")))?;

        match body {
            PaymentResponse {
                success: true,
                data: Some(data),
                ..
            } => Ok(data),
            PaymentResponse { message, .. } => {
                tracing::warn!(message = %message, "payment service reported a failure");

                Err(Error::Payment(if message.is_empty() {
                    "payment was not created".to_owned()
                } else {
                    message
                }))
            }
        }
    }
}
