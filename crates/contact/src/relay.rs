//! Outbound delivery of contact messages through a transactional-email API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A contact message ready for delivery. The recipient identity is fixed
/// per relay, not part of the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("relay transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("relay rejected the message: {0}")]
    Rejected(reqwest::StatusCode),
}

/// Delivery seam between the form controller and the wire.
#[async_trait]
pub trait MessageRelay: Send + Sync {
    async fn deliver(&self, message: &OutboundMessage) -> Result<(), RelayError>;
}

/// Credentials for the email relay service. Opaque to this crate; never logged.
#[derive(Debug, Clone)]
pub struct RelayCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// HTTP client for the EmailJS send endpoint.
///
/// Every request carries the per-request timeout configured at construction;
/// expiry surfaces as a transport error like any other failure.
#[derive(Clone)]
pub struct EmailJsRelay {
    client: reqwest::Client,
    endpoint: String,
    credentials: RelayCredentials,
    to_name: String,
}

impl EmailJsRelay {
    pub fn new(
        endpoint: impl Into<String>,
        credentials: RelayCredentials,
        to_name: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            credentials,
            to_name: to_name.into(),
        })
    }

    fn send_url(&self) -> String {
        format!(
            "{}/api/v1.0/email/send",
            self.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl MessageRelay for EmailJsRelay {
    async fn deliver(&self, message: &OutboundMessage) -> Result<(), RelayError> {
        let body = serde_json::json!({
            "service_id": self.credentials.service_id,
            "template_id": self.credentials.template_id,
            "user_id": self.credentials.public_key,
            "template_params": {
                "from_name": message.from_name,
                "from_email": message.from_email,
                "message": message.message,
                "to_name": self.to_name,
            },
        });

        let response = self.client.post(self.send_url()).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "message relay rejected the request");
            return Err(RelayError::Rejected(status));
        }

        tracing::info!("contact message relayed");
        Ok(())
    }
}
