//! Lead submission gateway — best-effort delivery to the CRM webhook.
//!
//! Delivery is fire-and-forget: one POST per completed session, no retry,
//! no idempotency key. Failures are logged and dropped so that lead
//! capture can never gate the visitor's ability to book a meeting.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tokio::task::JoinHandle;

use crate::config::BookingConfig;
use crate::error::SubmissionError;

use super::payload::LeadPayload;

/// Delivery seam for completed leads.
#[async_trait]
pub trait LeadSink: Send + Sync {
    /// Deliver one lead. A returned error is logged by the gateway and
    /// otherwise dropped.
    async fn deliver(&self, payload: &LeadPayload) -> Result<(), SubmissionError>;
}

/// POSTs leads to the configured CRM webhook, API key in the query string.
pub struct WebhookSink {
    endpoint: String,
    api_key: SecretString,
    client: reqwest::Client,
}

impl WebhookSink {
    pub fn new(endpoint: impl Into<String>, api_key: SecretString) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &BookingConfig) -> Self {
        Self::new(config.crm_webhook_url.clone(), config.crm_api_key.clone())
    }
}

#[async_trait]
impl LeadSink for WebhookSink {
    async fn deliver(&self, payload: &LeadPayload) -> Result<(), SubmissionError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .query(&[("api_key", self.api_key.expose_secret())])
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(SubmissionError::Http { status, body });
        }

        Ok(())
    }
}

/// Fire-and-forget dispatcher over a [`LeadSink`].
pub struct LeadGateway {
    sink: Arc<dyn LeadSink>,
}

impl LeadGateway {
    pub fn new(sink: Arc<dyn LeadSink>) -> Self {
        Self { sink }
    }

    /// Dispatch a lead without blocking the caller.
    ///
    /// The returned handle is for lifecycle ownership (teardown, tests);
    /// the delivery result itself is only ever observed by logging.
    pub fn submit_detached(&self, payload: LeadPayload) -> JoinHandle<()> {
        let sink = Arc::clone(&self.sink);
        tokio::spawn(async move {
            match sink.deliver(&payload).await {
                Ok(()) => {
                    tracing::info!(source = payload.source, "Lead delivered to CRM");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Lead delivery failed; not retrying");
                }
            }
        })
    }
}
