//! Posting the briefing to a chat webhook. One attempt per run; a rejected
//! message ends the run and the scheduler tries again next morning.

use std::time::Duration;

use anyhow::Context;
use reqwest::Client;

use crate::error::{RunError, truncate_body};
use crate::message::SlackMessage;

const REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct WebhookPublisher {
    http: Client,
    webhook_url: String,
}

impl WebhookPublisher {
    pub fn new(webhook_url: impl Into<String>) -> Result<Self, RunError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build webhook HTTP client")?;

        Ok(Self { http, webhook_url: webhook_url.into() })
    }

    /// Post the message. A non-success status becomes a publish error
    /// carrying the response body for the diagnostic line.
    pub async fn post(&self, message: &SlackMessage) -> Result<(), RunError> {
        let res = self
            .http
            .post(&self.webhook_url)
            .json(message)
            .send()
            .await
            .context("Failed to send request to the webhook")?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(RunError::Publish {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        tracing::debug!(status = status.as_u16(), "webhook accepted the message");
        Ok(())
    }
}
