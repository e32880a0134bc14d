//! Resend transactional email adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use core_kernel::{DomainPort, PortError};
use domain_notification::{DeliveryReceipt, EmailMessage, EmailSender};

use crate::http::{build_client, check_status, transport_error, DEFAULT_TIMEOUT};

const SERVICE: &str = "resend";

/// Resend connection settings
#[derive(Debug, Clone)]
pub struct ResendConfig {
    pub base_url: String,
    pub api_key: String,
    /// Sender, e.g. `Hauln' Heavy <estimates@haulnheavy.com>`
    pub from: String,
    pub timeout: Duration,
}

impl ResendConfig {
    pub fn new(api_key: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            base_url: "https://api.resend.com".to_string(),
            api_key: api_key.into(),
            from: from.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Serialize)]
struct SendEmailBody<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

/// Email sender backed by the Resend API
#[derive(Debug, Clone)]
pub struct ResendEmailSender {
    client: reqwest::Client,
    config: ResendConfig,
}

impl ResendEmailSender {
    pub fn new(config: ResendConfig) -> Result<Self, PortError> {
        Ok(Self {
            client: build_client(config.timeout)?,
            config,
        })
    }
}

impl DomainPort for ResendEmailSender {}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send_email(&self, message: &EmailMessage) -> Result<DeliveryReceipt, PortError> {
        let url = format!("{}/emails", self.config.base_url.trim_end_matches('/'));
        let body = SendEmailBody {
            from: &self.config.from,
            to: [message.to.as_str()],
            subject: &message.subject,
            html: &message.html,
            reply_to: message.reply_to.as_deref(),
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(SERVICE, self.config.timeout, e))?;

        let sent: SendEmailResponse = check_status(SERVICE, response)
            .await?
            .json()
            .await
            .map_err(|e| transport_error(SERVICE, self.config.timeout, e))?;

        debug!(id = %sent.id, to = %message.to, "Email accepted by Resend");
        Ok(DeliveryReceipt::sent(sent.id))
    }
}
