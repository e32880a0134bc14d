//! Twilio SMS adapter
//!
//! Posts to `/2010-04-01/Accounts/{sid}/Messages.json` with basic auth.
//! Twilio reports bad numbers as 400 with a JSON `{code, message}` body;
//! those become validation errors so the caller can show the message.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use core_kernel::{DomainPort, PortError};
use domain_notification::{DeliveryReceipt, SmsMessage, SmsSender};

use crate::http::{build_client, check_status, transport_error, DEFAULT_TIMEOUT};

const SERVICE: &str = "twilio";

/// Twilio connection settings
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub base_url: String,
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
    pub timeout: Duration,
}

impl TwilioConfig {
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        from_number: impl Into<String>,
    ) -> Self {
        Self {
            base_url: "https://api.twilio.com".to_string(),
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            from_number: from_number.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Deserialize)]
struct MessageResource {
    sid: String,
}

#[derive(Debug, Deserialize)]
struct TwilioErrorBody {
    code: Option<u32>,
    message: String,
}

/// SMS sender backed by the Twilio Messages API
#[derive(Debug, Clone)]
pub struct TwilioSmsSender {
    client: reqwest::Client,
    config: TwilioConfig,
}

impl TwilioSmsSender {
    pub fn new(config: TwilioConfig) -> Result<Self, PortError> {
        Ok(Self {
            client: build_client(config.timeout)?,
            config,
        })
    }
}

impl DomainPort for TwilioSmsSender {}

#[async_trait]
impl SmsSender for TwilioSmsSender {
    async fn send_sms(&self, message: &SmsMessage) -> Result<DeliveryReceipt, PortError> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.config.base_url.trim_end_matches('/'),
            self.config.account_sid
        );

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&[
                ("To", message.to.as_str()),
                ("From", self.config.from_number.as_str()),
                ("Body", message.body.as_str()),
            ])
            .send()
            .await
            .map_err(|e| transport_error(SERVICE, self.config.timeout, e))?;

        if response.status() == reqwest::StatusCode::BAD_REQUEST {
            let text = response.text().await.unwrap_or_default();
            let reason = match serde_json::from_str::<TwilioErrorBody>(&text) {
                Ok(TwilioErrorBody { code: Some(code), message }) => format!("SMS Error {}: {}", code, message),
                Ok(TwilioErrorBody { code: None, message }) => format!("SMS Error: {}", message),
                Err(_) => format!("SMS Error: {}", text),
            };
            return Err(PortError::validation_field(reason, "recipientPhone"));
        }

        let resource: MessageResource = check_status(SERVICE, response)
            .await?
            .json()
            .await
            .map_err(|e| transport_error(SERVICE, self.config.timeout, e))?;

        debug!(sid = %resource.sid, "SMS accepted by Twilio");
        Ok(DeliveryReceipt::sent(resource.sid))
    }
}
