//! API configuration

use rust_decimal::Decimal;
use serde::Deserialize;

use domain_estimate::ASSUMED_MILES;

/// API configuration
///
/// Provider keys are optional. Without them the server still starts:
/// email falls back to a simulated sender, SMS and address suggestions
/// answer 503.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Geoapify key for address autocomplete
    pub geoapify_api_key: Option<String>,
    /// Resend key for transactional email
    pub resend_api_key: Option<String>,
    /// Sender shown on outgoing email
    pub email_from: String,
    /// Inbox receiving new estimate requests
    pub business_email: String,
    /// Phone number quoted in SMS bodies
    pub support_phone: String,
    pub twilio_account_sid: Option<String>,
    pub twilio_auth_token: Option<String>,
    pub twilio_from_number: Option<String>,
    /// CSV replacing the built-in equipment catalog
    pub equipment_catalog_path: Option<String>,
    /// Route length used for every estimate
    pub assumed_miles: Decimal,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            geoapify_api_key: None,
            resend_api_key: None,
            email_from: "Hauln' Heavy <estimates@haulnheavy.com>".to_string(),
            business_email: "quotes@haulnheavy.com".to_string(),
            support_phone: "701-870-2144".to_string(),
            twilio_account_sid: None,
            twilio_auth_token: None,
            twilio_from_number: None,
            equipment_catalog_path: None,
            assumed_miles: ASSUMED_MILES,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("ESTIMATOR"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Twilio credentials, when all three are set and non-blank
    pub fn twilio_credentials(&self) -> Option<(&str, &str, &str)> {
        let sid = non_blank(&self.twilio_account_sid)?;
        let token = non_blank(&self.twilio_auth_token)?;
        let from = non_blank(&self.twilio_from_number)?;
        Some((sid, token, from))
    }

    pub fn geoapify_key(&self) -> Option<&str> {
        non_blank(&self.geoapify_api_key)
    }

    pub fn resend_key(&self) -> Option<&str> {
        non_blank(&self.resend_api_key)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twilio_requires_all_credentials() {
        let mut config = ApiConfig {
            twilio_account_sid: Some("AC1".into()),
            twilio_auth_token: Some("token".into()),
            ..Default::default()
        };
        assert!(config.twilio_credentials().is_none());

        config.twilio_from_number = Some("  ".into());
        assert!(config.twilio_credentials().is_none());

        config.twilio_from_number = Some("+17015550000".into());
        assert_eq!(config.twilio_credentials(), Some(("AC1", "token", "+17015550000")));
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.assumed_miles, ASSUMED_MILES);
        assert!(config.geoapify_key().is_none());
    }
}
