//! Delivery DTOs
//!
//! Delivery requests carry the wizard data, not a computed breakdown. The
//! server prices the request again so the figures sent out always come
//! from the calculator.

use serde::{Deserialize, Serialize};

use domain_estimate::{ContactInfo, EstimateRequest};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailEstimateRequest {
    pub contact: ContactInfo,
    pub request: EstimateRequest,
    /// Id returned by `POST /estimates`, reused in the messages
    pub estimate_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailEstimateResponse {
    pub estimate_id: String,
    pub customer_message_id: String,
    pub business_message_id: String,
    pub simulated: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsEstimateRequest {
    #[serde(default)]
    pub recipient_phone: String,
    pub recipient_name: Option<String>,
    pub request: EstimateRequest,
    pub estimate_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsEstimateResponse {
    pub estimate_id: String,
    pub message_sid: String,
}
