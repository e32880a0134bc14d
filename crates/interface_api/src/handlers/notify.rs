//! Estimate delivery handlers

use axum::{extract::State, Json};
use tracing::info;

use crate::dto::notify::*;
use crate::handlers::estimate::price;
use crate::{error::ApiError, AppState};

/// Emails the estimate to the customer and the business inbox
pub async fn email_estimate(
    State(state): State<AppState>,
    Json(body): Json<EmailEstimateRequest>,
) -> Result<Json<EmailEstimateResponse>, ApiError> {
    body.contact.check().map_err(ApiError::Validation)?;

    let record = price(&state, &body.request, body.estimate_id.as_deref())?;
    let delivery = state
        .delivery
        .send_email(&body.contact, &body.request, &record)
        .await?;

    Ok(Json(EmailEstimateResponse {
        estimate_id: record.estimate_id.to_string(),
        simulated: delivery.customer.simulated || delivery.business.simulated,
        customer_message_id: delivery.customer.message_id,
        business_message_id: delivery.business.message_id,
    }))
}

/// Texts a short estimate summary
pub async fn sms_estimate(
    State(state): State<AppState>,
    Json(body): Json<SmsEstimateRequest>,
) -> Result<Json<SmsEstimateResponse>, ApiError> {
    if body.recipient_phone.trim().is_empty() {
        return Err(ApiError::BadRequest("Recipient phone number is required".to_string()));
    }
    if !state.delivery.sms_enabled() {
        return Err(ApiError::NotConfigured("SMS"));
    }

    let record = price(&state, &body.request, body.estimate_id.as_deref())?;
    let receipt = state
        .delivery
        .send_sms(body.recipient_phone.trim(), &body.request, &record)
        .await?;

    info!(
        estimate_id = %record.estimate_id,
        recipient = body.recipient_name.as_deref().unwrap_or("unnamed"),
        "SMS estimate delivered"
    );

    Ok(Json(SmsEstimateResponse {
        estimate_id: record.estimate_id.to_string(),
        message_sid: receipt.message_id,
    }))
}
