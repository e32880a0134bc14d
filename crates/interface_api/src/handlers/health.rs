//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub address_lookup: bool,
    pub sms: bool,
}

/// Health check endpoint, reporting which optional providers are wired
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        address_lookup: state.address_lookup.is_some(),
        sms: state.delivery.sms_enabled(),
    })
}
