//! Estimate handlers

use axum::{extract::State, Json};
use chrono::Utc;
use tracing::info;

use core_kernel::EstimateId;
use domain_estimate::{EstimateRecord, EstimateRequest};

use crate::dto::estimate::EstimateResponse;
use crate::{error::ApiError, AppState};

/// Prices a request and wraps the result in a record
///
/// A supplied `estimate_id` (with or without the `EST-` prefix) is reused so
/// follow-up deliveries quote the id the customer already saw.
pub(crate) fn price(
    state: &AppState,
    request: &EstimateRequest,
    estimate_id: Option<&str>,
) -> Result<EstimateRecord, ApiError> {
    let result = state.calculator.calculate_request(request)?;

    let record = match estimate_id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => {
            let id: EstimateId = id
                .parse()
                .map_err(|_| ApiError::BadRequest(format!("Invalid estimate id: {}", id)))?;
            EstimateRecord::with_id(id, Utc::now(), result)
        }
        None => EstimateRecord::new(result),
    };
    Ok(record)
}

/// Calculates an estimate from wizard data
pub async fn create_estimate(
    State(state): State<AppState>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, ApiError> {
    let record = price(&state, &request, None)?;

    info!(
        estimate_id = %record.estimate_id,
        total = %record.result.total_estimate(),
        "Estimate calculated"
    );

    Ok(Json(EstimateResponse::try_from(&record)?))
}
