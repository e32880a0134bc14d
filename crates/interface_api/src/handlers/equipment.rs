//! Equipment reference handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use domain_equipment::Manufacturer;

use crate::dto::equipment::*;
use crate::{error::ApiError, AppState};

/// Lists manufacturers, optionally filtered by name
pub async fn list_manufacturers(
    State(state): State<AppState>,
    Query(params): Query<ManufacturerSearch>,
) -> Result<Json<Vec<Manufacturer>>, ApiError> {
    let manufacturers = state.equipment.manufacturers(params.search.as_deref()).await?;
    Ok(Json(manufacturers))
}

/// Lists the models of one manufacturer
pub async fn list_models(
    State(state): State<AppState>,
    Path(manufacturer_id): Path<String>,
) -> Result<Json<Vec<ModelResponse>>, ApiError> {
    let models = state.equipment.models(&manufacturer_id).await?;
    Ok(Json(models.iter().map(ModelResponse::from).collect()))
}

/// Gets a model by id
pub async fn get_model(
    State(state): State<AppState>,
    Path(model_id): Path<String>,
) -> Result<Json<ModelResponse>, ApiError> {
    let model = state.equipment.model(&model_id).await?;
    Ok(Json(ModelResponse::from(&model)))
}

/// Checks a year against the model's production range
pub async fn validate_year(
    State(state): State<AppState>,
    Path(model_id): Path<String>,
    Query(params): Query<YearParams>,
) -> Result<Json<YearValidationResponse>, ApiError> {
    let valid = state.equipment.validate_year(&model_id, &params.year).await?;
    Ok(Json(YearValidationResponse {
        model_id,
        year: params.year,
        valid,
    }))
}
