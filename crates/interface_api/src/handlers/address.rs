//! Address autocomplete handler

use axum::{
    extract::{Query, State},
    Json,
};

use domain_estimate::location::DEFAULT_COUNTRY_CODE;
use domain_estimate::AddressQuery;

use crate::dto::address::{AutocompleteParams, AutocompleteResponse};
use crate::{error::ApiError, AppState};

/// Suggests addresses for a partial query
///
/// Queries under two characters return no suggestions without calling the
/// provider, even when none is configured.
pub async fn autocomplete(
    State(state): State<AppState>,
    Query(params): Query<AutocompleteParams>,
) -> Result<Json<AutocompleteResponse>, ApiError> {
    let text = params.q.unwrap_or_default();

    let Some(query) = AddressQuery::parse(&text, params.country.as_deref()) else {
        let country = params
            .country
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_COUNTRY_CODE.to_string());
        return Ok(Json(AutocompleteResponse {
            suggestions: Vec::new(),
            query: text.trim().to_string(),
            country,
        }));
    };

    let lookup = state
        .address_lookup
        .as_ref()
        .ok_or(ApiError::NotConfigured("Address"))?;
    let suggestions = lookup.suggest(&query).await?;

    Ok(Json(AutocompleteResponse {
        suggestions,
        query: query.text().to_string(),
        country: query.country_code().to_string(),
    }))
}
