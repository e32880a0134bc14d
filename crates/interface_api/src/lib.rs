//! HTTP API Layer
//!
//! This crate provides the REST API for the Hauln' Heavy estimator using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for estimates, delivery, addresses and equipment
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::from_config(&config)?;
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use domain_equipment::{EquipmentCatalog, EquipmentLookup};
use domain_estimate::{AddressLookup, EstimateCalculator, FixedDistance};
use domain_notification::{EmailSender, EstimateDeliveryService};
use infra_providers::{
    GeoapifyAddressLookup, GeoapifyConfig, ResendConfig, ResendEmailSender, SimulatedEmailSender,
    TwilioConfig, TwilioSmsSender,
};

use crate::config::ApiConfig;
use crate::handlers::{address, equipment, estimate, health, notify};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<EstimateCalculator>,
    pub delivery: Arc<EstimateDeliveryService>,
    /// `None` when no geocoding key is configured
    pub address_lookup: Option<Arc<dyn AddressLookup>>,
    pub equipment: Arc<dyn EquipmentLookup>,
}

impl AppState {
    /// Wires adapters from configuration
    ///
    /// Missing provider keys degrade the matching feature instead of
    /// failing startup.
    pub fn from_config(config: &ApiConfig) -> anyhow::Result<Self> {
        let calculator = EstimateCalculator::new(Arc::new(FixedDistance::new(config.assumed_miles)));

        let email: Arc<dyn EmailSender> = match config.resend_key() {
            Some(key) => Arc::new(ResendEmailSender::new(ResendConfig::new(key, config.email_from.clone()))?),
            None => {
                warn!("ESTIMATOR_RESEND_API_KEY not set; emails will be logged, not sent");
                Arc::new(SimulatedEmailSender)
            }
        };

        let mut delivery = EstimateDeliveryService::new(email, config.business_email.clone(), config.support_phone.clone());
        match config.twilio_credentials() {
            Some((sid, token, from)) => {
                delivery = delivery.with_sms(Arc::new(TwilioSmsSender::new(TwilioConfig::new(sid, token, from))?));
            }
            None => warn!("Twilio credentials not set; SMS delivery disabled"),
        }

        let address_lookup: Option<Arc<dyn AddressLookup>> = match config.geoapify_key() {
            Some(key) => Some(Arc::new(GeoapifyAddressLookup::new(GeoapifyConfig::new(key))?)),
            None => {
                warn!("ESTIMATOR_GEOAPIFY_API_KEY not set; address suggestions disabled");
                None
            }
        };

        let catalog = match &config.equipment_catalog_path {
            Some(path) => EquipmentCatalog::load(path)?,
            None => EquipmentCatalog::builtin()?,
        };
        info!(models = catalog.len(), "Equipment catalog loaded");

        Ok(Self {
            calculator: Arc::new(calculator),
            delivery: Arc::new(delivery),
            address_lookup,
            equipment: Arc::new(catalog),
        })
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Calculator, delivery service and lookups shared by handlers
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let estimate_routes = Router::new()
        .route("/", post(estimate::create_estimate))
        .route("/email", post(notify::email_estimate))
        .route("/sms", post(notify::sms_estimate));

    let equipment_routes = Router::new()
        .route("/manufacturers", get(equipment::list_manufacturers))
        .route("/manufacturers/:id/models", get(equipment::list_models))
        .route("/models/:id", get(equipment::get_model))
        .route("/models/:id/validate-year", get(equipment::validate_year));

    let api_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/addresses/autocomplete", get(address::autocomplete))
        .nest("/estimates", estimate_routes)
        .nest("/equipment", equipment_routes);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
