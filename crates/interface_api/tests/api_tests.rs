//! HTTP API Tests
//!
//! Router-level tests over in-memory senders and lookups.
//!
//! # Test Organization
//!
//! - `estimates` - Pricing endpoint
//! - `delivery` - Email and SMS endpoints
//! - `addresses` - Autocomplete endpoint
//! - `equipment` - Reference data endpoints
//! - `health` - Health check

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use domain_equipment::EquipmentCatalog;
use domain_estimate::{AddressLookup, EstimateCalculator};
use domain_notification::EstimateDeliveryService;
use interface_api::{create_router, AppState};
use test_utils::{
    ContactFixtures, ContactInfoBuilder, EstimateRequestBuilder, RecordingEmailSender,
    RecordingSmsSender, ScenarioFixtures, StaticAddressLookup,
};

struct Harness {
    server: TestServer,
    email: Arc<RecordingEmailSender>,
    sms: Arc<RecordingSmsSender>,
    lookup: Arc<StaticAddressLookup>,
}

fn harness(with_sms: bool, with_lookup: bool) -> Harness {
    let email = Arc::new(RecordingEmailSender::new());
    let sms = Arc::new(RecordingSmsSender::new());
    let lookup = Arc::new(StaticAddressLookup::fargo());

    let mut delivery = EstimateDeliveryService::new(email.clone(), "quotes@haulnheavy.example", "701-870-2144");
    if with_sms {
        delivery = delivery.with_sms(sms.clone());
    }

    let state = AppState {
        calculator: Arc::new(EstimateCalculator::default()),
        delivery: Arc::new(delivery),
        address_lookup: with_lookup.then(|| lookup.clone() as Arc<dyn AddressLookup>),
        equipment: Arc::new(EquipmentCatalog::builtin().unwrap()),
    };

    Harness {
        server: TestServer::new(create_router(state)).unwrap(),
        email,
        sms,
        lookup,
    }
}

// ============================================================================
// ESTIMATES
// ============================================================================

mod estimates {
    use super::*;

    #[tokio::test]
    async fn test_scenario_a_breakdown() {
        let h = harness(false, false);
        let response = h
            .server
            .post("/api/v1/estimates")
            .json(&ScenarioFixtures::scenario_a())
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let estimate = &body["estimate"];
        assert_eq!(estimate["baseCost"], 1250);
        assert_eq!(estimate["fuelSurcharge"], 188);
        assert_eq!(estimate["oversizeFee"], 0);
        assert_eq!(estimate["hazmatFee"], 0);
        assert_eq!(estimate["additionalFees"], 400);
        assert_eq!(estimate["totalEstimate"], 1838);
        assert_eq!(estimate["adjustments"][0]["code"], "rush_delivery");
        assert_eq!(estimate["adjustments"][0]["amount"], 400);
        assert!(body["estimateId"].as_str().unwrap().starts_with("EST-"));
        assert!(estimate["disclaimer"].as_str().unwrap().contains("valid for 7 days"));
    }

    #[tokio::test]
    async fn test_scenario_c_total() {
        let h = harness(false, false);
        let body: Value = h
            .server
            .post("/api/v1/estimates")
            .json(&ScenarioFixtures::scenario_c())
            .await
            .json();

        assert_eq!(body["estimate"]["oversizeFee"], 625);
        assert_eq!(body["estimate"]["hazmatFee"], 313);
        assert_eq!(body["estimate"]["additionalFees"], 250);
        assert_eq!(body["estimate"]["totalEstimate"], 2625);
    }

    /// Hand-written wizard JSON with a bare-string loading method
    #[tokio::test]
    async fn test_raw_wizard_payload() {
        let h = harness(false, false);
        let response = h
            .server
            .post("/api/v1/estimates")
            .json(&json!({
                "item": {
                    "kind": "freight",
                    "shippingItem": "Pallets",
                    "dimensions": {
                        "length": { "feet": 10 },
                        "width": { "feet": 6 },
                        "height": { "feet": 5 }
                    },
                    "weightLbs": "3000"
                },
                "locations": {
                    "pickup": { "address": "Fargo, ND", "addressType": "business" },
                    "dropoff": { "address": "Minot, ND", "addressType": "" }
                },
                "additionalInfo": { "loadingMethods": "FORKLIFT" }
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        // No dates: the one-day default window adds the rush fee
        assert_eq!(body["estimate"]["additionalFees"], 600);
        assert_eq!(body["estimate"]["totalEstimate"], 1250 + 188 + 600);
    }

    #[tokio::test]
    async fn test_missing_dimensions_is_unprocessable() {
        let h = harness(false, false);
        let response = h
            .server
            .post("/api/v1/estimates")
            .json(&ScenarioFixtures::scenario_d())
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["error"], "incomplete_request");
        assert!(body["message"].as_str().unwrap().contains("dimensions"));
    }

    #[tokio::test]
    async fn test_missing_item_is_unprocessable() {
        let h = harness(false, false);
        let response = h
            .server
            .post("/api/v1/estimates")
            .json(&EstimateRequestBuilder::new().without_item().build())
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}

// ============================================================================
// DELIVERY
// ============================================================================

mod delivery {
    use super::*;

    #[tokio::test]
    async fn test_email_sends_customer_and_business_messages() {
        let h = harness(false, false);
        let response = h
            .server
            .post("/api/v1/estimates/email")
            .json(&json!({
                "contact": ContactFixtures::customer(),
                "request": ScenarioFixtures::scenario_a(),
                "estimateId": "EST-6f1c2a8e-1b7d-4c1e-9f00-0a3b5c7d9e11"
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["estimateId"], "EST-6f1c2a8e-1b7d-4c1e-9f00-0a3b5c7d9e11");
        assert_eq!(body["simulated"], false);

        let sent = h.email.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "dana@parkfarms.example");
        assert_eq!(sent[0].subject, "Your Hauln' Heavy Estimate - $1,838");
        assert_eq!(sent[1].to, "quotes@haulnheavy.example");
        assert_eq!(sent[1].subject, "New Estimate Request - Equipment - Dana Lee - $1,838");
    }

    #[tokio::test]
    async fn test_invalid_contact_is_rejected_before_sending() {
        let h = harness(false, false);
        let response = h
            .server
            .post("/api/v1/estimates/email")
            .json(&json!({
                "contact": ContactFixtures::incomplete(),
                "request": ScenarioFixtures::scenario_a()
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["details"].as_array().unwrap().len(), 3);
        assert!(h.email.sent().is_empty());
    }

    #[tokio::test]
    async fn test_bad_estimate_id() {
        let h = harness(false, false);
        let response = h
            .server
            .post("/api/v1/estimates/email")
            .json(&json!({
                "contact": ContactInfoBuilder::new().build(),
                "request": ScenarioFixtures::scenario_a(),
                "estimateId": "EST-nope"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_sms_body() {
        let h = harness(true, false);
        let response = h
            .server
            .post("/api/v1/estimates/sms")
            .json(&json!({
                "recipientPhone": "+17015550199",
                "recipientName": "Dana",
                "request": ScenarioFixtures::scenario_a()
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["messageSid"], "SM0001");

        let sent = h.sms.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].body,
            "Haul'n Heavy Estimate: $1,838\nItem: Bobcat T770\nRoute: Fargo → Bismarck\n*Additional fees may apply\nQuestions? Call 701-870-2144"
        );
    }

    #[tokio::test]
    async fn test_sms_not_configured() {
        let h = harness(false, false);
        let response = h
            .server
            .post("/api/v1/estimates/sms")
            .json(&json!({
                "recipientPhone": "+17015550199",
                "request": ScenarioFixtures::scenario_a()
            }))
            .await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = response.json();
        assert_eq!(body["message"], "SMS service not configured");
    }

    #[tokio::test]
    async fn test_sms_requires_phone() {
        let h = harness(true, false);
        let response = h
            .server
            .post("/api/v1/estimates/sms")
            .json(&json!({ "request": ScenarioFixtures::scenario_a() }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(h.sms.sent().is_empty());
    }
}

// ============================================================================
// ADDRESSES
// ============================================================================

mod addresses {
    use super::*;

    #[tokio::test]
    async fn test_suggestions() {
        let h = harness(false, true);
        let response = h
            .server
            .get("/api/v1/addresses/autocomplete")
            .add_query_param("q", "123 Main")
            .add_query_param("country", "US")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["country"], "us");
        assert_eq!(body["query"], "123 Main");
        assert_eq!(body["suggestions"][0]["city"], "Fargo");
        assert_eq!(body["suggestions"][0]["addressLine1"], "123 Main St");
        assert_eq!(h.lookup.calls(), 1);
    }

    #[tokio::test]
    async fn test_short_query_skips_provider() {
        let h = harness(false, true);
        let body: Value = h
            .server
            .get("/api/v1/addresses/autocomplete")
            .add_query_param("q", " a ")
            .await
            .json();

        assert_eq!(body["suggestions"], json!([]));
        assert_eq!(body["country"], "us");
        assert_eq!(h.lookup.calls(), 0);
    }

    #[tokio::test]
    async fn test_not_configured() {
        let h = harness(false, false);
        let response = h
            .server
            .get("/api/v1/addresses/autocomplete")
            .add_query_param("q", "Fargo")
            .await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }
}

// ============================================================================
// EQUIPMENT
// ============================================================================

mod equipment {
    use super::*;

    #[tokio::test]
    async fn test_manufacturer_search() {
        let h = harness(false, false);
        let body: Value = h
            .server
            .get("/api/v1/equipment/manufacturers")
            .add_query_param("search", "cater")
            .await
            .json();

        let list = body.as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["id"], "caterpillar");
    }

    #[tokio::test]
    async fn test_models_and_model() {
        let h = harness(false, false);
        let models: Value = h.server.get("/api/v1/equipment/manufacturers/caterpillar/models").await.json();
        assert!(models
            .as_array()
            .unwrap()
            .iter()
            .any(|m| m["id"] == "caterpillar-d6"));

        let model: Value = h.server.get("/api/v1/equipment/models/caterpillar-d6").await.json();
        assert_eq!(model["typicalWeightLbs"], 46000.0);
        assert_eq!(model["yearRange"], "2012-2024");
    }

    #[tokio::test]
    async fn test_validate_year() {
        let h = harness(false, false);
        let inside: Value = h
            .server
            .get("/api/v1/equipment/models/caterpillar-d6/validate-year")
            .add_query_param("year", "2015")
            .await
            .json();
        assert_eq!(inside["valid"], true);

        let outside: Value = h
            .server
            .get("/api/v1/equipment/models/caterpillar-d6/validate-year")
            .add_query_param("year", "1999")
            .await
            .json();
        assert_eq!(outside["valid"], false);
    }

    #[tokio::test]
    async fn test_unknown_model_is_not_found() {
        let h = harness(false, false);
        h.server
            .get("/api/v1/equipment/models/acme-rocket")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}

// ============================================================================
// HEALTH
// ============================================================================

mod health {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_optional_providers() {
        let h = harness(true, false);
        let body: Value = h.server.get("/api/v1/health").await.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["sms"], true);
        assert_eq!(body["addressLookup"], false);
    }
}
