//! End-to-end specifications for the referee evaluation pipeline.
//!
//! Scenarios drive the public engine facade and the HTTP router so scoring,
//! trade-off synthesis, guidance, and error surfacing are validated together
//! without reaching into private modules.

mod common {
    use std::sync::Arc;

    use land_referee::catalog::PropertyCatalog;
    use land_referee::referee::{RefereeEngine, UserProfile};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    pub(super) fn engine() -> RefereeEngine {
        RefereeEngine::new(Arc::new(PropertyCatalog::sample_portfolio()))
    }

    pub(super) fn profile(
        budget: &str,
        risk_tolerance: &str,
        time_horizon: &str,
        location: Option<&str>,
    ) -> UserProfile {
        UserProfile::from_raw(
            budget,
            risk_tolerance,
            time_horizon,
            location.map(str::to_string),
        )
        .expect("valid profile")
    }

    pub(super) fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }
}

mod evaluation {
    use super::common::*;
    use land_referee::catalog::PropertyCatalog;
    use land_referee::referee::{RefereeEngine, RefereeError, ScenarioType};
    use std::sync::Arc;

    #[test]
    fn report_contains_three_scenarios_in_fixed_order() {
        let engine = engine();
        let profile = profile("Medium", "Medium", "Medium-term", None);

        let report = engine
            .evaluate_with_rng(&profile, &mut rng(7))
            .expect("report builds");

        let order: Vec<ScenarioType> = report
            .scenarios
            .iter()
            .map(|result| result.scenario)
            .collect();
        assert_eq!(order, ScenarioType::ALL.to_vec());
        assert!(!report.decision_guidance.is_empty());
    }

    #[test]
    fn every_score_is_bounded_across_the_whole_catalog() {
        let engine = engine();
        let catalog = PropertyCatalog::sample_portfolio();

        for record in catalog.records() {
            let profile = profile("High", "Low", "Short-term", Some(&record.location));
            let report = engine
                .evaluate_with_rng(&profile, &mut rng(1))
                .expect("report builds");

            for result in &report.scenarios {
                for value in [
                    result.scores.roi,
                    result.scores.risk,
                    result.scores.feasibility,
                    result.scores.neighborhood_fit,
                    result.scores.regulatory_complexity,
                ] {
                    assert!(
                        (1.0..=10.0).contains(&value),
                        "{} scored {value} for {}",
                        result.scenario.label(),
                        record.property_id
                    );
                }
            }
        }
    }

    #[test]
    fn seeded_selection_is_reproducible() {
        let engine = engine();
        let profile = profile("Medium", "Medium", "Medium-term", None);

        let first = engine
            .evaluate_with_rng(&profile, &mut rng(42))
            .expect("report builds");
        let second = engine
            .evaluate_with_rng(&profile, &mut rng(42))
            .expect("report builds");

        assert_eq!(first.property.property_id, second.property.property_id);
        assert_eq!(first.scenarios, second.scenarios);
        assert_eq!(first.decision_guidance, second.decision_guidance);
    }

    #[test]
    fn location_filter_pins_the_selected_property() {
        let engine = engine();
        let profile = profile(
            "High",
            "Medium",
            "Long-term",
            Some("MG Road, Bangalore"),
        );

        let report = engine
            .evaluate_with_rng(&profile, &mut rng(3))
            .expect("report builds");
        assert_eq!(report.property.property_id, "BLR-MG-OSM-002");
        assert_eq!(report.property.location, "MG Road, Bangalore");
    }

    #[test]
    fn any_location_is_treated_as_no_filter() {
        let engine = engine();
        let profile = profile("Medium", "Medium", "Medium-term", Some("Any"));

        engine
            .evaluate_with_rng(&profile, &mut rng(5))
            .expect("report builds");
    }

    #[test]
    fn unmatched_location_is_not_found() {
        let engine = engine();
        let profile = profile("Medium", "Medium", "Medium-term", Some("Atlantis"));

        let error = engine
            .evaluate_with_rng(&profile, &mut rng(5))
            .expect_err("no report for unknown location");
        match error {
            RefereeError::LocationNotFound { location } => assert_eq!(location, "Atlantis"),
            other => panic!("expected location not found, got {other:?}"),
        }
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let engine = RefereeEngine::new(Arc::new(PropertyCatalog::new(Vec::new())));
        let profile = profile("Medium", "Medium", "Medium-term", None);

        let error = engine
            .evaluate_with_rng(&profile, &mut rng(5))
            .expect_err("no report from an empty catalog");
        assert!(matches!(error, RefereeError::EmptyCatalog));
    }

    #[test]
    fn worked_example_produces_expected_tags_and_scores() {
        // Indiranagar: 2400 sqft plot, High footfall / density / commercial.
        let engine = engine();
        let profile = profile(
            "High",
            "Medium",
            "Long-term",
            Some("Indiranagar, Bangalore"),
        );

        let report = engine
            .evaluate_with_rng(&profile, &mut rng(0))
            .expect("report builds");
        let residential = &report.scenarios[0];
        assert_eq!(residential.scenario, ScenarioType::ResidentialHousing);

        let view = residential.view();
        assert_eq!(view.roi_score, "10.0");
        assert_eq!(view.risk_score, "2.7");
        assert_eq!(view.feasibility_score, "9.1");

        assert!(residential
            .tradeoffs
            .contains(&"High return potential".to_string()));
        assert!(residential
            .tradeoffs
            .contains(&"Low risk investment".to_string()));
        assert!(residential
            .tradeoffs
            .contains(&"Easy to develop and manage".to_string()));
    }

    #[test]
    fn guidance_echoes_the_requesting_profile() {
        let engine = engine();
        let profile = profile("Low", "High", "Short-term", None);

        let report = engine
            .evaluate_with_rng(&profile, &mut rng(11))
            .expect("report builds");
        assert!(report.decision_guidance.starts_with("REFEREE ANALYSIS:"));
        assert!(report
            .decision_guidance
            .contains("Your Low budget, High risk tolerance, and Short-term timeline"));
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use land_referee::referee::referee_router;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn build_router() -> axum::Router {
        referee_router(Arc::new(engine()))
    }

    async fn post_evaluate(router: axum::Router, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/referee/evaluate")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&bytes).expect("json");
        (status, payload)
    }

    #[tokio::test]
    async fn post_evaluate_returns_full_report() {
        let (status, payload) = post_evaluate(
            build_router(),
            json!({
                "budget": "High",
                "risk_tolerance": "Medium",
                "time_horizon": "Long-term",
                "location": "MG Road, Bangalore"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["property"]["property_id"], "BLR-MG-OSM-002");

        let scenarios = payload["scenarios"].as_array().expect("scenario array");
        assert_eq!(scenarios.len(), 3);
        assert_eq!(scenarios[0]["type"], "Residential Housing");
        assert_eq!(scenarios[1]["type"], "Commercial Retail");
        assert_eq!(scenarios[2]["type"], "Cafe / Hotel");

        for scenario in scenarios {
            let roi = scenario["roi_score"].as_str().expect("score is a string");
            let decimals = roi.split('.').nth(1).expect("decimal point present");
            assert_eq!(decimals.len(), 1);
            assert!(scenario["tradeoffs"].as_array().is_some());
            assert!(scenario["explanations"].as_array().is_some());
        }

        let guidance = payload["decision_guidance"]
            .as_str()
            .expect("guidance string");
        assert!(guidance.contains("REFEREE ANALYSIS:"));
    }

    #[tokio::test]
    async fn post_evaluate_rejects_unknown_budget() {
        let (status, payload) = post_evaluate(
            build_router(),
            json!({
                "budget": "Unlimited",
                "risk_tolerance": "Medium",
                "time_horizon": "Long-term"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let message = payload["error"].as_str().expect("error message");
        assert!(message.contains("budget"));
        assert!(message.contains("Unlimited"));
    }

    #[tokio::test]
    async fn post_evaluate_reports_unknown_location() {
        let (status, payload) = post_evaluate(
            build_router(),
            json!({
                "budget": "Low",
                "risk_tolerance": "Low",
                "time_horizon": "Short-term",
                "location": "Atlantis"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(payload["error"]
            .as_str()
            .expect("error message")
            .contains("Atlantis"));
    }

    #[tokio::test]
    async fn get_locations_lists_the_catalog() {
        let response = build_router()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/v1/referee/locations")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&bytes).expect("json");

        let locations = payload["locations"].as_array().expect("location array");
        assert_eq!(locations.len(), 10);
        let mut sorted = locations.clone();
        sorted.sort_by_key(|value| value.as_str().map(str::to_string));
        assert_eq!(*locations, sorted);
        assert!(locations.contains(&json!("MG Road, Bangalore")));
    }
}
