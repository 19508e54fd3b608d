//! HTTP-level tests against the full Healio router.
//!
//! Run with: cargo test --package healio-web --test test_api

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use healio_web::router::build_router;
use healio_web::state::AppState;

fn app() -> Router {
    build_router(AppState::with_fast_stand_ins(), "static")
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse body")
}

// ── Pages ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_home_and_hub_pages_render() {
    let response = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Healio"));
    assert!(html.contains("Enter Platform"));

    let response = app()
        .oneshot(Request::get("/pharmai").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("PharmAI"));
    assert!(html.contains("Explore Molecules"));
    assert!(html.contains("Check Compatibility"));
}

#[tokio::test]
async fn test_compatibility_page_lists_fixture_rows() {
    let response = app()
        .oneshot(Request::get("/compatibility").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Aspirin"));
    assert!(html.contains("Microcrystalline Cellulose"));
    assert!(html.contains("Total Combinations"));
    assert!(html.contains("TensorFlow model prediction: Compatible"));
}

#[tokio::test]
async fn test_compatibility_page_search_can_come_up_empty() {
    let response = app()
        .oneshot(
            Request::get("/compatibility?q=warfarin")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("No compatibility data found for your search."));
}

#[tokio::test]
async fn test_predict_form_blank_shows_banner() {
    let response = app()
        .oneshot(
            Request::post("/compatibility")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("drug_cid=&excipient_cid=104938&q="))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Please enter both Drug CID and Excipient CID"));
    // The table stays on the page even when validation fails
    assert!(html.contains("Compatibility Data"));
}

#[tokio::test]
async fn test_predict_form_round_trip() {
    let response = app()
        .oneshot(
            Request::post("/compatibility")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("drug_cid=2244&excipient_cid=104938&q="))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Prediction Result"));
    assert!(html.contains("TensorFlow 2.x"));
}

#[tokio::test]
async fn test_unknown_molecule_selection_falls_back_to_first() {
    let response = app()
        .oneshot(
            Request::get("/molecular-visualization?molecule=unobtainium")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("(CID 2244)"));
    assert!(html.contains("C9H8O4"));
}

// ── JSON API ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_api_compatibility_filters_and_counts() {
    let response = app()
        .oneshot(
            Request::get("/api/compatibility?q=aspirin")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["query"], "aspirin");
    assert_eq!(body["total"], 3);
    assert_eq!(body["records"].as_array().unwrap().len(), 3);
    assert_eq!(body["records"][0]["drugCID"], "2244");
    assert_eq!(body["summary"]["compatible"], 2);
    assert_eq!(body["summary"]["caution"], 1);
    assert_eq!(body["summary"]["incompatible"], 0);
}

#[tokio::test]
async fn test_api_predict_rejects_blank_identifier() {
    let response = app()
        .oneshot(
            Request::post("/api/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"drugId":"  ","excipientId":"104938"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "validation");
    assert!(body["message"].as_str().unwrap().contains("drug CID"));
}

#[tokio::test]
async fn test_api_predict_round_trip() {
    let response = app()
        .oneshot(
            Request::post("/api/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"drugId":"2244","excipientId":"104938"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["drugCID"], "2244");
    assert_eq!(body["excipientCID"], "104938");
    let prediction = body["prediction"].as_u64().unwrap();
    assert!(prediction == 0 || prediction == 1);
    let confidence = body["confidence"].as_f64().unwrap();
    assert!((0.0..1.0).contains(&confidence));
    assert_eq!(body["fingerprint_generated"], true);
    assert_eq!(body["model_version"], "TensorFlow 2.x");
}

#[tokio::test]
async fn test_api_molecules_list() {
    let response = app()
        .oneshot(Request::get("/api/molecules").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["aspirin", "caffeine", "ibuprofen"]);
}

#[tokio::test]
async fn test_api_molecule_detail_and_unknown() {
    let response = app()
        .oneshot(
            Request::get("/api/molecules/caffeine")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["formula"], "C8H10N4O2");
    assert_eq!(body["molecularWeight"], "194.19 g/mol");
    assert_eq!(body["atoms"].as_array().unwrap().len(), 9);

    let response = app()
        .oneshot(
            Request::get("/api/molecules/unobtainium")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn test_api_molecule_export_is_a_named_download() {
    let response = app()
        .oneshot(
            Request::get("/api/molecules/aspirin/export")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap(),
        "attachment; filename=\"Aspirin_data.json\""
    );
    let body = body_json(response).await;
    assert_eq!(body["name"], "Aspirin");
    assert_eq!(body["smiles"], "CC(=O)OC1=CC=CC=C1C(=O)O");
    assert_eq!(body["properties"]["molecularWeight"], "180.16 g/mol");
    assert_eq!(body["properties"]["logS"], "-2.23");
}

#[tokio::test]
async fn test_api_analyze_validates_and_acknowledges() {
    let response = app()
        .oneshot(
            Request::post("/api/molecules/analyze")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"smiles":"   "}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "validation");

    let response = app()
        .oneshot(
            Request::post("/api/molecules/analyze")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"smiles":"CCO"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["smiles"], "CCO");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Analysis complete for SMILES: CCO"));
}
