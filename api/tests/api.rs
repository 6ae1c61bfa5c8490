use std::sync::{Arc, OnceLock};

use axum::Router;
use axum_test::TestServer;
use axum_test::multipart::MultipartForm;
use clap::Parser;
use kondate_api::application::http::server::http_server::{router, state};
use kondate_api::args::Args;
use serde_json::{Value, json};

// The prometheus layer installs a process-global recorder, so the router is
// built once and shared across tests. No test below reaches a model provider:
// every request fails input validation before any outbound call.
fn app() -> Router {
    static ROUTER: OnceLock<Router> = OnceLock::new();
    ROUTER
        .get_or_init(|| {
            let args = Args::parse_from([
                "kondate-api",
                "--openai-api-key",
                "test-key",
                "--google-api-key",
                "test-key",
            ]);
            let state = state(Arc::new(args)).expect("state");
            router(state).expect("router")
        })
        .clone()
}

fn server() -> TestServer {
    TestServer::new(app()).expect("test server")
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let response = server().get("/api/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}

#[tokio::test]
async fn config_endpoint_exposes_the_public_base_url() {
    let response = server().get("/api/config").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["base_url"], "http://localhost:3000");
}

#[tokio::test]
async fn metrics_endpoint_renders() {
    let response = server().get("/api/metrics").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn missing_ingredients_field_is_rejected() {
    let response = server()
        .post("/api/generate-meal-plan")
        .json(&json!({}))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn non_array_ingredients_are_rejected() {
    let response = server()
        .post("/api/generate-meal-plan")
        .json(&json!({ "ingredients": "鶏肉" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn empty_ingredient_list_is_rejected_with_the_expected_message() {
    let response = server()
        .post("/api/generate-meal-plan")
        .json(&json!({ "ingredients": [] }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "食材のリストが必要です");
}

#[tokio::test]
async fn image_endpoint_requires_an_image_field() {
    let form = MultipartForm::new().add_text("other", "value");
    let response = server()
        .post("/api/generate-meal-plan-from-image")
        .multipart(form)
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "画像ファイルが見つかりません");
}

#[tokio::test]
async fn hybrid_endpoint_rejects_malformed_ingredients_json() {
    let form = MultipartForm::new().add_text("ingredients", "not-json");
    let response = server()
        .post("/api/generate-meal-plan-hybrid")
        .multipart(form)
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "食材リストの形式が正しくありません");
}

#[tokio::test]
async fn hybrid_endpoint_requires_at_least_one_input() {
    let form = MultipartForm::new().add_text("ingredients", "[]");
    let response = server()
        .post("/api/generate-meal-plan-hybrid")
        .multipart(form)
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], "画像または食材リストのどちらかは必要です");
}
