//! Integration tests for the configuration snapshot endpoint.
//!
//! These tests drive the full router (routes + middleware) through
//! `tower::ServiceExt::oneshot` without binding a TCP listener.

use std::collections::BTreeMap;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use confview_rs::config::settings::ServerConfig;
use confview_rs::config::{AppConfig, CredentialsConfig, StorageConfig};
use confview_rs::api::routes::create_router;
use confview_rs::state::AppState;

fn sample_snapshot() -> AppConfig {
    AppConfig {
        port: 8080,
        credentials: CredentialsConfig {
            username: "svc".to_string(),
            secret: "abc".to_string(),
        },
        services: BTreeMap::from([
            (
                "billing".to_string(),
                "http://billing.internal:9000".to_string(),
            ),
            (
                "ledger".to_string(),
                "http://ledger.internal:9100".to_string(),
            ),
        ]),
        storage: StorageConfig {
            url: "s3://storage.internal:9000".to_string(),
            bucket: "confview".to_string(),
        },
    }
}

fn test_router() -> Router {
    let state = AppState::new(sample_snapshot());
    create_router(state, &ServerConfig::default())
}

fn get_request(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("request should build")
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable")
        .to_vec()
}

#[tokio::test]
async fn test_get_configuration_returns_200_with_four_keys() {
    let router = test_router();

    let response = router.oneshot(get_request("/configuration")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_bytes(response).await;
    let value: serde_json::Value = serde_json::from_slice(&body).expect("body must be valid JSON");

    let object = value.as_object().expect("body must be a JSON object");
    assert_eq!(object.len(), 4);
    assert!(object.contains_key("port"));
    assert!(object.contains_key("credentials"));
    assert!(object.contains_key("services"));
    assert!(object.contains_key("storage"));
}

#[tokio::test]
async fn test_get_configuration_round_trips_source_values() {
    let router = test_router();

    let response = router.oneshot(get_request("/configuration")).await.unwrap();
    let body = body_bytes(response).await;
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(value["port"], 8080);
    assert_eq!(value["credentials"]["username"], "svc");
    assert_eq!(value["credentials"]["secret"], "abc");
    assert_eq!(value["services"]["billing"], "http://billing.internal:9000");
    assert_eq!(value["services"]["ledger"], "http://ledger.internal:9100");
    assert_eq!(value["storage"]["url"], "s3://storage.internal:9000");
    assert_eq!(value["storage"]["bucket"], "confview");
}

#[tokio::test]
async fn test_repeated_requests_are_byte_identical() {
    let router = test_router();

    let first = router
        .clone()
        .oneshot(get_request("/configuration"))
        .await
        .unwrap();
    let second = router.oneshot(get_request("/configuration")).await.unwrap();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(body_bytes(first).await, body_bytes(second).await);
}

#[tokio::test]
async fn test_concurrent_requests_return_identical_bodies() {
    let router = test_router();

    let (first, second) = tokio::join!(
        router.clone().oneshot(get_request("/configuration")),
        router.clone().oneshot(get_request("/configuration")),
    );

    let first = first.unwrap();
    let second = second.unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);

    let first_body = body_bytes(first).await;
    let second_body = body_bytes(second).await;
    assert_eq!(first_body, second_body);

    // Both bodies are complete, parseable documents with all four keys.
    let value: serde_json::Value = serde_json::from_slice(&first_body).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 4);
}

#[tokio::test]
async fn test_unknown_path_returns_json_404() {
    let router = test_router();

    let response = router.oneshot(get_request("/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_bytes(response).await;
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_response_carries_request_id_header() {
    let router = test_router();

    let response = router.oneshot(get_request("/configuration")).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_provided_request_id_is_propagated() {
    let router = test_router();

    let request = Request::builder()
        .uri("/configuration")
        .header("x-request-id", "test-correlation-id")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("test-correlation-id")
    );
}
