use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use engine::{Addressing, Engine, RecordPolicy};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    server::router(Arc::new(Engine::default()), "")
}

fn app_with(engine: Engine, base_path: &str) -> Router {
    server::router(Arc::new(engine), base_path)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn transaction_lifecycle() {
    let app = app();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/transactions",
        Some(json!({"amount": 50, "desc": "coffee"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "amount": 50, "desc": "coffee"}));

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/transactions",
        Some(json!({"amount": 12, "desc": "lunch"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], json!(2));

    let (status, body) = send(&app, Method::DELETE, "/transactions/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, body) = send_json(&app, Method::GET, "/transactions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": 2, "amount": 12, "desc": "lunch"}]));
}

#[tokio::test]
async fn replace_transaction_returns_stored_record() {
    let app = app();
    send(&app, Method::POST, "/transactions", Some(json!({"amount": 5}))).await;

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/transactions/1",
        Some(json!({"amount": 6, "desc": "edited"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"amount": 6, "desc": "edited"}));

    let (_, body) = send_json(&app, Method::GET, "/transactions", None).await;
    assert_eq!(body, json!([{"amount": 6, "desc": "edited"}]));
}

#[tokio::test]
async fn missing_transaction_is_client_error() {
    let app = app();

    let (status, body) = send_json(&app, Method::PUT, "/transactions/3", Some(json!({}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, _) = send(&app, Method::DELETE, "/transactions/0", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/transactions/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn positional_delete_desyncs_ids() {
    let app = app_with(
        Engine::builder().addressing(Addressing::Positional).build(),
        "",
    );
    for amount in [1, 2, 3] {
        send(&app, Method::POST, "/transactions", Some(json!({"amount": amount}))).await;
    }

    send(&app, Method::DELETE, "/transactions/1", None).await;
    // Position 1 now holds the record created with id 3.
    let (status, _) = send(&app, Method::DELETE, "/transactions/2", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send_json(&app, Method::GET, "/transactions", None).await;
    assert_eq!(body, json!([{"id": 2, "amount": 2}]));
}

#[tokio::test]
async fn budget_scenario() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/budgets",
        Some(json!({"category": "food", "amount": 300})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.is_empty());

    let (status, body) = send_json(&app, Method::GET, "/budgets", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"food": 300}));

    let (status, body) = send(&app, Method::PUT, "/budgets/food", Some(json!({"amount": 250}))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (_, body) = send_json(&app, Method::GET, "/budgets", None).await;
    assert_eq!(body, json!({"food": 250}));

    let (status, _) = send(&app, Method::DELETE, "/budgets/food", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, body) = send_json(&app, Method::GET, "/budgets", None).await;
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn budget_upsert_by_path_creates_and_decodes_category() {
    let app = app();

    let (status, _) = send(
        &app,
        Method::PUT,
        "/budgets/eating%20out",
        Some(json!({"category": "ignored", "amount": 80.5})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send_json(&app, Method::GET, "/budgets", None).await;
    assert_eq!(body, json!({"eating out": 80.5}));
}

#[tokio::test]
async fn budget_errors() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/budgets",
        Some(json!({"category": "food", "amount": 300})),
    )
    .await;

    let (status, body) = send_json(&app, Method::DELETE, "/budgets/rent", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("rent"));

    let (status, _) = send(&app, Method::POST, "/budgets", Some(json!({"amount": 10}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::PUT, "/budgets/food", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send_json(&app, Method::GET, "/budgets", None).await;
    assert_eq!(body, json!({"food": 300}));
}

#[tokio::test]
async fn undecodable_budget_category_gets_json_error() {
    let app = app();

    let (status, body) = send_json(&app, Method::DELETE, "/budgets/%FF", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) =
        send_json(&app, Method::PUT, "/budgets/%FF", Some(json!({"amount": 1}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (_, body) = send_json(&app, Method::GET, "/budgets", None).await;
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn category_scenario() {
    let app = app();
    for name in ["food", "rent"] {
        let (status, body) =
            send_json(&app, Method::POST, "/categories", Some(json!({"name": name}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["name"], json!(name));
    }

    let (status, _) = send(&app, Method::DELETE, "/categories/5", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send_json(&app, Method::GET, "/categories", None).await;
    assert_eq!(
        body,
        json!([{"id": 1, "name": "food"}, {"id": 2, "name": "rent"}])
    );

    let (status, _) = send(&app, Method::DELETE, "/categories/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, body) = send_json(&app, Method::GET, "/categories", None).await;
    assert_eq!(body, json!([{"id": 2, "name": "rent"}]));
}

#[tokio::test]
async fn categories_have_no_replace_route() {
    let app = app();
    send(&app, Method::POST, "/categories", Some(json!({"name": "food"}))).await;

    let (status, _) = send(&app, Method::PUT, "/categories/1", Some(json!({"name": "x"}))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn malformed_bodies_are_rejected() {
    let app = app_with(
        Engine::builder()
            .category_policy(RecordPolicy::require(["name"]))
            .build(),
        "",
    );

    let (status, _) = send(&app, Method::POST, "/transactions", Some(json!([1, 2]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) =
        send_json(&app, Method::POST, "/categories", Some(json!({"label": "food"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("name"));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/transactions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (_, body) = send_json(&app, Method::GET, "/transactions", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn routes_mount_under_base_path() {
    let app = app_with(Engine::default(), "/api");

    let (status, _) = send(&app, Method::POST, "/api/categories", Some(json!({"name": "food"}))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, Method::GET, "/categories", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn responses_carry_cors_headers() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/budgets")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
