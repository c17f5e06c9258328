//! Contract tests for the HTTP surface that never reach the document store.
//!
//! The MongoDB driver connects lazily, so a `Db` handle can be built without a
//! running server. Every request in this file is answered before any store
//! I/O happens: id parsing, body parsing, routing and CORS all run first.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use stockpot_server::{app, db::Db};
use tower::ServiceExt;

async fn test_app() -> Router {
    let db = Db::connect("mongodb://localhost:27017")
        .await
        .expect("connection string should parse");
    app(Arc::new(db))
}

/// Send a request through the router and decode the JSON body.
async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_get_with_malformed_id_is_not_found() {
    let request = Request::builder()
        .uri("/recipes/not-a-hex-id")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(test_app().await, request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Recipe not found");
}

#[tokio::test]
async fn test_patch_with_malformed_id_reports_not_found() {
    let request = json_request(Method::PATCH, "/recipes/nope", "{}");

    let (status, body) = send(test_app().await, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Recipe not found");
}

#[tokio::test]
async fn test_patch_with_invalid_json_is_bad_request() {
    let request = json_request(
        Method::PATCH,
        "/recipes/507f1f77bcf86cd799439011",
        "{not json",
    );

    let (status, body) = send(test_app().await, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_with_invalid_json_is_bad_request() {
    let request = json_request(Method::POST, "/recipes", "{");

    let (status, body) = send(test_app().await, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_with_wrong_typed_field_is_bad_request() {
    let request = json_request(Method::POST, "/recipes", r#"{"prep_time": "ten"}"#);

    let (status, body) = send(test_app().await, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_without_json_content_type_is_bad_request() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/recipes")
        .body(Body::from(r#"{"title": "Toast"}"#))
        .unwrap();

    let (status, _body) = send(test_app().await, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_with_malformed_id_is_server_error() {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/recipes/nope")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(test_app().await, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let request = Request::builder()
        .uri("/pantry")
        .body(Body::empty())
        .unwrap();

    let response = test_app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_preflight_allows_any_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/recipes")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = test_app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_openapi_document_lists_recipe_paths() {
    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(test_app().await, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/recipes"].is_object());
    assert!(body["paths"]["/recipes/{id}"].is_object());
}

#[tokio::test]
async fn test_store_handle_builds_and_shuts_down() {
    let db = Db::connect("mongodb://localhost:27017")
        .await
        .expect("connection string should parse");
    db.shutdown().await;
}

#[tokio::test]
async fn test_invalid_connection_string_is_rejected() {
    assert!(Db::connect("not a mongodb url").await.is_err());
}
