//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = common::build_test_app(common::sample_repo());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["movie_count"], 3);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns a JSON 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let app = common::build_test_app(common::sample_repo());
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()["content-type"], "application/json");

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(
        json["message"],
        "no route for GET /this-route-does-not-exist"
    );
}

// ---------------------------------------------------------------------------
// Test: Unsupported method on a known route returns 405
// ---------------------------------------------------------------------------

#[tokio::test]
async fn put_on_movie_is_not_allowed() {
    let app = common::build_test_app(common::sample_repo());
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/movies/m-1")
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = common::send(app, request).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()["content-type"], "application/json");
    assert_eq!(body_json(response).await["code"], "METHOD_NOT_ALLOWED");
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(common::sample_repo());
    let response = get(app, "/movies").await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: CORS allows any origin by default
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let app = common::build_test_app(common::sample_repo());

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/movies")
        .header("Origin", "http://some-other-site.example")
        .header("Access-Control-Request-Method", "PATCH")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = common::send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .unwrap()
            .to_str()
            .unwrap(),
        "*"
    );
    assert!(headers.get("access-control-allow-credentials").is_none());

    let methods = headers
        .get("access-control-allow-methods")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("PATCH"), "allow-methods missing PATCH: {methods}");
}

#[tokio::test]
async fn simple_request_gets_wildcard_origin() {
    let app = common::build_test_app(common::sample_repo());

    let request = Request::builder()
        .method(Method::GET)
        .uri("/movies")
        .header("Origin", "http://anywhere.example")
        .body(Body::empty())
        .unwrap();

    let response = common::send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}
