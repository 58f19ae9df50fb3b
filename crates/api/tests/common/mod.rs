#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use reel_api::config::{LogFormat, ServerConfig};
use reel_api::router::build_app_router;
use reel_api::state::AppState;
use reel_core::movie::Movie;
use reel_db::MovieRepo;

/// Build a test `ServerConfig` with safe defaults (any CORS origin, 30s timeout).
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        seed_path: seed_file_path(),
        cors_origins: None,
        request_timeout_secs: 30,
        log_format: LogFormat::Pretty,
    }
}

/// Path to the seed file shipped with the repository.
pub fn seed_file_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/movies.json")
}

/// Three fixed movies with short, predictable ids.
pub fn sample_movies() -> Vec<Movie> {
    vec![
        movie("m-1", "The Shawshank Redemption", 1994, &["Drama"]),
        movie("m-2", "The Dark Knight", 2008, &["Action", "Crime", "Drama"]),
        movie("m-3", "Inception", 2010, &["Action", "Adventure", "Sci-Fi"]),
    ]
}

fn movie(id: &str, title: &str, year: u16, genre: &[&str]) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        year,
        director: "Director".to_string(),
        duration: 140,
        poster: format!("https://example.com/{id}.jpg"),
        genre: genre.iter().map(|g| g.to_string()).collect(),
        rate: 8.5,
    }
}

/// A fresh store seeded with [`sample_movies`].
pub fn sample_repo() -> Arc<MovieRepo> {
    Arc::new(MovieRepo::new(sample_movies()))
}

/// Build the full application router around `movies`.
///
/// Uses the production router builder so tests exercise the same middleware
/// stack (CORS, request ID, timeout, tracing, panic recovery).
pub fn build_test_app(movies: Arc<MovieRepo>) -> Router {
    build_app_router(AppState { movies }, &test_config())
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PATCH, uri, body).await
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
