//! Handlers for the movie collection.
//!
//! Mutating handlers validate the raw JSON body before touching the store,
//! so an invalid payload is rejected with 400 even when the id is unknown.
//! Extractor rejections are taken as `Result`s and surface as JSON 400s.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use reel_core::error::CoreError;
use reel_core::validation;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Query parameters for `GET /movies`.
#[derive(Debug, Deserialize)]
pub struct ListMoviesParams {
    pub genre: Option<String>,
}

/// GET /movies
///
/// List every movie, or only those with a matching genre (case-insensitive).
pub async fn list_movies(
    State(state): State<AppState>,
    query: Result<Query<ListMoviesParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = query?;
    let movies = state.movies.list(params.genre.as_deref()).await;

    tracing::debug!(count = movies.len(), genre = ?params.genre, "Listed movies");

    Ok(Json(movies))
}

/// GET /movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(movie_id) = path?;
    let movie = state
        .movies
        .find_by_id(&movie_id)
        .await
        .ok_or_else(|| CoreError::movie_not_found(&movie_id))?;

    Ok(Json(movie))
}

/// POST /movies
///
/// Validate the full payload and append a new movie with a generated id.
pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = payload?;
    let input = validation::validate_create(&body).map_err(CoreError::Validation)?;

    let movie = state.movies.create(input).await;

    tracing::info!(movie_id = %movie.id, title = %movie.title, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// PATCH /movies/{id}
///
/// Merge the supplied fields into an existing movie. `id` in the body is ignored.
pub async fn update_movie(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(movie_id) = path?;
    let Json(body) = payload?;
    let patch = validation::validate_partial(&body).map_err(CoreError::Validation)?;

    let movie = state
        .movies
        .update(&movie_id, patch)
        .await
        .ok_or_else(|| CoreError::movie_not_found(&movie_id))?;

    tracing::info!(movie_id = %movie.id, "Movie updated");

    Ok(Json(movie))
}

/// DELETE /movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(movie_id) = path?;
    if !state.movies.delete(&movie_id).await {
        return Err(AppError::Core(CoreError::movie_not_found(movie_id)));
    }

    tracing::info!(%movie_id, "Movie deleted");

    Ok(Json(MessageResponse::new("movie deleted")))
}
