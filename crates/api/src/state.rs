use std::sync::Arc;

use reel_db::MovieRepo;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// In-memory movie store.
    pub movies: Arc<MovieRepo>,
}
