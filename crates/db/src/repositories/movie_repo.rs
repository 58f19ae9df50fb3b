//! Repository for movie records.
//!
//! Records are held in insertion order behind a single `RwLock`. Every
//! operation takes the lock for its full duration, so concurrent requests
//! observe each mutation atomically.

use reel_core::movie::{Movie, MoviePatch, NewMovie};
use tokio::sync::RwLock;

/// Ordered, in-memory movie store.
///
/// Designed to be wrapped in `Arc` and shared through application state.
pub struct MovieRepo {
    movies: RwLock<Vec<Movie>>,
}

impl MovieRepo {
    /// Create a store holding `seed` in the given order.
    pub fn new(seed: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(seed),
        }
    }

    /// List all movies, or only those tagged with `genre` (case-insensitive).
    ///
    /// An empty filter string is treated as no filter.
    pub async fn list(&self, genre: Option<&str>) -> Vec<Movie> {
        let movies = self.movies.read().await;
        match genre.filter(|g| !g.is_empty()) {
            Some(genre) => movies.iter().filter(|m| m.has_genre(genre)).cloned().collect(),
            None => movies.clone(),
        }
    }

    /// Find a movie by exact id.
    pub async fn find_by_id(&self, id: &str) -> Option<Movie> {
        self.movies.read().await.iter().find(|m| m.id == id).cloned()
    }

    /// Append a new movie with a freshly generated id.
    pub async fn create(&self, input: NewMovie) -> Movie {
        let movie = input.into_movie(uuid::Uuid::new_v4().to_string());
        self.movies.write().await.push(movie.clone());
        tracing::debug!(movie_id = %movie.id, "Movie appended to store");
        movie
    }

    /// Merge `patch` into the movie with `id`, replacing it in place.
    ///
    /// Returns `None` if no movie has that id.
    pub async fn update(&self, id: &str, patch: MoviePatch) -> Option<Movie> {
        let mut movies = self.movies.write().await;
        let movie = movies.iter_mut().find(|m| m.id == id)?;
        patch.apply_to(movie);
        Some(movie.clone())
    }

    /// Remove the movie with `id`, keeping the order of the rest.
    ///
    /// Returns `false` if no movie has that id.
    pub async fn delete(&self, id: &str) -> bool {
        let mut movies = self.movies.write().await;
        match movies.iter().position(|m| m.id == id) {
            Some(index) => {
                movies.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of stored movies.
    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}

impl Default for MovieRepo {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
