//! Startup seed loading.
//!
//! The seed file is a JSON array of complete movie records. It is read once
//! and never written back.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use reel_core::movie::Movie;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Seed file {path} is not a valid movie list: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Seed data contains duplicate movie id {0}")]
    DuplicateId(String),
}

/// Read and parse the seed file at `path`.
pub fn load_seed(path: &Path) -> Result<Vec<Movie>, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let movies: Vec<Movie> = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    ensure_unique_ids(&movies)?;

    tracing::info!(path = %path.display(), count = movies.len(), "Loaded movie seed data");
    Ok(movies)
}

fn ensure_unique_ids(movies: &[Movie]) -> Result<(), SeedError> {
    let mut seen = HashSet::with_capacity(movies.len());
    for movie in movies {
        if !seen.insert(movie.id.as_str()) {
            return Err(SeedError::DuplicateId(movie.id.clone()));
        }
    }
    Ok(())
}
