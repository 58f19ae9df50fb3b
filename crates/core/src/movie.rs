//! Movie record and the payloads that create or modify one.

use serde::{Deserialize, Serialize};

use crate::types::MovieId;

/// Earliest accepted release year.
pub const MIN_YEAR: u16 = 1900;

/// Latest accepted release year.
pub const MAX_YEAR: u16 = 2030;

/// Lower bound of the rating scale.
pub const MIN_RATE: f64 = 0.0;

/// Upper bound of the rating scale.
pub const MAX_RATE: f64 = 10.0;

/// Rating assigned when a create payload omits `rate`.
pub const DEFAULT_RATE: f64 = 5.0;

/// A stored movie record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: u16,
    pub director: String,
    /// Running time in minutes.
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<String>,
    pub rate: f64,
}

/// A fully validated create payload. Carries no id; the store assigns one.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: u16,
    pub director: String,
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<String>,
    pub rate: f64,
}

impl NewMovie {
    /// Attach an id, producing the record to store.
    pub fn into_movie(self, id: MovieId) -> Movie {
        Movie {
            id,
            title: self.title,
            year: self.year,
            director: self.director,
            duration: self.duration,
            poster: self.poster,
            genre: self.genre,
            rate: self.rate,
        }
    }
}

/// A validated partial update. `None` means "leave unchanged".
///
/// Has no `id` field: identifiers never change after creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<u16>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub poster: Option<String>,
    pub genre: Option<Vec<String>>,
    pub rate: Option<f64>,
}

impl MoviePatch {
    /// True when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        *self == MoviePatch::default()
    }

    /// Overlay every present field onto `movie`.
    pub fn apply_to(self, movie: &mut Movie) {
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(director) = self.director {
            movie.director = director;
        }
        if let Some(duration) = self.duration {
            movie.duration = duration;
        }
        if let Some(poster) = self.poster {
            movie.poster = poster;
        }
        if let Some(genre) = self.genre {
            movie.genre = genre;
        }
        if let Some(rate) = self.rate {
            movie.rate = rate;
        }
    }
}

impl Movie {
    /// Case-insensitive membership test against the record's genres.
    pub fn has_genre(&self, genre: &str) -> bool {
        let wanted = genre.to_lowercase();
        self.genre.iter().any(|g| g.to_lowercase() == wanted)
    }
}
