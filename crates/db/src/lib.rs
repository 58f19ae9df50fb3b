//! In-memory storage for movie records.
//!
//! There is no database: records live in a [`MovieRepo`] for the lifetime of
//! the process and are seeded from a JSON file at startup.

pub mod repositories;
pub mod seed;

pub use repositories::MovieRepo;
pub use seed::{load_seed, SeedError};
