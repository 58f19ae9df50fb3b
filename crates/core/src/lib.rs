//! Domain types and pure logic for the movies service.
//!
//! Nothing in this crate touches I/O: the record types, the payload
//! validator and the domain error live here so both the store and the HTTP
//! layer can depend on them.

pub mod error;
pub mod movie;
pub mod types;
pub mod validation;
