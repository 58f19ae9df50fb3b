/// Movie identifiers are opaque strings (UUID v4 for records created at runtime).
///
/// Seed data may carry any string id, so lookups never parse the value.
pub type MovieId = String;
