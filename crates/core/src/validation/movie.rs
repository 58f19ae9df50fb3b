//! Field-by-field validation of movie payloads.
//!
//! Both entry points take raw JSON so that a missing or mistyped field is
//! reported as a [`FieldViolation`] instead of a deserializer error. Every
//! field is checked and all violations are returned together, in declaration
//! order. Keys that are not movie fields (including `id`) are ignored.

use serde_json::{Map, Value};

use crate::movie::{
    MoviePatch, NewMovie, DEFAULT_RATE, MAX_RATE, MAX_YEAR, MIN_RATE, MIN_YEAR,
};
use crate::validation::rules::{FieldViolation, Violation};

/// A checker either yields the value or every violation found in it.
type Checked<T> = Result<T, Vec<FieldViolation>>;

/// Validate a create payload. Every field except `rate` is required.
pub fn validate_create(candidate: &Value) -> Result<NewMovie, Vec<FieldViolation>> {
    let obj = as_object(candidate)?;
    let mut errors = Vec::new();

    let title = required(obj, "title", check_text, &mut errors);
    let year = required(obj, "year", check_year, &mut errors);
    let director = required(obj, "director", check_text, &mut errors);
    let duration = required(obj, "duration", check_duration, &mut errors);
    let rate = optional(obj, "rate", check_rate, &mut errors);
    let poster = required(obj, "poster", check_url, &mut errors);
    let genre = required(obj, "genre", check_genre, &mut errors);

    match (title, year, director, duration, poster, genre) {
        (Some(title), Some(year), Some(director), Some(duration), Some(poster), Some(genre))
            if errors.is_empty() =>
        {
            Ok(NewMovie {
                title,
                year,
                director,
                duration,
                poster,
                genre,
                rate: rate.unwrap_or(DEFAULT_RATE),
            })
        }
        _ => Err(errors),
    }
}

/// Validate a partial update. Absent fields are skipped; `{}` is valid.
pub fn validate_partial(candidate: &Value) -> Result<MoviePatch, Vec<FieldViolation>> {
    let obj = as_object(candidate)?;
    let mut errors = Vec::new();

    let patch = MoviePatch {
        title: optional(obj, "title", check_text, &mut errors),
        year: optional(obj, "year", check_year, &mut errors),
        director: optional(obj, "director", check_text, &mut errors),
        duration: optional(obj, "duration", check_duration, &mut errors),
        rate: optional(obj, "rate", check_rate, &mut errors),
        poster: optional(obj, "poster", check_url, &mut errors),
        genre: optional(obj, "genre", check_genre, &mut errors),
    };

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(errors)
    }
}

// ---------------------------------------------------------------------------
// Presence
// ---------------------------------------------------------------------------

fn as_object(candidate: &Value) -> Result<&Map<String, Value>, Vec<FieldViolation>> {
    candidate.as_object().ok_or_else(|| {
        vec![FieldViolation::new(
            "body",
            Violation::InvalidType { expected: "object" },
        )]
    })
}

fn required<T>(
    obj: &Map<String, Value>,
    field: &'static str,
    check: fn(&'static str, &Value) -> Checked<T>,
    errors: &mut Vec<FieldViolation>,
) -> Option<T> {
    match obj.get(field) {
        Some(value) => record(check(field, value), errors),
        None => {
            errors.push(FieldViolation::new(field, Violation::Required));
            None
        }
    }
}

fn optional<T>(
    obj: &Map<String, Value>,
    field: &'static str,
    check: fn(&'static str, &Value) -> Checked<T>,
    errors: &mut Vec<FieldViolation>,
) -> Option<T> {
    obj.get(field)
        .and_then(|value| record(check(field, value), errors))
}

fn record<T>(result: Checked<T>, errors: &mut Vec<FieldViolation>) -> Option<T> {
    result.map_err(|e| errors.extend(e)).ok()
}

// ---------------------------------------------------------------------------
// Per-field rules
// ---------------------------------------------------------------------------

fn check_text(field: &'static str, value: &Value) -> Checked<String> {
    let text = value
        .as_str()
        .ok_or_else(|| violation(field, Violation::InvalidType { expected: "string" }))?;
    if text.trim().is_empty() {
        return Err(violation(field, Violation::Empty));
    }
    Ok(text.to_string())
}

fn check_year(field: &'static str, value: &Value) -> Checked<u16> {
    let n = integer(field, value)?;
    if !(f64::from(MIN_YEAR)..=f64::from(MAX_YEAR)).contains(&n) {
        return Err(violation(
            field,
            Violation::OutOfRange {
                min: f64::from(MIN_YEAR),
                max: f64::from(MAX_YEAR),
            },
        ));
    }
    Ok(n as u16)
}

fn check_duration(field: &'static str, value: &Value) -> Checked<u32> {
    let n = integer(field, value)?;
    if n <= 0.0 {
        return Err(violation(field, Violation::NotPositive));
    }
    if n > f64::from(u32::MAX) {
        return Err(violation(
            field,
            Violation::OutOfRange {
                min: 1.0,
                max: f64::from(u32::MAX),
            },
        ));
    }
    Ok(n as u32)
}

fn check_rate(field: &'static str, value: &Value) -> Checked<f64> {
    let n = number(field, value)?;
    if !(MIN_RATE..=MAX_RATE).contains(&n) {
        return Err(violation(
            field,
            Violation::OutOfRange {
                min: MIN_RATE,
                max: MAX_RATE,
            },
        ));
    }
    Ok(n)
}

fn check_url(field: &'static str, value: &Value) -> Checked<String> {
    let text = value
        .as_str()
        .ok_or_else(|| violation(field, Violation::InvalidType { expected: "string" }))?;
    url::Url::parse(text).map_err(|_| violation(field, Violation::InvalidUrl))?;
    Ok(text.to_string())
}

fn check_genre(field: &'static str, value: &Value) -> Checked<Vec<String>> {
    let items = value
        .as_array()
        .ok_or_else(|| violation(field, Violation::InvalidType { expected: "array" }))?;
    if items.is_empty() {
        return Err(violation(field, Violation::Empty));
    }

    let mut genres = Vec::with_capacity(items.len());
    let mut errors = Vec::new();
    for (i, item) in items.iter().enumerate() {
        match item.as_str() {
            Some(text) if !text.trim().is_empty() => genres.push(text.to_string()),
            Some(_) => errors.push(FieldViolation::new(format!("{field}[{i}]"), Violation::Empty)),
            None => errors.push(FieldViolation::new(
                format!("{field}[{i}]"),
                Violation::InvalidType { expected: "string" },
            )),
        }
    }

    if errors.is_empty() {
        Ok(genres)
    } else {
        Err(errors)
    }
}

// ---------------------------------------------------------------------------
// Numeric helpers
// ---------------------------------------------------------------------------

fn violation(field: &'static str, violation: Violation) -> Vec<FieldViolation> {
    vec![FieldViolation::new(field, violation)]
}

fn number(field: &'static str, value: &Value) -> Checked<f64> {
    value
        .as_f64()
        .ok_or_else(|| violation(field, Violation::InvalidType { expected: "number" }))
}

/// Accepts integral JSON numbers, including `2020.0`.
fn integer(field: &'static str, value: &Value) -> Checked<f64> {
    let n = number(field, value)?;
    if n.fract() != 0.0 {
        return Err(violation(field, Violation::NotInteger));
    }
    Ok(n)
}
