//! Loose field-presence validation for JSON request bodies.
//!
//! The API treats missing, `null`, and "empty" values (empty string,
//! zero, false, empty collections) as equally absent when a field is
//! required, so each check reports which of the three cases applies.

use serde_json::Value;

/// Outcome of a required-field check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPresence<'a> {
    /// Present with a usable value.
    Valid(&'a Value),
    /// Present, but empty: `""`, `0`, `false`, `[]` or `{}`.
    Empty,
    /// Missing entirely, or explicit `null`.
    Absent,
}

impl FieldPresence<'_> {
    /// Whether the field counts as supplied. Handlers treat `Empty` and
    /// `Absent` identically when rejecting a request.
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldPresence::Valid(_))
    }
}

/// Checks that `field` is present in `body` with a non-empty value.
///
/// Bodies that failed to parse as JSON arrive here as `Value::Null`, so
/// every field of a malformed body reports `Absent`.
pub fn required_non_empty<'a>(body: &'a Value, field: &str) -> FieldPresence<'a> {
    match body.get(field) {
        None | Some(Value::Null) => FieldPresence::Absent,
        Some(value) if is_empty(value) => FieldPresence::Empty,
        Some(value) => FieldPresence::Valid(value),
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Bool(b) => !b,
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
