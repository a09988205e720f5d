//! Assertion helpers returning [`PetstoreResult`] instead of panicking.
//!
//! Test cases chain these with `?` so the first unmet expectation aborts the
//! case with a message naming the expectation, the expected value and the
//! observed value.

use crate::error::{PetstoreError, PetstoreResult};
use serde_json::Value;
use std::fmt::Debug;

/// Fail with `expectation` unless `expected == actual`
pub fn ensure_eq<T>(expectation: &str, expected: T, actual: T) -> PetstoreResult<()>
where
    T: PartialEq + Debug,
{
    if expected == actual {
        Ok(())
    } else {
        Err(PetstoreError::assertion_failed(expectation, expected, actual))
    }
}

/// Fail unless `body[field]` equals `expected`
///
/// A missing field compares as `null`.
pub fn ensure_field_eq(
    body: &Value,
    field: &str,
    expected: impl Into<Value>,
) -> PetstoreResult<()> {
    let expected = expected.into();
    let actual = body.get(field).cloned().unwrap_or(Value::Null);
    ensure_eq(&format!("field `{field}`"), expected, actual)
}

/// Fail unless `body` is an object containing `field`
pub fn ensure_has_field(body: &Value, field: &str) -> PetstoreResult<()> {
    if body.get(field).is_some() {
        Ok(())
    } else {
        Err(PetstoreError::assertion_failed(
            format!("field `{field}` present in response"),
            field,
            body,
        ))
    }
}

/// Fail unless `body` is a JSON array
pub fn ensure_array(body: &Value) -> PetstoreResult<&Vec<Value>> {
    body.as_array()
        .ok_or_else(|| PetstoreError::assertion_failed("response is a JSON array", "array", body))
}

/// Fail unless `body` is a JSON object
pub fn ensure_object(body: &Value) -> PetstoreResult<&serde_json::Map<String, Value>> {
    body.as_object()
        .ok_or_else(|| PetstoreError::assertion_failed("response is a JSON object", "object", body))
}
