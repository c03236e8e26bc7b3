//! Request payload checks that happen before the store is touched.

use crate::error::AppError;
use crate::store::{parse_int_prefix, Record};
use serde_json::Value;

pub struct RequestValidator;

impl RequestValidator {
    /// Create payloads must be JSON objects. Field-level rules (`name`) are enforced by the store.
    pub fn body_to_record(value: Value) -> Result<Record, AppError> {
        match value {
            Value::Object(m) => Ok(m),
            _ => Err(AppError::BadRequest(
                "Invalid input: body must be a JSON object".into(),
            )),
        }
    }

    /// Lenient range bound: leading integer or nothing. Unparseable bounds match no record.
    pub fn range_bound(raw: &str) -> Option<i64> {
        parse_int_prefix(raw)
    }
}
