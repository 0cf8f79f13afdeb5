// src/domain/article/fields.rs
//
// Presence and type rules for the loosely-typed article payloads. The admin
// API accepts raw JSON; each rule pins one field down before the value
// objects take over. The first violated rule aborts the whole operation.
use crate::domain::errors::{DomainResult, FieldViolation};
use serde_json::Value;

pub fn required_text(field: &'static str, value: Option<&Value>) -> DomainResult<String> {
    match value {
        None | Some(Value::Null) => Err(FieldViolation::Missing(field).into()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(_) => Err(FieldViolation::NotText(field).into()),
    }
}

/// Nullable text: absent and explicit `null` both mean "no value".
pub fn optional_text(field: &'static str, value: Option<&Value>) -> DomainResult<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(FieldViolation::NotText(field).into()),
    }
}

pub fn required_number(field: &'static str, value: Option<&Value>) -> DomainResult<i64> {
    match value {
        None | Some(Value::Null) => Err(FieldViolation::Missing(field).into()),
        Some(Value::Number(number)) => number
            .as_i64()
            .ok_or_else(|| FieldViolation::NotNumeric(field).into()),
        Some(_) => Err(FieldViolation::NotNumeric(field).into()),
    }
}
