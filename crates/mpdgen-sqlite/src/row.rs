//! Raw JSON object → SQL parameter list.
//!
//! Rows are copied field by field without interpreting the values, so any
//! scalar SQLite will store is accepted. Typing is left to the column
//! affinity.

use rusqlite::types::Value as SqlValue;
use serde_json::{Map, Value};

use crate::schema::KEY_ALIASES;

/// Why a JSON element cannot be bound to an insert.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` is not a scalar value")]
    NonScalar(&'static str),
}

/// Scalar JSON to an SQLite value. Arrays and objects have no column form.
pub fn sql_value(value: &Value) -> Option<SqlValue> {
    match value {
        Value::Null => Some(SqlValue::Null),
        Value::Bool(b) => Some(SqlValue::Integer(i64::from(*b))),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(SqlValue::Integer(i)),
            None => n.as_f64().map(SqlValue::Real),
        },
        Value::String(s) => Some(SqlValue::Text(s.clone())),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn field<'a>(record: &'a Map<String, Value>, column: &'static str) -> Option<&'a Value> {
    record.get(column).or_else(|| {
        KEY_ALIASES
            .iter()
            .find(|(name, _)| *name == column)
            .and_then(|(_, alias)| record.get(*alias))
    })
}

/// Parameters for `columns`, read from the same-named keys of `record`.
pub fn bind_values(record: &Value, columns: &[&'static str]) -> Result<Vec<SqlValue>, RowError> {
    let record = record.as_object().ok_or(RowError::NotAnObject)?;
    columns
        .iter()
        .map(|&column| {
            let value = field(record, column).ok_or(RowError::MissingField(column))?;
            sql_value(value).ok_or(RowError::NonScalar(column))
        })
        .collect()
}
