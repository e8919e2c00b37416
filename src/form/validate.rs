//! Field validation against the entity schema, run form-side before submit.

use crate::schema::{ColumnDef, ColumnKind, EntityDef};
use serde_json::Value;
use std::collections::HashMap;

fn is_blank(v: Option<&Value>) -> bool {
    match v {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// Check one field's value against its column rule. Blank optional fields
/// pass; everything else must match the column kind.
pub fn validate_field(col: &ColumnDef, v: Option<&Value>) -> Result<(), String> {
    if is_blank(v) {
        if col.rule.required {
            return Err(format!("{} is a required field", col.name));
        }
        return Ok(());
    }
    let Some(v) = v else { return Ok(()) };

    match col.kind {
        ColumnKind::Text => {
            if !v.is_string() {
                return Err(format!("{} must be a string", col.name));
            }
        }
        ColumnKind::Boolean => {
            if !v.is_boolean() {
                return Err(format!("{} must be a boolean", col.name));
            }
        }
        ColumnKind::Integer => {
            if v.as_i64().is_none() {
                return Err(format!("{} must be an integer", col.name));
            }
        }
        ColumnKind::Number => {
            if v.as_f64().is_none() {
                return Err(format!("{} must be a number", col.name));
            }
        }
        ColumnKind::Uuid => {
            let ok = v
                .as_str()
                .map(|s| uuid::Uuid::parse_str(s).is_ok())
                .unwrap_or(false);
            if !ok {
                return Err(format!("{} must be a valid id", col.name));
            }
        }
        ColumnKind::Timestamptz => {
            let ok = v.as_str().map(is_valid_date).unwrap_or(false);
            if !ok {
                return Err(format!("{} must be a valid date", col.name));
            }
        }
    }

    if let Some(n) = v.as_f64() {
        if let Some(min) = col.rule.minimum {
            if n < min {
                return Err(format!("{} must be at least {}", col.name, min));
            }
        }
        if let Some(max) = col.rule.maximum {
            if n > max {
                return Err(format!("{} must be at most {}", col.name, max));
            }
        }
    }
    Ok(())
}

fn is_valid_date(s: &str) -> bool {
    chrono::DateTime::parse_from_rfc3339(s).is_ok()
        || chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// Run every form field's rule; returns per-field messages, empty when clean.
pub fn validate_values(
    entity: &EntityDef,
    values: &HashMap<String, Value>,
) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    for col in entity.form_columns() {
        if let Err(msg) = validate_field(col, values.get(&col.name)) {
            errors.insert(col.name.clone(), msg);
        }
    }
    errors
}
