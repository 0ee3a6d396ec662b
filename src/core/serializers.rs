//! Field serializers
//!
//! A serializer is a named transform applied to a specific record field
//! before emission, keyed by field name. The table travels with the logger
//! options, so each factory decides which transforms its records get.

use serde_json::{Map, Value};
use std::collections::HashMap;

/// Transform applied to a field value before emission
pub type Serializer = fn(&Value) -> Value;

/// Serializer table keyed by field name
pub type SerializerMap = HashMap<&'static str, Serializer>;

/// Standard error-to-record conversion.
///
/// Picks the `name`, `message`, and `stack` keys out of a structured error
/// value, defaulting the name to `"Error"`. Non-object values pass through
/// unchanged.
pub fn std_error_fields(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::new();
            out.insert(
                "name".to_string(),
                map.get("name")
                    .cloned()
                    .unwrap_or_else(|| Value::String("Error".to_string())),
            );
            if let Some(message) = map.get("message") {
                out.insert("message".to_string(), message.clone());
            }
            if let Some(stack) = map.get("stack") {
                out.insert("stack".to_string(), stack.clone());
            }
            Value::Object(out)
        }
        other => other.clone(),
    }
}

/// The default serializer table: `err` routed to the standard error
/// conversion.
#[must_use]
pub fn default_serializers() -> SerializerMap {
    let mut map = SerializerMap::new();
    map.insert("err", std_error_fields);
    map
}

/// Convert a live error chain into a loggable structured value.
///
/// ```
/// use flowlog::core::serializers::error_record;
///
/// let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such table");
/// let value = error_record(&err);
/// assert_eq!(value["message"], "no such table");
/// ```
pub fn error_record(err: &(dyn std::error::Error + 'static)) -> Value {
    let mut out = Map::new();
    out.insert("name".to_string(), Value::String("Error".to_string()));
    out.insert("message".to_string(), Value::String(err.to_string()));

    if let Some(source) = err.source() {
        out.insert("cause".to_string(), error_record(source));
    }

    Value::Object(out)
}
