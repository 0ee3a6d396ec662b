//! Log record structure

use super::level::LogLevel;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller location attached to a record when source capture is enabled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
}

impl From<&'static std::panic::Location<'static>> for SourceLocation {
    fn from(location: &'static std::panic::Location<'static>) -> Self {
        Self {
            file: location.file().to_string(),
            line: location.line(),
        }
    }
}

/// One emitted log record: the logger's name, the severity, the sanitized
/// message, and any structured fields bound to the logger or supplied with
/// the call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub name: String,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceLocation>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub fields: Map<String, Value>,
}

impl LogRecord {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// to prevent attackers from injecting fake log entries.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(name: impl Into<String>, level: LogLevel, message: String) -> Self {
        Self {
            name: name.into(),
            level,
            message: Self::sanitize_message(&message),
            timestamp: Utc::now(),
            source: None,
            fields: Map::new(),
        }
    }

    pub fn with_source(mut self, source: SourceLocation) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_fields(mut self, fields: Map<String, Value>) -> Self {
        self.fields = fields;
        self
    }

    /// Render the record as a flat JSON object for raw emission.
    ///
    /// Structured fields sit alongside the fixed keys; a field named like a
    /// fixed key keeps the fixed value (fixed keys win).
    #[must_use]
    pub fn to_json_value(&self, timestamp_format: &TimestampFormat) -> Value {
        let mut obj = Map::new();

        for (key, value) in &self.fields {
            obj.insert(key.clone(), value.clone());
        }

        obj.insert("name".to_string(), Value::String(self.name.clone()));
        obj.insert(
            "level".to_string(),
            Value::String(self.level.to_str().to_string()),
        );
        obj.insert(
            "time".to_string(),
            match timestamp_format {
                TimestampFormat::UnixMillis => {
                    Value::Number(self.timestamp.timestamp_millis().into())
                }
                _ => Value::String(timestamp_format.format(&self.timestamp)),
            },
        );
        obj.insert("msg".to_string(), Value::String(self.message.clone()));

        if let Some(ref source) = self.source {
            obj.insert("file".to_string(), Value::String(source.file.clone()));
            obj.insert("line".to_string(), Value::Number(source.line.into()));
        }

        Value::Object(obj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_sanitizes_message() {
        let record = LogRecord::new("test", LogLevel::Info, "a\nb\rc\td".to_string());
        assert_eq!(record.message, "a\\nb\\rc\\td");
    }

    #[test]
    fn test_json_shape() {
        let mut fields = Map::new();
        fields.insert("flowId".to_string(), Value::String("abc-123".to_string()));

        let record = LogRecord::new("api", LogLevel::Warn, "slow response".to_string())
            .with_fields(fields);

        let json = record.to_json_value(&TimestampFormat::Iso8601);
        assert_eq!(json["name"], "api");
        assert_eq!(json["level"], "WARN");
        assert_eq!(json["msg"], "slow response");
        assert_eq!(json["flowId"], "abc-123");
        assert!(json["time"].is_string());
    }

    #[test]
    fn test_fixed_keys_win_over_fields() {
        let mut fields = Map::new();
        fields.insert("level".to_string(), Value::String("bogus".to_string()));

        let record =
            LogRecord::new("api", LogLevel::Info, "msg".to_string()).with_fields(fields);

        let json = record.to_json_value(&TimestampFormat::Iso8601);
        assert_eq!(json["level"], "INFO");
    }

    #[test]
    fn test_unix_millis_timestamp_is_numeric() {
        let record = LogRecord::new("api", LogLevel::Info, "msg".to_string());
        let json = record.to_json_value(&TimestampFormat::UnixMillis);
        assert!(json["time"].is_number());
    }

    #[test]
    fn test_source_location() {
        let record = LogRecord::new("api", LogLevel::Debug, "here".to_string())
            .with_source(SourceLocation {
                file: "src/main.rs".to_string(),
                line: 42,
            });

        let json = record.to_json_value(&TimestampFormat::Iso8601);
        assert_eq!(json["file"], "src/main.rs");
        assert_eq!(json["line"], 42);
    }
}
