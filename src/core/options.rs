//! Logger options and the shared options builder
//!
//! Every factory funnels through [`build_options`], so name validation and
//! the "absent sink list means engine default sink" rule live in one place.
//! Factories whose option shape differs (the lambda factory binds
//! correlation fields and an env-driven level) use the fluent
//! [`LoggerOptions`] methods on top of [`LoggerOptions::new`].

use super::{
    error::{LoggerError, Result},
    level::LogLevel,
    logger::Logger,
    serializers::{Serializer, SerializerMap},
    sink::Sink,
    timestamp::TimestampFormat,
};
use serde_json::{Map, Value};

/// The record handed to the logger constructor.
///
/// Built once per logger creation and not mutated afterwards.
pub struct LoggerOptions {
    pub name: String,
    /// Capture the caller's source location on every record
    pub src: bool,
    /// Level for the engine default sink; sinks supplied explicitly carry
    /// their own thresholds
    pub level: Option<LogLevel>,
    /// Timestamp source for raw emission
    pub timestamp: TimestampFormat,
    pub serializers: SerializerMap,
    /// Fields bound into every record this logger emits
    pub fields: Map<String, Value>,
    /// `None` means "use the engine default sink"; an empty list never
    /// reaches the logger
    pub sinks: Option<Vec<Sink>>,
}

impl LoggerOptions {
    /// Create options for a named logger.
    ///
    /// Fails with [`LoggerError::EmptyLoggerName`] when the name is empty —
    /// the one usage error this layer validates.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(LoggerError::EmptyLoggerName);
        }

        Ok(Self {
            name,
            src: false,
            level: None,
            timestamp: TimestampFormat::default(),
            serializers: SerializerMap::new(),
            fields: Map::new(),
            sinks: None,
        })
    }

    #[must_use = "builder methods return a new value"]
    pub fn src(mut self, src: bool) -> Self {
        self.src = src;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = Some(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp(mut self, timestamp: TimestampFormat) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Register a serializer for a named field
    #[must_use = "builder methods return a new value"]
    pub fn serializer(mut self, field: &'static str, serializer: Serializer) -> Self {
        self.serializers.insert(field, serializer);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn serializers(mut self, serializers: SerializerMap) -> Self {
        self.serializers = serializers;
        self
    }

    /// Bind a field into every record
    #[must_use = "builder methods return a new value"]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Attach a sink. The first call replaces the engine default sink.
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: Sink) -> Self {
        self.sinks.get_or_insert_with(Vec::new).push(sink);
        self
    }
}

/// Assemble options for `name` with the given sinks and serializer table.
///
/// Source capture is on, matching what the factories expect. The sink list
/// is attached only when at least one sink is supplied: an absent list, not
/// an empty one, is what tells the logger to fall back to its default sink.
pub fn build_options(
    name: impl Into<String>,
    sinks: Vec<Sink>,
    serializers: SerializerMap,
) -> Result<LoggerOptions> {
    let mut options = LoggerOptions::new(name)?.src(true).serializers(serializers);
    if !sinks.is_empty() {
        options.sinks = Some(sinks);
    }
    Ok(options)
}

/// Build a logger from `name` and sinks with the default serializer table.
pub fn make_logger(name: impl Into<String>, sinks: Vec<Sink>) -> Result<Logger> {
    let options = build_options(name, sinks, super::serializers::default_serializers())?;
    Ok(Logger::from_options(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::serializers::default_serializers;

    #[test]
    fn test_empty_name_fails() {
        assert!(matches!(
            LoggerOptions::new(""),
            Err(LoggerError::EmptyLoggerName)
        ));
        assert!(matches!(
            build_options("", Vec::new(), SerializerMap::new()),
            Err(LoggerError::EmptyLoggerName)
        ));
    }

    #[test]
    fn test_no_sinks_leaves_list_absent() {
        let options = build_options("TestLog", Vec::new(), default_serializers()).unwrap();
        assert!(options.sinks.is_none());
        assert_eq!(options.name, "TestLog");
        assert!(options.src);
    }

    #[test]
    fn test_fluent_fields_and_level() {
        let options = LoggerOptions::new("api")
            .unwrap()
            .level(LogLevel::Debug)
            .timestamp(TimestampFormat::UnixMillis)
            .field("flowId", "abc-123")
            .field("functionVersion", "7");

        assert_eq!(options.level, Some(LogLevel::Debug));
        assert_eq!(options.timestamp, TimestampFormat::UnixMillis);
        assert_eq!(options.fields["flowId"], "abc-123");
        assert_eq!(options.fields["functionVersion"], "7");
    }
}
