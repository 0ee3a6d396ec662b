//! Main logger implementation

use super::{
    error::Result,
    level::{resolve_level, LogLevel},
    options::LoggerOptions,
    record::{LogRecord, SourceLocation},
    serializers::SerializerMap,
    sink::Sink,
};
use crate::sinks::raw::RawWriter;
use parking_lot::Mutex;
use serde_json::{Map, Value};

/// A logger instance.
///
/// Exposes one method per severity level; every call builds a record,
/// applies the serializer table to its fields, and hands it to each sink
/// whose threshold admits the level. Lifetime is caller-managed: dropping
/// the logger drops its sinks.
pub struct Logger {
    name: String,
    src: bool,
    serializers: SerializerMap,
    fields: Map<String, Value>,
    sinks: Mutex<Vec<Sink>>,
}

impl Logger {
    /// Construct a logger from assembled options.
    ///
    /// When the options carry no sink list, the engine default sink is
    /// attached: structured records to standard output, filtered at the
    /// options level (INFO when unset).
    pub fn from_options(options: LoggerOptions) -> Self {
        let sinks = options.sinks.unwrap_or_else(|| {
            vec![Sink::new(
                resolve_level(options.level),
                Box::new(RawWriter::stdout().with_timestamp(options.timestamp.clone())),
            )]
        });

        Self {
            name: options.name,
            src: options.src,
            serializers: options.serializers,
            fields: options.fields,
            sinks: Mutex::new(sinks),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields bound into every record this logger emits
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.lock().len()
    }

    /// Attach another sink after construction
    pub fn add_sink(&self, sink: Sink) {
        self.sinks.lock().push(sink);
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.emit(level, message.into(), None, std::panic::Location::caller());
    }

    /// Log with structured per-call fields alongside the bound fields.
    ///
    /// Per-call fields win over bound fields on key conflicts.
    #[track_caller]
    pub fn log_with_fields(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        fields: Map<String, Value>,
    ) {
        self.emit(
            level,
            message.into(),
            Some(fields),
            std::panic::Location::caller(),
        );
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }

    fn emit(
        &self,
        level: LogLevel,
        message: String,
        extra: Option<Map<String, Value>>,
        location: &'static std::panic::Location<'static>,
    ) {
        let mut sinks = self.sinks.lock();
        if !sinks.iter().any(|sink| sink.accepts(level)) {
            return;
        }

        let mut fields = self.fields.clone();
        if let Some(extra) = extra {
            for (key, value) in extra {
                fields.insert(key, value);
            }
        }
        self.apply_serializers(&mut fields);

        let mut record = LogRecord::new(&self.name, level, message).with_fields(fields);
        if self.src {
            record = record.with_source(SourceLocation::from(location));
        }

        for sink in sinks.iter_mut() {
            if !sink.accepts(level) {
                continue;
            }
            if let Err(e) = sink.write_record(&record) {
                eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.writer_name(), e);
            }
        }
    }

    fn apply_serializers(&self, fields: &mut Map<String, Value>) {
        if self.serializers.is_empty() {
            return;
        }
        for (key, value) in fields.iter_mut() {
            if let Some(serializer) = self.serializers.get(key.as_str()) {
                *value = serializer(value);
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        let mut sinks = self.sinks.lock();
        for sink in sinks.iter_mut() {
            sink.flush()?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("src", &self.src)
            .field("fields", &self.fields)
            .field("sinks", &self.sink_count())
            .finish()
    }
}
