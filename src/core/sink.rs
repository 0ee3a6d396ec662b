//! Sink: a severity threshold paired with a record destination

use super::{error::Result, level::LogLevel, record::LogRecord};

/// Destination for emitted log records
pub trait RecordWriter: Send {
    fn write_record(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// A (threshold, destination) pair.
///
/// Each sink filters independently: raising one sink's threshold never
/// affects another's filtering.
pub struct Sink {
    level: LogLevel,
    writer: Box<dyn RecordWriter>,
}

impl Sink {
    pub fn new(level: LogLevel, writer: Box<dyn RecordWriter>) -> Self {
        Self { level, writer }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn writer_name(&self) -> &str {
        self.writer.name()
    }

    /// Whether this sink's threshold admits the given level
    pub fn accepts(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    pub(crate) fn write_record(&mut self, record: &LogRecord) -> Result<()> {
        self.writer.write_record(record)
    }

    pub(crate) fn flush(&mut self) -> Result<()> {
        self.writer.flush()
    }
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sink")
            .field("level", &self.level)
            .field("writer", &self.writer.name())
            .finish()
    }
}
