//! Raw sink: fully structured records as single-line JSON
//!
//! One JSON object per line (JSONL), compatible with log aggregation tools
//! like ELK, Loki, etc. This is also the engine default sink destination.

use crate::core::{LogRecord, RecordWriter, Result, TimestampFormat};
use std::io::Write;

pub struct RawWriter {
    out: Box<dyn Write + Send>,
    timestamp: TimestampFormat,
}

impl RawWriter {
    /// Create a raw writer over any destination
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out,
            timestamp: TimestampFormat::default(),
        }
    }

    /// Create a raw writer over standard output.
    ///
    /// The stdout handle is held for the writer's lifetime; there is no
    /// close path.
    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: TimestampFormat) -> Self {
        self.timestamp = timestamp;
        self
    }
}

impl RecordWriter for RawWriter {
    fn write_record(&mut self, record: &LogRecord) -> Result<()> {
        let json = serde_json::to_string(&record.to_json_value(&self.timestamp))?;
        writeln!(self.out, "{}", json)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "raw"
    }
}
