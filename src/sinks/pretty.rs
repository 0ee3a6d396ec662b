//! Pretty sink: human-readable console formatting

use crate::core::{LogRecord, RecordWriter, Result, TimestampFormat};
use colored::Colorize;
use serde_json::Value;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Console formatting style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Time-of-day prefix, one line per record (default)
    #[default]
    Short,
    /// Full ISO 8601 timestamp prefix
    Long,
    /// Short layout with the level colorized
    Dev,
    /// Structured records, no formatting — handled by the raw sink, the
    /// console factory never builds a `PrettyWriter` with it
    Raw,
}

impl Mode {
    pub fn to_str(&self) -> &'static str {
        match self {
            Mode::Short => "short",
            Mode::Long => "long",
            Mode::Dev => "dev",
            Mode::Raw => "raw",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(Mode::Short),
            "long" => Ok(Mode::Long),
            "dev" => Ok(Mode::Dev),
            "raw" => Ok(Mode::Raw),
            _ => Err(format!("Invalid console mode: '{}'", s)),
        }
    }
}

pub struct PrettyWriter {
    out: Box<dyn Write + Send>,
    mode: Mode,
    name: String,
}

impl PrettyWriter {
    pub fn new(mode: Mode, out: Box<dyn Write + Send>) -> Self {
        Self {
            out,
            mode,
            name: format!("pretty:{}", mode),
        }
    }

    /// Create a pretty writer over standard output.
    ///
    /// The stdout handle is held for the writer's lifetime; there is no
    /// close path.
    pub fn stdout(mode: Mode) -> Self {
        Self::new(mode, Box::new(std::io::stdout()))
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    fn format_line(&self, record: &LogRecord) -> String {
        let timestamp = match self.mode {
            Mode::Short | Mode::Dev => TimestampFormat::TimeOnly.format(&record.timestamp),
            Mode::Long | Mode::Raw => TimestampFormat::Iso8601.format(&record.timestamp),
        };

        let level = if self.mode == Mode::Dev {
            format!("{:5}", record.level.to_str())
                .color(record.level.color_code())
                .to_string()
        } else {
            format!("{:5}", record.level.to_str())
        };

        let mut line = format!(
            "[{}] {} {}: {}",
            timestamp, level, record.name, record.message
        );

        if !record.fields.is_empty() {
            line.push(' ');
            line.push_str(&format_fields(record));
        }

        if let Some(ref source) = record.source {
            if self.mode == Mode::Long {
                line.push_str(&format!(" ({}:{})", source.file, source.line));
            }
        }

        line
    }
}

/// Format record fields as key=value pairs
fn format_fields(record: &LogRecord) -> String {
    record
        .fields
        .iter()
        .map(|(k, v)| match v {
            Value::String(s) => format!("{}={}", k, s),
            other => format!("{}={}", k, other),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl RecordWriter for PrettyWriter {
    fn write_record(&mut self, record: &LogRecord) -> Result<()> {
        let line = self.format_line(record);
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("short".parse::<Mode>(), Ok(Mode::Short));
        assert_eq!("LONG".parse::<Mode>(), Ok(Mode::Long));
        assert_eq!("dev".parse::<Mode>(), Ok(Mode::Dev));
        assert_eq!("raw".parse::<Mode>(), Ok(Mode::Raw));
        assert!("verbose".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mode_default_is_short() {
        assert_eq!(Mode::default(), Mode::Short);
    }

    #[test]
    fn test_short_line_contains_level_name_message() {
        let buf = SharedBuf::default();
        let mut writer = PrettyWriter::new(Mode::Short, Box::new(buf.clone()));

        let record = LogRecord::new("TestLog", LogLevel::Info, "hello there".to_string());
        writer.write_record(&record).unwrap();

        let contents = buf.contents();
        assert!(contents.contains("INFO"));
        assert!(contents.contains("TestLog"));
        assert!(contents.contains("hello there"));
        // short mode drops the date
        assert!(!contents.contains(&record.timestamp.format("%Y-").to_string()));
    }

    #[test]
    fn test_long_line_has_full_timestamp() {
        let buf = SharedBuf::default();
        let mut writer = PrettyWriter::new(Mode::Long, Box::new(buf.clone()));

        let record = LogRecord::new("TestLog", LogLevel::Warn, "careful".to_string());
        writer.write_record(&record).unwrap();

        let contents = buf.contents();
        assert!(contents.contains("WARN"));
        assert!(contents.contains(&record.timestamp.format("%Y-%m-%dT").to_string()));
    }

    #[test]
    fn test_fields_rendered_as_pairs() {
        let buf = SharedBuf::default();
        let mut writer = PrettyWriter::new(Mode::Short, Box::new(buf.clone()));

        let mut fields = serde_json::Map::new();
        fields.insert("flowId".to_string(), serde_json::json!("abc"));
        fields.insert("attempt".to_string(), serde_json::json!(2));

        let record = LogRecord::new("TestLog", LogLevel::Info, "retrying".to_string())
            .with_fields(fields);
        writer.write_record(&record).unwrap();

        let contents = buf.contents();
        assert!(contents.contains("flowId=abc"));
        assert!(contents.contains("attempt=2"));
    }

    #[test]
    fn test_writer_name_includes_mode() {
        let writer = PrettyWriter::new(Mode::Dev, Box::new(std::io::sink()));
        assert_eq!(writer.name, "pretty:dev");
    }
}
