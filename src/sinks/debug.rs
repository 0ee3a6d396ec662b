//! Debug sink: source-location-aware colorized output
//!
//! Receives fully structured records and renders one colorized line per
//! record, with the caller's file path shortened against a base path.

use crate::core::{default_serializers, LogLevel, LogRecord, RecordWriter, Result, SerializerMap, TimestampFormat};
use colored::{Color, Colorize};
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct DebugWriter {
    out: Box<dyn Write + Send>,
    basepath: PathBuf,
}

impl DebugWriter {
    /// Create a debug writer over any destination.
    ///
    /// `basepath` should be the root folder of the project; displayed file
    /// paths are shortened against it. Color output is forced even when
    /// the destination is not a terminal.
    pub fn new(basepath: impl Into<PathBuf>, out: Box<dyn Write + Send>) -> Self {
        colored::control::set_override(true);
        Self {
            out,
            basepath: basepath.into(),
        }
    }

    /// Create a debug writer over standard output
    pub fn stdout(basepath: impl Into<PathBuf>) -> Self {
        Self::new(basepath, Box::new(std::io::stdout()))
    }

    /// The serializer table this writer's records are prepared with
    #[must_use]
    pub fn serializers() -> SerializerMap {
        default_serializers()
    }

    pub fn basepath(&self) -> &Path {
        &self.basepath
    }

    /// Shorten a file path by stripping the base path prefix
    fn shorten<'a>(&self, file: &'a str) -> &'a str {
        let path = Path::new(file);
        path.strip_prefix(&self.basepath)
            .ok()
            .and_then(|p| p.to_str())
            .unwrap_or(file)
    }

    /// Fixed color map: info is blue, error is bold red. Other levels stay
    /// uncolored.
    fn paint(level: LogLevel, text: String) -> String {
        match level {
            LogLevel::Info => text.color(Color::Blue).to_string(),
            LogLevel::Error => text.color(Color::Red).bold().to_string(),
            _ => text,
        }
    }

    fn format_line(&self, record: &LogRecord) -> String {
        let timestamp = TimestampFormat::TimeOnly.format(&record.timestamp);

        let location = record
            .source
            .as_ref()
            .map(|s| format!(" ({}:{})", self.shorten(&s.file), s.line))
            .unwrap_or_default();

        let body = Self::paint(
            record.level,
            format!("{:5} {}: {}", record.level.to_str(), record.name, record.message),
        );

        let mut line = format!("[{}] {}{}", timestamp, body, location);

        if !record.fields.is_empty() {
            let fields = record
                .fields
                .iter()
                .map(|(k, v)| match v {
                    Value::String(s) => format!("{}={}", k, s),
                    other => format!("{}={}", k, other),
                })
                .collect::<Vec<_>>()
                .join(" ");
            line.push(' ');
            line.push_str(&fields);
        }

        line
    }
}

impl RecordWriter for DebugWriter {
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
        "debug"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SourceLocation;
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
    fn test_basepath_shortening() {
        let writer = DebugWriter::new("/home/me/project", Box::new(std::io::sink()));
        assert_eq!(
            writer.shorten("/home/me/project/src/main.rs"),
            "src/main.rs"
        );
        // paths outside the basepath stay untouched
        assert_eq!(writer.shorten("/usr/lib/other.rs"), "/usr/lib/other.rs");
    }

    #[test]
    fn test_line_contains_shortened_location() {
        let buf = SharedBuf::default();
        let mut writer = DebugWriter::new("/app", Box::new(buf.clone()));

        let record = LogRecord::new("TestLog", LogLevel::Debug, "step".to_string())
            .with_source(SourceLocation {
                file: "/app/src/worker.rs".to_string(),
                line: 17,
            });
        writer.write_record(&record).unwrap();

        let contents = buf.contents();
        assert!(contents.contains("src/worker.rs:17"));
        assert!(!contents.contains("/app/src/worker.rs"));
    }

    #[test]
    fn test_info_and_error_are_colorized() {
        let buf = SharedBuf::default();
        let mut writer = DebugWriter::new(".", Box::new(buf.clone()));

        writer
            .write_record(&LogRecord::new("T", LogLevel::Info, "blue one".to_string()))
            .unwrap();
        writer
            .write_record(&LogRecord::new("T", LogLevel::Error, "red one".to_string()))
            .unwrap();
        writer
            .write_record(&LogRecord::new("T", LogLevel::Warn, "plain one".to_string()))
            .unwrap();

        let contents = buf.contents();
        let lines: Vec<&str> = contents.lines().collect();
        assert!(lines[0].contains("\x1b[34m"), "info line should be blue");
        assert!(lines[1].contains("\x1b[1;31m"), "error line should be bold red");
        assert!(!lines[2].contains("\x1b["), "warn line should be uncolored");
    }

    #[test]
    fn test_serializer_set_has_err() {
        assert!(DebugWriter::serializers().contains_key("err"));
    }
}
