//! Console logger factory
//!
//! Human-readable output to standard output, or fully structured records
//! when the raw mode is selected.

use crate::core::{
    build_options, default_serializers, resolve_level, LogLevel, Logger, Result, Sink,
};
use crate::sinks::{Mode, PrettyWriter, RawWriter};

/// Settings for [`ConsoleLogger::create`] and [`console_sink`]
#[derive(Debug, Clone, Default)]
pub struct ConsoleSettings {
    /// Minimum severity, INFO when unset
    pub level: Option<LogLevel>,
    /// Formatting style, short when unset
    pub mode: Option<Mode>,
}

/// Build a console sink from optional settings.
///
/// Raw mode writes structured records straight to standard output; every
/// other mode goes through a pretty writer piped to standard output for the
/// life of the process.
pub fn console_sink(settings: Option<&ConsoleSettings>) -> Sink {
    let default_settings = ConsoleSettings::default();
    let settings = settings.unwrap_or(&default_settings);
    let level = resolve_level(settings.level);

    if settings.mode == Some(Mode::Raw) {
        return Sink::new(level, Box::new(RawWriter::stdout()));
    }

    let mode = settings.mode.unwrap_or_default();
    Sink::new(level, Box::new(PrettyWriter::stdout(mode)))
}

pub struct ConsoleLogger;

impl ConsoleLogger {
    /// Create a console logger.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use flowlog::loggers::console::{ConsoleLogger, ConsoleSettings};
    /// use flowlog::sinks::Mode;
    ///
    /// let logger = ConsoleLogger::create(
    ///     "api",
    ///     Some(ConsoleSettings {
    ///         mode: Some(Mode::Long),
    ///         ..Default::default()
    ///     }),
    /// ).unwrap();
    /// logger.info("server started");
    /// ```
    pub fn create(name: &str, settings: Option<ConsoleSettings>) -> Result<Logger> {
        let sink = console_sink(settings.as_ref());
        let options = build_options(name, vec![sink], default_serializers())?;
        Ok(Logger::from_options(options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_info_and_short() {
        let sink = console_sink(None);
        assert_eq!(sink.level(), LogLevel::Info);
        assert_eq!(sink.writer_name(), "pretty:short");
    }

    #[test]
    fn test_raw_mode_skips_pretty_writer() {
        let settings = ConsoleSettings {
            level: Some(LogLevel::Warn),
            mode: Some(Mode::Raw),
        };
        let sink = console_sink(Some(&settings));
        assert_eq!(sink.level(), LogLevel::Warn);
        assert_eq!(sink.writer_name(), "raw");
    }

    #[test]
    fn test_explicit_mode_and_level() {
        let settings = ConsoleSettings {
            level: Some(LogLevel::Trace),
            mode: Some(Mode::Dev),
        };
        let sink = console_sink(Some(&settings));
        assert_eq!(sink.level(), LogLevel::Trace);
        assert_eq!(sink.writer_name(), "pretty:dev");
    }

    #[test]
    fn test_create_rejects_empty_name() {
        assert!(ConsoleLogger::create("", None).is_err());
    }

    #[test]
    fn test_create_has_one_sink() {
        let logger = ConsoleLogger::create("TestLog", None).unwrap();
        assert_eq!(logger.name(), "TestLog");
        assert_eq!(logger.sink_count(), 1);
    }
}
