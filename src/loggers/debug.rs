//! Debug logger factory
//!
//! Source-location-aware colorized output for local development.

use crate::core::{build_options, resolve_level, LogLevel, Logger, Result, Sink};
use crate::sinks::{DebugWriter, Mode};
use std::path::PathBuf;

/// Settings for [`DebugLogger::create`] and [`debug_sink`]
#[derive(Debug, Clone, Default)]
pub struct DebugSettings {
    /// Minimum severity, INFO when unset
    pub level: Option<LogLevel>,
    /// Accepted for settings parity with the console factory; the debug
    /// stream's layout is fixed
    pub mode: Option<Mode>,
    /// Root folder of the project, used to shorten displayed file paths.
    /// Defaults to the current working directory.
    pub basepath: Option<PathBuf>,
}

fn basepath(settings: &DebugSettings) -> PathBuf {
    settings
        .basepath
        .clone()
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Build a debug sink from optional settings.
///
/// The sink consumes structured records directly (no pre-serialized text)
/// and renders them with forced colors.
pub fn debug_sink(settings: Option<&DebugSettings>) -> Sink {
    let default_settings = DebugSettings::default();
    let settings = settings.unwrap_or(&default_settings);

    Sink::new(
        resolve_level(settings.level),
        Box::new(DebugWriter::stdout(basepath(settings))),
    )
}

pub struct DebugLogger;

impl DebugLogger {
    /// Create a debug logger.
    ///
    /// Options go through the shared builder with the debug writer's own
    /// serializer set.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use flowlog::loggers::debug::{DebugLogger, DebugSettings};
    ///
    /// let logger = DebugLogger::create(
    ///     "worker",
    ///     Some(DebugSettings {
    ///         basepath: Some("/home/me/project".into()),
    ///         ..Default::default()
    ///     }),
    /// ).unwrap();
    /// logger.debug("cache warmed");
    /// ```
    pub fn create(name: &str, settings: Option<DebugSettings>) -> Result<Logger> {
        let sink = debug_sink(settings.as_ref());
        let options = build_options(name, vec![sink], DebugWriter::serializers())?;
        Ok(Logger::from_options(options))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_info() {
        let sink = debug_sink(None);
        assert_eq!(sink.level(), LogLevel::Info);
        assert_eq!(sink.writer_name(), "debug");
    }

    #[test]
    fn test_explicit_level() {
        let settings = DebugSettings {
            level: Some(LogLevel::Trace),
            ..Default::default()
        };
        let sink = debug_sink(Some(&settings));
        assert_eq!(sink.level(), LogLevel::Trace);
    }

    #[test]
    fn test_basepath_defaults_to_cwd() {
        assert_eq!(basepath(&DebugSettings::default()), PathBuf::from("."));

        let settings = DebugSettings {
            basepath: Some("/srv/app".into()),
            ..Default::default()
        };
        assert_eq!(basepath(&settings), PathBuf::from("/srv/app"));
    }

    #[test]
    fn test_create_rejects_empty_name() {
        assert!(DebugLogger::create("", None).is_err());
    }

    #[test]
    fn test_create_has_one_sink() {
        let logger = DebugLogger::create("TestLog", None).unwrap();
        assert_eq!(logger.sink_count(), 1);
    }
}
