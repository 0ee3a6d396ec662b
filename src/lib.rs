//! # Flowlog
//!
//! Structured logger factories for three contexts: human-readable console
//! output, source-location-aware debug output, and serverless request
//! handlers with flow-id correlation.
//!
//! ## Features
//!
//! - **Console**: pretty-printed or raw structured records on stdout
//! - **Debug**: colorized output with shortened source paths
//! - **Lambda**: every record carries the request's correlation ids
//! - **Independent Sinks**: each sink filters by its own severity threshold

pub mod core;
pub mod loggers;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        build_options, make_logger, LogLevel, LogRecord, Logger, LoggerError, LoggerOptions,
        RecordWriter, Result, SerializerMap, Sink, SourceLocation, TimestampFormat,
    };
    pub use crate::loggers::{
        console_sink, debug_sink, ConsoleLogger, ConsoleSettings, DebugLogger, DebugSettings,
        Headers, LambdaContext, LambdaLogger,
    };
    pub use crate::sinks::{DebugWriter, Mode, PrettyWriter, RawWriter};
}

pub use crate::core::{
    build_options, make_logger, resolve_level, LogLevel, LogRecord, Logger, LoggerError,
    LoggerOptions, RecordWriter, Result, SerializerMap, Sink, SourceLocation, TimestampFormat,
};
pub use crate::loggers::{
    console_sink, debug_sink, ConsoleLogger, ConsoleSettings, DebugLogger, DebugSettings, Headers,
    LambdaContext, LambdaLogger,
};
pub use crate::sinks::{DebugWriter, Mode, PrettyWriter, RawWriter};
