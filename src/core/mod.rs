//! Core logger types and traits

pub mod error;
pub mod level;
pub mod logger;
pub mod options;
pub mod record;
pub mod serializers;
pub mod sink;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use level::{resolve_level, LogLevel};
pub use logger::Logger;
pub use options::{build_options, make_logger, LoggerOptions};
pub use record::{LogRecord, SourceLocation};
pub use serializers::{default_serializers, std_error_fields, Serializer, SerializerMap};
pub use sink::{RecordWriter, Sink};
pub use timestamp::TimestampFormat;
