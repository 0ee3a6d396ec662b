//! Logger factories

pub mod console;
pub mod debug;
pub mod lambda;

pub use console::{console_sink, ConsoleLogger, ConsoleSettings};
pub use debug::{debug_sink, DebugLogger, DebugSettings};
pub use lambda::{context_serializer, error_serializer, Headers, LambdaContext, LambdaLogger};
