//! Request-context logger factory
//!
//! Builds a logger for a serverless request handler whose every record
//! carries the request's correlation identifiers.

use crate::core::{std_error_fields, Logger, LoggerOptions, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Inbound request headers
pub type Headers = HashMap<String, String>;

/// The flow id of the request, which is written into the logs and passed
/// to called services. Helpful for operational troubleshooting and log
/// analysis: it supports traceability of requests and identifying request
/// flows through a system of many services.
pub const FLOW_ID_HEADER: &str = "X-Flow-ID";

/// Environment variable overriding the minimum level for lambda loggers
pub const LEVEL_ENV_VAR: &str = "LOG_LEVEL";

/// Read-only view of the invocation context supplied by the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LambdaContext {
    pub function_name: String,
    pub aws_request_id: String,
    #[serde(default)]
    pub function_version: String,
}

/// Context bound into every record of one request's logger
struct LoggedContext {
    function_name: String,
    flow_id: String,
    aws_request_id: String,
    function_version: String,
}

impl LoggedContext {
    fn derive(headers: &Headers, context: &LambdaContext) -> Self {
        let flow_id = headers
            .get(FLOW_ID_HEADER)
            .filter(|value| !value.is_empty())
            .cloned()
            .unwrap_or_else(|| context.aws_request_id.clone());

        Self {
            function_name: context.function_name.clone(),
            flow_id,
            aws_request_id: context.aws_request_id.clone(),
            function_version: context.function_version.clone(),
        }
    }
}

/// Strip logger back-references out of a logged context value.
///
/// Returns a shallow copy of the input with any `log` and `child` fields
/// removed; those hold logger handles that do not serialize.
pub fn context_serializer(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = map.clone();
            out.remove("log");
            out.remove("child");
            Value::Object(out)
        }
        other => other.clone(),
    }
}

/// Merge the standard error conversion with the error's own fields.
///
/// When the input is a structured object, its fields are kept alongside
/// the standard `name`/`message`/`stack` selection (standard fields win on
/// conflicts). Anything else gets the standard conversion unchanged.
pub fn error_serializer(value: &Value) -> Value {
    let standard = std_error_fields(value);

    if let (Value::Object(own), Value::Object(std_fields)) = (value, &standard) {
        let mut merged = own.clone();
        for (key, field) in std_fields.iter() {
            merged.insert(key.clone(), field.clone());
        }
        return Value::Object(merged);
    }

    standard
}

fn env_level() -> crate::core::LogLevel {
    std::env::var(LEVEL_ENV_VAR)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

fn logger_options(logged: LoggedContext) -> Result<LoggerOptions> {
    Ok(LoggerOptions::new(logged.function_name)?
        .level(env_level())
        .serializer("err", error_serializer)
        .serializer("error", error_serializer)
        .serializer("context", context_serializer)
        .field("flowId", logged.flow_id)
        .field("awsRequestId", logged.aws_request_id)
        .field("functionVersion", logged.function_version))
}

pub struct LambdaLogger;

impl LambdaLogger {
    /// Create a logger for one request.
    ///
    /// The flow id comes from the `X-Flow-ID` header when present and
    /// non-empty, falling back to the platform request id. No sink list is
    /// supplied, so the engine default sink applies.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use flowlog::loggers::lambda::{LambdaContext, LambdaLogger};
    /// use std::collections::HashMap;
    ///
    /// let headers = HashMap::from([("X-Flow-ID".to_string(), "abc-123".to_string())]);
    /// let context = LambdaContext {
    ///     function_name: "checkout".to_string(),
    ///     aws_request_id: "req-9".to_string(),
    ///     function_version: "7".to_string(),
    /// };
    ///
    /// let logger = LambdaLogger::create(&headers, &context).unwrap();
    /// logger.info("payment authorized");
    /// ```
    pub fn create(headers: &Headers, context: &LambdaContext) -> Result<Logger> {
        let options = logger_options(LoggedContext::derive(headers, context))?;
        Ok(Logger::from_options(options))
    }
}
