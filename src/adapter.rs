//! Transform and parse entry points
//!
//! Both calls hand the configuration to a loaded engine and fold whatever the
//! engine raises into a single failure string. Neither call panics or fills
//! in defaults; the configuration is forwarded as given.

use serde_json::Value;

use crate::config::TransformConfig;
use crate::engine::{Ast, CompilerHandle, EngineError, TransformOutput};

pub type TransformationResult = Result<TransformOutput, String>;

pub type ParserResult = Result<Ast, String>;

/// Transform `code` with the full configuration plus `filename`.
pub fn transform(
    code: &str,
    config: &TransformConfig,
    file_name: &str,
    handle: &CompilerHandle,
) -> TransformationResult {
    tracing::debug!(version = handle.version(), file_name, "transform");

    let options = transform_options(config, file_name).map_err(describe_failure)?;
    handle
        .engine()
        .transform_sync(code, &options)
        .map_err(describe_failure)
}

/// Parse `code` with the parser section of the configuration only.
pub fn parse(code: &str, config: &TransformConfig, handle: &CompilerHandle) -> ParserResult {
    let parser = config.parser();
    tracing::debug!(version = handle.version(), syntax = parser.syntax(), "parse");

    let options = serde_json::to_value(&parser)
        .map_err(EngineError::from)
        .map_err(describe_failure)?;
    handle
        .engine()
        .parse_sync(code, &options)
        .map_err(describe_failure)
}

fn transform_options(config: &TransformConfig, file_name: &str) -> Result<Value, EngineError> {
    let mut options = serde_json::to_value(config)?;
    if let Value::Object(map) = &mut options {
        map.insert("filename".to_string(), Value::String(file_name.to_string()));
    }
    Ok(options)
}

/// Single description of an engine failure, shared by transform and parse.
pub fn describe_failure(signal: EngineError) -> String {
    let description = match signal {
        EngineError::Text(text) => text,
        EngineError::Exception { message, trace } => format!("{message}\n\n{trace}"),
        EngineError::Other(value) => value.to_string(),
    };
    tracing::debug!(%description, "engine failure");
    description
}
