//! The capability surface of one loaded swc build
//!
//! An engine exposes exactly two synchronous entry points, `transform_sync`
//! and `parse_sync`, both taking the engine-facing JSON options. Whatever the
//! engine raises on failure is reported as an [`EngineError`] signal and left
//! for the adapter to describe.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Output of a successful transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformOutput {
    pub code: String,
    /// Source map as JSON text, when one was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
}

/// Top-level form of a parsed program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AstKind {
    Module,
    Script,
}

/// Parsed syntax tree. Only the discriminant is typed; `body` and the
/// remaining fields (`span`, `interpreter`, ...) pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ast {
    #[serde(rename = "type")]
    pub kind: AstKind,
    pub body: Value,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// Failure signal raised by an engine entry point.
pub enum EngineError {
    /// A bare string was thrown.
    Text(String),
    /// An error object with a diagnostic trace.
    Exception { message: String, trace: String },
    /// Anything else; described by its string conversion.
    Other(Box<dyn fmt::Display>),
}

impl fmt::Debug for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Text(text) => f.debug_tuple("Text").field(text).finish(),
            EngineError::Exception { message, trace } => f
                .debug_struct("Exception")
                .field("message", message)
                .field("trace", trace)
                .finish(),
            EngineError::Other(value) => f.debug_tuple("Other").field(&value.to_string()).finish(),
        }
    }
}

impl From<anyhow::Error> for EngineError {
    fn from(err: anyhow::Error) -> Self {
        EngineError::Exception {
            message: err.to_string(),
            trace: format!("{err:?}"),
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        anyhow::Error::from(err).into()
    }
}

/// One initialized swc build.
pub trait Compiler {
    /// Compile `code` with the engine's transform options.
    fn transform_sync(&self, code: &str, options: &Value) -> Result<TransformOutput, EngineError>;

    /// Parse `code` with the engine's parser options.
    fn parse_sync(&self, code: &str, options: &Value) -> Result<Ast, EngineError>;
}

/// Opaque handle to a loaded engine, pinned to the version it was loaded for.
pub struct CompilerHandle {
    version: String,
    engine: Box<dyn Compiler>,
}

impl CompilerHandle {
    /// Wrap an initialized engine loaded for `version`.
    pub fn new(version: impl Into<String>, engine: Box<dyn Compiler>) -> Self {
        Self {
            version: version.into(),
            engine,
        }
    }

    /// The version this handle was loaded for.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub(crate) fn engine(&self) -> &dyn Compiler {
        self.engine.as_ref()
    }
}

impl fmt::Debug for CompilerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompilerHandle")
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ast_keeps_unknown_fields() {
        let raw = json!({
            "type": "Script",
            "span": { "start": 0, "end": 5, "ctxt": 0 },
            "body": [],
            "interpreter": null
        });
        let ast: Ast = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(ast.kind, AstKind::Script);
        assert_eq!(serde_json::to_value(&ast).unwrap(), raw);
    }

    #[test]
    fn test_ast_rejects_unknown_discriminant() {
        let raw = json!({ "type": "Expression", "body": [] });
        assert!(serde_json::from_value::<Ast>(raw).is_err());
    }

    #[test]
    fn test_anyhow_error_becomes_exception() {
        let err = anyhow::anyhow!("root cause").context("failed to process input file");
        match EngineError::from(err) {
            EngineError::Exception { message, trace } => {
                assert_eq!(message, "failed to process input file");
                assert!(trace.contains("root cause"));
            }
            other => panic!("unexpected signal {other:?}"),
        }
    }
}
