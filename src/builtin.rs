//! Compiled-in swc engine
//!
//! Wraps `swc_core::base::Compiler`, the same compiler `@swc/wasm-web`
//! exposes, so the playground can run one pinned release without fetching
//! anything. Options arrive as JSON and are deserialized by swc itself.
//!
//! Each call gets its own `SourceMap`, so a handle kept alive for a whole
//! editing session does not accumulate source files or byte offsets.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use anyhow::{anyhow, Context};
use serde_json::Value;
use swc_core::base::{
    config::{Options, ParseOptions},
    try_with_handler, Compiler as SwcCompiler, HandlerOpts,
};
use swc_core::common::{errors::ColorConfig, sync::Lrc, FileName, Globals, SourceMap, GLOBALS};

use crate::engine::{Ast, Compiler, EngineError, TransformOutput};

/// Release label of the swc build linked into this crate.
pub const ENGINE_VERSION: &str = "1.7.36";

/// The swc release linked into this crate, behind the [`Compiler`] surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCompiler;

impl BuiltinCompiler {
    /// Holds no state; every call starts a fresh compiler session.
    pub fn new() -> Self {
        Self
    }

    fn session() -> SwcCompiler {
        let cm: Lrc<SourceMap> = Default::default();
        SwcCompiler::new(cm)
    }

    fn handler_opts() -> HandlerOpts {
        HandlerOpts {
            color: ColorConfig::Never,
            skip_filename: false,
        }
    }
}

/// Reject option combinations swc panics on instead of reporting.
///
/// On `wasm32` a panic traps the whole instance, so these have to be caught
/// before the options reach the engine.
fn check_options(options: &Value) -> Result<(), EngineError> {
    let jsc = &options["jsc"];
    let has_paths = jsc["paths"]
        .as_object()
        .is_some_and(|paths| !paths.is_empty());
    if !has_paths {
        return Ok(());
    }

    let base_url = jsc["baseUrl"].as_str().unwrap_or_default();
    if Path::new(base_url).is_absolute() {
        return Ok(());
    }
    Err(anyhow!("`jsc.paths` requires an absolute `jsc.baseUrl`, got `{base_url}`").into())
}

impl Compiler for BuiltinCompiler {
    fn transform_sync(&self, code: &str, options: &Value) -> Result<TransformOutput, EngineError> {
        check_options(options)?;
        let mut opts: Options = serde_json::from_value(options.clone())
            .context("failed to parse options")?;
        // No filesystem: never look for .swcrc next to the input.
        opts.swcrc = false;

        let name = if opts.filename.is_empty() {
            FileName::Anon
        } else {
            FileName::Real(opts.filename.clone().into())
        };
        let compiler = Self::session();
        let fm = compiler.cm.new_source_file(Lrc::new(name), code.to_string());

        let output = catch_panic(|| {
            GLOBALS.set(&Globals::new(), || {
                try_with_handler(compiler.cm.clone(), Self::handler_opts(), |handler| {
                    compiler.process_js_file(fm, handler, &opts)
                })
            })
        })??;

        Ok(TransformOutput {
            code: output.code,
            map: output.map,
        })
    }

    fn parse_sync(&self, code: &str, options: &Value) -> Result<Ast, EngineError> {
        let opts: ParseOptions = serde_json::from_value(options.clone())
            .context("failed to parse options")?;

        let compiler = Self::session();
        let fm = compiler
            .cm
            .new_source_file(Lrc::new(FileName::Anon), code.to_string());

        let program = catch_panic(|| {
            GLOBALS.set(&Globals::new(), || {
                try_with_handler(compiler.cm.clone(), Self::handler_opts(), |handler| {
                    compiler
                        .parse_js(fm, handler, opts.target, opts.syntax, opts.is_module, None)
                        .context("failed to parse code")
                })
            })
        })??;

        Ok(serde_json::from_value(serde_json::to_value(&program)?)?)
    }
}

/// Run `op`, turning a panic into a failure signal. String payloads are
/// reported as text, anything else by its type.
///
/// Native targets only: `wasm32-unknown-unknown` aborts on panic, so there
/// [`check_options`] is what keeps known engine panics out.
fn catch_panic<T>(op: impl FnOnce() -> T) -> Result<T, EngineError> {
    panic::catch_unwind(AssertUnwindSafe(op)).map_err(|payload| {
        match payload.downcast::<String>() {
            Ok(text) => EngineError::Text(*text),
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(text) => EngineError::Text(text.to_string()),
                Err(_) => EngineError::Other(Box::new("Box<dyn Any>")),
            },
        }
    })
}
