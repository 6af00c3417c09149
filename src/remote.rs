//! Browser-side loading of `@swc/wasm-web` builds from the CDN
//!
//! The module is pulled in with a dynamic `import()`, its default export is
//! awaited once as the initializer, and the module object then backs a
//! [`Compiler`] whose entry points are `transformSync` and `parseSync`.
//! Compiled for `wasm32` only.

use std::fmt;

use js_sys::{Function, Promise, Reflect};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::engine::{Ast, Compiler, CompilerHandle, EngineError, TransformOutput};
use crate::loader::module_url;

#[wasm_bindgen(inline_js = "
export function import_module(url) { return import(url); }
export function stringify(value) { return String(value); }
")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn import_module(url: &str) -> Result<Promise, JsValue>;

    fn stringify(value: &JsValue) -> String;
}

/// Fetch and initialize the CDN build of `version`.
///
/// Rejections from the import or the initializer are returned untouched.
pub async fn load(version: &str) -> Result<CompilerHandle, JsValue> {
    let url = module_url(version);
    tracing::info!(version, %url, "fetching swc");

    let module = JsFuture::from(import_module(&url)?).await?;
    let init: Function = Reflect::get(&module, &JsValue::from_str("default"))?.dyn_into()?;
    JsFuture::from(Promise::resolve(&init.call0(&JsValue::UNDEFINED)?)).await?;

    Ok(CompilerHandle::new(version, Box::new(RemoteCompiler { module })))
}

/// A CDN build, driven through its `transformSync`/`parseSync` exports.
pub struct RemoteCompiler {
    module: JsValue,
}

impl RemoteCompiler {
    fn call(&self, entry: &str, code: &str, options: &Value) -> Result<JsValue, EngineError> {
        let function: Function = Reflect::get(&self.module, &JsValue::from_str(entry))
            .and_then(|value| value.dyn_into::<Function>())
            .map_err(signal_from_js)?;
        let options = options
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|err| signal_from_js(err.into()))?;

        function
            .call2(&self.module, &JsValue::from_str(code), &options)
            .map_err(signal_from_js)
    }
}

impl Compiler for RemoteCompiler {
    fn transform_sync(&self, code: &str, options: &Value) -> Result<TransformOutput, EngineError> {
        let output = self.call("transformSync", code, options)?;
        serde_wasm_bindgen::from_value(output).map_err(|err| signal_from_js(err.into()))
    }

    fn parse_sync(&self, code: &str, options: &Value) -> Result<Ast, EngineError> {
        let ast = self.call("parseSync", code, options)?;
        serde_wasm_bindgen::from_value(ast).map_err(|err| signal_from_js(err.into()))
    }
}

/// Classify a thrown JS value.
pub fn signal_from_js(value: JsValue) -> EngineError {
    if let Some(text) = value.as_string() {
        return EngineError::Text(text);
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        let trace = Reflect::get(error, &JsValue::from_str("stack"))
            .ok()
            .and_then(|stack| stack.as_string())
            .unwrap_or_default();
        return EngineError::Exception {
            message: error.to_string().into(),
            trace,
        };
    }
    EngineError::Other(Box::new(JsDisplay(value)))
}

/// Renders a JS value the way `String(value)` does.
struct JsDisplay(JsValue);

impl fmt::Display for JsDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify(&self.0))
    }
}
