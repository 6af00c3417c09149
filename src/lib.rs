//! SWC Playground - versioned swc loading, configuration schema and transform adapter
//!
//! The playground UI picks an swc release, edits a configuration object and
//! asks for either transformed code or a parse tree. This crate:
//! - resolves a version to an engine (compiled-in, or the CDN build in the browser)
//! - describes and validates the configuration surface
//! - runs transform/parse and reports failures as plain strings

pub mod adapter;
pub mod builtin;
pub mod config;
pub mod engine;
pub mod loader;
#[cfg(target_arch = "wasm32")]
pub mod remote;
pub mod schema;
mod utils;

use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

pub use adapter::{describe_failure, parse, transform, ParserResult, TransformationResult};
pub use config::*;
pub use engine::{Ast, AstKind, Compiler, CompilerHandle, EngineError, TransformOutput};
pub use loader::{initial_version, module_url, LoadError, Loader, DEFAULT_VERSION};
pub use schema::{config_schema, validate_config, ConfigError};

/// Initialize the WASM module with panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    utils::set_panic_hook();
    utils::init_logging();
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// A loaded swc build, held by the UI per selected version
#[wasm_bindgen]
pub struct Swc {
    handle: CompilerHandle,
}

#[wasm_bindgen]
impl Swc {
    #[wasm_bindgen(getter)]
    pub fn version(&self) -> String {
        self.handle.version().to_string()
    }
}

/// Version named by the page's query string, or the default
#[wasm_bindgen(js_name = initialVersion)]
pub fn initial_version_js(search: &str) -> String {
    initial_version(search)
}

/// Load the swc build for `version`; rejects when it cannot be loaded
#[wasm_bindgen(js_name = loadSwc)]
pub async fn load_swc(version: String) -> Result<Swc, JsValue> {
    #[cfg(target_arch = "wasm32")]
    let handle = load_handle(&version).await?;
    #[cfg(not(target_arch = "wasm32"))]
    let handle = load_handle(&version).await.map_err(load_error)?;
    Ok(Swc { handle })
}

/// Engine for `version`: the registry first, then the CDN build.
#[cfg(target_arch = "wasm32")]
pub async fn load_handle(version: &str) -> Result<CompilerHandle, JsValue> {
    let loader = Loader::with_builtin();
    if loader.contains(version) {
        loader.load(version).map_err(load_error)
    } else {
        remote::load(version).await
    }
}

/// Engine for `version`. Outside the browser only the registry is consulted.
#[cfg(not(target_arch = "wasm32"))]
pub async fn load_handle(version: &str) -> Result<CompilerHandle, LoadError> {
    Loader::with_builtin().load(version)
}

fn load_error(err: LoadError) -> JsValue {
    JsError::new(&err.to_string()).into()
}

/// Transform `code`; returns `{ ok, val }` with the output or a failure message
#[wasm_bindgen(js_name = transform)]
pub fn transform_js(code: &str, config: JsValue, file_name: &str, swc: &Swc) -> JsValue {
    let result = config_from_js(config)
        .and_then(|config| adapter::transform(code, &config, file_name, &swc.handle));
    envelope(result)
}

/// Parse `code` with the configuration's parser section; returns `{ ok, val }`
#[wasm_bindgen(js_name = parse)]
pub fn parse_js(code: &str, config: JsValue, swc: &Swc) -> JsValue {
    let result = config_from_js(config).and_then(|config| adapter::parse(code, &config, &swc.handle));
    envelope(result)
}

/// JSON Schema of the configuration object
#[wasm_bindgen(js_name = configSchema)]
pub fn config_schema_js() -> JsValue {
    config_schema()
        .serialize(&Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

/// Validate a configuration object; returns `{ ok, val }`
#[wasm_bindgen(js_name = validateConfig)]
pub fn validate_config_js(config: JsValue) -> JsValue {
    envelope(config_from_js(config))
}

fn config_from_js(config: JsValue) -> Result<TransformConfig, String> {
    let value: serde_json::Value =
        serde_wasm_bindgen::from_value(config).map_err(|err| err.to_string())?;
    validate_config(&value).map_err(|err| err.to_string())
}

#[derive(Serialize)]
struct Envelope<T> {
    ok: bool,
    val: T,
}

fn envelope<T: Serialize>(result: Result<T, String>) -> JsValue {
    let serializer = Serializer::json_compatible();
    let value = match result {
        Ok(val) => Envelope { ok: true, val }.serialize(&serializer),
        Err(message) => Envelope { ok: false, val: message }.serialize(&serializer),
    };
    value.unwrap_or(JsValue::NULL)
}
