//! Browser tests, run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use serde_json::json;
use swc_playground::{adapter, remote, validate_config, Loader, DEFAULT_VERSION};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_builtin_transform_in_browser() {
    let handle = Loader::with_builtin().load(DEFAULT_VERSION).unwrap();
    let config = validate_config(&json!({ "jsc": { "parser": { "syntax": "typescript" } } })).unwrap();

    let output = adapter::transform("let a: number = 1", &config, "a.ts", &handle).unwrap();
    assert!(output.code.contains("a = 1"));
}

#[wasm_bindgen_test]
async fn test_missing_release_rejects() {
    let result = remote::load("0.0.0-does-not-exist").await;
    assert!(result.is_err());
}

#[wasm_bindgen_test]
fn test_js_signals_are_classified() {
    use swc_playground::EngineError;

    assert!(matches!(
        remote::signal_from_js(JsValue::from_str("boom")),
        EngineError::Text(text) if text == "boom"
    ));
    assert!(matches!(
        remote::signal_from_js(js_sys::Error::new("boom").into()),
        EngineError::Exception { message, .. } if message == "Error: boom"
    ));
    assert_eq!(
        adapter::describe_failure(remote::signal_from_js(JsValue::from_f64(42.0))),
        "42"
    );
}
