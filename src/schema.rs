//! JSON Schema of the swc configuration surface
//!
//! The document drives form generation in the playground UI. Object nodes
//! that list `properties` are closed (`additionalProperties: false`); the two
//! tagged unions (parser `syntax`, module `type`) are `anyOf` branches with a
//! required discriminant. `default` values are annotations only.
//!
//! Validation does not interpret the document: it deserializes into
//! [`TransformConfig`], whose types encode the same rules.

use std::sync::OnceLock;

use serde::Deserialize;
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::config::TransformConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Check a configuration value against the schema and return its typed form.
pub fn validate_config(value: &Value) -> Result<TransformConfig, ConfigError> {
    Ok(TransformConfig::deserialize(value)?)
}

/// The schema document, built once.
pub fn config_schema() -> &'static Value {
    static SCHEMA: OnceLock<Value> = OnceLock::new();
    SCHEMA.get_or_init(build_schema)
}

fn build_schema() -> Value {
    closed(vec![
        ("jsc", jsc_schema()),
        ("module", module_schema()),
        ("minify", boolean()),
        ("isModule", boolean()),
        (
            "sourceMaps",
            any_of(vec![boolean(), string_enum(&["inline"])]),
        ),
        ("inlineSourcesContent", boolean()),
        ("experimental", closed(Vec::new())),
    ])
}

// ── Node builders ─────────────────────────────────────────

fn boolean() -> Value {
    json!({ "type": "boolean" })
}

fn boolean_default(default: bool) -> Value {
    json!({ "type": "boolean", "default": default })
}

fn string() -> Value {
    json!({ "type": "string" })
}

fn string_enum(values: &[&str]) -> Value {
    json!({ "type": "string", "enum": values })
}

fn string_array() -> Value {
    json!({ "type": "array", "items": { "type": "string" } })
}

fn string_map() -> Value {
    json!({ "type": "object", "additionalProperties": { "type": "string" } })
}

/// Free-form object: any keys, any values.
fn open_object() -> Value {
    json!({ "type": "object" })
}

fn any_of(branches: Vec<Value>) -> Value {
    json!({ "anyOf": branches })
}

fn bool_or_level() -> Value {
    any_of(vec![
        boolean(),
        json!({ "type": "integer", "minimum": 0, "maximum": 255 }),
    ])
}

fn ecma_version() -> Value {
    any_of(vec![json!({ "type": "integer", "minimum": 0 }), string()])
}

/// Object node that only admits the listed properties, in order.
fn closed(properties: Vec<(&str, Value)>) -> Value {
    let properties: Map<String, Value> = properties
        .into_iter()
        .map(|(name, schema)| (name.to_string(), schema))
        .collect();
    json!({
        "type": "object",
        "properties": properties,
        "additionalProperties": false,
    })
}

fn with_required(mut node: Value, required: &[&str]) -> Value {
    if let Value::Object(map) = &mut node {
        map.insert("required".to_string(), json!(required));
    }
    node
}

// ── jsc ───────────────────────────────────────────────────

fn jsc_schema() -> Value {
    closed(vec![
        ("parser", parser_schema()),
        (
            "target",
            string_enum(&[
                "es5", "es2015", "es2016", "es2017", "es2018", "es2019", "es2020", "es2021",
            ]),
        ),
        ("loose", boolean()),
        ("minify", minify_schema()),
        ("transform", transform_schema()),
        ("externalHelpers", boolean_default(false)),
        ("keepClassNames", boolean_default(false)),
        ("baseUrl", string()),
        (
            "paths",
            json!({ "type": "object", "additionalProperties": string_array() }),
        ),
    ])
}

fn parser_schema() -> Value {
    let ecmascript = closed(vec![
        ("syntax", string_enum(&["ecmascript"])),
        ("jsx", boolean()),
        ("numericSeparator", boolean()),
        ("classPrivateProperty", boolean()),
        ("privateMethod", boolean()),
        ("classProperty", boolean()),
        ("functionBind", boolean()),
        ("decorators", boolean()),
        ("decoratorsBeforeExport", boolean()),
        ("exportDefaultFrom", boolean()),
        ("exportNamespaceFrom", boolean()),
        ("dynamicImport", boolean()),
        ("nullishCoalescing", boolean()),
        ("optionalChaining", boolean()),
        ("importMeta", boolean()),
        ("topLevelAwait", boolean()),
        ("importAssertions", boolean()),
        ("staticBlocks", boolean()),
        ("privateInObject", boolean()),
    ]);
    let typescript = closed(vec![
        ("syntax", string_enum(&["typescript"])),
        ("tsx", boolean()),
        ("decorators", boolean()),
        ("dynamicImport", boolean()),
        ("importAssertions", boolean()),
    ]);

    json!({
        "type": "object",
        "required": ["syntax"],
        "anyOf": [ecmascript, typescript],
    })
}

fn minify_schema() -> Value {
    closed(vec![
        ("compress", any_of(vec![boolean(), compress_schema()])),
        ("mangle", any_of(vec![boolean(), mangle_schema()])),
        ("format", open_object()),
        ("ecma", ecma_version()),
        ("keepClassnames", boolean()),
        ("keepFnames", boolean()),
        ("module", boolean()),
        ("safari10", boolean()),
        ("toplevel", boolean()),
        (
            "sourceMap",
            closed(vec![
                ("filename", string()),
                ("url", string()),
                ("root", string()),
                ("content", string()),
            ]),
        ),
        ("outputPath", string()),
        ("inlineSourcesContent", boolean_default(true)),
    ])
}

fn compress_schema() -> Value {
    closed(vec![
        ("arguments", boolean()),
        ("arrows", boolean()),
        ("booleans", boolean()),
        ("booleans_as_integers", boolean()),
        ("collapse_vars", boolean()),
        ("comparisons", boolean()),
        ("computed_props", boolean()),
        ("conditionals", boolean()),
        ("dead_code", boolean()),
        ("defaults", boolean_default(true)),
        ("directives", boolean()),
        ("drop_console", boolean()),
        ("drop_debugger", boolean()),
        ("ecma", ecma_version()),
        ("evaluate", boolean()),
        ("expression", boolean()),
        ("global_defs", open_object()),
        ("hoist_funs", boolean()),
        ("hoist_props", boolean()),
        ("hoist_vars", boolean()),
        ("ie8", boolean()),
        ("if_return", boolean()),
        ("inline", bool_or_level()),
        ("join_vars", boolean()),
        ("keep_classnames", boolean()),
        ("keep_fargs", boolean()),
        ("keep_fnames", boolean()),
        ("keep_infinity", boolean()),
        ("loops", boolean()),
        ("negate_iife", boolean()),
        ("passes", json!({ "type": "integer", "minimum": 0 })),
        ("properties", boolean()),
        (
            "pure_getters",
            any_of(vec![boolean(), string_enum(&["strict"]), string()]),
        ),
        ("pure_funcs", string_array()),
        ("reduce_funcs", boolean()),
        ("reduce_vars", boolean()),
        ("sequences", bool_or_level()),
        ("side_effects", boolean()),
        ("switches", boolean()),
        (
            "top_retain",
            any_of(vec![string_array(), string(), json!({ "type": "null" })]),
        ),
        ("toplevel", any_of(vec![boolean(), string()])),
        ("typeofs", boolean()),
        ("unsafe", boolean()),
        ("unsafe_arrows", boolean()),
        ("unsafe_comps", boolean()),
        ("unsafe_Function", boolean()),
        ("unsafe_math", boolean()),
        ("unsafe_symbols", boolean()),
        ("unsafe_methods", boolean()),
        ("unsafe_proto", boolean()),
        ("unsafe_regexp", boolean()),
        ("unsafe_undefined", boolean()),
        ("unused", boolean()),
        ("module", boolean()),
    ])
}

fn mangle_schema() -> Value {
    closed(vec![
        (
            "props",
            closed(vec![
                ("reserved", string_array()),
                ("undeclared", boolean()),
                ("regex", any_of(vec![json!({ "type": "null" }), string()])),
            ]),
        ),
        ("toplevel", boolean()),
        ("keep_classnames", boolean()),
        ("keep_fnames", boolean()),
        ("keep_private_props", boolean()),
        ("ie8", boolean()),
        ("safari10", boolean()),
    ])
}

fn transform_schema() -> Value {
    closed(vec![
        (
            "react",
            closed(vec![
                ("runtime", string_enum(&["automatic", "classic"])),
                ("importSource", string()),
                ("pragma", string()),
                ("pragmaFrag", string()),
                ("throwIfNamespace", boolean()),
                ("development", boolean()),
                ("useSpread", boolean()),
                (
                    "refresh",
                    closed(vec![
                        ("refreshReg", string()),
                        ("refreshSig", string()),
                        ("emitFullSignatures", boolean()),
                    ]),
                ),
            ]),
        ),
        (
            "constModules",
            closed(vec![(
                "globals",
                json!({ "type": "object", "additionalProperties": string_map() }),
            )]),
        ),
        (
            "optimizer",
            closed(vec![
                (
                    "globals",
                    closed(vec![
                        ("vars", string_map()),
                        ("envs", any_of(vec![string_array(), string_map()])),
                        ("typeofs", string_map()),
                    ]),
                ),
                ("simplify", boolean()),
                (
                    "jsonify",
                    closed(vec![(
                        "minCost",
                        json!({ "type": "integer", "default": 1024 }),
                    )]),
                ),
            ]),
        ),
        ("legacyDecorator", boolean()),
        ("decoratorMetadata", boolean()),
    ])
}

// ── module ────────────────────────────────────────────────

fn module_schema() -> Value {
    json!({
        "type": "object",
        "anyOf": [
            module_variant("es6", Vec::new()),
            module_variant("commonjs", Vec::new()),
            module_variant("amd", vec![("moduleId", string())]),
            module_variant("umd", vec![("globals", string_map())]),
        ],
    })
}

fn module_variant(kind: &str, extra: Vec<(&str, Value)>) -> Value {
    let mut properties = vec![("type", string_enum(&[kind]))];
    properties.extend(extra);
    properties.extend([
        ("strict", boolean_default(false)),
        ("strictMode", boolean_default(true)),
        ("lazy", boolean_default(false)),
        ("noInterop", boolean_default(false)),
    ]);
    with_required(closed(properties), &["type"])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Visit every schema node together with its JSON-pointer-ish path.
    fn walk<'a>(node: &'a Value, path: String, visit: &mut dyn FnMut(&str, &'a Value)) {
        visit(&path, node);
        if let Some(properties) = node.get("properties").and_then(Value::as_object) {
            for (name, child) in properties {
                walk(child, format!("{path}/{name}"), visit);
            }
        }
        if let Some(branches) = node.get("anyOf").and_then(Value::as_array) {
            for (i, child) in branches.iter().enumerate() {
                walk(child, format!("{path}|{i}"), visit);
            }
        }
        for key in ["items", "additionalProperties"] {
            if let Some(child) = node.get(key).filter(|v| v.is_object()) {
                walk(child, format!("{path}/{key}"), visit);
            }
        }
    }

    /// True when every object key of `value` is declared by `node`.
    fn declares(node: &Value, value: &Value) -> bool {
        if let Some(branches) = node.get("anyOf").and_then(Value::as_array) {
            return branches.iter().any(|branch| declares(branch, value));
        }
        match value {
            Value::Object(map) => {
                if let Some(properties) = node.get("properties").and_then(Value::as_object) {
                    map.iter().all(|(key, child)| {
                        properties.get(key).is_some_and(|schema| declares(schema, child))
                    })
                } else {
                    node.get("type") == Some(&json!("object"))
                }
            }
            _ => true,
        }
    }

    #[test]
    fn test_every_declared_object_is_closed() {
        let mut open = Vec::new();
        walk(config_schema(), String::new(), &mut |path, node| {
            if node.get("properties").is_some()
                && node.get("additionalProperties") != Some(&Value::Bool(false))
            {
                open.push(path.to_string());
            }
        });
        assert!(open.is_empty(), "open object nodes: {open:?}");
    }

    #[test]
    fn test_tagged_unions_require_discriminant() {
        let schema = config_schema();
        let parser = &schema["properties"]["jsc"]["properties"]["parser"];
        assert_eq!(parser["required"], json!(["syntax"]));
        assert_eq!(parser["anyOf"].as_array().map(Vec::len), Some(2));

        let module = &schema["properties"]["module"];
        let kinds: Vec<&Value> = module["anyOf"]
            .as_array()
            .unwrap()
            .iter()
            .map(|branch| {
                assert_eq!(branch["required"], json!(["type"]));
                &branch["properties"]["type"]["enum"][0]
            })
            .collect();
        assert_eq!(kinds, [&json!("es6"), &json!("commonjs"), &json!("amd"), &json!("umd")]);
    }

    #[test]
    fn test_property_order_is_preserved() {
        let top: Vec<&String> = config_schema()["properties"]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(
            top,
            [
                "jsc",
                "module",
                "minify",
                "isModule",
                "sourceMaps",
                "inlineSourcesContent",
                "experimental"
            ]
        );
    }

    #[test]
    fn test_defaults_are_annotated() {
        let schema = config_schema();
        let compress = &schema["properties"]["jsc"]["properties"]["minify"]["properties"]
            ["compress"]["anyOf"][1];
        assert_eq!(compress["properties"]["defaults"]["default"], json!(true));
        let jsonify = &schema["properties"]["jsc"]["properties"]["transform"]["properties"]
            ["optimizer"]["properties"]["jsonify"];
        assert_eq!(jsonify["properties"]["minCost"]["default"], json!(1024));
    }

    #[test]
    fn test_validate_accepts_well_formed_config() {
        let config = validate_config(&json!({
            "jsc": {
                "parser": { "syntax": "ecmascript", "jsx": true },
                "target": "es2020",
                "transform": { "react": { "runtime": "automatic" } }
            },
            "module": { "type": "amd", "moduleId": "app" },
            "minify": false
        }))
        .unwrap();
        assert_eq!(config.minify, Some(false));
    }

    /// Smallest instance of a closed node: only its single-valued
    /// discriminants (`syntax`, `type`) are set.
    fn minimal(node: &Value) -> Map<String, Value> {
        let mut instance = Map::new();
        if let Some(properties) = node.get("properties").and_then(Value::as_object) {
            for (name, schema) in properties {
                let values = schema.get("enum").and_then(Value::as_array);
                if let Some([only]) = values.map(Vec::as_slice) {
                    instance.insert(name.clone(), only.clone());
                }
            }
        }
        instance
    }

    /// For every closed object node reachable from `node`, an instance of
    /// `node` that reaches it and carries the `extra` entries there.
    fn instances(
        node: &Value,
        path: &str,
        extra: &Map<String, Value>,
        out: &mut Vec<(String, Value)>,
    ) {
        if let Some(branches) = node.get("anyOf").and_then(Value::as_array) {
            for (i, branch) in branches.iter().enumerate() {
                instances(branch, &format!("{path}|{i}"), extra, out);
            }
        }
        let Some(properties) = node.get("properties").and_then(Value::as_object) else {
            return;
        };

        let base = minimal(node);
        let mut here = base.clone();
        here.extend(extra.clone());
        out.push((path.to_string(), Value::Object(here)));

        for (name, child) in properties {
            let mut nested = Vec::new();
            instances(child, &format!("{path}/{name}"), extra, &mut nested);
            for (child_path, value) in nested {
                let mut instance = base.clone();
                instance.insert(name.clone(), value);
                out.push((child_path, Value::Object(instance)));
            }
        }
    }

    #[test]
    fn test_minimal_instances_validate() {
        let mut cases = Vec::new();
        instances(config_schema(), "", &Map::new(), &mut cases);
        for (path, case) in &cases {
            assert!(validate_config(case).is_ok(), "rejected minimal instance at {path}: {case}");
        }
    }

    #[test]
    fn test_validate_rejects_unknown_fields_at_every_level() {
        let mut unknown = Map::new();
        unknown.insert("unknown".to_string(), json!(true));
        let mut cases = Vec::new();
        instances(config_schema(), "", &unknown, &mut cases);

        let mut closed = 0;
        walk(config_schema(), String::new(), &mut |_, node| {
            if node.get("additionalProperties") == Some(&Value::Bool(false)) {
                closed += 1;
            }
        });
        assert_eq!(cases.len(), closed, "every closed node gets one case");

        let paths: Vec<&str> = cases.iter().map(|(path, _)| path.as_str()).collect();
        for expected in [
            "/jsc/minify",
            "/jsc/minify/mangle|1",
            "/jsc/transform",
            "/jsc/transform/react",
            "/jsc/transform/optimizer",
            "/jsc/transform/optimizer/globals",
            "/jsc/parser|1",
            "/module|1",
            "/module|2",
            "/module|3",
            "/experimental",
        ] {
            assert!(paths.contains(&expected), "no case for {expected}: {paths:?}");
        }

        for (path, case) in &cases {
            assert!(validate_config(case).is_err(), "accepted unknown key at {path}: {case}");
        }
    }

    #[test]
    fn test_validate_rejects_mixed_parser_dialects() {
        let es_with_ts_field =
            json!({ "jsc": { "parser": { "syntax": "ecmascript", "tsx": true } } });
        let ts_with_es_field =
            json!({ "jsc": { "parser": { "syntax": "typescript", "jsx": true } } });
        let missing_syntax = json!({ "jsc": { "parser": { "decorators": true } } });

        assert!(validate_config(&es_with_ts_field).is_err());
        assert!(validate_config(&ts_with_es_field).is_err());
        assert!(validate_config(&missing_syntax).is_err());
    }

    #[test]
    fn test_validate_rejects_module_type_mismatch() {
        assert!(validate_config(&json!({ "module": { "type": "commonjs", "moduleId": "x" } })).is_err());
        assert!(validate_config(&json!({ "module": { "type": "amd", "globals": {} } })).is_err());
        assert!(validate_config(&json!({ "module": { "type": "systemjs" } })).is_err());
        assert!(validate_config(&json!({ "module": { "strict": true } })).is_err());
    }

    #[test]
    fn test_typed_model_matches_schema() {
        let full = json!({
            "jsc": {
                "parser": { "syntax": "ecmascript", "jsx": true, "privateInObject": true },
                "target": "es2021",
                "loose": true,
                "minify": {
                    "compress": {
                        "defaults": true, "inline": 2, "passes": 3, "pure_getters": "strict",
                        "top_retain": "keep", "global_defs": { "DEBUG": false },
                        "unsafe_Function": true, "module": true
                    },
                    "mangle": {
                        "props": { "reserved": ["a"], "undeclared": true, "regex": "^_" },
                        "keep_private_props": true
                    },
                    "format": { "comments": false },
                    "ecma": "es2020",
                    "sourceMap": { "filename": "a.js", "url": "a.js.map" },
                    "outputPath": "dist",
                    "inlineSourcesContent": true
                },
                "transform": {
                    "react": {
                        "runtime": "classic", "pragma": "h", "useSpread": true,
                        "refresh": { "refreshReg": "$RefreshReg$", "emitFullSignatures": true }
                    },
                    "constModules": { "globals": { "@flags": { "DEBUG": "true" } } },
                    "optimizer": {
                        "globals": { "vars": { "__X__": "1" }, "envs": ["NODE_ENV"], "typeofs": { "window": "object" } },
                        "simplify": true,
                        "jsonify": { "minCost": 10 }
                    },
                    "legacyDecorator": true,
                    "decoratorMetadata": true
                },
                "externalHelpers": false,
                "keepClassNames": true,
                "baseUrl": ".",
                "paths": { "@/*": ["src/*"] }
            },
            "module": { "type": "umd", "globals": { "react": "React" }, "strictMode": true, "noInterop": false },
            "minify": true,
            "isModule": true,
            "sourceMaps": true,
            "inlineSourcesContent": false,
            "experimental": {}
        });

        let config = validate_config(&full).unwrap();
        let serialized = serde_json::to_value(&config).unwrap();
        assert_eq!(serialized, full);
        assert!(declares(config_schema(), &serialized));
    }
}
