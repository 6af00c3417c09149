//! Typed model of the swc configuration surface
//!
//! Mirrors the object passed to `transformSync`:
//! - `jsc.parser` is tagged by `syntax` (ecmascript / typescript)
//! - `module` is tagged by `type` (es6 / commonjs / amd / umd)
//! - every struct rejects fields it does not declare
//!
//! Fields are optional and serialized only when present, so a parsed
//! configuration is forwarded to the engine exactly as it was written.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level options object handed to the transform entry point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TransformConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsc: Option<JscConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minify: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_module: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_maps: Option<SourceMapsOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_sources_content: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experimental: Option<ExperimentalConfig>,
}

impl TransformConfig {
    /// Parse a configuration from JSON text, rejecting undeclared fields.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// The parser section, or the engine's default (plain ecmascript).
    pub fn parser(&self) -> ParserConfig {
        self.jsc
            .as_ref()
            .and_then(|jsc| jsc.parser.clone())
            .unwrap_or_default()
    }
}

/// The `jsc` section: parser, target, minifier and transform settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JscConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<ParserConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<EsTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loose: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minify: Option<JsMinifyOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<TransformOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_helpers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_class_names: Option<bool>,
    /// Directory `paths` are resolved against; must be absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Import aliases, pattern → candidate locations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paths: Option<BTreeMap<String, Vec<String>>>,
}

// ── Parser ────────────────────────────────────────────────

/// Parser syntax; exactly one dialect is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "syntax", rename_all = "lowercase")]
pub enum ParserConfig {
    Ecmascript(EsParserConfig),
    Typescript(TsParserConfig),
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig::Ecmascript(EsParserConfig::default())
    }
}

impl ParserConfig {
    /// The `syntax` discriminant.
    pub fn syntax(&self) -> &'static str {
        match self {
            ParserConfig::Ecmascript(_) => "ecmascript",
            ParserConfig::Typescript(_) => "typescript",
        }
    }
}

/// Syntax switches of the ecmascript parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EsParserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsx: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_separator: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_private_property: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_method: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_property: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_bind: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decorators: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decorators_before_export: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_default_from: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_namespace_from: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_import: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullish_coalescing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional_chaining: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_meta: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_level_await: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_assertions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_blocks: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_in_object: Option<bool>,
}

/// Syntax switches of the typescript parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TsParserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tsx: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decorators: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_import: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_assertions: Option<bool>,
}

/// Output language level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EsTarget {
    Es5,
    Es2015,
    Es2016,
    Es2017,
    Es2018,
    Es2019,
    Es2020,
    Es2021,
}

// ── Union-valued fields ───────────────────────────────────

/// `true`/`false`, or a full options object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoolOr<T> {
    Bool(bool),
    Options(T),
}

/// ECMAScript edition as a number (`2020`) or a name (`"es2020"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EcmaVersion {
    Number(u32),
    Name(String),
}

/// Boolean switch or a level in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoolOrLevel {
    Bool(bool),
    Level(u8),
}

/// Boolean switch or a named mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoolOrString {
    Bool(bool),
    String(String),
}

/// One name or a list of names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    List(Vec<String>),
    Single(String),
}

/// `sourceMaps`: on/off, or `"inline"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceMapsOption {
    Bool(bool),
    Inline(InlineSourceMap),
}

/// The literal `"inline"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineSourceMap {
    #[serde(rename = "inline")]
    Inline,
}

// ── Minifier ──────────────────────────────────────────────

/// The `jsc.minify` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JsMinifyOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compress: Option<BoolOr<CompressOptions>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mangle: Option<BoolOr<MangleOptions>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecma: Option<EcmaVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_classnames: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_fnames: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safari10: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toplevel: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_map: Option<MinifySourceMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_sources_content: Option<bool>,
}

/// Source map emitted by the minifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MinifySourceMap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Terser-compatible compress options; keys keep their snake_case spelling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompressOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrows: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booleans: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booleans_as_integers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapse_vars: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparisons: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed_props: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditionals: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dead_code: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directives: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_console: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_debugger: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecma: Option<EcmaVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluate: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_defs: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hoist_funs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hoist_props: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hoist_vars: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ie8: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub if_return: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<BoolOrLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_vars: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_classnames: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_fargs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_fnames: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_infinity: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loops: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negate_iife: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pure_getters: Option<BoolOrString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pure_funcs: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduce_funcs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reduce_vars: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequences: Option<BoolOrLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_effects: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switches: Option<bool>,
    /// `null` is accepted and treated as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_retain: Option<StringOrList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toplevel: Option<BoolOrString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typeofs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#unsafe: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsafe_arrows: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsafe_comps: Option<bool>,
    #[serde(
        rename = "unsafe_Function",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub unsafe_function: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsafe_math: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsafe_symbols: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsafe_methods: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsafe_proto: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsafe_regexp: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsafe_undefined: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unused: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<bool>,
}

/// Name mangling options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MangleOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<MangleProps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toplevel: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_classnames: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_fnames: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_private_props: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ie8: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safari10: Option<bool>,
}

/// Property mangling; `regex` limits which names are touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MangleProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub undeclared: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
}

// ── Transforms ────────────────────────────────────────────

/// The `jsc.transform` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TransformOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub react: Option<ReactConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub const_modules: Option<ConstModulesConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimizer: Option<OptimizerConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_decorator: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decorator_metadata: Option<bool>,
}

/// JSX lowering options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReactConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<ReactRuntime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pragma: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pragma_frag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throw_if_namespace: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub development: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_spread: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<RefreshConfig>,
}

/// JSX runtime: `automatic` imports helpers, `classic` calls the pragma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactRuntime {
    Automatic,
    Classic,
}

/// React refresh (fast refresh) registration hooks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RefreshConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_reg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_sig: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emit_full_signatures: Option<bool>,
}

/// `globals` maps a module specifier to its constant exports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstModulesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub globals: Option<BTreeMap<String, BTreeMap<String, String>>>,
}

/// Constant folding and inlining of known globals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptimizerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub globals: Option<GlobalsConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simplify: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsonify: Option<JsonifyConfig>,
}

/// Globals the optimizer may inline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vars: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envs: Option<EnvsOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typeofs: Option<BTreeMap<String, String>>,
}

/// Environment variables to inline: a list of names, or name → replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnvsOption {
    Names(Vec<String>),
    Values(BTreeMap<String, String>),
}

/// Turn large object literals into `JSON.parse` calls above `minCost`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JsonifyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_cost: Option<i64>,
}

// ── Module output ─────────────────────────────────────────

/// Module output format; the `type` field selects the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ModuleConfig {
    #[serde(rename = "es6")]
    Es6(CommonModuleConfig),
    #[serde(rename = "commonjs")]
    CommonJs(CommonModuleConfig),
    #[serde(rename = "amd")]
    Amd(AmdModuleConfig),
    #[serde(rename = "umd")]
    Umd(UmdModuleConfig),
}

impl ModuleConfig {
    /// The `type` discriminant.
    pub fn kind(&self) -> &'static str {
        match self {
            ModuleConfig::Es6(_) => "es6",
            ModuleConfig::CommonJs(_) => "commonjs",
            ModuleConfig::Amd(_) => "amd",
            ModuleConfig::Umd(_) => "umd",
        }
    }
}

/// Options shared by the `es6` and `commonjs` outputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommonModuleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lazy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_interop: Option<bool>,
}

/// AMD output; `moduleId` names the defined module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AmdModuleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lazy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_interop: Option<bool>,
}

/// UMD output; `globals` maps imports to global names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UmdModuleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub globals: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lazy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_interop: Option<bool>,
}

/// Reserved; no options are accepted yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperimentalConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_minimal_config() {
        let config = TransformConfig::from_json(
            r#"{"jsc":{"parser":{"syntax":"ecmascript"}},"module":{"type":"commonjs"}}"#,
        )
        .unwrap();

        assert_eq!(config.parser().syntax(), "ecmascript");
        assert_eq!(config.module.as_ref().map(ModuleConfig::kind), Some("commonjs"));
    }

    #[test]
    fn test_round_trip_preserves_given_fields_only() {
        let input = json!({
            "jsc": {
                "parser": { "syntax": "typescript", "tsx": true },
                "target": "es2019",
                "minify": { "compress": { "passes": 2, "unsafe": true, "unsafe_Function": false } }
            },
            "module": { "type": "umd", "globals": { "react": "React" } },
            "sourceMaps": "inline"
        });

        let config: TransformConfig = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(serde_json::to_value(&config).unwrap(), input);
    }

    #[test]
    fn test_defaults_are_not_filled_in() {
        let config: TransformConfig =
            serde_json::from_value(json!({ "module": { "type": "es6" } })).unwrap();
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({ "module": { "type": "es6" } })
        );
    }

    #[test]
    fn test_union_fields_keep_their_shape() {
        let compress: CompressOptions = serde_json::from_value(json!({
            "inline": 3,
            "sequences": true,
            "top_retain": ["a", "b"],
            "toplevel": "funcs",
            "pure_getters": "strict",
            "ecma": 2020
        }))
        .unwrap();

        assert_eq!(compress.inline, Some(BoolOrLevel::Level(3)));
        assert_eq!(compress.sequences, Some(BoolOrLevel::Bool(true)));
        assert_eq!(
            compress.top_retain,
            Some(StringOrList::List(vec!["a".into(), "b".into()]))
        );
        assert_eq!(compress.toplevel, Some(BoolOrString::String("funcs".into())));
        assert_eq!(compress.ecma, Some(EcmaVersion::Number(2020)));
    }

    #[test]
    fn test_level_out_of_range_rejected() {
        let result: Result<CompressOptions, _> = serde_json::from_value(json!({ "inline": 256 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_source_maps_only_accepts_inline_string() {
        let ok: TransformConfig = serde_json::from_value(json!({ "sourceMaps": "inline" })).unwrap();
        assert_eq!(
            ok.source_maps,
            Some(SourceMapsOption::Inline(InlineSourceMap::Inline))
        );

        let bad: Result<TransformConfig, _> =
            serde_json::from_value(json!({ "sourceMaps": "external" }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_missing_parser_defaults_to_ecmascript() {
        let config = TransformConfig::default();
        assert_eq!(config.parser(), ParserConfig::Ecmascript(EsParserConfig::default()));
    }
}
