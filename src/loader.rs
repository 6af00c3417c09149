//! Version resolution and engine loading
//!
//! Engines are produced by factories registered per version string. The
//! loader keeps no handles: every `load` builds and initializes a fresh
//! engine, and callers cache the result per version.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::builtin::{self, BuiltinCompiler};
use crate::engine::{Compiler, CompilerHandle};

/// CDN location of the browser builds, without the `@<version>` suffix.
pub const CDN_BASE: &str = "https://cdn.jsdelivr.net/npm/@swc/wasm-web";

/// Version used when the query string does not pick one.
pub const DEFAULT_VERSION: &str = builtin::ENGINE_VERSION;

/// Why a version could not be turned into an engine.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no swc engine registered for version {version} (browser module: {locator})")]
    UnknownVersion { version: String, locator: String },

    #[error("failed to initialize swc {version}: {reason}")]
    Init { version: String, reason: String },
}

/// Builds a fresh engine for one version.
pub type EngineFactory = Box<dyn Fn() -> Result<Box<dyn Compiler>, LoadError>>;

/// URL of the browser module for `version`.
pub fn module_url(version: &str) -> String {
    format!("{CDN_BASE}@{version}/wasm.js")
}

/// Version selected by the `version` query parameter of `search`.
///
/// A present parameter wins even when empty; only its absence falls back to
/// [`DEFAULT_VERSION`].
pub fn initial_version(search: &str) -> String {
    let query = search.strip_prefix('?').unwrap_or(search);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "version")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_else(|| DEFAULT_VERSION.to_string())
}

/// Registry of engine factories keyed by version.
#[derive(Default)]
pub struct Loader {
    factories: BTreeMap<String, EngineFactory>,
}

impl Loader {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader that knows the compiled-in engine.
    pub fn with_builtin() -> Self {
        let mut loader = Self::new();
        loader.register(builtin::ENGINE_VERSION, || {
            Ok(Box::new(BuiltinCompiler::new()) as Box<dyn Compiler>)
        });
        loader
    }

    /// Register `factory` for `version`, replacing any earlier one.
    pub fn register<F>(&mut self, version: impl Into<String>, factory: F)
    where
        F: Fn() -> Result<Box<dyn Compiler>, LoadError> + 'static,
    {
        self.factories.insert(version.into(), Box::new(factory));
    }

    /// Registered versions, sorted.
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// True when `version` has a factory.
    pub fn contains(&self, version: &str) -> bool {
        self.factories.contains_key(version)
    }

    /// Build and initialize the engine for `version`.
    pub fn load(&self, version: &str) -> Result<CompilerHandle, LoadError> {
        let factory = self
            .factories
            .get(version)
            .ok_or_else(|| LoadError::UnknownVersion {
                version: version.to_string(),
                locator: module_url(version),
            })?;

        tracing::info!(version, "loading swc");
        let engine = factory()?;
        Ok(CompilerHandle::new(version, engine))
    }
}
