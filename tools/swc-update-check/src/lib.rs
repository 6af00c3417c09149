//! Keeps the recorded swc version of the playground in step with npm
//!
//! The playground reads its default release from `NEXT_PUBLIC_SWC_VERSION`
//! in an env file. This crate asks the jsDelivr package API for the latest
//! `@swc/binding_core_wasm` tag and rewrites that one line when it differs.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use serde::Deserialize;

/// Key of the version line in the env file.
pub const VERSION_KEY: &str = "NEXT_PUBLIC_SWC_VERSION";

/// Package metadata endpoint for the wasm binding.
pub const REGISTRY_URL: &str = "https://data.jsdelivr.com/v1/package/npm/@swc/binding_core_wasm";

#[derive(Debug, Deserialize)]
struct PackageMetadata {
    tags: DistTags,
}

#[derive(Debug, Deserialize)]
struct DistTags {
    latest: String,
}

/// Result of comparing the env file against the latest release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    UpToDate { version: String },
    Updated { from: String, to: String },
}

/// Latest published version according to `registry_url`.
pub fn fetch_latest(registry_url: &str) -> Result<String> {
    tracing::debug!(registry_url, "querying package registry");
    let metadata: PackageMetadata = reqwest::blocking::get(registry_url)
        .with_context(|| format!("failed to reach {registry_url}"))?
        .error_for_status()
        .with_context(|| format!("registry request to {registry_url} failed"))?
        .json()
        .context("unexpected registry response")?;
    Ok(metadata.tags.latest)
}

/// Version recorded under [`VERSION_KEY`] in `env`.
pub fn recorded_version(env: &str) -> Result<String> {
    let pattern = Regex::new(&format!(r"{VERSION_KEY}=(?<current>\d+\.\d+\.\d+)"))?;
    pattern
        .captures(env)
        .map(|caps| caps["current"].to_string())
        .ok_or_else(|| anyhow!("no {VERSION_KEY}=<major.minor.patch> line found"))
}

/// `env` with the first `KEY=current` replaced by `KEY=latest`.
pub fn rewrite_version(env: &str, current: &str, latest: &str) -> String {
    env.replacen(
        &format!("{VERSION_KEY}={current}"),
        &format!("{VERSION_KEY}={latest}"),
        1,
    )
}

/// Bring the env file at `path` up to `latest`, writing only when needed.
pub fn update_env_file(path: &Path, latest: &str) -> Result<Outcome> {
    let env = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let current = recorded_version(&env)
        .with_context(|| format!("in {}", path.display()))?;

    if current == latest {
        return Ok(Outcome::UpToDate { version: current });
    }

    fs::write(path, rewrite_version(&env, &current, latest))
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(from = %current, to = latest, "updated {VERSION_KEY}");
    Ok(Outcome::Updated {
        from: current,
        to: latest.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_version() {
        let env = "NEXT_PUBLIC_API=https://example.com\nNEXT_PUBLIC_SWC_VERSION=1.2.102\n";
        assert_eq!(recorded_version(env).unwrap(), "1.2.102");
    }

    #[test]
    fn test_recorded_version_missing() {
        assert!(recorded_version("OTHER=1\n").is_err());
        assert!(recorded_version("NEXT_PUBLIC_SWC_VERSION=latest\n").is_err());
    }

    #[test]
    fn test_rewrite_touches_only_the_version() {
        let env = "# pinned\nNEXT_PUBLIC_SWC_VERSION=1.2.102\nOTHER=1.2.102\n";
        assert_eq!(
            rewrite_version(env, "1.2.102", "1.3.0"),
            "# pinned\nNEXT_PUBLIC_SWC_VERSION=1.3.0\nOTHER=1.2.102\n"
        );
    }

    #[test]
    fn test_metadata_shape() {
        let metadata: PackageMetadata = serde_json::from_str(
            r#"{"tags":{"latest":"1.3.100","beta":"1.3.101-beta"},"versions":[]}"#,
        )
        .unwrap();
        assert_eq!(metadata.tags.latest, "1.3.100");
    }
}
