//! Configuration file support for taskhint
//!
//! Loads project-specific configuration from JSON files.
//!
//! Search order:
//! 1. Explicit path (--config CLI flag)
//! 2. `.taskhintrc.json` in project root
//! 3. `taskhint.config.json` in project root
//! 4. `"taskhint"` key in `package.json`
//!
//! All fields are optional. CLI flags take precedence over config file values.

use crate::complexity::ComplexityThresholds;
use crate::extract::DEFAULT_MAX_RELATED_FILES;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Upper bound accepted for `max_related_files`
pub const MAX_RELATED_FILES_LIMIT: usize = 100;

/// taskhint configuration loaded from a JSON config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskhintConfig {
    /// Custom complexity scoring cut-offs
    #[serde(default)]
    pub complexity: Option<ComplexityConfig>,

    /// Maximum number of related files per task (default: 10)
    #[serde(default)]
    pub max_related_files: Option<usize>,
}

/// Custom complexity scoring cut-offs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComplexityConfig {
    /// Length above which a description scores +1 (default: 50)
    pub medium_length: Option<usize>,
    /// Length above which a description scores +2 (default: 100)
    pub long_length: Option<usize>,
    /// Minimum score for Medium (default: 2)
    pub medium_score: Option<i32>,
    /// Minimum score for High (default: 4)
    pub high_score: Option<i32>,
}

impl ComplexityConfig {
    fn merged(&self) -> ComplexityThresholds {
        let defaults = ComplexityThresholds::default();
        ComplexityThresholds {
            medium_length: self.medium_length.unwrap_or(defaults.medium_length),
            long_length: self.long_length.unwrap_or(defaults.long_length),
            medium_score: self.medium_score.unwrap_or(defaults.medium_score),
            high_score: self.high_score.unwrap_or(defaults.high_score),
        }
    }
}

/// Resolved configuration with defaults filled in
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub thresholds: ComplexityThresholds,
    pub max_related_files: usize,
    /// Path the config was loaded from (None if defaults)
    pub config_path: Option<PathBuf>,
}

impl TaskhintConfig {
    /// Validate the configuration for logical errors
    pub fn validate(&self) -> Result<()> {
        if let Some(ref c) = self.complexity {
            let th = c.merged();

            if th.medium_length >= th.long_length {
                anyhow::bail!(
                    "complexity.medium_length ({}) must be less than complexity.long_length ({})",
                    th.medium_length,
                    th.long_length
                );
            }
            if th.medium_score >= th.high_score {
                anyhow::bail!(
                    "complexity.medium_score ({}) must be less than complexity.high_score ({})",
                    th.medium_score,
                    th.high_score
                );
            }
        }

        if let Some(max) = self.max_related_files {
            if max == 0 || max > MAX_RELATED_FILES_LIMIT {
                anyhow::bail!(
                    "max_related_files must be between 1 and {} (got {})",
                    MAX_RELATED_FILES_LIMIT,
                    max
                );
            }
        }

        Ok(())
    }

    /// Resolve config into the form used by analysis
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.validate()?;

        let thresholds = match &self.complexity {
            Some(c) => c.merged(),
            None => ComplexityThresholds::default(),
        };

        Ok(ResolvedConfig {
            thresholds,
            max_related_files: self.max_related_files.unwrap_or(DEFAULT_MAX_RELATED_FILES),
            config_path: None,
        })
    }
}

impl ResolvedConfig {
    /// Build a ResolvedConfig with all defaults (no config file)
    pub fn defaults() -> Self {
        ResolvedConfig {
            thresholds: ComplexityThresholds::default(),
            max_related_files: DEFAULT_MAX_RELATED_FILES,
            config_path: None,
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Discover and load a config file from the project root
///
/// Search order:
/// 1. `.taskhintrc.json`
/// 2. `taskhint.config.json`
/// 3. `"taskhint"` key in `package.json`
///
/// Returns `None` if no config file is found (use defaults).
pub fn discover_config(project_root: &Path) -> Result<Option<(TaskhintConfig, PathBuf)>> {
    let rc_path = project_root.join(".taskhintrc.json");
    if rc_path.exists() {
        let config = load_config_file(&rc_path)?;
        return Ok(Some((config, rc_path)));
    }

    let config_path = project_root.join("taskhint.config.json");
    if config_path.exists() {
        let config = load_config_file(&config_path)?;
        return Ok(Some((config, config_path)));
    }

    let pkg_path = project_root.join("package.json");
    if pkg_path.exists() {
        if let Some(config) = load_from_package_json(&pkg_path)? {
            return Ok(Some((config, pkg_path)));
        }
    }

    debug!(root = %project_root.display(), "no config file found");
    Ok(None)
}

/// Load config from an explicit file path
pub fn load_config_file(path: &Path) -> Result<TaskhintConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let config: TaskhintConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("invalid config in: {}", path.display()))?;

    Ok(config)
}

/// Load taskhint config from the "taskhint" key in package.json
fn load_from_package_json(path: &Path) -> Result<Option<TaskhintConfig>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let pkg: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    match pkg.get("taskhint") {
        Some(value) => {
            let config: TaskhintConfig = serde_json::from_value(value.clone())
                .with_context(|| format!("invalid taskhint config in {}", path.display()))?;
            config
                .validate()
                .with_context(|| format!("invalid taskhint config in {}", path.display()))?;
            Ok(Some(config))
        }
        None => Ok(None),
    }
}

/// Load and resolve config for a project
///
/// If `config_path` is provided, loads from that file.
/// Otherwise, discovers config from the project root.
/// Returns default config if nothing is found.
pub fn load_and_resolve(project_root: &Path, config_path: Option<&Path>) -> Result<ResolvedConfig> {
    let (config, source_path) = if let Some(path) = config_path {
        let config = load_config_file(path)?;
        (config, Some(path.to_path_buf()))
    } else {
        match discover_config(project_root)? {
            Some((config, path)) => (config, Some(path)),
            None => (TaskhintConfig::default(), None),
        }
    };

    if let Some(ref p) = source_path {
        info!(path = %p.display(), "loaded config");
    }

    let mut resolved = config.resolve()?;
    resolved.config_path = source_path;
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config_is_valid() {
        let config = TaskhintConfig::default();
        config.validate().expect("default config should be valid");
        let resolved = config.resolve().expect("default config should resolve");
        assert_eq!(resolved.thresholds, ComplexityThresholds::default());
        assert_eq!(resolved.thresholds.medium_length, 50);
        assert_eq!(resolved.thresholds.long_length, 100);
        assert_eq!(resolved.thresholds.medium_score, 2);
        assert_eq!(resolved.thresholds.high_score, 4);
        assert_eq!(resolved.max_related_files, 10);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: TaskhintConfig = serde_json::from_str("{}").unwrap();
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "complexity": {
                "medium_length": 40,
                "long_length": 80,
                "medium_score": 1,
                "high_score": 5
            },
            "max_related_files": 20
        }"#;
        let config: TaskhintConfig = serde_json::from_str(json).unwrap();
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.thresholds.medium_length, 40);
        assert_eq!(resolved.thresholds.long_length, 80);
        assert_eq!(resolved.thresholds.medium_score, 1);
        assert_eq!(resolved.thresholds.high_score, 5);
        assert_eq!(resolved.max_related_files, 20);
    }

    #[test]
    fn test_partial_complexity_uses_defaults_for_rest() {
        let json = r#"{"complexity": {"high_score": 6}}"#;
        let config: TaskhintConfig = serde_json::from_str(json).unwrap();
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.thresholds.medium_length, 50); // default
        assert_eq!(resolved.thresholds.medium_score, 2); // default
        assert_eq!(resolved.thresholds.high_score, 6);
    }

    #[test]
    fn test_reject_unknown_fields() {
        let result: Result<TaskhintConfig, _> = serde_json::from_str(r#"{"unknown": true}"#);
        assert!(result.is_err(), "unknown fields should be rejected");
        let result: Result<TaskhintConfig, _> =
            serde_json::from_str(r#"{"complexity": {"weight": 1}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_reject_unordered_lengths() {
        let json = r#"{"complexity": {"medium_length": 120}}"#;
        let config: TaskhintConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reject_unordered_scores() {
        let json = r#"{"complexity": {"medium_score": 4, "high_score": 4}}"#;
        let config: TaskhintConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reject_out_of_range_max_files() {
        for json in [r#"{"max_related_files": 0}"#, r#"{"max_related_files": 101}"#] {
            let config: TaskhintConfig = serde_json::from_str(json).unwrap();
            assert!(config.validate().is_err(), "{} should be rejected", json);
        }
    }

    #[test]
    fn test_discover_taskhintrc() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join(".taskhintrc.json");
        fs::write(&config_path, r#"{"max_related_files": 5}"#).unwrap();

        let (config, path) = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.max_related_files, Some(5));
        assert_eq!(path, config_path);
    }

    #[test]
    fn test_discover_taskhint_config_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("taskhint.config.json"),
            r#"{"max_related_files": 3}"#,
        )
        .unwrap();

        let (config, _) = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.max_related_files, Some(3));
    }

    #[test]
    fn test_discover_package_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{
            "name": "my-extension",
            "version": "1.0.0",
            "taskhint": {
                "complexity": {"long_length": 200}
            }
        }"#,
        )
        .unwrap();

        let (config, _) = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.complexity.unwrap().long_length, Some(200));
    }

    #[test]
    fn test_discover_package_json_without_taskhint_key() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"name": "my-extension"}"#).unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_discover_priority_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".taskhintrc.json"),
            r#"{"max_related_files": 1}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("taskhint.config.json"),
            r#"{"max_related_files": 2}"#,
        )
        .unwrap();

        let (config, _) = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(
            config.max_related_files,
            Some(1),
            ".taskhintrc.json should take priority"
        );
    }

    #[test]
    fn test_invalid_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".taskhintrc.json"), "{ not json").unwrap();
        assert!(discover_config(dir.path()).is_err());
    }

    #[test]
    fn test_load_and_resolve_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = load_and_resolve(dir.path(), None).unwrap();
        assert!(resolved.config_path.is_none());
        assert_eq!(resolved.max_related_files, DEFAULT_MAX_RELATED_FILES);
    }

    #[test]
    fn test_load_and_resolve_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("custom.json");
        fs::write(&config_path, r#"{"complexity": {"high_score": 3}}"#).unwrap();

        let resolved = load_and_resolve(dir.path(), Some(&config_path)).unwrap();
        assert_eq!(resolved.thresholds.high_score, 3);
        assert_eq!(resolved.config_path, Some(config_path));
    }
}
