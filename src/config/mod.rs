//! Pack configuration (modpack.yaml)
//!
//! Holds every pattern the collectors apply and the rule set handed to the
//! external syntax checker. All fields have defaults, so an empty file or no
//! file at all yields a usable configuration.

pub mod lint;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wax::Glob;

use crate::error::{
    Result, config_invalid, config_not_found, config_parse_failed, config_read_failed,
};

pub use lint::LintConfig;

/// Configuration file looked up in the current directory
pub const DEFAULT_CONFIG_FILE: &str = "modpack.yaml";

/// Marker patterns identifying modules, submodules and bundles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MarkerPatterns {
    /// Applied to each root; one match per module directory
    pub top_config: String,

    /// Applied to each registered module directory
    pub sub_config: String,

    /// Applied to each root; standalone configuration bundles
    pub bundle: String,
}

impl Default for MarkerPatterns {
    fn default() -> Self {
        Self {
            top_config: "*/module.json".to_string(),
            sub_config: "*/module.json".to_string(),
            bundle: "bundles/*.js".to_string(),
        }
    }
}

/// Per-module asset classes, relative to the module directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AssetPatterns {
    pub boot_script: String,

    /// Module configuration script; verified only, never archived as an asset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_script: Option<String>,

    pub config_scripts: String,
    pub class_scripts: String,
    pub public_assets: String,
}

impl Default for AssetPatterns {
    fn default() -> Self {
        Self {
            boot_script: "boot.js".to_string(),
            config_script: None,
            config_scripts: "config/*.js".to_string(),
            class_scripts: "classes/**/*.js".to_string(),
            public_assets: "public/**/*".to_string(),
        }
    }
}

/// Complete configuration for one pack run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackConfig {
    pub markers: MarkerPatterns,
    pub assets: AssetPatterns,
    pub lint: LintConfig,
}

impl PackConfig {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config_not_found(path.display().to_string()));
        }

        let yaml = std::fs::read_to_string(path)
            .map_err(|e| config_read_failed(path.display().to_string(), e.to_string()))?;

        let config: Self = serde_yaml::from_str(&yaml)
            .map_err(|e| config_parse_failed(path.display().to_string(), e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration for a run
    ///
    /// An explicit path must exist. Otherwise `modpack.yaml` in `dir` is used
    /// when present, and the built-in defaults when not.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let fallback: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            tracing::debug!(path = %fallback.display(), "using configuration file");
            return Self::from_file(&fallback);
        }

        Ok(Self::default())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let patterns = [
            ("markers.top-config", &self.markers.top_config),
            ("markers.sub-config", &self.markers.sub_config),
            ("markers.bundle", &self.markers.bundle),
            ("assets.boot-script", &self.assets.boot_script),
            ("assets.config-scripts", &self.assets.config_scripts),
            ("assets.class-scripts", &self.assets.class_scripts),
            ("assets.public-assets", &self.assets.public_assets),
        ];

        for (field, pattern) in patterns {
            validate_pattern(field, pattern)?;
        }
        if let Some(pattern) = &self.assets.config_script {
            validate_pattern("assets.config-script", pattern)?;
        }

        self.lint.validate()
    }
}

fn validate_pattern(field: &str, pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Err(config_invalid(format!("{field} must not be empty")));
    }
    if pattern.starts_with('/') || pattern.starts_with('\\') {
        return Err(config_invalid(format!(
            "{field} must be relative, got '{pattern}'"
        )));
    }
    Glob::new(pattern)
        .map_err(|e| config_invalid(format!("{field} is not a valid glob '{pattern}': {e}")))?;
    Ok(())
}
