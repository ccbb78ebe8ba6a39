//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/mkdocs-merge/mkdocs-merge.toml`
//! 3. Environment variables: `MKDOCS_MERGE_*` prefix

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Unified configuration for mkdocs-merge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Site configuration file name inside every site directory
    pub config_file: String,
    /// Docs folder used when a site does not declare `docs_dir`
    pub default_docs_dir: String,
    /// Unify sites with the same name even without `--unify-sites`
    pub unify_sites: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_file: "mkdocs.yml".into(),
            default_docs_dir: "docs".into(),
            unify_sites: false,
        }
    }
}

/// Get the XDG config directory for mkdocs-merge.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "mkdocs-merge").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("mkdocs-merge.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/mkdocs-merge/mkdocs-merge.toml`
    /// 3. Environment variables: `MKDOCS_MERGE_*` prefix
    pub fn load() -> Result<Self, ApplicationError> {
        let mut builder = Self::defaults_builder()?;

        if let Some(global_path) = global_config_path() {
            builder = builder.add_source(File::from(global_path).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("MKDOCS_MERGE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        Self::build(builder)
    }

    /// Load defaults overlaid with one explicit config file.
    ///
    /// Ignores the global config and environment variables.
    pub fn load_from(path: &Path) -> Result<Self, ApplicationError> {
        let builder =
            Self::defaults_builder()?.add_source(File::from(path.to_path_buf()).required(true));
        Self::build(builder)
    }

    fn defaults_builder() -> Result<ConfigBuilder<DefaultState>, ApplicationError> {
        let defaults = Settings::default();
        Config::builder()
            .set_default("config_file", defaults.config_file)
            .map_err(config_err)?
            .set_default("default_docs_dir", defaults.default_docs_dir)
            .map_err(config_err)?
            .set_default("unify_sites", defaults.unify_sites)
            .map_err(config_err)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ApplicationError> {
        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        if self.config_file.trim().is_empty() {
            return Err(ApplicationError::Config {
                message: "config_file must not be empty".into(),
            });
        }
        if self.default_docs_dir.trim().is_empty() {
            return Err(ApplicationError::Config {
                message: "default_docs_dir must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# mkdocs-merge configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/mkdocs-merge/mkdocs-merge.toml
#   Env:    MKDOCS_MERGE_* environment variables (explicit overrides)

# Site configuration file looked up in every site directory
# config_file = "mkdocs.yml"

# Docs folder used when a site does not declare docs_dir
# default_docs_dir = "docs"

# Always unify sites with the same name (same as --unify-sites)
# unify_sites = false
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
