//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treewalk/treewalk.toml`
//! 3. Explicit config file (`--config` / `TREEWALK_CONFIG`)
//! 4. Environment variables: `TREEWALK_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::render::{RenderStyle, DEFAULT_VALUE_WIDTH};
use crate::traversal::Traversal;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("config error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid setting: {message}")]
    Invalid { message: String },
}

/// Unified configuration for treewalk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Width of a value cell in ASCII diagrams (default: 3)
    pub value_width: usize,
    /// Traversal used by `walk` when no order is given
    pub default_order: Traversal,
    /// Diagram style used by `render` when no style is given
    pub style: RenderStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            value_width: DEFAULT_VALUE_WIDTH,
            default_order: Traversal::PreOrderRecursive,
            style: RenderStyle::Ascii,
        }
    }
}

/// Get the XDG config directory for treewalk.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treewalk").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treewalk.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file that must exist; overrides the global file
    #[instrument(level = "debug")]
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        let global = global_config_path().filter(|path| path.exists());
        Self::load_from(global.as_deref(), explicit)
    }

    /// Load settings from the given files (either may be absent) plus `TREEWALK_*` env vars.
    pub fn load_from(global: Option<&Path>, explicit: Option<&Path>) -> Result<Self, SettingsError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("value_width", defaults.value_width as u64)?
            .set_default("default_order", defaults.default_order.name())?
            .set_default("style", defaults.style.name())?;

        if let Some(path) = global {
            debug!(path = %path.display(), "global config");
            builder = builder.add_source(File::from(path).required(false));
        }
        if let Some(path) = explicit {
            debug!(path = %path.display(), "explicit config");
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix("TREEWALK")
                .prefix_separator("_")
                .separator("__"),
        );

        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.value_width == 0 {
            return Err(SettingsError::Invalid {
                message: "value_width must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Serialize to TOML, e.g. for `config show`.
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        toml::to_string_pretty(self).map_err(|e| SettingsError::Invalid {
            message: format!("serialize settings: {}", e),
        })
    }
}
