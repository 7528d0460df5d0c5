//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! clang-sweep has two configuration scopes:
//! - **Global**: User-level settings
//! - **Project**: `.clang-sweep.toml` in the source root
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Project config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Location
//!
//! 1. `$CLANG_SWEEP_CONFIG` if set (a missing file there means no global config)
//! 2. `<config dir>/clang-sweep/config.toml`, where the config dir comes from
//!    the platform conventions (`$XDG_CONFIG_HOME` or `~/.config` on Linux)
//!
//! # Example
//!
//! ```no_run
//! use clang_sweep::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Path::new("/path/to/src")).unwrap();
//! println!("style: {}", config.style());
//! println!("revision: {}", config.revision());
//! ```

pub mod schema;

pub use schema::{FormatSettings, ListingSettings, SweepConfig, TidySettings};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the global config file.
pub const CONFIG_ENV: &str = "CLANG_SWEEP_CONFIG";

/// Project config file name, relative to the source root.
pub const PROJECT_CONFIG_FILE: &str = ".clang-sweep.toml";

/// Default `-style=` value: read `.clang-format` files.
pub const DEFAULT_STYLE: &str = "file";

/// Default header filter for the static analyzer in check mode.
pub const DEFAULT_HEADER_FILTER: &str = r"\S*(stack_vector)+\S*";

/// Default revision whose tree is listed.
pub const DEFAULT_REVISION: &str = "HEAD";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence rules automatically. Project config overrides
/// global config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: SweepConfig,
    /// Project configuration (if the source root has one)
    pub project: Option<SweepConfig>,
}

impl Config {
    /// Load configuration for a source root from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be read, parsed or
    /// validated. Missing config files are not an error.
    pub fn load(src_root: &Path) -> Result<Self, ConfigError> {
        let global_path = Self::global_config_path();
        Self::load_from(global_path.as_deref(), src_root)
    }

    /// Load configuration with an explicit global config location.
    pub fn load_from(global_path: Option<&Path>, src_root: &Path) -> Result<Self, ConfigError> {
        let (global, global_path) = match global_path {
            Some(path) if path.is_file() => (Self::read_config(path)?, Some(path.to_path_buf())),
            _ => (SweepConfig::default(), None),
        };

        let candidate = src_root.join(PROJECT_CONFIG_FILE);
        let (project, project_path) = if candidate.is_file() {
            (Some(Self::read_config(&candidate)?), Some(candidate))
        } else {
            (None, None)
        };

        global.validate()?;
        if let Some(ref p) = project {
            p.validate()?;
        }

        tracing::debug!(
            global = ?global_path,
            project = ?project_path,
            "configuration loaded"
        );

        Ok(Config { global, project })
    }

    /// Resolve the global config file location.
    ///
    /// `$CLANG_SWEEP_CONFIG` wins when set, even if the file does not exist.
    pub fn global_config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("clang-sweep").join("config.toml"))
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<SweepConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Pick the first value set, project scope first.
    fn resolve<'a, F>(&'a self, get: F) -> Option<&'a str>
    where
        F: Fn(&'a SweepConfig) -> Option<&'a str>,
    {
        self.project
            .as_ref()
            .and_then(&get)
            .or_else(|| get(&self.global))
    }

    /// Formatter style.
    pub fn style(&self) -> &str {
        self.resolve(|c| c.format.as_ref().and_then(|f| f.style.as_deref()))
            .unwrap_or(DEFAULT_STYLE)
    }

    /// Static analyzer header filter (check mode).
    pub fn header_filter(&self) -> &str {
        self.resolve(|c| c.tidy.as_ref().and_then(|t| t.header_filter.as_deref()))
            .unwrap_or(DEFAULT_HEADER_FILTER)
    }

    /// Revision whose tree is listed.
    pub fn revision(&self) -> &str {
        self.resolve(|c| c.listing.as_ref().and_then(|l| l.revision.as_deref()))
            .unwrap_or(DEFAULT_REVISION)
    }
}
