//! core::config::schema
//!
//! Configuration schema types.
//!
//! The same schema is used for the global config file and the project config
//! file (`.clang-sweep.toml` in the source root). Every key is optional; a
//! key left out falls through to the next scope and finally to the built-in
//! default.
//!
//! # Validation
//!
//! Config values are validated after parsing. Empty strings are rejected for
//! every value that ends up interpolated into a command or a revision lookup.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Configuration file contents.
///
/// # Example
///
/// ```toml
/// [format]
/// style = "file"
///
/// [tidy]
/// header_filter = "\\S*(stack_vector)+\\S*"
///
/// [listing]
/// revision = "HEAD"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    /// Formatter settings
    pub format: Option<FormatSettings>,

    /// Static analyzer settings
    pub tidy: Option<TidySettings>,

    /// Tracked file listing settings
    pub listing: Option<ListingSettings>,
}

impl SweepConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(style) = self.format.as_ref().and_then(|f| f.style.as_deref()) {
            require_non_empty("format.style", style)?;
        }

        if let Some(filter) = self.tidy.as_ref().and_then(|t| t.header_filter.as_deref()) {
            require_non_empty("tidy.header_filter", filter)?;
        }

        if let Some(rev) = self.listing.as_ref().and_then(|l| l.revision.as_deref()) {
            require_non_empty("listing.revision", rev)?;
        }

        Ok(())
    }
}

fn require_non_empty(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue(format!("'{}' must not be empty", key)));
    }
    Ok(())
}

/// `[format]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FormatSettings {
    /// Value passed as `-style=<style>`
    pub style: Option<String>,
}

/// `[tidy]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TidySettings {
    /// Header filter regex used in check mode
    pub header_filter: Option<String>,
}

/// `[listing]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ListingSettings {
    /// Revision whose tree is listed
    pub revision: Option<String>,
}
