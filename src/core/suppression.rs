//! core::suppression
//!
//! Loading of the static analyzer's line filter from `.clang-tidy.supp`.
//!
//! # Format
//!
//! The suppression file holds a line-filter expression, possibly spread over
//! several lines. Every occurrence of the [`SOURCE_PLACEHOLDER`] token is
//! replaced with the source root, line breaks are dropped, double quotes are
//! escaped, and the result is wrapped in double quotes so it can be
//! interpolated into a shell command as a single word.
//!
//! A missing file is not an error: the filter is then the empty quoted
//! string `""`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Name of the suppression file, relative to the source root.
pub const SUPPRESSION_FILE: &str = ".clang-tidy.supp";

/// Token in the suppression file replaced by the source root.
pub const SOURCE_PLACEHOLDER: &str = "src_path";

/// Errors from loading the suppression file.
#[derive(Debug, Error)]
pub enum SuppressionError {
    #[error("failed to read suppression file '{path}': {source}")]
    ReadError { path: PathBuf, source: io::Error },
}

/// A shell-quoted line-filter expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFilter(String);

impl LineFilter {
    /// The filter used when no suppression file exists.
    pub fn empty() -> Self {
        Self("\"\"".to_string())
    }

    /// Build a filter from raw suppression rules.
    ///
    /// # Example
    ///
    /// ```
    /// use clang_sweep::core::suppression::LineFilter;
    /// use std::path::Path;
    ///
    /// let filter = LineFilter::from_rules("foo-src_path-bar\n", Path::new("/x/y"));
    /// assert_eq!(filter.as_str(), "\"foo-/x/y-bar\"");
    /// ```
    pub fn from_rules(rules: &str, src_root: &Path) -> Self {
        let root = src_root.to_string_lossy();
        let expr = rules
            .replace(SOURCE_PLACEHOLDER, &root)
            .replace(['\n', '\r'], "")
            .replace('"', "\\\"");
        Self(format!("\"{}\"", expr))
    }

    /// Load the filter for a source root.
    ///
    /// # Errors
    ///
    /// Returns [`SuppressionError::ReadError`] if the file exists but cannot
    /// be read.
    pub fn load(src_root: &Path) -> Result<Self, SuppressionError> {
        let path = src_root.join(SUPPRESSION_FILE);
        match fs::read_to_string(&path) {
            Ok(rules) => {
                tracing::debug!(path = %path.display(), "loaded suppression rules");
                Ok(Self::from_rules(&rules, src_root))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::empty()),
            Err(source) => Err(SuppressionError::ReadError { path, source }),
        }
    }

    /// The quoted expression, ready for interpolation.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LineFilter {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Display for LineFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
