//! engine::command
//!
//! Per-file invocation descriptors and the tools that build them.
//!
//! # Design
//!
//! A [`Tool`] knows which files it accepts, how to judge a finished process
//! and how to describe an invocation for one file. An [`Invocation`] is the
//! descriptor handed to the runner; [`Invocation::command_line`] renders it
//! as a single shell command.
//!
//! Paths and parameters are interpolated as given. Callers pass only trusted,
//! operator-supplied values.
//!
//! # Command Shapes
//!
//! ```text
//! format/check  <tool> -style=<style> <file> | diff -u <file> -
//! format/apply  <tool> -style=<style> -i <file>
//! tidy/check    <tool> -p=<build> -line-filter=<filter> -header-filter="<regex>" <file>
//! tidy/apply    <tool> -p=<build> -fix -line-filter=<filter> <file>
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::filter::{FORMAT_EXTENSIONS, TIDY_EXTENSIONS};
use crate::core::suppression::LineFilter;
use crate::engine::runner::SuccessPolicy;

/// Whether a tool only checks files or rewrites them in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Dry run; files are left untouched.
    Check,
    /// Fixes are written to the files.
    Apply,
}

impl Mode {
    /// Mode for an `--apply` flag.
    pub fn from_apply(apply: bool) -> Self {
        if apply {
            Mode::Apply
        } else {
            Mode::Check
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Check => write!(f, "check"),
            Mode::Apply => write!(f, "apply"),
        }
    }
}

/// Tool-specific parameters of an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolParams {
    Format {
        style: String,
    },
    Tidy {
        build_dir: PathBuf,
        line_filter: LineFilter,
        header_filter: String,
    },
}

/// Everything needed to run one tool over one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Tool binary, not validated
    pub binary: String,
    /// Target file
    pub file: PathBuf,
    pub mode: Mode,
    pub params: ToolParams,
}

impl Invocation {
    /// Render the descriptor as a shell command.
    pub fn command_line(&self) -> String {
        let file = self.file.display();
        match (&self.params, self.mode) {
            (ToolParams::Format { style }, Mode::Check) => format!(
                "{} -style={} {} | diff -u {} -",
                self.binary, style, file, file
            ),
            (ToolParams::Format { style }, Mode::Apply) => {
                format!("{} -style={} -i {}", self.binary, style, file)
            }
            (
                ToolParams::Tidy {
                    build_dir,
                    line_filter,
                    header_filter,
                },
                Mode::Check,
            ) => format!(
                "{} -p={} -line-filter={} -header-filter=\"{}\" {}",
                self.binary,
                build_dir.display(),
                line_filter,
                header_filter,
                file
            ),
            (
                ToolParams::Tidy {
                    build_dir,
                    line_filter,
                    ..
                },
                Mode::Apply,
            ) => format!(
                "{} -p={} -fix -line-filter={} {}",
                self.binary,
                build_dir.display(),
                line_filter,
                file
            ),
        }
    }
}

/// An external tool that can be run over a batch of files.
pub trait Tool {
    /// Short name used in output, e.g. `clang_format`.
    fn name(&self) -> &'static str;

    /// File suffixes this tool accepts.
    fn extensions(&self) -> &'static [&'static str];

    /// How a finished process is judged.
    fn policy(&self) -> SuccessPolicy;

    /// Describe the invocation for one file.
    fn invocation(&self, file: &Path, mode: Mode) -> Invocation;
}

/// The formatter.
#[derive(Debug, Clone)]
pub struct ClangFormat {
    pub binary: String,
    pub style: String,
}

impl ClangFormat {
    pub fn new(binary: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            style: style.into(),
        }
    }
}

impl Tool for ClangFormat {
    fn name(&self) -> &'static str {
        "clang_format"
    }

    fn extensions(&self) -> &'static [&'static str] {
        FORMAT_EXTENSIONS
    }

    // Any diff or warning text means the file is not clean.
    fn policy(&self) -> SuccessPolicy {
        SuccessPolicy::Silent
    }

    fn invocation(&self, file: &Path, mode: Mode) -> Invocation {
        Invocation {
            binary: self.binary.clone(),
            file: file.to_path_buf(),
            mode,
            params: ToolParams::Format {
                style: self.style.clone(),
            },
        }
    }
}

/// The static analyzer.
#[derive(Debug, Clone)]
pub struct ClangTidy {
    pub binary: String,
    /// Directory holding `compile_commands.json`
    pub build_dir: PathBuf,
    pub line_filter: LineFilter,
    pub header_filter: String,
}

impl ClangTidy {
    pub fn new(
        binary: impl Into<String>,
        build_dir: impl Into<PathBuf>,
        line_filter: LineFilter,
        header_filter: impl Into<String>,
    ) -> Self {
        Self {
            binary: binary.into(),
            build_dir: build_dir.into(),
            line_filter,
            header_filter: header_filter.into(),
        }
    }
}

impl Tool for ClangTidy {
    fn name(&self) -> &'static str {
        "clang_tidy"
    }

    fn extensions(&self) -> &'static [&'static str] {
        TIDY_EXTENSIONS
    }

    // Diagnostics are printed even for passing files; only the exit code counts.
    fn policy(&self) -> SuccessPolicy {
        SuccessPolicy::ExitCode
    }

    fn invocation(&self, file: &Path, mode: Mode) -> Invocation {
        Invocation {
            binary: self.binary.clone(),
            file: file.to_path_buf(),
            mode,
            params: ToolParams::Tidy {
                build_dir: self.build_dir.clone(),
                line_filter: self.line_filter.clone(),
                header_filter: self.header_filter.clone(),
            },
        }
    }
}
