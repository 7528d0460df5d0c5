//! engine
//!
//! The batch external-tool runner: List -> Filter -> Build -> Run -> Aggregate.
//!
//! # Architecture
//!
//! - [`command`] - Invocation descriptors and the tools that build them
//! - [`runner`] - Spawns one shell command and classifies its result
//! - [`batch`] - Runs a tool over every file and aggregates the results
//! - [`verify`] - Apply-then-verify controller for rewriting tools
//!
//! Listing ([`crate::git`]) and filtering ([`crate::core::filter`]) happen
//! before the engine is entered; the engine only sees the final file list.
//!
//! # Invariants
//!
//! - Execution is sequential, one child process at a time
//! - Per-file failures are data, never errors
//! - A batch never stops early

pub mod batch;
pub mod command;
pub mod runner;
pub mod verify;

pub use batch::{run_batch, BatchObserver, BatchReport, FileResult};
pub use command::{ClangFormat, ClangTidy, Invocation, Mode, Tool, ToolParams};
pub use runner::{InvocationResult, ProcessRunner, ShellRunner, SuccessPolicy};
pub use verify::{apply_then_verify, CycleOutcome, Phase};

use std::path::{Path, PathBuf};

/// Execution context for commands.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (exit code only).
    pub quiet: bool,
    /// Emit a JSON report instead of text.
    pub json: bool,
}

impl Context {
    /// Resolve a user-supplied path against the working directory override.
    ///
    /// Absolute paths and paths without an override are returned unchanged.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.cwd {
            Some(cwd) if path.is_relative() => cwd.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Runner that spawns children in the working directory override.
    pub fn runner(&self) -> ShellRunner {
        ShellRunner::new(self.cwd.clone())
    }
}
