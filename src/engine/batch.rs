//! engine::batch
//!
//! Runs a tool over every file of a batch and aggregates the results.
//!
//! # Invariants
//!
//! - Files are processed strictly in order, one child at a time
//! - Every file is processed even after a failure; there is no short-circuit
//! - The batch passes only if every file passes

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::engine::command::{Invocation, Mode, Tool};
use crate::engine::runner::{InvocationResult, ProcessRunner};

/// Outcome for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    pub file: PathBuf,
    pub passed: bool,
    #[serde(flatten)]
    pub output: InvocationResult,
}

/// Outcome of a whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub mode: Mode,
    pub results: Vec<FileResult>,
}

impl BatchReport {
    /// True when every file passed (vacuously true for an empty batch).
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// Files that failed, in processing order.
    pub fn failures(&self) -> impl Iterator<Item = &Path> {
        self.results
            .iter()
            .filter(|r| !r.passed)
            .map(|r| r.file.as_path())
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Receives progress while a batch runs.
pub trait BatchObserver {
    /// Called before the command for `invocation` is spawned.
    fn before(&mut self, _tool: &str, _invocation: &Invocation, _command_line: &str) {}

    /// Called after the command finished.
    fn after(&mut self, _invocation: &Invocation, _result: &FileResult) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default)]
pub struct Silent;

impl BatchObserver for Silent {}

/// Run `tool` over `files` in `mode`.
pub fn run_batch(
    tool: &dyn Tool,
    files: &[PathBuf],
    mode: Mode,
    runner: &dyn ProcessRunner,
    observer: &mut dyn BatchObserver,
) -> BatchReport {
    let policy = tool.policy();
    let mut results = Vec::with_capacity(files.len());

    for file in files {
        let invocation = tool.invocation(file, mode);
        let command_line = invocation.command_line();
        observer.before(tool.name(), &invocation, &command_line);

        let output = runner.run(&command_line);
        let result = FileResult {
            file: file.clone(),
            passed: output.passed(policy),
            output,
        };
        observer.after(&invocation, &result);
        results.push(result);
    }

    let report = BatchReport { mode, results };
    tracing::debug!(
        tool = tool.name(),
        %mode,
        files = report.len(),
        failed = report.failures().count(),
        "batch finished"
    );
    report
}
