//! engine::verify
//!
//! Apply-then-verify controller for tools that rewrite files.
//!
//! # Phases
//!
//! ```text
//! Applying -> Verifying
//! ```
//!
//! The applying phase runs the batch in apply mode. The controller then
//! always enters the verifying phase and re-runs the batch in check mode over
//! the same files. Only the verifying outcome decides the result; a clean
//! exit from the apply step is not taken as proof that the files are clean.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::engine::batch::{run_batch, BatchObserver, BatchReport};
use crate::engine::command::{Mode, Tool};
use crate::engine::runner::ProcessRunner;

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Applying,
    Verifying,
}

impl Phase {
    /// Batch mode used in this phase.
    pub fn mode(self) -> Mode {
        match self {
            Phase::Applying => Mode::Apply,
            Phase::Verifying => Mode::Check,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Applying => write!(f, "applying"),
            Phase::Verifying => write!(f, "verifying"),
        }
    }
}

/// Reports of both phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleOutcome {
    pub applied: BatchReport,
    pub verified: BatchReport,
}

impl CycleOutcome {
    /// The verifying outcome; the applying outcome is informational.
    pub fn passed(&self) -> bool {
        self.verified.passed()
    }
}

/// Apply fixes to `files`, then check them.
pub fn apply_then_verify(
    tool: &dyn Tool,
    files: &[PathBuf],
    runner: &dyn ProcessRunner,
    observer: &mut dyn BatchObserver,
) -> CycleOutcome {
    let mut phase = Phase::Applying;
    tracing::debug!(tool = tool.name(), %phase, "entering phase");
    let applied = run_batch(tool, files, phase.mode(), runner, observer);

    phase = Phase::Verifying;
    tracing::debug!(tool = tool.name(), %phase, applied_ok = applied.passed(), "entering phase");
    let verified = run_batch(tool, files, phase.mode(), runner, observer);

    CycleOutcome { applied, verified }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::batch::tests::ScriptedRunner;
    use crate::engine::batch::Silent;
    use crate::engine::command::ClangFormat;

    fn files(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn applies_everything_before_checking() {
        let runner = ScriptedRunner::default();
        let tool = ClangFormat::new("cf", "file");

        let outcome = apply_then_verify(&tool, &files(&["a.c", "b.h"]), &runner, &mut Silent);

        assert!(outcome.passed());
        let calls = runner.calls.borrow();
        assert_eq!(
            *calls,
            vec![
                "cf -style=file -i a.c",
                "cf -style=file -i b.h",
                "cf -style=file a.c | diff -u a.c -",
                "cf -style=file b.h | diff -u b.h -",
            ]
        );
        assert_eq!(outcome.applied.mode, Mode::Apply);
        assert_eq!(outcome.verified.mode, Mode::Check);
    }

    #[test]
    fn failed_apply_is_discarded_when_verify_passes() {
        // Only the in-place run of b.h reports an error.
        let runner = ScriptedRunner::default().fail_on("-i b.h", "");
        let tool = ClangFormat::new("cf", "file");

        let outcome = apply_then_verify(&tool, &files(&["a.c", "b.h"]), &runner, &mut Silent);

        assert!(!outcome.applied.passed());
        assert!(outcome.verified.passed());
        assert!(outcome.passed());
    }

    #[test]
    fn verify_failure_fails_cycle() {
        let runner = ScriptedRunner::default().fail_on("| diff -u b.h", "-x\n+y\n");
        let tool = ClangFormat::new("cf", "file");

        let outcome = apply_then_verify(&tool, &files(&["a.c", "b.h"]), &runner, &mut Silent);

        assert!(outcome.applied.passed());
        assert!(!outcome.passed());
    }

    #[test]
    fn phase_modes() {
        assert_eq!(Phase::Applying.mode(), Mode::Apply);
        assert_eq!(Phase::Verifying.mode(), Mode::Check);
        assert_eq!(Phase::Verifying.to_string(), "verifying");
    }
}
