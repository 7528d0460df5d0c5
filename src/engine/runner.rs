//! engine::runner
//!
//! Executes one shell command and classifies the result.
//!
//! # Execution Model
//!
//! Each call spawns exactly one child through the system shell and blocks
//! until it exits. There is no timeout; a hung tool blocks the run.
//!
//! # Success Policies
//!
//! The formatter is judged by silence, the static analyzer by exit code
//! alone. See [`SuccessPolicy`].

use std::path::PathBuf;
use std::process::{Command, Output};

use serde::Serialize;

/// How a finished process is turned into pass/fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessPolicy {
    /// Exit code zero and nothing on stdout or stderr.
    Silent,
    /// Exit code zero; output is ignored.
    ExitCode,
}

/// Captured outcome of one child process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvocationResult {
    /// Exit code, absent if the child was killed by a signal or never spawned
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl InvocationResult {
    /// Judge the result under a policy.
    ///
    /// # Example
    ///
    /// ```
    /// use clang_sweep::engine::runner::{InvocationResult, SuccessPolicy};
    ///
    /// let result = InvocationResult {
    ///     exit_code: Some(0),
    ///     stdout: "warning: unused variable\n".to_string(),
    ///     stderr: String::new(),
    /// };
    /// assert!(result.passed(SuccessPolicy::ExitCode));
    /// assert!(!result.passed(SuccessPolicy::Silent));
    /// ```
    pub fn passed(&self, policy: SuccessPolicy) -> bool {
        let exited_cleanly = self.exit_code == Some(0);
        match policy {
            SuccessPolicy::Silent => {
                exited_cleanly && self.stdout.is_empty() && self.stderr.is_empty()
            }
            SuccessPolicy::ExitCode => exited_cleanly,
        }
    }

    fn from_output(output: Output) -> Self {
        Self {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Something that can run a shell command line.
///
/// Implementations never fail: a command that cannot be started is reported
/// as a result without an exit code.
pub trait ProcessRunner {
    fn run(&self, command_line: &str) -> InvocationResult;
}

/// Runs commands through the system shell.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    /// Directory children run in; inherits the process cwd when `None`
    pub cwd: Option<PathBuf>,
}

impl ShellRunner {
    pub fn new(cwd: Option<PathBuf>) -> Self {
        Self { cwd }
    }

    fn shell(command_line: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command_line);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command_line);
            cmd
        }
    }
}

impl ProcessRunner for ShellRunner {
    fn run(&self, command_line: &str) -> InvocationResult {
        let mut cmd = Self::shell(command_line);
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }

        match cmd.output() {
            Ok(output) => {
                let result = InvocationResult::from_output(output);
                tracing::debug!(command = command_line, exit_code = ?result.exit_code, "command finished");
                result
            }
            Err(e) => {
                tracing::warn!(command = command_line, error = %e, "failed to spawn shell");
                InvocationResult {
                    exit_code: None,
                    stdout: String::new(),
                    stderr: format!("failed to spawn shell: {}", e),
                }
            }
        }
    }
}
