//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output respects the quiet flag. Captured tool output is echoed as-is:
//! stdout to stdout, stderr to stderr. Verbose mode adds the command line
//! before each run and a per-file verdict after it.
//!
//! Stdout writes never panic: a closed pipe (`... | head`) drops the text
//! and the batch carries on, so in-place fixes still reach every file.

use std::fmt::Display;
use std::io::{self, Write};

use crate::engine::batch::{BatchObserver, FileResult};
use crate::engine::command::Invocation;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - exit code only
    Quiet,
    /// Normal mode - tool output only
    Normal,
    /// Verbose mode - commands and verdicts too
    Verbose,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message only in verbose mode.
pub fn verbose(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Verbose {
        line(io::stdout().lock(), message);
    }
}

/// Write one line to stdout, ignoring write failures.
pub fn print(message: impl Display) {
    line(io::stdout().lock(), message);
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format the command line announced before a run.
pub fn format_command(tool: &str, command_line: &str) -> String {
    format!("[{} cmd]: \"{}\"", tool, command_line)
}

/// Format the closing summary line.
pub fn format_summary(passed: bool) -> String {
    if passed {
        "finished with success!".to_string()
    } else {
        "finished with failed!".to_string()
    }
}

fn line(mut out: impl Write, message: impl Display) {
    let _ = writeln!(out, "{}", message);
    let _ = out.flush();
}

/// Write captured text, adding a trailing newline when missing.
fn echo(mut out: impl Write, text: &str) {
    if text.is_empty() {
        return;
    }
    let _ = out.write_all(text.as_bytes());
    if !text.ends_with('\n') {
        let _ = out.write_all(b"\n");
    }
    let _ = out.flush();
}

/// Batch observer that prints progress to the terminal.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    verbosity: Verbosity,
}

impl Reporter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl BatchObserver for Reporter {
    fn before(&mut self, tool: &str, _invocation: &Invocation, command_line: &str) {
        verbose(format_command(tool, command_line), self.verbosity);
    }

    fn after(&mut self, _invocation: &Invocation, result: &FileResult) {
        if self.verbosity == Verbosity::Quiet {
            return;
        }
        echo(io::stdout().lock(), &result.output.stdout);
        echo(io::stderr().lock(), &result.output.stderr);
        verbose(
            if result.passed { "success!" } else { "failed!" },
            self.verbosity,
        );
    }
}
