//! clang-sweep - Run clang-format and clang-tidy over a repository's tracked
//! C/C++ sources.
//!
//! clang-sweep lists the files git tracks under a source directory, keeps the
//! ones a tool accepts, runs the tool on each file through the shell, and
//! folds the per-file verdicts into one exit code.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to handlers)
//! - [`engine`] - Builds, runs and aggregates per-file tool invocations
//! - [`core`] - Extension filters, suppression rules, configuration
//! - [`git`] - Single interface for all Git operations
//! - [`ui`] - User-facing output
//! - [`logging`] - Diagnostic logging setup
//!
//! # Correctness Invariants
//!
//! 1. Files are processed sequentially and every file is reported
//! 2. The formatter passes only when silent; the analyzer passes on exit code
//! 3. Applying the formatter is always followed by a verifying check
//! 4. A failure to list tracked files aborts the run

pub mod cli;
pub mod core;
pub mod engine;
pub mod git;
pub mod logging;
pub mod ui;
