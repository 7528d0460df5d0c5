//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves paths and loads configuration
//! 2. Lists and filters tracked files
//! 3. Hands the file list to the engine
//! 4. Formats and displays output
//!
//! Handlers return `Ok(true)` when every file passed, `Ok(false)` when any
//! file failed, and `Err` only for fatal problems (listing, configuration).

mod completion;
mod format;
mod tidy;

pub use completion::completion;
pub use format::format;
pub use tidy::tidy;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::cli::args::Command;
use crate::core::filter::retain_extensions;
use crate::engine::batch::{BatchObserver, Silent};
use crate::engine::{Context, Tool};
use crate::git::Git;
use crate::ui::output::{self, Reporter, Verbosity};

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<bool> {
    match command {
        Command::Format(args) => format::format(ctx, &args),
        Command::Tidy(args) => tidy::tidy(ctx, &args),
        Command::Completion { shell } => {
            completion::completion(shell)?;
            Ok(true)
        }
    }
}

/// List the files tracked under `src_root` that `tool` accepts.
///
/// # Errors
///
/// Fails if the repository cannot be opened or the revision cannot be listed.
pub(crate) fn tracked_sources(
    src_root: &Path,
    revision: &str,
    tool: &dyn Tool,
    verbosity: Verbosity,
) -> Result<Vec<PathBuf>> {
    let git = Git::open(src_root)
        .with_context(|| format!("failed to open repository at {}", src_root.display()))?;
    let tracked = git
        .list_tracked_files(src_root, revision)
        .with_context(|| format!("failed to list tracked files under {}", src_root.display()))?;

    let files = retain_extensions(tracked, tool.extensions());
    if files.is_empty() {
        output::warn(
            format!(
                "no tracked files for {} under {}",
                tool.name(),
                src_root.display()
            ),
            verbosity,
        );
    }
    Ok(files)
}

/// Verbosity for a command, folding in the global flags.
///
/// JSON mode silences text output entirely.
pub(crate) fn verbosity(ctx: &Context, verbose: bool) -> Verbosity {
    Verbosity::from_flags(ctx.quiet || ctx.json, verbose)
}

/// Observer for a command: progress text, or nothing in JSON mode.
pub(crate) fn observer(ctx: &Context, verbosity: Verbosity) -> Box<dyn BatchObserver> {
    if ctx.json {
        Box::new(Silent)
    } else {
        Box::new(Reporter::new(verbosity))
    }
}

/// Print a serializable report as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(report: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    output::print(json);
    Ok(())
}

/// Reject empty overrides given on the command line.
pub(crate) fn non_empty<'a>(flag: &str, value: Option<&'a str>) -> Result<Option<&'a str>> {
    if let Some(v) = value {
        anyhow::ensure!(!v.trim().is_empty(), "{} must not be empty", flag);
    }
    Ok(value)
}
