//! cli
//!
//! Command-line interface layer for clang-sweep.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install logging
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to the
//! handlers in [`commands`], which drive [`crate::engine`].

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{Context as _, Result};

use crate::engine;
use crate::logging;

/// Run the CLI application.
///
/// Returns whether every processed file passed. This is the main entry point
/// called from `main.rs`.
pub fn run() -> Result<bool> {
    let cli = Cli::parse_args();

    logging::init(cli.debug)?;

    // Relative --cwd is anchored now so children and resolved paths agree.
    let cwd = match cli.cwd {
        Some(dir) if dir.is_relative() => Some(
            std::env::current_dir()
                .context("failed to read current directory")?
                .join(dir),
        ),
        other => other,
    };

    let ctx = engine::Context {
        cwd,
        debug: cli.debug,
        quiet: cli.quiet,
        json: cli.json,
    };

    commands::dispatch(cli.command, &ctx)
}
