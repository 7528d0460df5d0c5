//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Report through the exit code only
//! - `--json`: Print a machine-readable report

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// clang-sweep - Run clang-format and clang-tidy over tracked C/C++ sources
#[derive(Parser, Debug)]
#[command(name = "clang-sweep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if clang-sweep was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// No output; report through the exit code only
    #[arg(short, long, global = true, conflicts_with = "json")]
    pub quiet: bool,

    /// Print a JSON report instead of tool output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check or apply clang-format on tracked C/C++ files
    #[command(
        name = "format",
        long_about = "Check or apply clang-format on tracked C/C++ files.\n\n\
            Lists the files tracked in git under the source directory, keeps C/C++ \
            sources and headers, and runs clang-format on each one. In check mode a \
            file passes only if clang-format's output is identical to the file and \
            nothing is printed on stderr.\n\n\
            With --apply, files are reformatted in place and then checked again; the \
            result of that second pass decides the exit code.",
        after_help = "\
EXAMPLES:
    # Check formatting (exit code 1 if any file differs)
    clang-sweep format /usr/bin/clang-format .

    # Reformat in place, then verify
    clang-sweep format /usr/bin/clang-format . --apply --verbose"
    )]
    Format(FormatArgs),

    /// Check or apply clang-tidy on tracked C/C++ sources
    #[command(
        name = "tidy",
        long_about = "Check or apply clang-tidy on tracked C/C++ sources.\n\n\
            Lists the files tracked in git under the source directory, keeps C/C++ \
            translation units (no headers), and runs clang-tidy on each one against \
            the compilation database in the build directory. A file passes if \
            clang-tidy exits with status zero.\n\n\
            If the source directory holds a .clang-tidy.supp file, its contents \
            become the -line-filter argument, with every 'src_path' replaced by the \
            source directory.",
        after_help = "\
EXAMPLES:
    # Check against build/compile_commands.json
    clang-sweep tidy /usr/bin/clang-tidy . build

    # Apply automatic fixes
    clang-sweep tidy /usr/bin/clang-tidy . build --apply"
    )]
    Tidy(TidyArgs),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments of `format`.
#[derive(clap::Args, Debug, Clone)]
pub struct FormatArgs {
    /// Path to clang-format's binary
    pub clang_format_path: String,

    /// Path to the project's source directory
    pub project_src_path: PathBuf,

    /// Verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Apply formatting (by default only checks it)
    #[arg(long)]
    pub apply: bool,

    /// Style passed as -style=<STYLE> (default: from config, else "file")
    #[arg(long)]
    pub style: Option<String>,

    /// Revision whose tracked files are processed (default: from config, else HEAD)
    #[arg(long)]
    pub revision: Option<String>,
}

/// Arguments of `tidy`.
#[derive(clap::Args, Debug, Clone)]
pub struct TidyArgs {
    /// Path to clang-tidy's binary
    pub clang_tidy_path: String,

    /// Path to the project's source directory
    pub project_src_path: PathBuf,

    /// Path to the project's build directory
    pub project_build_path: PathBuf,

    /// Verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Apply fixes (by default only checks)
    #[arg(long)]
    pub apply: bool,

    /// Header filter regex used in check mode (default: from config)
    #[arg(long)]
    pub header_filter: Option<String>,

    /// Revision whose tracked files are processed (default: from config, else HEAD)
    #[arg(long)]
    pub revision: Option<String>,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
