//! format command - Check or apply clang-format

use anyhow::{Context as _, Result};

use super::{non_empty, observer, print_json, tracked_sources, verbosity};
use crate::cli::args::FormatArgs;
use crate::core::config::Config;
use crate::engine::{apply_then_verify, run_batch, ClangFormat, Context, Mode};
use crate::ui::output;

/// Check formatting of every tracked C/C++ file, or apply it and re-check.
///
/// Returns whether every file is correctly formatted. With `--apply` this is
/// the result of the check that follows the in-place run.
pub fn format(ctx: &Context, args: &FormatArgs) -> Result<bool> {
    let src_root = ctx.resolve(&args.project_src_path);
    let config = Config::load(&src_root).context("failed to load configuration")?;

    let style = non_empty("--style", args.style.as_deref())?.unwrap_or(config.style());
    let revision = non_empty("--revision", args.revision.as_deref())?.unwrap_or(config.revision());
    let verbosity = verbosity(ctx, args.verbose);

    let tool = ClangFormat::new(args.clang_format_path.as_str(), style);
    let files = tracked_sources(&src_root, revision, &tool, verbosity)?;

    let runner = ctx.runner();
    let mut observer = observer(ctx, verbosity);

    let passed = if args.apply {
        let outcome = apply_then_verify(&tool, &files, &runner, observer.as_mut());
        if ctx.json {
            print_json(&outcome)?;
        }
        outcome.passed()
    } else {
        let report = run_batch(&tool, &files, Mode::Check, &runner, observer.as_mut());
        if ctx.json {
            print_json(&report)?;
        }
        report.passed()
    };

    output::verbose(output::format_summary(passed), verbosity);
    Ok(passed)
}
