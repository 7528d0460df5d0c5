//! tidy command - Check or apply clang-tidy

use anyhow::{Context as _, Result};

use super::{non_empty, observer, print_json, tracked_sources, verbosity};
use crate::cli::args::TidyArgs;
use crate::core::config::Config;
use crate::core::suppression::LineFilter;
use crate::engine::{run_batch, ClangTidy, Context, Mode};
use crate::ui::output;

/// Run clang-tidy over every tracked C/C++ translation unit.
///
/// Returns whether clang-tidy exited cleanly for every file. Apply mode is a
/// single pass; there is no verification run.
pub fn tidy(ctx: &Context, args: &TidyArgs) -> Result<bool> {
    let src_root = ctx.resolve(&args.project_src_path);
    let build_dir = ctx.resolve(&args.project_build_path);
    let config = Config::load(&src_root).context("failed to load configuration")?;

    let header_filter = non_empty("--header-filter", args.header_filter.as_deref())?
        .unwrap_or(config.header_filter());
    let revision = non_empty("--revision", args.revision.as_deref())?.unwrap_or(config.revision());
    let verbosity = verbosity(ctx, args.verbose);

    let line_filter = LineFilter::load(&src_root)?;
    let tool = ClangTidy::new(
        args.clang_tidy_path.as_str(),
        build_dir,
        line_filter,
        header_filter,
    );
    let files = tracked_sources(&src_root, revision, &tool, verbosity)?;

    let runner = ctx.runner();
    let mut observer = observer(ctx, verbosity);
    let report = run_batch(
        &tool,
        &files,
        Mode::from_apply(args.apply),
        &runner,
        observer.as_mut(),
    );

    if ctx.json {
        print_json(&report)?;
    }

    let passed = report.passed();
    output::verbose(output::format_summary(passed), verbosity);
    Ok(passed)
}
