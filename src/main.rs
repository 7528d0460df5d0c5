use std::process::ExitCode;

use clang_sweep::cli;
use clang_sweep::ui::output;

/// Exit code for a run in which at least one file failed.
const EXIT_FAILED: u8 = 1;
/// Exit code for a run that could not complete.
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    match cli::run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_FAILED),
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::from(EXIT_FATAL)
        }
    }
}
