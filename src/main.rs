use std::process::exit;

use cx_core::error::{report_error, ExitCode};
use cx_core::log::{LogVerbosity, Logger};
use cx_core::run::execute_launcher;
use cx_core::signal::setup_signal_handler;

/// The entry point for the `cx` launcher.
pub fn main() {
    Logger::init(LogVerbosity::Default).expect("Only a single Logger should be initialized");
    setup_signal_handler();

    match execute_launcher() {
        Ok(status) if status.success() => {
            ExitCode::Success.exit();
        }
        Ok(status) => {
            // status.code() is None when the child was killed by a signal
            let code = status.code().unwrap_or(ExitCode::UnknownError as i32);
            exit(code);
        }
        Err(err) => {
            report_error(env!("CARGO_PKG_VERSION"), &err);
            err.exit_code().exit();
        }
    }
}
