use std::env;
use std::ffi::OsString;
use std::process::ExitStatus;

use crate::error::Fallible;

mod executor;

pub use executor::LauncherCommand;

/// Environment variable carrying the caller's working directory
///
/// The child runs from the install root (so the classpath and bundle in the
/// fixed prefix resolve), so the directory the user invoked us from is passed
/// through the environment for the CLI to recover.
pub const CWD_ENV_VAR: &str = "CWD";

/// The constant argument tokens inserted before the user's arguments on every
/// invocation: the classpath and entry module for the runtime, then the `cx`
/// sub-command and the compiled bundle it runs.
pub const FIXED_PREFIX: [&str; 7] = [
    "--classpath",
    "src",
    "--main",
    "ddev.cli",
    "--",
    "cx",
    "bundle.js",
];

/// Launch the bundled CLI, forwarding the command-line arguments of the
/// current process
pub fn execute_launcher() -> Fallible<ExitStatus> {
    let args: Vec<OsString> = env::args_os().skip(1).collect();

    LauncherCommand::new(&args)?.execute()
}
