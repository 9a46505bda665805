use std::fmt;
use std::path::PathBuf;

use super::ExitCode;

const REPORT_BUG_CTA: &str =
    "Please rerun the command that triggered this error with the environment
variable `CX_LOGLEVEL` set to `debug` and open an issue with the details!";

const REINSTALL_CTA: &str = "Please ensure that cx was installed correctly.";

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ErrorKind {
    /// Thrown when the current working directory could not be determined
    CurrentDirError,

    /// Thrown when the containing directory of the running executable could not be determined
    NoInstallDir,

    /// Thrown when the vendored runtime fails to launch
    RuntimeExecError { path: PathBuf },

    /// Thrown when the vendored runtime binary is missing from the install
    RuntimeNotFound { path: PathBuf },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::CurrentDirError => write!(
                f,
                "Could not determine current working directory.

Please ensure that you have access to the current directory."
            ),
            ErrorKind::NoInstallDir => write!(
                f,
                "Could not determine cx install directory.

{}",
                REINSTALL_CTA
            ),
            ErrorKind::RuntimeExecError { path } => write!(
                f,
                "Could not launch the bundled runtime

    {}

{}",
                path.display(),
                REPORT_BUG_CTA
            ),
            ErrorKind::RuntimeNotFound { path } => write!(
                f,
                "Could not locate the bundled runtime

    {}

{}",
                path.display(),
                REINSTALL_CTA
            ),
        }
    }
}

impl ErrorKind {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ErrorKind::CurrentDirError => ExitCode::EnvironmentError,
            ErrorKind::NoInstallDir => ExitCode::EnvironmentError,
            ErrorKind::RuntimeExecError { .. } => ExitCode::ExecutionFailure,
            ErrorKind::RuntimeNotFound { .. } => ExitCode::ExecutableNotFound,
        }
    }
}
