use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

use super::{CWD_ENV_VAR, FIXED_PREFIX};
use crate::command::create_command;
use crate::error::{Context, ErrorKind, Fallible};
use crate::layout::{cx_install, CxInstall};
use crate::signal::pass_control_to_runtime;
use log::debug;

/// Process builder for launching the vendored runtime
///
/// The argument vector is always built as an ordered list (the fixed prefix
/// followed by the user's arguments verbatim), never by string concatenation,
/// so no quoting or escaping is applied beyond what `Command` itself requires.
/// Standard streams are inherited, keeping interactive programs working
/// unmodified through the launcher.
pub struct LauncherCommand {
    command: Command,
    runtime: PathBuf,
}

impl LauncherCommand {
    /// Create a command for the current installation, with the caller's
    /// working directory recorded in the environment
    pub fn new<A, S>(args: A) -> Fallible<Self>
    where
        A: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let install = cx_install()?;
        let caller_dir = env::current_dir().with_context(|| ErrorKind::CurrentDirError)?;

        Ok(LauncherCommand::with_install(install, caller_dir, args))
    }

    fn with_install<A, S>(install: &CxInstall, caller_dir: PathBuf, args: A) -> Self
    where
        A: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let runtime = install.runtime_exe();

        let mut command = create_command(&runtime);
        command.args(FIXED_PREFIX.iter());
        command.args(args);
        command.current_dir(install.root());
        command.env(CWD_ENV_VAR, caller_dir);

        LauncherCommand { command, runtime }
    }

    /// Runs the runtime, returning its `ExitStatus` if it successfully launches
    pub fn execute(mut self) -> Fallible<ExitStatus> {
        if !self.runtime.exists() {
            return Err(ErrorKind::RuntimeNotFound {
                path: self.runtime,
            }
            .into());
        }

        debug!("Launching {:?}", self.command);

        pass_control_to_runtime();
        let runtime = self.runtime;
        self.command
            .status()
            .with_context(|| ErrorKind::RuntimeExecError { path: runtime })
    }
}
