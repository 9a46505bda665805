use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Context, ErrorKind, Fallible};
use dunce::canonicalize;
use once_cell::sync::OnceCell;

/// Environment variable that overrides install-directory detection
///
/// Used by the integration tests and for local development; end users never
/// need to set it.
pub const CX_INSTALL_DIR: &str = "CX_INSTALL_DIR";

#[cfg(unix)]
const RUNTIME_EXE: &str = "lumo";
#[cfg(windows)]
const RUNTIME_EXE: &str = "lumo.cmd";

static CX_INSTALL: OnceCell<CxInstall> = OnceCell::new();

/// The layout of a cx installation
///
/// Everything the launcher needs is located relative to the install root: the
/// vendored runtime under `node_modules/.bin` and the compiled CLI bundle and
/// classpath that the fixed argument prefix refers to.
pub struct CxInstall {
    root: PathBuf,
}

impl CxInstall {
    pub fn new(root: PathBuf) -> Self {
        CxInstall { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The path of the vendored runtime entry point
    pub fn runtime_exe(&self) -> PathBuf {
        self.root.join("node_modules").join(".bin").join(RUNTIME_EXE)
    }
}

pub fn cx_install<'a>() -> Fallible<&'a CxInstall> {
    CX_INSTALL.get_or_try_init(|| {
        let install_dir = match env::var_os(CX_INSTALL_DIR) {
            Some(install) => PathBuf::from(install),
            None => default_install_dir()?,
        };

        Ok(CxInstall::new(install_dir))
    })
}

/// Determine the install directory from the currently running executable
///
/// The launcher is installed alongside the runtime it wraps, so the directory
/// containing the running executable is the install root. Note that we need to
/// canonicalize the path we get from current_exe to make sure we resolve
/// symlinks and find the actual binary file.
fn default_install_dir() -> Fallible<PathBuf> {
    env::current_exe()
        .and_then(canonicalize)
        .map(|mut path| {
            path.pop(); // Remove the executable name from the path
            path
        })
        .with_context(|| ErrorKind::NoInstallDir)
}
