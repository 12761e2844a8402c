//! Executable discovery.
//!
//! [`ToolLocator`] is the seam between backend selection and the host: the
//! real implementation walks `PATH`, tests hand in a directory of fake tools.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::backend::{BACKENDS, Backend};

/// Resolves program names to executable paths.
pub trait ToolLocator {
    /// Full path of `program`, if it can be executed.
    fn resolve(&self, program: &str) -> Option<PathBuf>;

    /// Whether `program` can be executed.
    fn is_resolvable(&self, program: &str) -> bool {
        self.resolve(program).is_some()
    }
}

/// Ordered list of directories searched for executables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    /// Search path taken from the `PATH` environment variable.
    pub fn from_env() -> Self {
        Self::from_path_var(std::env::var_os("PATH").unwrap_or_default())
    }

    /// Search path from a `PATH`-style string.
    pub fn from_path_var(value: impl Into<OsString>) -> Self {
        let value = value.into();
        Self {
            dirs: std::env::split_paths(&value)
                .filter(|dir| !dir.as_os_str().is_empty())
                .collect(),
        }
    }

    /// Search path over an explicit list of directories.
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Directories in lookup order.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }
}

impl ToolLocator for SearchPath {
    fn resolve(&self, program: &str) -> Option<PathBuf> {
        let program_path = Path::new(program);
        if program_path.components().count() > 1 {
            return is_executable(program_path).then(|| program_path.to_path_buf());
        }

        self.dirs
            .iter()
            .map(|dir| dir.join(program))
            .find(|candidate| is_executable(candidate))
    }
}

/// Regular file with at least one execute bit set.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|meta| meta.is_file())
}

/// First backend in priority order that `locator` can resolve.
///
/// Returns the backend together with the resolved executable path.
pub fn find_backend<L: ToolLocator + ?Sized>(locator: &L) -> Option<(Backend, PathBuf)> {
    BACKENDS.iter().find_map(|descriptor| {
        locator
            .resolve(descriptor.identifier)
            .map(|path| (descriptor.backend, path))
    })
}
