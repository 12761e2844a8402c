use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::JoinRequest;
use crate::error::{JoinerError, Result};
use crate::process::run_captured;
use crate::utils::file_exists;

/// Location of the joiner shipped with macOS Automator.
pub const MACOS_JOINER_PATH: &str =
    "/System/Library/Automator/Combine PDF Pages.action/Contents/MacOS/join";

/// Joiner driving the macOS system utility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacOsJoiner {
    path: PathBuf,
}

impl MacOsJoiner {
    /// Joiner using the standard system location.
    pub fn new() -> Self {
        Self::with_path(MACOS_JOINER_PATH)
    }

    /// Joiner using a utility at a custom location.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the utility.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Arguments for joining `inputs` into `output`: `-o <output> <inputs...>`.
    pub fn args(inputs: &[PathBuf], output: &Path) -> Vec<OsString> {
        ["-o".into(), output.as_os_str().to_owned()]
            .into_iter()
            .chain(inputs.iter().map(|p| p.as_os_str().to_owned()))
            .collect()
    }

    pub(crate) async fn join(&self, request: &JoinRequest) -> Result<()> {
        let args = Self::args(request.inputs(), request.output());
        let output = run_captured(&self.path, &args).await?;

        if !output.success() {
            return Err(JoinerError::JoinFailed {
                backend: self.name(),
                status: output.status,
                output: output.combined,
            });
        }

        Ok(())
    }

    pub(crate) fn is_available(&self) -> bool {
        file_exists(&self.path)
    }

    pub(crate) fn name(&self) -> String {
        "macOS built-in PDF joiner".to_string()
    }
}

impl Default for MacOsJoiner {
    fn default() -> Self {
        Self::new()
    }
}
