use std::path::{Path, PathBuf};

use super::JoinRequest;
use crate::backend::Backend;
use crate::error::{JoinerError, Result};
use crate::probe::{SearchPath, ToolLocator};
use crate::process::run_captured;

/// Joiner driving one of the Linux command-line backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinuxJoiner {
    backend: Backend,
    program: PathBuf,
}

impl LinuxJoiner {
    /// Joiner running `backend` from the executable at `program`.
    pub fn new(backend: Backend, program: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            program: program.into(),
        }
    }

    /// Backend this joiner drives.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Executable that will be run.
    pub fn program(&self) -> &Path {
        &self.program
    }

    pub(crate) async fn join(&self, request: &JoinRequest) -> Result<()> {
        let args = self.backend.args(request.inputs(), request.output());
        let output = run_captured(&self.program, &args).await?;

        if !output.success() {
            return Err(JoinerError::JoinFailed {
                backend: self.backend.identifier().to_string(),
                status: output.status,
                output: output.combined,
            });
        }

        Ok(())
    }

    pub(crate) fn is_available(&self) -> bool {
        SearchPath::from_env().is_resolvable(&self.program.to_string_lossy())
    }

    pub(crate) fn name(&self) -> String {
        format!("Linux {}", self.backend.identifier())
    }
}
