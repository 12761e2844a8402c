//! Backend-neutral PDF joining.
//!
//! A [`Joiner`] wraps exactly one backend and is chosen once per run.
//! Callers only use [`Joiner::join`], [`Joiner::is_available`] and
//! [`Joiner::name`]; the variant decides how the external tool is driven.
//!
//! # Examples
//!
//! ```no_run
//! use pdf_joiner::joiner::{JoinRequest, Joiner, LinuxJoiner};
//! use pdf_joiner::backend::Backend;
//! use std::path::PathBuf;
//!
//! # async fn example() -> pdf_joiner::Result<()> {
//! let joiner = Joiner::Linux(LinuxJoiner::new(Backend::Qpdf, "/usr/bin/qpdf"));
//! let request = JoinRequest::new(
//!     vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")],
//!     PathBuf::from("joined.pdf"),
//! )?;
//! joiner.join(&request).await?;
//! # Ok(())
//! # }
//! ```

mod linux;
mod macos;

pub use linux::LinuxJoiner;
pub use macos::{MACOS_JOINER_PATH, MacOsJoiner};

use std::path::{Path, PathBuf};

use crate::error::{JoinerError, Result};
use crate::utils::file_exists;

/// Validated set of inputs plus a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinRequest {
    inputs: Vec<PathBuf>,
    output: PathBuf,
}

impl JoinRequest {
    /// Build a request, checking that at least two existing files are given.
    ///
    /// # Errors
    ///
    /// - [`JoinerError::NotEnoughInputs`] for fewer than two inputs
    /// - [`JoinerError::FileNotFound`] for a missing input or a directory
    pub fn new(inputs: Vec<PathBuf>, output: PathBuf) -> Result<Self> {
        if inputs.len() < 2 {
            return Err(JoinerError::not_enough_inputs(inputs.len()));
        }

        if let Some(missing) = inputs.iter().find(|path| !file_exists(path)) {
            return Err(JoinerError::file_not_found(missing.clone()));
        }

        Ok(Self { inputs, output })
    }

    /// Input files in output page order.
    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    /// Destination of the joined document.
    pub fn output(&self) -> &Path {
        &self.output
    }
}

/// The backend chosen for this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Joiner {
    /// The macOS system utility.
    MacOs(MacOsJoiner),
    /// A command-line tool on Linux.
    Linux(LinuxJoiner),
}

impl Joiner {
    /// Join the request's inputs into its output.
    ///
    /// The output file is not inspected after a zero exit.
    pub async fn join(&self, request: &JoinRequest) -> Result<()> {
        match self {
            Self::MacOs(joiner) => joiner.join(request).await,
            Self::Linux(joiner) => joiner.join(request).await,
        }
    }

    /// Whether the underlying tool can currently be executed.
    pub fn is_available(&self) -> bool {
        match self {
            Self::MacOs(joiner) => joiner.is_available(),
            Self::Linux(joiner) => joiner.is_available(),
        }
    }

    /// Display name of the backend.
    pub fn name(&self) -> String {
        match self {
            Self::MacOs(joiner) => joiner.name(),
            Self::Linux(joiner) => joiner.name(),
        }
    }
}

impl From<MacOsJoiner> for Joiner {
    fn from(joiner: MacOsJoiner) -> Self {
        Self::MacOs(joiner)
    }
}

impl From<LinuxJoiner> for Joiner {
    fn from(joiner: LinuxJoiner) -> Self {
        Self::Linux(joiner)
    }
}
