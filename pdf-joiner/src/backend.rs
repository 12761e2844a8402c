//! Linux backend table.
//!
//! The order of [`BACKENDS`] is both the preference order used when probing
//! and the order in which candidates are listed to the user.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::JoinerError;

/// A command-line PDF combining tool found on Linux-like systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// `pdfunite` from poppler-utils.
    Pdfunite,
    /// Ghostscript.
    Ghostscript,
    /// `qpdf`.
    Qpdf,
}

/// Immutable description of one backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendDescriptor {
    /// Backend this entry describes.
    pub backend: Backend,
    /// Executable name looked up on the search path.
    pub identifier: &'static str,
    /// Lower ranks are preferred.
    pub priority: u8,
}

/// Backends in priority order.
pub const BACKENDS: [BackendDescriptor; 3] = [
    BackendDescriptor {
        backend: Backend::Pdfunite,
        identifier: "pdfunite",
        priority: 0,
    },
    BackendDescriptor {
        backend: Backend::Ghostscript,
        identifier: "gs",
        priority: 1,
    },
    BackendDescriptor {
        backend: Backend::Qpdf,
        identifier: "qpdf",
        priority: 2,
    },
];

/// Identifiers of every backend, in priority order.
pub fn candidate_identifiers() -> Vec<&'static str> {
    BACKENDS.iter().map(|d| d.identifier).collect()
}

impl Backend {
    /// Executable name of the backend.
    pub fn identifier(&self) -> &'static str {
        self.descriptor().identifier
    }

    /// Table entry for this backend.
    pub fn descriptor(&self) -> &'static BackendDescriptor {
        match self {
            Self::Pdfunite => &BACKENDS[0],
            Self::Ghostscript => &BACKENDS[1],
            Self::Qpdf => &BACKENDS[2],
        }
    }

    /// Build the argument list joining `inputs` into `output`.
    ///
    /// Input order is preserved; the output page order follows it.
    pub fn args(&self, inputs: &[PathBuf], output: &Path) -> Vec<OsString> {
        let inputs = inputs.iter().map(|p| p.as_os_str().to_owned());
        match self {
            Self::Pdfunite => inputs.chain([output.as_os_str().to_owned()]).collect(),
            Self::Ghostscript => {
                let mut output_flag = OsString::from("-sOutputFile=");
                output_flag.push(output.as_os_str());

                ["-dBATCH", "-dNOPAUSE", "-q", "-sDEVICE=pdfwrite"]
                    .into_iter()
                    .map(OsString::from)
                    .chain([output_flag])
                    .chain(inputs)
                    .collect()
            }
            Self::Qpdf => ["--empty", "--pages"]
                .into_iter()
                .map(OsString::from)
                .chain(inputs)
                .chain(["--".into(), output.as_os_str().to_owned()])
                .collect(),
        }
    }
}

impl FromStr for Backend {
    type Err = JoinerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BACKENDS
            .iter()
            .find(|d| d.identifier == s)
            .map(|d| d.backend)
            .ok_or_else(|| JoinerError::unsupported_backend(s))
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
