//! Host operating system classification.

use std::fmt;

/// Operating system family, as far as backend selection is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// macOS (`darwin`).
    MacOs,
    /// Any Linux distribution.
    Linux,
    /// Anything else, carrying the raw identifier.
    Other(String),
}

impl Platform {
    /// Platform of the running process.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Classify an operating system identifier.
    ///
    /// Accepts both Rust's `macos` and the `darwin` spelling.
    pub fn from_os(os: &str) -> Self {
        match os.to_ascii_lowercase().as_str() {
            "macos" | "darwin" => Self::MacOs,
            "linux" => Self::Linux,
            _ => Self::Other(os.to_string()),
        }
    }

    /// Identifier used in diagnostics.
    pub fn as_str(&self) -> &str {
        match self {
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::Other(os) => os,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
