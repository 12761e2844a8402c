//! Error types for pdf-joiner.
//!
//! Every failure a run can hit is represented here. Errors are terminal for
//! the run: the CLI prints the message and exits with status 1.
//!
//! # Error Categories
//!
//! - **Usage Errors**: too few inputs, missing files, bad patterns
//! - **Backend Unavailable**: nothing usable found on the host
//! - **Provisioning Errors**: a package-manager step failed
//! - **Invocation Errors**: the selected backend exited non-zero

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Result type alias for pdf-joiner operations.
pub type Result<T> = std::result::Result<T, JoinerError>;

/// Main error type for pdf-joiner operations.
#[derive(Debug, thiserror::Error)]
pub enum JoinerError {
    /// Fewer than two input files were given.
    #[error("At least two PDF files are required for joining (got {count})")]
    NotEnoughInputs {
        /// Number of inputs actually supplied.
        count: usize,
    },

    /// Input file does not exist or is a directory.
    #[error("File '{}' does not exist", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// An input glob pattern could not be parsed or expanded.
    #[error("Invalid input pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// Pattern as given on the command line.
        pattern: String,
        /// Parser or expansion failure.
        reason: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// The output directory could not be created.
    #[error("Error creating output directory {}: {source}", path.display())]
    FailedToCreateOutputDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The host operating system has no supported backend family.
    #[error(
        "unsupported operating system: {os}. This tool currently supports macOS and Linux only"
    )]
    UnsupportedPlatform {
        /// Operating system identifier.
        os: String,
    },

    /// The macOS system utility is missing.
    #[error(
        "macOS PDF joiner utility not found at '{}'.\nThis tool only works on macOS systems",
        path.display()
    )]
    MacOsJoinerMissing {
        /// Expected location of the utility.
        path: PathBuf,
    },

    /// A backend identifier that no joiner knows how to drive.
    #[error("unsupported Linux PDF backend: {backend}")]
    UnsupportedBackend {
        /// Identifier that was requested.
        backend: String,
    },

    /// No backend could be found, even after provisioning (if attempted).
    #[error(
        "no suitable PDF joining tool found on Linux. Please install one of: {}{}",
        candidates.join(", "),
        provisioning
            .as_ref()
            .map(|err| format!("\n  Automatic installation failed: {err}"))
            .unwrap_or_default()
    )]
    NoBackendAvailable {
        /// Backend identifiers in priority order.
        candidates: Vec<String>,
        /// Why provisioning did not help, when it was attempted and failed.
        provisioning: Option<Box<JoinerError>>,
    },

    /// The detected distribution has no known package manager mapping.
    #[error("unsupported distribution: {distribution}")]
    UnsupportedDistribution {
        /// Distribution classification.
        distribution: String,
    },

    /// A package-manager command exited non-zero.
    #[error("package installation failed running '{command}': {status}\nCommand output: {output}")]
    ProvisioningFailed {
        /// Command line that failed.
        command: String,
        /// Exit status of the command.
        status: ExitStatus,
        /// Captured stdout and stderr.
        output: String,
    },

    /// An external program could not be started at all.
    #[error("failed to run {program}: {source}")]
    SpawnFailed {
        /// Program that was executed.
        program: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The backend process exited non-zero.
    #[error("error joining PDFs with {backend}: {status}\nCommand output: {output}")]
    JoinFailed {
        /// Backend display name.
        backend: String,
        /// Exit status of the backend.
        status: ExitStatus,
        /// Captured stdout and stderr.
        output: String,
    },
}

impl JoinerError {
    /// Create a NotEnoughInputs error.
    pub fn not_enough_inputs(count: usize) -> Self {
        Self::NotEnoughInputs { count }
    }

    /// Create a FileNotFound error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an UnsupportedPlatform error.
    pub fn unsupported_platform(os: impl Into<String>) -> Self {
        Self::UnsupportedPlatform { os: os.into() }
    }

    /// Create an UnsupportedBackend error.
    pub fn unsupported_backend(backend: impl Into<String>) -> Self {
        Self::UnsupportedBackend {
            backend: backend.into(),
        }
    }

    /// Create a NoBackendAvailable error.
    pub fn no_backend_available<I, S>(candidates: I, provisioning: Option<JoinerError>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::NoBackendAvailable {
            candidates: candidates.into_iter().map(Into::into).collect(),
            provisioning: provisioning.map(Box::new),
        }
    }

    /// Create an UnsupportedDistribution error.
    pub fn unsupported_distribution(distribution: impl Into<String>) -> Self {
        Self::UnsupportedDistribution {
            distribution: distribution.into(),
        }
    }

    /// Check if this error was caused by bad user input.
    ///
    /// Usage errors are reported before any backend is contacted.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::NotEnoughInputs { .. }
                | Self::FileNotFound { .. }
                | Self::InvalidPattern { .. }
                | Self::InvalidConfig { .. }
        )
    }

    /// Get the process exit code for this error.
    ///
    /// Every failure is reported with status 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
