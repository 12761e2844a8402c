//! Configuration module for pdf-joiner.
//!
//! This module holds the validated, normalized settings that drive a run:
//! - Input files (in join order) and the destination
//! - Output verbosity
//! - Whether and how a missing backend may be installed

use chrono::{DateTime, Local, TimeZone};

use crate::error::{JoinerError, Result};
use std::path::{Path, PathBuf};

/// Privilege helper used for package-manager commands unless overridden.
pub const DEFAULT_PRIVILEGE_HELPER: &str = "sudo";

/// Whether a missing backend may be installed automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProvisionMode {
    /// Try the distribution's package manager once (default).
    #[default]
    Auto,
    /// Never run a package manager.
    Skip,
}

/// Complete configuration for a join run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input PDF file paths (in join order).
    pub inputs: Vec<PathBuf>,

    /// Output PDF file path.
    pub output: PathBuf,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// Provisioning behavior when no backend is found.
    pub provision: ProvisionMode,

    /// Program prefixed to package-manager commands (`None` runs them directly).
    pub privilege_helper: Option<String>,
}

impl Config {
    /// Configuration with default settings for `inputs` and `output`.
    pub fn new(inputs: Vec<PathBuf>, output: PathBuf) -> Self {
        Self {
            inputs,
            output,
            verbose: false,
            quiet: false,
            provision: ProvisionMode::Auto,
            privilege_helper: Some(DEFAULT_PRIVILEGE_HELPER.to_string()),
        }
    }

    /// Returns a reference to inputs.
    pub fn inputs(&self) -> &[PathBuf] {
        self.inputs.as_ref()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Fewer than two input files are specified
    /// - Verbose and quiet modes are both enabled
    /// - The output path is also an input
    pub fn validate(&self) -> Result<()> {
        if self.inputs.len() < 2 {
            return Err(JoinerError::not_enough_inputs(self.inputs.len()));
        }

        if self.verbose && self.quiet {
            return Err(JoinerError::invalid_config(
                "Cannot use both --verbose and --quiet",
            ));
        }

        if self.inputs.iter().any(|input| input == &self.output) {
            return Err(JoinerError::invalid_config(format!(
                "Output file cannot be the same as an input file: {}",
                self.output.display()
            )));
        }

        Ok(())
    }

    /// Directory that has to exist before the backend runs.
    ///
    /// `None` when the output goes to the current directory.
    pub fn output_dir(&self) -> Option<&Path> {
        self.output
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty() && *dir != Path::new("."))
    }
}

/// Normalize a privilege helper setting: blank means "run directly".
pub fn normalize_privilege_helper(value: Option<String>) -> Option<String> {
    match value {
        None => Some(DEFAULT_PRIVILEGE_HELPER.to_string()),
        Some(helper) if helper.trim().is_empty() => None,
        Some(helper) => Some(helper.trim().to_string()),
    }
}

/// Default destination, `joined-pdf-<YYYY-MM-DD-HHMMSS>.pdf`, relative to
/// the current directory.
pub fn default_output_path<Tz>(now: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    PathBuf::from(format!("joined-pdf-{}.pdf", now.format("%Y-%m-%d-%H%M%S")))
}

/// Default destination stamped with the current local time.
pub fn timestamped_output_path() -> PathBuf {
    default_output_path(&Local::now())
}
