//! Input and output validation for pdf-joiner.
//!
//! Runs before any backend is probed:
//! - Every input must be an existing, non-directory file
//! - Inputs without a `.pdf` extension produce a warning, not an error
//! - The output directory is created if it does not exist yet
//!
//! # Examples
//!
//! ```no_run
//! use pdf_joiner::validation::Validator;
//! use std::path::PathBuf;
//!
//! # async fn example() -> pdf_joiner::Result<()> {
//! let validator = Validator::new();
//! let summary = validator
//!     .validate_inputs(&[PathBuf::from("a.pdf"), PathBuf::from("b.pdf")])?;
//! for warning in &summary.warnings {
//!     println!("Warning: {warning}");
//! }
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{JoinerError, Result};
use crate::utils::{file_exists, has_pdf_extension};

/// Result of checking the input list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    /// Number of inputs checked.
    pub files_validated: usize,

    /// Non-fatal findings, one line each.
    pub warnings: Vec<String>,
}

/// Validator for inputs and output location.
#[derive(Debug, Clone, Default)]
pub struct Validator;

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Check the input list.
    ///
    /// # Errors
    ///
    /// - [`JoinerError::NotEnoughInputs`] for fewer than two inputs
    /// - [`JoinerError::FileNotFound`] for the first missing input
    pub fn validate_inputs(&self, inputs: &[PathBuf]) -> Result<ValidationSummary> {
        if inputs.len() < 2 {
            return Err(JoinerError::not_enough_inputs(inputs.len()));
        }

        let mut summary = ValidationSummary::default();

        for input in inputs {
            if !file_exists(input) {
                return Err(JoinerError::file_not_found(input.clone()));
            }

            if !has_pdf_extension(input) {
                summary.warnings.push(format!(
                    "File '{}' may not be a PDF file",
                    input.display()
                ));
            }

            summary.files_validated += 1;
        }

        Ok(summary)
    }

    /// Make sure the directory of the configured output exists.
    ///
    /// Behaves like `mkdir -p`; an existing directory is fine.
    ///
    /// # Errors
    ///
    /// Returns [`JoinerError::FailedToCreateOutputDir`] if creation fails.
    pub async fn prepare_output(&self, config: &Config) -> Result<()> {
        match config.output_dir() {
            Some(dir) => create_output_dir(dir).await,
            None => Ok(()),
        }
    }
}

async fn create_output_dir(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| JoinerError::FailedToCreateOutputDir {
            path: dir.to_path_buf(),
            source,
        })
}
