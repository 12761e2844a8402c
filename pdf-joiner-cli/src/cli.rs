//! CLI argument parsing for pdf-joiner.
//!
//! This module defines the command-line interface structure using `clap`
//! and turns it into a library [`Config`].

use clap::Parser;
use std::path::PathBuf;

use pdf_joiner::config::{
    Config, ProvisionMode, normalize_privilege_helper, timestamped_output_path,
};
use pdf_joiner::error::Result;
use pdf_joiner::utils::collect_paths_for_patterns;

/// Join PDF files into a single document.
///
/// pdf-joiner hands the work to a PDF tool already installed on the host:
/// the built-in utility on macOS, or pdfunite, Ghostscript or qpdf on
/// Linux. If none is installed on Linux, it tries to install one.
#[derive(Parser, Debug)]
#[command(name = "pdf-joiner")]
#[command(version)]
#[command(about = "Join PDF files into a single document", long_about = None)]
#[command(override_usage = "pdf-joiner [-o output.pdf] file1.pdf file2.pdf [file3.pdf ...]")]
pub struct Cli {
    /// Input PDF files to join (in order)
    ///
    /// Pages appear in the output in the order the files are given.
    /// Glob patterns are expanded in sorted order unless the argument
    /// names an existing file.
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Output PDF file path
    ///
    /// Missing parent directories are created.
    /// Defaults to joined-pdf-<YYYY-MM-DD-HHMMSS>.pdf in the current directory.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Verbose output - show backend discovery and installation details
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    ///
    /// Only errors and warnings will be printed.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never try to install a missing PDF tool
    #[arg(long, env = "PDF_JOINER_NO_INSTALL")]
    pub no_install: bool,

    /// Program used to run package-manager commands with privileges
    ///
    /// Defaults to sudo. Pass an empty value to run them directly.
    #[arg(long, value_name = "PROGRAM", env = "PDF_JOINER_PRIVILEGE_HELPER")]
    pub privilege_helper: Option<String>,
}

impl Cli {
    /// Convert CLI arguments into a validated Config.
    ///
    /// This method performs the following:
    /// - Expands glob patterns in the inputs
    /// - Applies the timestamped default output path
    /// - Resolves the provisioning settings
    /// - Validates the resulting configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern is invalid or fewer than two inputs
    /// remain.
    pub fn to_config(&self) -> Result<Config> {
        let inputs = collect_paths_for_patterns(&self.inputs)?;
        let output = self.output.clone().unwrap_or_else(timestamped_output_path);

        let config = Config {
            inputs,
            output,
            verbose: self.verbose,
            quiet: self.quiet,
            provision: if self.no_install {
                ProvisionMode::Skip
            } else {
                ProvisionMode::Auto
            },
            privilege_helper: normalize_privilege_helper(self.privilege_helper.clone()),
        };

        config.validate()?;

        Ok(config)
    }
}
