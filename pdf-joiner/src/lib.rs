//! pdf-joiner - Join PDF files using the tools already on the host.
//!
//! This library does not parse PDFs itself. It finds a PDF combining tool
//! for the current operating system and drives it:
//!
//! - macOS: the Automator "Combine PDF Pages" utility
//! - Linux: `pdfunite`, Ghostscript or `qpdf`, in that order of preference
//! - Best-effort installation of the Linux tools via the package manager
//!
//! # Examples
//!
//! ## Basic Join
//!
//! ```no_run
//! use pdf_joiner::config::Config;
//! use pdf_joiner::orchestrator::join_pdfs;
//! use pdf_joiner::output::OutputFormatter;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::new(
//!     vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")],
//!     PathBuf::from("joined.pdf"),
//! );
//!
//! let report = join_pdfs(&config, &OutputFormatter::default()).await?;
//! println!("Joined with {}", report.backend);
//! # Ok(())
//! # }
//! ```
//!
//! ## Choosing a Backend Explicitly
//!
//! ```no_run
//! use pdf_joiner::orchestrator::BackendSelector;
//! use pdf_joiner::output::OutputFormatter;
//! use pdf_joiner::platform::Platform;
//! use pdf_joiner::probe::SearchPath;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let selector = BackendSelector::new(SearchPath::from_env()).with_provisioner(None);
//! let joiner = selector
//!     .select(&Platform::current(), &OutputFormatter::default())
//!     .await?;
//! println!("Would use {}", joiner.name());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod config;
pub mod error;
pub mod joiner;
pub mod orchestrator;
pub mod output;
pub mod platform;
pub mod probe;
pub mod process;
pub mod provision;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{JoinerError, Result};
pub use joiner::{JoinRequest, Joiner};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
