//! Output formatting and display for pdf-joiner.
//!
//! This module handles all user-facing output including:
//! - Formatted status messages
//! - Warning and error display
//! - The final join summary
//! - Quiet and verbose modes

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use crate::orchestrator::JoinReport;

/// Display the summary line of a successful join.
///
/// In verbose mode the individual inputs are listed as well.
pub fn display_join_report(formatter: &OutputFormatter, report: &JoinReport) {
    formatter.success(&report.summary());

    if formatter.is_verbose() {
        for (index, input) in report.inputs.iter().enumerate() {
            formatter.detail(&format!("Input {}", index + 1), &input.display().to_string());
        }
    }
}
