//! pdf-joiner - Join PDF files into a single document.
//!
//! A small CLI that hands the work to a PDF tool installed on the host.

mod cli;

use clap::Parser;
use std::process;

use crate::cli::Cli;
use pdf_joiner::error::JoinerError;
use pdf_joiner::orchestrator::join_pdfs;
use pdf_joiner::output::{OutputFormatter, display_join_report};

const USAGE: &str = "Usage: pdf-joiner [-o output.pdf] file1.pdf file2.pdf [file3.pdf ...]";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();
    let formatter = OutputFormatter::new(cli.quiet, cli.verbose);

    // Run the application and handle errors
    if let Err(err) = run(cli, &formatter).await {
        report_error(&formatter, &err);
        process::exit(err.exit_code());
    }
}

/// Main application logic.
async fn run(cli: Cli, formatter: &OutputFormatter) -> Result<(), JoinerError> {
    let config = cli.to_config()?;

    formatter.debug(&format!("{} v{}", pdf_joiner::NAME, pdf_joiner::VERSION));
    formatter.detail("Output", &config.output.display().to_string());

    let report = join_pdfs(&config, formatter).await?;
    display_join_report(formatter, &report);

    Ok(())
}

fn report_error(formatter: &OutputFormatter, err: &JoinerError) {
    match err {
        JoinerError::NotEnoughInputs { .. } => {
            formatter.error("At least two PDF files are required for joining");
            println!("{USAGE}");
        }
        other => formatter.error(&other.to_string()),
    }
}
