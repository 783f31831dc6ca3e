pub mod completion;
pub mod replay;
pub mod scrape;
pub mod sites;

use crate::{OutputFormat, render};
use anyhow::Result;
use clap::Args;
use console::style;
use dirscrape_core::export::CsvExporter;
use dirscrape_core::{Listing, Site};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

/// Shown for both an empty result and a failed scrape; details go to the log
pub const NO_RESULTS_NOTICE: &str = "No results found or an error occurred.";

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Location or city to search in
    #[arg(short, long, default_value = "Delhi")]
    pub location: String,

    /// Search term
    #[arg(short, long, default_value = "Laptops")]
    pub query: String,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Save results as <site>_scrape_results.csv in the current directory
    #[arg(long)]
    pub export: bool,

    /// Save results as CSV to this path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Where to write the CSV export, if anywhere
    pub fn target(&self, site: Site) -> Option<PathBuf> {
        match (&self.output, self.export) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => Some(PathBuf::from(site.export_file_name())),
            (None, false) => None,
        }
    }
}

/// Render a scrape outcome, export it when asked, and map it to an exit code.
///
/// A failure is shown only as the generic notice; the error itself has
/// already been logged by the extractor.
pub fn report<E: std::fmt::Display>(
    site: Site,
    outcome: std::result::Result<Vec<Listing>, E>,
    format: OutputFormat,
    export: &ExportArgs,
) -> Result<ExitCode> {
    let listings = match outcome {
        Ok(listings) => listings,
        Err(e) => {
            tracing::debug!("{} scrape failed: {}", site, e);
            eprintln!("{}", style(NO_RESULTS_NOTICE).yellow());
            return Ok(ExitCode::FAILURE);
        }
    };

    if listings.is_empty() {
        eprintln!("{}", style(NO_RESULTS_NOTICE).yellow());
        return Ok(ExitCode::SUCCESS);
    }

    render::render(site, &listings, format)?;

    if let Some(path) = export.target(site) {
        CsvExporter::to_file(site, &listings, &path)?;
        eprintln!("✅ CSV written to: {}", path.display());
    }

    Ok(ExitCode::SUCCESS)
}

/// Spinner on stderr; hidden automatically when stderr is not a terminal
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
