use super::{ExportArgs, SearchArgs, report};
use crate::OutputFormat;
use anyhow::{Context, Result};
use clap::Args;
use dirscrape_browser::{SnapshotDriver, extractor_for, run_extraction};
use dirscrape_core::{SearchRequest, Site};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use url::Url;

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Site whose extractor reads the saved pages (yellow-pages, indiamart)
    #[arg(short, long, value_name = "SITE")]
    pub site: Site,

    /// Saved HTML of a results page
    #[arg(long, value_name = "FILE")]
    pub results: PathBuf,

    /// Saved HTML of the search page; the form steps are checked against it
    #[arg(long, value_name = "FILE")]
    pub landing: Option<PathBuf>,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Seconds to wait for each step
    #[arg(short, long, default_value_t = 10)]
    pub timeout: u64,

    /// Origin used to resolve relative links
    #[arg(long, value_name = "URL")]
    pub base_url: Option<Url>,

    #[command(flatten)]
    pub export: ExportArgs,
}

/// Execute the replay command: run an extractor over saved pages, no browser
pub fn execute(args: ReplayArgs, format: OutputFormat) -> Result<ExitCode> {
    let site = args.site;
    let request = SearchRequest::new(&args.search.location, &args.search.query)?;

    let driver = SnapshotDriver::from_files(&args.results, args.landing.as_deref())
        .with_context(|| format!("Failed to read saved page {}", args.results.display()))?;
    let extractor = extractor_for(site, Duration::from_secs(args.timeout), args.base_url.clone())?;

    tracing::info!("Replaying {} from {}", site, args.results.display());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let outcome = runtime.block_on(run_extraction(&driver, extractor.as_ref(), &request));

    report(site, outcome, format, &args.export)
}
