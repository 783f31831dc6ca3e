use super::{ExportArgs, SearchArgs, report, spinner};
use crate::OutputFormat;
use anyhow::{Context, Result};
use clap::Args;
use dirscrape_browser::{ScrapeOptions, SessionConfig, scrape};
use dirscrape_core::{SearchRequest, Site};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use url::Url;

#[derive(Args, Debug)]
pub struct ScrapeArgs {
    /// Site to scrape (yellow-pages, indiamart)
    #[arg(short, long, value_name = "SITE")]
    pub site: Site,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Seconds to wait for the search form and for results
    #[arg(short, long, default_value_t = 10)]
    pub timeout: u64,

    /// Path to the Chrome binary (auto-detected if not specified)
    #[arg(long, env = "DIRSCRAPE_CHROME_PATH", value_name = "PATH")]
    pub chrome_path: Option<PathBuf>,

    /// Show the browser window instead of running headless
    #[arg(long)]
    pub show_browser: bool,

    /// Disable the Chrome sandbox (needed in some containers)
    #[arg(long)]
    pub no_sandbox: bool,

    /// Scrape this origin instead of the site's public address
    #[arg(long, value_name = "URL")]
    pub base_url: Option<Url>,

    #[command(flatten)]
    pub export: ExportArgs,
}

/// Execute the scrape command against the live site
pub fn execute(args: ScrapeArgs, format: OutputFormat) -> Result<ExitCode> {
    let site = args.site;
    let request = SearchRequest::new(&args.search.location, &args.search.query)?;

    let options = ScrapeOptions {
        session: SessionConfig {
            chrome_path: args.chrome_path.clone(),
            headless: !args.show_browser,
            sandbox: !args.no_sandbox,
            ..SessionConfig::default()
        },
        timeout: Duration::from_secs(args.timeout),
        base_url: args.base_url.clone(),
    };

    eprintln!(
        "Scraping data from {} for '{}' in '{}'...",
        site.label(),
        request.query,
        request.location
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let progress = spinner("Scraping in progress...");
    let outcome = runtime.block_on(scrape(site, &request, &options));
    progress.finish_and_clear();

    // Chrome's handler task may still be winding down
    runtime.shutdown_timeout(Duration::from_millis(100));

    report(site, outcome, format, &args.export)
}
