use crate::extract::{DEFAULT_TIMEOUT, extractor_for, run_extraction};
use crate::launcher::SessionConfig;
use crate::{ChromeDriver, Result};
use dirscrape_core::{Listing, SearchRequest, Site};
use std::time::Duration;
use url::Url;

/// Everything a scrape call needs besides the search itself
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    pub session: SessionConfig,
    /// Bound on each wait step (search form, results)
    pub timeout: Duration,
    /// Replaces the site's default origin
    pub base_url: Option<Url>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            timeout: DEFAULT_TIMEOUT,
            base_url: None,
        }
    }
}

/// Scrape the first results page of `site` in a fresh Chrome session.
///
/// The session is closed before this returns, on success and on failure.
pub async fn scrape(site: Site, request: &SearchRequest, options: &ScrapeOptions) -> Result<Vec<Listing>> {
    tracing::info!(
        "Scraping {} for '{}' in '{}'",
        site,
        request.query,
        request.location
    );

    let extractor = extractor_for(site, options.timeout, options.base_url.clone())?;
    let driver = match ChromeDriver::launch(&options.session).await {
        Ok(driver) => driver,
        Err(e) => {
            tracing::error!("{} scrape aborted: could not start browser: {}", site, e);
            return Err(e);
        }
    };

    run_extraction(&driver, extractor.as_ref(), request).await
}
