//! Site extractors.
//!
//! Every extractor follows the same path through a page:
//! `INIT -> NAVIGATED -> SEARCH_SUBMITTED -> RESULTS_PRESENT -> rows -> DONE`.
//! Anything failing before the rows are enumerated aborts the call. A row
//! that fails to parse is logged and skipped.

mod indiamart;
mod row;
mod yellow_pages;

pub use indiamart::IndiaMartExtractor;
pub use row::RowError;
pub use yellow_pages::YellowPagesExtractor;

use crate::driver::Driver;
use crate::Result;
use async_trait::async_trait;
use dirscrape_core::{Listing, SearchRequest, Site};
use std::time::Duration;
use url::Url;

/// How long each wait step may block before the call fails
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Drives a browser against one site and yields its listings
#[async_trait]
pub trait Extractor: Send + Sync {
    fn site(&self) -> Site;

    /// Run the search and read every result row on the first page.
    ///
    /// Does not close the driver; see [`run_extraction`].
    async fn extract(&self, driver: &dyn Driver, request: &SearchRequest) -> Result<Vec<Listing>>;
}

/// Build the extractor for `site`, optionally pointed at another origin
pub fn extractor_for(site: Site, timeout: Duration, base_url: Option<Url>) -> Result<Box<dyn Extractor>> {
    let base_url = match base_url {
        Some(url) => url,
        None => Url::parse(site.default_base_url())?,
    };

    Ok(match site {
        Site::YellowPages => Box::new(YellowPagesExtractor::new(base_url, timeout)),
        Site::IndiaMart => Box::new(IndiaMartExtractor::new(base_url, timeout)),
    })
}

/// Run an extractor and release the driver afterwards, whatever the outcome.
///
/// A failure to close is logged and never replaces the extraction result.
pub async fn run_extraction(
    driver: &dyn Driver,
    extractor: &dyn Extractor,
    request: &SearchRequest,
) -> Result<Vec<Listing>> {
    let outcome = extractor.extract(driver, request).await;

    if let Err(e) = driver.close().await {
        tracing::warn!("Failed to release browser session: {}", e);
    }

    match &outcome {
        Ok(listings) => tracing::info!(
            "{} returned {} listings for '{}'",
            extractor.site(),
            listings.len(),
            request.query
        ),
        Err(e) => tracing::error!("{} scrape aborted: {}", extractor.site(), e),
    }

    outcome
}

/// URL of the results page, for resolving relative links
pub(crate) async fn results_page_url(driver: &dyn Driver, fallback: &Url) -> Url {
    match driver.current_url().await {
        Ok(Some(url)) => Url::parse(&url).unwrap_or_else(|_| fallback.clone()),
        _ => fallback.clone(),
    }
}

/// Snapshot every row matching `row_selector` and parse each one in isolation
pub(crate) async fn collect_rows(
    driver: &dyn Driver,
    row_selector: &str,
    page_url: &Url,
    kind: &str,
    parse_row: fn(&str, &Url) -> std::result::Result<Listing, RowError>,
) -> Result<Vec<Listing>> {
    let snapshots = driver.outer_html_all(row_selector).await?;
    tracing::debug!("RESULTS_PRESENT: {} {} rows", snapshots.len(), kind);

    Ok(parse_rows(snapshots, page_url, kind, parse_row))
}

fn parse_rows(
    snapshots: Vec<Result<String>>,
    page_url: &Url,
    kind: &str,
    parse_row: fn(&str, &Url) -> std::result::Result<Listing, RowError>,
) -> Vec<Listing> {
    let total = snapshots.len();
    let mut listings = Vec::with_capacity(total);

    for (index, snapshot) in snapshots.into_iter().enumerate() {
        let parsed = snapshot
            .map_err(|e| RowError::Snapshot(e.to_string()))
            .and_then(|html| parse_row(&html, page_url));

        match parsed {
            Ok(listing) => listings.push(listing),
            Err(e) => tracing::error!(
                "Error extracting {} details from row {}: {}",
                kind,
                index + 1,
                e
            ),
        }
    }

    let skipped = total - listings.len();
    if skipped > 0 {
        tracing::warn!("Skipped {} of {} {} rows", skipped, total, kind);
    }

    listings
}
