use super::row::{Row, RowError};
use super::{Extractor, collect_rows, results_page_url};
use crate::Result;
use crate::driver::Driver;
use crate::wait::{wait_for_any, wait_for_element};
use async_trait::async_trait;
use dirscrape_core::{Business, Listing, SearchRequest, Site};
use std::time::Duration;
use url::Url;

mod selectors {
    use lazy_static::lazy_static;
    use scraper::Selector;

    pub const QUERY_INPUT: &str = "#query";
    pub const LOCATION_INPUT: &str = "#location";
    pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
    pub const RESULT_ROW: &str = ".result";
    pub const NO_RESULTS: &str = ".no-results";

    lazy_static! {
        pub static ref NAME: Selector = Selector::parse(".business-name").unwrap();
        pub static ref ADDRESS: Selector = Selector::parse(".street-address").unwrap();
        pub static ref PHONE: Selector = Selector::parse(".phones").unwrap();
        pub static ref WEBSITE: Selector = Selector::parse(".links a").unwrap();
    }
}

/// Business directory search: query and location inputs, submit button
pub struct YellowPagesExtractor {
    base_url: Url,
    timeout: Duration,
}

impl YellowPagesExtractor {
    pub fn new(base_url: Url, timeout: Duration) -> Self {
        Self { base_url, timeout }
    }

    /// Read one `.result` row. The website is optional.
    pub fn parse_row(html: &str, page_url: &Url) -> std::result::Result<Listing, RowError> {
        let row = Row::parse(html);

        Ok(Business {
            name: row.required_text(&selectors::NAME, "business-name")?,
            address: row.required_text(&selectors::ADDRESS, "street-address")?,
            phone: row.required_text(&selectors::PHONE, "phones")?,
            website: row.optional_href(&selectors::WEBSITE, page_url),
        }
        .into())
    }
}

#[async_trait]
impl Extractor for YellowPagesExtractor {
    fn site(&self) -> Site {
        Site::YellowPages
    }

    async fn extract(&self, driver: &dyn Driver, request: &SearchRequest) -> Result<Vec<Listing>> {
        tracing::debug!("INIT: loading {}", self.base_url);
        driver.navigate(self.base_url.as_str()).await?;

        wait_for_element(driver, selectors::QUERY_INPUT, self.timeout).await?;
        tracing::debug!("NAVIGATED: search form present");

        driver
            .fill(selectors::QUERY_INPUT, &request.query, false)
            .await?;
        driver
            .fill(selectors::LOCATION_INPUT, &request.location, true)
            .await?;
        driver.click(selectors::SUBMIT_BUTTON).await?;
        tracing::debug!("SEARCH_SUBMITTED: '{}' in '{}'", request.query, request.location);

        let ready = wait_for_any(
            driver,
            &[selectors::RESULT_ROW, selectors::NO_RESULTS],
            self.timeout,
        )
        .await?;
        if ready == selectors::NO_RESULTS {
            tracing::info!("Yellow Pages reports no results for '{}'", request.query);
        }

        let page_url = results_page_url(driver, &self.base_url).await;
        collect_rows(
            driver,
            selectors::RESULT_ROW,
            &page_url,
            "business",
            Self::parse_row,
        )
        .await
    }
}
