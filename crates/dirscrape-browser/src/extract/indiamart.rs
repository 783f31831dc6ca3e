use super::row::{Row, RowError};
use super::{Extractor, collect_rows, results_page_url};
use crate::Result;
use crate::driver::Driver;
use crate::wait::{wait_for_any, wait_for_element};
use async_trait::async_trait;
use dirscrape_core::{Listing, Product, SearchRequest, Site};
use std::time::Duration;
use url::Url;

mod selectors {
    use lazy_static::lazy_static;
    use scraper::Selector;

    pub const SEARCH_INPUT: &str = "#search_string";
    pub const PRODUCT_ROW: &str = ".lst-clmn-rt";
    pub const NO_RESULTS: &str = ".no-rslt";

    lazy_static! {
        pub static ref TITLE: Selector = Selector::parse(".prod-name").unwrap();
        pub static ref PRICE: Selector = Selector::parse(".price").unwrap();
    }
}

/// Product marketplace search: one free-text box submitted with Enter.
///
/// The site has no location input, so the request's location is not used.
pub struct IndiaMartExtractor {
    base_url: Url,
    timeout: Duration,
}

impl IndiaMartExtractor {
    pub fn new(base_url: Url, timeout: Duration) -> Self {
        Self { base_url, timeout }
    }

    /// Read one product row. The price is optional.
    pub fn parse_row(html: &str, _page_url: &Url) -> std::result::Result<Listing, RowError> {
        let row = Row::parse(html);

        Ok(Product {
            title: row.required_text(&selectors::TITLE, "prod-name")?,
            price: row.optional_text(&selectors::PRICE),
        }
        .into())
    }
}

#[async_trait]
impl Extractor for IndiaMartExtractor {
    fn site(&self) -> Site {
        Site::IndiaMart
    }

    async fn extract(&self, driver: &dyn Driver, request: &SearchRequest) -> Result<Vec<Listing>> {
        tracing::debug!("INIT: loading {}", self.base_url);
        driver.navigate(self.base_url.as_str()).await?;

        wait_for_element(driver, selectors::SEARCH_INPUT, self.timeout).await?;
        tracing::debug!("NAVIGATED: search box present");

        driver
            .fill(selectors::SEARCH_INPUT, &request.query, false)
            .await?;
        driver.press_enter(selectors::SEARCH_INPUT).await?;
        tracing::debug!("SEARCH_SUBMITTED: '{}'", request.query);

        let ready = wait_for_any(
            driver,
            &[selectors::PRODUCT_ROW, selectors::NO_RESULTS],
            self.timeout,
        )
        .await?;
        if ready == selectors::NO_RESULTS {
            tracing::info!("IndiaMART reports no results for '{}'", request.query);
        }

        let page_url = results_page_url(driver, &self.base_url).await;
        collect_rows(
            driver,
            selectors::PRODUCT_ROW,
            &page_url,
            "product",
            Self::parse_row,
        )
        .await
    }
}
