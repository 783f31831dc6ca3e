use dirscrape_core::NOT_AVAILABLE;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use url::Url;

/// Why a single result row was skipped
#[derive(Error, Debug)]
pub enum RowError {
    #[error("missing {0} element")]
    MissingField(&'static str),

    #[error("{0} element has no text")]
    EmptyField(&'static str),

    #[error("could not read row: {0}")]
    Snapshot(String),
}

/// One result row, parsed from its outer HTML
pub(crate) struct Row {
    fragment: Html,
}

impl Row {
    pub(crate) fn parse(outer_html: &str) -> Self {
        Self {
            fragment: Html::parse_fragment(outer_html),
        }
    }

    fn first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.fragment.select(selector).next()
    }

    /// Text of a field the row cannot do without
    pub(crate) fn required_text(
        &self,
        selector: &Selector,
        field: &'static str,
    ) -> Result<String, RowError> {
        let element = self.first(selector).ok_or(RowError::MissingField(field))?;
        let text = visible_text(element);
        if text.is_empty() {
            return Err(RowError::EmptyField(field));
        }
        Ok(text)
    }

    /// Text of an optional field, or the `N/A` sentinel
    pub(crate) fn optional_text(&self, selector: &Selector) -> String {
        self.first(selector)
            .map(visible_text)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// `href` of an optional link resolved against the page URL, or `N/A`
    pub(crate) fn optional_href(&self, selector: &Selector, page_url: &Url) -> String {
        let Some(href) = self
            .first(selector)
            .and_then(|element| element.value().attr("href"))
            .map(str::trim)
            .filter(|href| !href.is_empty())
        else {
            return NOT_AVAILABLE.to_string();
        };

        match page_url.join(href) {
            Ok(url) => url.to_string(),
            Err(_) => href.to_string(),
        }
    }
}

/// Element text with runs of whitespace collapsed, like a browser renders it
fn visible_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
