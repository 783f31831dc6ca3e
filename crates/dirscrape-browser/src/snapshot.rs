//! Offline driver that replays saved HTML pages.
//!
//! A snapshot has an optional landing page (the search form) and a results
//! page. With a landing page, form operations are checked against it and a
//! click or Enter keystroke moves to the results page. Without one, the search
//! form is assumed: every element is reported present and form operations are
//! only recorded until the submit moves to the results page.

use crate::driver::Driver;
use crate::{Error, Result};
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Landing,
    // No landing page was saved; stands in for the search form
    AssumedForm,
    Results,
}

#[derive(Debug, Default)]
struct SnapshotState {
    stage: Option<Stage>,
    url: Option<String>,
    visited: Vec<String>,
    typed: Vec<(String, String)>,
    actions: Vec<String>,
    close_calls: usize,
}

pub struct SnapshotDriver {
    landing: Option<String>,
    results: String,
    state: Mutex<SnapshotState>,
}

impl SnapshotDriver {
    /// Driver serving only a results page
    pub fn new(results: impl Into<String>) -> Self {
        Self {
            landing: None,
            results: results.into(),
            state: Mutex::new(SnapshotState::default()),
        }
    }

    /// Serve this page before the search is submitted
    pub fn with_landing(mut self, landing: impl Into<String>) -> Self {
        self.landing = Some(landing.into());
        self
    }

    /// Load snapshot pages from disk
    pub fn from_files(results: &Path, landing: Option<&Path>) -> Result<Self> {
        let driver = Self::new(std::fs::read_to_string(results)?);
        match landing {
            Some(path) => Ok(driver.with_landing(std::fs::read_to_string(path)?)),
            None => Ok(driver),
        }
    }

    /// URLs passed to `navigate`, in order
    pub fn visited(&self) -> Vec<String> {
        self.state().visited.clone()
    }

    /// `(selector, text)` pairs passed to `fill`, in order
    pub fn typed(&self) -> Vec<(String, String)> {
        self.state().typed.clone()
    }

    /// Clicks and keystrokes, e.g. `click button[type="submit"]`
    pub fn actions(&self) -> Vec<String> {
        self.state().actions.clone()
    }

    /// How many times `close` was called
    pub fn close_calls(&self) -> usize {
        self.state().close_calls
    }

    fn state(&self) -> MutexGuard<'_, SnapshotState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn current_html(&self, stage: Option<Stage>) -> &str {
        match stage {
            Some(Stage::Landing) => self.landing.as_deref().unwrap_or_default(),
            Some(Stage::Results) => &self.results,
            Some(Stage::AssumedForm) | None => "",
        }
    }

    fn matches(&self, selector: &str) -> Result<Vec<String>> {
        let stage = self.state().stage;
        select_outer_html(self.current_html(stage), selector)
    }

    /// Check a form element exists before acting on it. Without a landing
    /// page there is nothing to check against.
    fn require_form_element(&self, selector: &str) -> Result<()> {
        let stage = self.state().stage;
        match stage {
            None => Err(Error::Browser("no page loaded".to_string())),
            Some(Stage::AssumedForm) => Ok(()),
            Some(stage) => {
                if select_outer_html(self.current_html(Some(stage)), selector)?.is_empty() {
                    Err(Error::ElementNotFound(selector.to_string()))
                } else {
                    Ok(())
                }
            }
        }
    }

    fn submit(&self, action: String) {
        let mut state = self.state();
        state.actions.push(action);
        state.stage = Some(Stage::Results);
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| Error::InvalidSelector(format!("{}: {:?}", selector, e)))
}

fn select_outer_html(html: &str, selector: &str) -> Result<Vec<String>> {
    let selector = parse_selector(selector)?;
    let document = Html::parse_document(html);
    Ok(document.select(&selector).map(|el| el.html()).collect())
}

#[async_trait]
impl Driver for SnapshotDriver {
    async fn navigate(&self, url: &str) -> Result<()> {
        let mut state = self.state();
        state.visited.push(url.to_string());
        state.url = Some(url.to_string());
        state.stage = Some(if self.landing.is_some() {
            Stage::Landing
        } else {
            Stage::AssumedForm
        });
        Ok(())
    }

    async fn is_present(&self, selector: &str) -> Result<bool> {
        if self.state().stage == Some(Stage::AssumedForm) {
            parse_selector(selector)?;
            return Ok(true);
        }
        Ok(!self.matches(selector)?.is_empty())
    }

    async fn fill(&self, selector: &str, text: &str, _clear_first: bool) -> Result<()> {
        self.require_form_element(selector)?;
        self.state()
            .typed
            .push((selector.to_string(), text.to_string()));
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<()> {
        self.require_form_element(selector)?;
        self.submit(format!("click {}", selector));
        Ok(())
    }

    async fn press_enter(&self, selector: &str) -> Result<()> {
        self.require_form_element(selector)?;
        self.submit(format!("enter {}", selector));
        Ok(())
    }

    async fn outer_html_all(&self, selector: &str) -> Result<Vec<Result<String>>> {
        Ok(self.matches(selector)?.into_iter().map(Ok).collect())
    }

    async fn current_url(&self) -> Result<Option<String>> {
        Ok(self.state().url.clone())
    }

    async fn close(&self) -> Result<()> {
        self.state().close_calls += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANDING: &str = r#"<html><body>
        <form><input id="q" name="q"><button type="submit">Go</button></form>
    </body></html>"#;

    const RESULTS: &str = r#"<html><body>
        <ul><li class="item">one</li><li class="item">two</li></ul>
    </body></html>"#;

    #[tokio::test]
    async fn test_results_only_snapshot_assumes_search_form() {
        let driver = SnapshotDriver::new(RESULTS);
        driver.navigate("https://example.com/").await.unwrap();

        assert!(driver.is_present("#search_string").await.unwrap());
        driver.fill("#search_string", "text", true).await.unwrap();
        assert_eq!(
            driver.typed(),
            vec![("#search_string".to_string(), "text".to_string())]
        );
        assert!(driver.outer_html_all(".item").await.unwrap().is_empty());

        driver.press_enter("#search_string").await.unwrap();

        assert!(driver.is_present(".item").await.unwrap());
        assert!(!driver.is_present("#search_string").await.unwrap());
        assert_eq!(driver.outer_html_all(".item").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_landing_snapshot_switches_on_submit() {
        let driver = SnapshotDriver::new(RESULTS).with_landing(LANDING);
        driver.navigate("https://example.com/").await.unwrap();

        assert!(driver.is_present("#q").await.unwrap());
        assert!(!driver.is_present(".item").await.unwrap());

        driver.click("button[type=\"submit\"]").await.unwrap();

        assert!(driver.is_present(".item").await.unwrap());
        assert_eq!(driver.actions(), vec!["click button[type=\"submit\"]"]);
    }

    #[tokio::test]
    async fn test_landing_snapshot_rejects_missing_form_element() {
        let driver = SnapshotDriver::new(RESULTS).with_landing(LANDING);
        driver.navigate("https://example.com/").await.unwrap();

        let err = driver.fill("#location", "Delhi", true).await.unwrap_err();
        assert!(matches!(err, Error::ElementNotFound(_)));
    }

    #[tokio::test]
    async fn test_nothing_present_before_navigation() {
        let driver = SnapshotDriver::new(RESULTS);
        assert!(!driver.is_present(".item").await.unwrap());
        assert!(driver.click(".item").await.is_err());
    }

    #[tokio::test]
    async fn test_outer_html_all_returns_each_match() {
        let driver = SnapshotDriver::new(RESULTS);
        driver.navigate("https://example.com/").await.unwrap();
        driver.click("button[type=\"submit\"]").await.unwrap();

        let rows = driver.outer_html_all(".item").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[1].as_ref().unwrap().contains("two"));
    }

    #[tokio::test]
    async fn test_invalid_selector_is_reported() {
        let driver = SnapshotDriver::new(RESULTS);
        driver.navigate("https://example.com/").await.unwrap();

        let err = driver.is_present("li[").await.unwrap_err();
        assert!(matches!(err, Error::InvalidSelector(_)));
    }

    #[tokio::test]
    async fn test_close_is_counted() {
        let driver = SnapshotDriver::new(RESULTS);
        driver.close().await.unwrap();
        driver.close().await.unwrap();
        assert_eq!(driver.close_calls(), 2);
    }
}
