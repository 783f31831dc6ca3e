use crate::Result;
use async_trait::async_trait;

/// Browser operations the extractors rely on.
///
/// Selectors are CSS selectors. Every method takes `&self` so a driver can be
/// polled from [`crate::wait::await_condition`] while it is borrowed elsewhere.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Load a URL in the session's page
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Whether at least one element matches the selector right now
    async fn is_present(&self, selector: &str) -> Result<bool>;

    /// Focus the first matching element and type into it, optionally
    /// clearing its current value first
    async fn fill(&self, selector: &str, text: &str, clear_first: bool) -> Result<()>;

    /// Click the first matching element
    async fn click(&self, selector: &str) -> Result<()>;

    /// Send an Enter keystroke to the first matching element
    async fn press_enter(&self, selector: &str) -> Result<()>;

    /// Outer HTML of every matching element.
    ///
    /// The outer `Result` fails when the elements cannot be enumerated; each
    /// inner `Result` reports whether that one element could be read.
    async fn outer_html_all(&self, selector: &str) -> Result<Vec<Result<String>>>;

    /// URL of the currently loaded document, if any
    async fn current_url(&self) -> Result<Option<String>>;

    /// Release the session. Calling it again is a no-op.
    async fn close(&self) -> Result<()>;
}
