use crate::driver::Driver;
use crate::launcher::{SessionConfig, SessionLauncher};
use crate::{ChromeFinder, Error, ProfileManager, Result};
use async_trait::async_trait;
use chromiumoxide::browser::Browser;
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

const CLEAR_VALUE_JS: &str = "function() { \
    this.value = ''; \
    this.dispatchEvent(new Event('input', { bubbles: true })); \
}";

/// A real Chrome session driven over the DevTools Protocol
pub struct ChromeDriver {
    browser: Mutex<Option<Browser>>,
    page: Page,
    handler_task: JoinHandle<()>,
    // Dropped after the browser has exited
    _profile: ProfileManager,
}

impl ChromeDriver {
    /// Launch a fresh Chrome with its own temporary profile and open a blank page
    pub async fn launch(config: &SessionConfig) -> Result<Self> {
        let chrome_binary = ChromeFinder::new(config.chrome_path.clone()).find()?;
        let profile = ProfileManager::temporary()?;

        let launcher = SessionLauncher::new(
            chrome_binary.clone(),
            profile.path().to_path_buf(),
            config.clone(),
        );

        tracing::info!("Launching Chrome from {}", chrome_binary.display());
        let (mut browser, mut handler) = Browser::launch(launcher.browser_config()?)
            .await
            .map_err(|e| Error::Browser(format!("Failed to launch Chrome: {}", e)))?;

        // The handler must be polled for any page command to complete
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                let _ = browser.close().await;
                let _ = browser.wait().await;
                handler_task.abort();
                return Err(e.into());
            }
        };

        tracing::debug!("Chrome session ready");

        Ok(Self {
            browser: Mutex::new(Some(browser)),
            page,
            handler_task,
            _profile: profile,
        })
    }

    async fn element(&self, selector: &str) -> Result<Element> {
        self.page
            .find_element(selector)
            .await
            .map_err(|e| Error::ElementNotFound(format!("{} ({})", selector, e)))
    }
}

#[async_trait]
impl Driver for ChromeDriver {
    async fn navigate(&self, url: &str) -> Result<()> {
        tracing::debug!("Navigating to {}", url);
        self.page
            .goto(url)
            .await
            .map_err(|e| Error::Browser(format!("Failed to load {}: {}", url, e)))?;
        Ok(())
    }

    async fn is_present(&self, selector: &str) -> Result<bool> {
        let elements = self.page.find_elements(selector).await?;
        Ok(!elements.is_empty())
    }

    async fn fill(&self, selector: &str, text: &str, clear_first: bool) -> Result<()> {
        let element = self.element(selector).await?;
        element.click().await?;

        if clear_first {
            element.call_js_fn(CLEAR_VALUE_JS, false).await?;
        }

        element.type_str(text).await?;
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<()> {
        self.element(selector).await?.click().await?;
        Ok(())
    }

    async fn press_enter(&self, selector: &str) -> Result<()> {
        self.element(selector).await?.press_key("Enter").await?;
        Ok(())
    }

    async fn outer_html_all(&self, selector: &str) -> Result<Vec<Result<String>>> {
        let elements = self.page.find_elements(selector).await?;
        let mut rows = Vec::with_capacity(elements.len());

        for element in elements {
            let row = match element.outer_html().await {
                Ok(Some(html)) => Ok(html),
                Ok(None) => Err(Error::ElementNotFound(format!(
                    "{} element has no HTML",
                    selector
                ))),
                Err(e) => Err(e.into()),
            };
            rows.push(row);
        }

        Ok(rows)
    }

    async fn current_url(&self) -> Result<Option<String>> {
        Ok(self.page.url().await?)
    }

    async fn close(&self) -> Result<()> {
        let Some(mut browser) = self.browser.lock().await.take() else {
            return Ok(());
        };

        tracing::debug!("Closing Chrome session");
        let closed = browser.close().await;
        if let Err(e) = browser.wait().await {
            tracing::debug!("Chrome process did not exit cleanly: {}", e);
        }
        self.handler_task.abort();

        closed?;
        Ok(())
    }
}
