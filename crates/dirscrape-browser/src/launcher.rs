use crate::{Error, Result};
use chromiumoxide::browser::BrowserConfig;
use std::path::PathBuf;
use std::time::Duration;

/// Browser session settings, independent of the site being scraped
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Explicit Chrome binary; searched for when unset
    pub chrome_path: Option<PathBuf>,
    pub headless: bool,
    pub sandbox: bool,
    pub window_size: (u32, u32),
    /// Upper bound for a single DevTools request
    pub request_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            chrome_path: None,
            headless: true,
            sandbox: true,
            window_size: (1280, 900),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Turns a [`SessionConfig`] into a chromiumoxide launch configuration
pub struct SessionLauncher {
    chrome_path: PathBuf,
    profile_path: PathBuf,
    config: SessionConfig,
}

impl SessionLauncher {
    pub fn new(chrome_path: PathBuf, profile_path: PathBuf, config: SessionConfig) -> Self {
        Self {
            chrome_path,
            profile_path,
            config,
        }
    }

    /// Build the chromiumoxide browser configuration
    pub fn browser_config(&self) -> Result<BrowserConfig> {
        let mut builder = BrowserConfig::builder()
            .chrome_executable(&self.chrome_path)
            .user_data_dir(&self.profile_path)
            .request_timeout(self.config.request_timeout)
            .args(self.build_args());

        if !self.config.headless {
            builder = builder.with_head();
        }
        if !self.config.sandbox {
            builder = builder.no_sandbox();
        }

        builder
            .build()
            .map_err(|e| Error::Browser(format!("Invalid browser configuration: {}", e)))
    }

    /// Extra Chrome command-line arguments
    fn build_args(&self) -> Vec<String> {
        let (width, height) = self.config.window_size;

        vec![
            "--no-first-run".to_string(),
            "--no-default-browser-check".to_string(),
            format!("--window-size={},{}", width, height),
            "--lang=en-US".to_string(),
        ]
    }
}
