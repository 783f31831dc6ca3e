use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Executable names looked up on PATH when no install location matches
const PATH_CANDIDATES: [&str; 4] = ["google-chrome", "chromium", "chromium-browser", "chrome"];

#[cfg(target_os = "macos")]
const INSTALL_LOCATIONS: &[&str] = &[
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
    "/Applications/Chromium.app/Contents/MacOS/Chromium",
];

#[cfg(target_os = "linux")]
const INSTALL_LOCATIONS: &[&str] = &[
    "/usr/bin/google-chrome",
    "/usr/bin/google-chrome-stable",
    "/usr/bin/chromium",
    "/usr/bin/chromium-browser",
    "/snap/bin/chromium",
];

#[cfg(target_os = "windows")]
const INSTALL_LOCATIONS: &[&str] = &[
    r"C:\Program Files\Google\Chrome\Application\chrome.exe",
    r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const INSTALL_LOCATIONS: &[&str] = &[];

/// Resolves which Chrome binary a scrape session runs
pub struct ChromeFinder {
    explicit: Option<PathBuf>,
}

impl ChromeFinder {
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self { explicit }
    }

    /// An explicit path is used as-is or rejected; it never falls back to
    /// the usual install locations.
    pub fn find(&self) -> Result<PathBuf> {
        if let Some(path) = &self.explicit {
            return check_executable(path);
        }

        let installed = INSTALL_LOCATIONS
            .iter()
            .map(|location| PathBuf::from(*location))
            .find(|path| check_executable(path).is_ok());
        if let Some(path) = installed {
            tracing::debug!("Using Chrome at {}", path.display());
            return Ok(path);
        }

        let on_path = PATH_CANDIDATES
            .iter()
            .find_map(|name| which::which(name).ok());
        if let Some(path) = on_path {
            tracing::debug!("Using Chrome from PATH: {}", path.display());
            return check_executable(&path);
        }

        Err(Error::Browser(format!(
            "Chrome not found in {} or on PATH as {}. Use --chrome-path to specify location.",
            INSTALL_LOCATIONS.join(", "),
            PATH_CANDIDATES.join(", ")
        )))
    }
}

fn check_executable(path: &Path) -> Result<PathBuf> {
    if !path.is_file() {
        return Err(Error::Browser(format!(
            "Chrome not found at: {}",
            path.display()
        )));
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if std::fs::metadata(path)?.permissions().mode() & 0o111 == 0 {
            return Err(Error::Browser(format!(
                "Chrome binary not executable: {}",
                path.display()
            )));
        }
    }

    Ok(path.to_path_buf())
}
