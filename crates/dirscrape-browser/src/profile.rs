use crate::Result;
use std::path::{Path, PathBuf};

/// Throwaway Chrome user-data directory, one per scrape call
pub struct ProfileManager {
    path: PathBuf,
}

impl ProfileManager {
    /// Create a temporary profile that will be deleted on drop
    pub fn temporary() -> Result<Self> {
        let path = tempfile::Builder::new()
            .prefix("dirscrape-profile-")
            .tempdir()?
            .keep();

        tracing::debug!("Created temporary Chrome profile at {}", path.display());
        Ok(Self { path })
    }

    /// Get the profile directory path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ProfileManager {
    fn drop(&mut self) {
        if self.path.exists() {
            if let Err(e) = std::fs::remove_dir_all(&self.path) {
                tracing::debug!("Could not remove profile {}: {}", self.path.display(), e);
            }
        }
    }
}
