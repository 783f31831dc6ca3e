//! Browser side of dirscrape: sessions, waits and the site extractors

mod chrome_driver;
mod chrome_finder;
mod driver;
mod error;
pub mod extract;
mod launcher;
mod profile;
mod scrape;
mod snapshot;
pub mod wait;

pub use chrome_driver::ChromeDriver;
pub use chrome_finder::ChromeFinder;
pub use driver::Driver;
pub use error::{Error, Result};
pub use extract::{
    DEFAULT_TIMEOUT, Extractor, IndiaMartExtractor, RowError, YellowPagesExtractor,
    extractor_for, run_extraction,
};
pub use launcher::{SessionConfig, SessionLauncher};
pub use profile::ProfileManager;
pub use scrape::{ScrapeOptions, scrape};
pub use snapshot::SnapshotDriver;
