use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to access CSV file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to process CSV data: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid CSV structure: {0}")]
    InvalidStructure(String),

    #[error("Listing from {found} cannot be written to a {expected} export")]
    SiteMismatch { expected: String, found: String },

    #[error("Unknown site: {0} (expected yellow-pages or indiamart)")]
    UnknownSite(String),

    #[error("Invalid search: {0}")]
    InvalidSearch(String),
}

pub type Result<T> = std::result::Result<T, Error>;
