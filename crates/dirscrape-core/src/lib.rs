pub mod error;
pub mod export;
pub mod listing;
pub mod search;

pub use error::{Error, Result};
pub use listing::{Business, Listing, NOT_AVAILABLE, Product, Site};
pub use search::SearchRequest;
