use crate::{Error, Result};

/// User input for one scrape invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub location: String,
    pub query: String,
}

impl SearchRequest {
    /// Build a request, trimming both inputs. The query must not be empty.
    pub fn new(location: impl Into<String>, query: impl Into<String>) -> Result<Self> {
        let location = location.into().trim().to_string();
        let query = query.into().trim().to_string();

        if query.is_empty() {
            return Err(Error::InvalidSearch("search term is empty".to_string()));
        }

        Ok(Self { location, query })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_trims_inputs() {
        let request = SearchRequest::new("  Delhi ", " Laptops\n").unwrap();
        assert_eq!(request.location, "Delhi");
        assert_eq!(request.query, "Laptops");
    }

    #[test]
    fn test_search_request_rejects_empty_query() {
        let result = SearchRequest::new("Delhi", "   ");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("search term"));
    }

    #[test]
    fn test_search_request_allows_empty_location() {
        let request = SearchRequest::new("", "Laptops").unwrap();
        assert!(request.location.is_empty());
    }
}
