use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder for an optional field whose element is absent from the page
pub const NOT_AVAILABLE: &str = "N/A";

/// A directory that can be scraped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    /// Business directory: name, address, phone, website
    YellowPages,
    /// Product marketplace: title, price
    IndiaMart,
}

impl Site {
    pub const ALL: [Site; 2] = [Site::YellowPages, Site::IndiaMart];

    /// Stable identifier, used in file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Site::YellowPages => "yellowpages",
            Site::IndiaMart => "indiamart",
        }
    }

    /// Human readable name
    pub fn label(&self) -> &'static str {
        match self {
            Site::YellowPages => "Yellow Pages",
            Site::IndiaMart => "IndiaMART",
        }
    }

    /// Column names in export order
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Site::YellowPages => &["Name", "Address", "Phone", "Website"],
            Site::IndiaMart => &["Title", "Price"],
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Site::YellowPages => "https://www.yellowpages.com/",
            Site::IndiaMart => "https://www.indiamart.com/",
        }
    }

    /// Default file name for a CSV export of this site's results
    pub fn export_file_name(&self) -> String {
        format!("{}_scrape_results.csv", self.as_str())
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Site {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect();

        match normalized.as_str() {
            "yellowpages" | "yp" => Ok(Site::YellowPages),
            "indiamart" | "indianmart" | "im" => Ok(Site::IndiaMart),
            _ => Err(Error::UnknownSite(s.to_string())),
        }
    }
}

/// A business row from the Yellow Pages directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Business {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub website: String,
}

/// A product row from the IndiaMART marketplace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    pub title: String,
    pub price: String,
}

/// One extracted record; its shape depends on the site it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Listing {
    Business(Business),
    Product(Product),
}

impl Listing {
    pub fn site(&self) -> Site {
        match self {
            Listing::Business(_) => Site::YellowPages,
            Listing::Product(_) => Site::IndiaMart,
        }
    }

    /// Field values in the same order as [`Site::columns`]
    pub fn values(&self) -> Vec<&str> {
        match self {
            Listing::Business(b) => vec![&b.name, &b.address, &b.phone, &b.website],
            Listing::Product(p) => vec![&p.title, &p.price],
        }
    }

    /// True when every mandatory field is non-empty and every optional
    /// field holds either a value or the `N/A` sentinel
    pub fn is_complete(&self) -> bool {
        let optional_ok = |v: &str| !v.trim().is_empty();
        match self {
            Listing::Business(b) => {
                !b.name.trim().is_empty()
                    && !b.address.trim().is_empty()
                    && !b.phone.trim().is_empty()
                    && optional_ok(&b.website)
            }
            Listing::Product(p) => !p.title.trim().is_empty() && optional_ok(&p.price),
        }
    }
}

impl From<Business> for Listing {
    fn from(business: Business) -> Self {
        Listing::Business(business)
    }
}

impl From<Product> for Listing {
    fn from(product: Product) -> Self {
        Listing::Product(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business(website: &str) -> Listing {
        Business {
            name: "Joe's Pizza".to_string(),
            address: "7 Carmine St".to_string(),
            phone: "(212) 366-1182".to_string(),
            website: website.to_string(),
        }
        .into()
    }

    #[test]
    fn test_site_parses_identifiers_and_labels() {
        assert_eq!("yellowpages".parse::<Site>().unwrap(), Site::YellowPages);
        assert_eq!("Yellow Pages".parse::<Site>().unwrap(), Site::YellowPages);
        assert_eq!("yellow-pages".parse::<Site>().unwrap(), Site::YellowPages);
        assert_eq!("IndiaMART".parse::<Site>().unwrap(), Site::IndiaMart);
        assert_eq!("IndianMart".parse::<Site>().unwrap(), Site::IndiaMart);
        assert!("craigslist".parse::<Site>().is_err());
    }

    #[test]
    fn test_export_file_name_uses_identifier() {
        assert_eq!(
            Site::YellowPages.export_file_name(),
            "yellowpages_scrape_results.csv"
        );
        assert_eq!(
            Site::IndiaMart.export_file_name(),
            "indiamart_scrape_results.csv"
        );
    }

    #[test]
    fn test_values_follow_column_order() {
        let listing = business("https://joespizzanyc.com/");
        assert_eq!(listing.site().columns().len(), listing.values().len());
        assert_eq!(listing.values()[0], "Joe's Pizza");
        assert_eq!(listing.values()[3], "https://joespizzanyc.com/");
    }

    #[test]
    fn test_is_complete_accepts_sentinel() {
        assert!(business(NOT_AVAILABLE).is_complete());
        assert!(!business("").is_complete());

        let product: Listing = Product {
            title: "".to_string(),
            price: "₹ 45,000".to_string(),
        }
        .into();
        assert!(!product.is_complete());
    }

    #[test]
    fn test_listing_serializes_with_column_names() {
        let json = serde_json::to_value(business(NOT_AVAILABLE)).unwrap();
        assert_eq!(json["Name"], "Joe's Pizza");
        assert_eq!(json["Website"], "N/A");
    }
}
