use crate::listing::{Business, Listing, Product, Site};
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub struct CsvImporter;

impl CsvImporter {
    /// Read a CSV export back into listings for the given site
    pub fn from_reader<R: Read>(site: Site, reader: R) -> Result<Vec<Listing>> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let found: Vec<&str> = headers.iter().collect();
        if found != site.columns() {
            return Err(Error::InvalidStructure(format!(
                "expected columns {:?} for {}, found {:?}",
                site.columns(),
                site.label(),
                found
            )));
        }

        let listings = match site {
            Site::YellowPages => csv_reader
                .deserialize::<Business>()
                .map(|row| row.map(Listing::from))
                .collect::<std::result::Result<Vec<_>, _>>()?,
            Site::IndiaMart => csv_reader
                .deserialize::<Product>()
                .map(|row| row.map(Listing::from))
                .collect::<std::result::Result<Vec<_>, _>>()?,
        };

        tracing::debug!("Read {} {} listings from CSV", listings.len(), site.label());
        Ok(listings)
    }

    /// Read a CSV export from a file
    pub fn from_file(site: Site, path: &Path) -> Result<Vec<Listing>> {
        tracing::debug!("Reading CSV export from: {}", path.display());

        let file = File::open(path)?;
        Self::from_reader(site, BufReader::new(file))
    }

    /// Parse a CSV export from a string
    pub fn from_str(site: Site, content: &str) -> Result<Vec<Listing>> {
        Self::from_reader(site, content.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_products() {
        let csv = "Title,Price\nDell Inspiron 15,\"₹ 45,000\"\nHP Victus,N/A\n";

        let listings = CsvImporter::from_str(Site::IndiaMart, csv).unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].values(), vec!["Dell Inspiron 15", "₹ 45,000"]);
        assert_eq!(listings[1].values(), vec!["HP Victus", "N/A"]);
    }

    #[test]
    fn test_import_rejects_wrong_header() {
        let csv = "Name,Address,Phone,Website\n";
        let result = CsvImporter::from_str(Site::IndiaMart, csv);
        assert!(matches!(result, Err(Error::InvalidStructure(_))));
    }

    #[test]
    fn test_import_rejects_reordered_columns() {
        let csv = "Price,Title\n";
        let result = CsvImporter::from_str(Site::IndiaMart, csv);
        assert!(result.is_err());
    }
}
