use crate::listing::{Listing, Site};
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct CsvExporter;

impl CsvExporter {
    /// Write listings as CSV: header row first, then one record per listing
    pub fn to_writer<W: Write>(site: Site, listings: &[Listing], writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(site.columns())?;

        for listing in listings {
            if listing.site() != site {
                return Err(Error::SiteMismatch {
                    expected: site.label().to_string(),
                    found: listing.site().label().to_string(),
                });
            }
            csv_writer.write_record(listing.values())?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Write listings to a CSV file
    pub fn to_file(site: Site, listings: &[Listing], path: &Path) -> Result<()> {
        tracing::debug!("Writing CSV export to: {}", path.display());

        let file = File::create(path)?;
        Self::to_writer(site, listings, BufWriter::new(file))?;

        tracing::info!(
            "Exported {} {} listings to {}",
            listings.len(),
            site.label(),
            path.display()
        );

        Ok(())
    }

    /// Render listings as a CSV string
    pub fn to_string(site: Site, listings: &[Listing]) -> Result<String> {
        let mut buffer = Vec::new();
        Self::to_writer(site, listings, &mut buffer)?;

        String::from_utf8(buffer)
            .map_err(|e| Error::InvalidStructure(format!("export is not UTF-8: {}", e)))
    }
}
