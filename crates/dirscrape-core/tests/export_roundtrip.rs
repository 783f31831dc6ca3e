use dirscrape_core::export::{CsvExporter, CsvImporter};
use dirscrape_core::{Business, Listing, NOT_AVAILABLE, Product, Site};

fn businesses() -> Vec<Listing> {
    vec![
        Business {
            name: "Joe's Pizza".to_string(),
            address: "7 Carmine St, New York, NY 10014".to_string(),
            phone: "(212) 366-1182".to_string(),
            website: "https://www.joespizzanyc.com/".to_string(),
        }
        .into(),
        Business {
            name: "Lombardi's \"Original\" Pizza".to_string(),
            address: "32 Spring St".to_string(),
            phone: "(212) 941-7994".to_string(),
            website: NOT_AVAILABLE.to_string(),
        }
        .into(),
    ]
}

/// Exporting N listings and reading them back yields N identical records
#[test]
fn test_business_export_roundtrip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(Site::YellowPages.export_file_name());
    let listings = businesses();

    CsvExporter::to_file(Site::YellowPages, &listings, &path).unwrap();
    let restored = CsvImporter::from_file(Site::YellowPages, &path).unwrap();

    assert_eq!(restored, listings);
}

#[test]
fn test_export_preserves_column_order() {
    let csv = CsvExporter::to_string(Site::YellowPages, &businesses()).unwrap();
    let header = csv.lines().next().unwrap();

    assert_eq!(header, Site::YellowPages.columns().join(","));
}

#[test]
fn test_product_export_roundtrip_keeps_unicode() {
    let listings: Vec<Listing> = vec![
        Product {
            title: "Lenovo IdeaPad Slim 3 – 15.6\"".to_string(),
            price: "₹ 38,990/Piece".to_string(),
        }
        .into(),
        Product {
            title: "Refurbished ThinkPad T480".to_string(),
            price: NOT_AVAILABLE.to_string(),
        }
        .into(),
    ];

    let csv = CsvExporter::to_string(Site::IndiaMart, &listings).unwrap();
    let restored = CsvImporter::from_str(Site::IndiaMart, &csv).unwrap();

    assert_eq!(restored.len(), 2);
    assert_eq!(restored, listings);
}

#[test]
fn test_empty_export_roundtrip() {
    let csv = CsvExporter::to_string(Site::IndiaMart, &[]).unwrap();
    let restored = CsvImporter::from_str(Site::IndiaMart, &csv).unwrap();

    assert!(restored.is_empty());
}
