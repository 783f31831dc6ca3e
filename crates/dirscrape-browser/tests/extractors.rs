use dirscrape_browser::{
    Error, IndiaMartExtractor, SnapshotDriver, YellowPagesExtractor, run_extraction,
};
use dirscrape_core::{Listing, NOT_AVAILABLE, SearchRequest};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

const TIMEOUT: Duration = Duration::from_millis(200);

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(path).unwrap()
}

fn yellow_pages() -> YellowPagesExtractor {
    YellowPagesExtractor::new(Url::parse("https://www.yellowpages.com/").unwrap(), TIMEOUT)
}

fn indiamart() -> IndiaMartExtractor {
    IndiaMartExtractor::new(Url::parse("https://www.indiamart.com/").unwrap(), TIMEOUT)
}

/// Three product rows, the second without a price: all three come back
#[tokio::test]
async fn test_indiamart_missing_price_becomes_sentinel() {
    let driver = SnapshotDriver::new(fixture("indiamart_results.html"))
        .with_landing(fixture("indiamart_landing.html"));
    let request = SearchRequest::new("Delhi", "Laptops").unwrap();

    let listings = run_extraction(&driver, &indiamart(), &request).await.unwrap();

    assert_eq!(listings.len(), 3);
    assert_eq!(listings[0].values(), vec!["Dell Vostro 3420 Laptop", "₹ 42,500 / Piece"]);
    assert_eq!(listings[1].values(), vec!["HP 15s Intel Core i3 Laptop", NOT_AVAILABLE]);
    assert_eq!(listings[2].values(), vec!["Lenovo IdeaPad Slim 3", "₹ 38,990 / Piece"]);
    assert_eq!(driver.close_calls(), 1);
}

#[tokio::test]
async fn test_indiamart_submits_with_enter_and_ignores_location() {
    let driver = SnapshotDriver::new(fixture("indiamart_results.html"))
        .with_landing(fixture("indiamart_landing.html"));
    let request = SearchRequest::new("Delhi", "Laptops").unwrap();

    run_extraction(&driver, &indiamart(), &request).await.unwrap();

    assert_eq!(driver.visited(), vec!["https://www.indiamart.com/"]);
    assert_eq!(
        driver.typed(),
        vec![("#search_string".to_string(), "Laptops".to_string())]
    );
    assert_eq!(driver.actions(), vec!["enter #search_string"]);
}

#[tokio::test]
async fn test_yellow_pages_fills_form_and_clicks_submit() {
    let driver = SnapshotDriver::new(fixture("yellowpages_results.html"))
        .with_landing(fixture("yellowpages_landing.html"));
    let request = SearchRequest::new("New York, NY", "Pizza").unwrap();

    run_extraction(&driver, &yellow_pages(), &request).await.unwrap();

    assert_eq!(
        driver.typed(),
        vec![
            ("#query".to_string(), "Pizza".to_string()),
            ("#location".to_string(), "New York, NY".to_string()),
        ]
    );
    assert_eq!(driver.actions(), vec!["click button[type=\"submit\"]"]);
}

/// A row missing its phone is dropped; the others survive in order
#[tokio::test]
async fn test_yellow_pages_drops_broken_row_and_keeps_rest() {
    let driver = SnapshotDriver::new(fixture("yellowpages_results.html"))
        .with_landing(fixture("yellowpages_landing.html"));
    let request = SearchRequest::new("New York, NY", "Pizza").unwrap();

    let listings = run_extraction(&driver, &yellow_pages(), &request).await.unwrap();

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].values()[0], "Joe's Pizza");
    assert_eq!(listings[0].values()[3], "https://www.joespizzanyc.com/");
    assert_eq!(listings[1].values()[0], "Lombardi's Pizza");
    assert_eq!(listings[1].values()[3], NOT_AVAILABLE);
    assert!(listings.iter().all(Listing::is_complete));
}

#[tokio::test]
async fn test_zero_results_is_empty_not_error() {
    let request = SearchRequest::new("Delhi", "Unobtainium").unwrap();

    let driver = SnapshotDriver::new(fixture("indiamart_no_results.html"))
        .with_landing(fixture("indiamart_landing.html"));
    let listings = run_extraction(&driver, &indiamart(), &request).await.unwrap();
    assert!(listings.is_empty());

    let driver = SnapshotDriver::new(fixture("yellowpages_no_results.html"))
        .with_landing(fixture("yellowpages_landing.html"));
    let listings = run_extraction(&driver, &yellow_pages(), &request).await.unwrap();
    assert!(listings.is_empty());
}

/// Results never show up: the call fails and the session is still released once
#[tokio::test]
async fn test_results_timeout_fails_and_releases_session() {
    let driver = SnapshotDriver::new("<html><body><p>Loading…</p></body></html>")
        .with_landing(fixture("indiamart_landing.html"));
    let request = SearchRequest::new("Delhi", "Laptops").unwrap();

    let err = run_extraction(&driver, &indiamart(), &request)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { .. }));
    assert!(err.to_string().contains(".lst-clmn-rt"));
    assert_eq!(driver.close_calls(), 1);
}

#[tokio::test]
async fn test_search_form_timeout_aborts_before_typing() {
    let driver = SnapshotDriver::new(fixture("yellowpages_results.html"))
        .with_landing("<html><body><h1>Access denied</h1></body></html>");
    let request = SearchRequest::new("New York, NY", "Pizza").unwrap();

    let err = run_extraction(&driver, &yellow_pages(), &request)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("#query"));
    assert!(driver.typed().is_empty());
    assert_eq!(driver.close_calls(), 1);
}

#[tokio::test]
async fn test_results_only_snapshot_replays_rows() {
    let driver = SnapshotDriver::new(fixture("indiamart_results.html"));
    let request = SearchRequest::new("", "Laptops").unwrap();

    let listings = run_extraction(&driver, &indiamart(), &request).await.unwrap();

    assert_eq!(listings.len(), 3);
    assert_eq!(
        driver.typed(),
        vec![("#search_string".to_string(), "Laptops".to_string())]
    );
    assert_eq!(driver.actions(), vec!["enter #search_string"]);
    assert_eq!(driver.close_calls(), 1);
}

/// Without a landing page the Yellow Pages form steps are recorded, not checked
#[tokio::test]
async fn test_results_only_snapshot_yellow_pages() {
    let driver = SnapshotDriver::new(fixture("yellowpages_results.html"));
    let request = SearchRequest::new("New York, NY", "Pizza").unwrap();

    let listings = run_extraction(&driver, &yellow_pages(), &request).await.unwrap();

    assert_eq!(listings.len(), 2);
    assert_eq!(driver.typed().len(), 2);
    assert_eq!(driver.actions(), vec!["click button[type=\"submit\"]"]);
}

#[tokio::test]
async fn test_results_only_snapshot_with_no_results() {
    let driver = SnapshotDriver::new(fixture("indiamart_no_results.html"));
    let request = SearchRequest::new("Delhi", "Unobtainium").unwrap();

    let listings = run_extraction(&driver, &indiamart(), &request).await.unwrap();

    assert!(listings.is_empty());
}
