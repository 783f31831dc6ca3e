use crate::OutputFormat;
use anyhow::Result;
use console::{Alignment, measure_text_width, pad_str, style, truncate_str};
use dirscrape_core::export::CsvExporter;
use dirscrape_core::{Listing, Site};
use std::io;

/// Widest a cell may get in the pretty table before it is truncated
const PRETTY_CELL_WIDTH: usize = 48;

/// Print listings to stdout in the requested format
pub fn render(site: Site, listings: &[Listing], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => output_json(listings),
        OutputFormat::Csv => output_csv(site, listings),
        OutputFormat::Table => output_table(site, listings),
        OutputFormat::Pretty => output_pretty(site, listings),
    }
}

fn output_json(listings: &[Listing]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(listings)?);
    Ok(())
}

fn output_csv(site: Site, listings: &[Listing]) -> Result<()> {
    CsvExporter::to_writer(site, listings, io::stdout().lock())?;
    Ok(())
}

fn output_table(site: Site, listings: &[Listing]) -> Result<()> {
    for line in table_lines(site, listings, None) {
        println!("{}", line.trim_end());
    }
    Ok(())
}

fn output_pretty(site: Site, listings: &[Listing]) -> Result<()> {
    let lines = table_lines(site, listings, Some(PRETTY_CELL_WIDTH));

    println!("\n{}", style(format!("{} results", site.label())).bold().cyan());
    println!("{}", style("=".repeat(site.label().len() + 8)).cyan());
    println!();

    let mut lines = lines.into_iter();
    if let Some(header) = lines.next() {
        println!("{}", style(header.trim_end()).bold());
    }
    if let Some(rule) = lines.next() {
        println!("{}", style(rule.trim_end()).dim());
    }
    for line in lines {
        println!("{}", line.trim_end());
    }

    println!(
        "\n{} {}",
        style(listings.len()).green().bold(),
        if listings.len() == 1 { "listing" } else { "listings" }
    );
    Ok(())
}

/// Header, rule and one line per listing with columns padded to a common width
pub fn table_lines(site: Site, listings: &[Listing], max_cell_width: Option<usize>) -> Vec<String> {
    let fit = |value: &str| -> String {
        match max_cell_width {
            Some(width) => truncate_str(value, width, "…").into_owned(),
            None => value.to_string(),
        }
    };

    let header: Vec<String> = site.columns().iter().map(|c| c.to_string()).collect();
    let rows: Vec<Vec<String>> = listings
        .iter()
        .map(|listing| listing.values().into_iter().map(|value| fit(value)).collect())
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .map(|row| measure_text_width(&row[col]))
                .chain(std::iter::once(measure_text_width(&header[col])))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let join = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad_str(cell, *width, Alignment::Left, None).into_owned())
            .collect::<Vec<_>>()
            .join("  ")
    };

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(join(&header));
    lines.push(join(&rule));
    lines.extend(rows.iter().map(|row| join(row)));
    lines
}
