use crate::OutputFormat;
use anyhow::Result;
use console::style;
use dirscrape_core::Site;
use serde_json::json;

/// Execute the sites command - lists supported sites and their columns
pub fn execute(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let sites: Vec<_> = Site::ALL
                .iter()
                .map(|site| {
                    json!({
                        "name": site.as_str(),
                        "label": site.label(),
                        "url": site.default_base_url(),
                        "columns": site.columns(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&sites)?);
        }
        _ => {
            println!("\n{}", style("Supported sites").bold().cyan());
            println!("{}", style("===============").cyan());
            for site in Site::ALL {
                println!(
                    "\n{} ({})",
                    style(site.label()).bold(),
                    style(site.as_str()).dim()
                );
                println!("  URL:     {}", site.default_base_url());
                println!("  Columns: {}", site.columns().join(", "));
                println!("  Export:  {}", site.export_file_name());
            }
        }
    }
    Ok(())
}
