//! CLI `doctor` command — check the data directory and print a load report.

use anyhow::Result;

use naengmyeon::catalog::{Catalog, DATA_FILES};
use naengmyeon::config::NaengmyeonConfig;

/// Check which data files exist, try a full load, and print a report.
pub fn doctor(config: &NaengmyeonConfig) -> Result<()> {
    let data_dir = config.resolved_data_dir();

    println!("Naengmyeon Health Report");
    println!("========================");
    println!();
    println!("Data directory:    {}", data_dir.display());

    if !data_dir.is_dir() {
        println!("Status:            not found");
        println!("Set NAENGMYEON_DATA or [data] data_dir in the config file.");
        return Ok(());
    }

    println!();
    println!("Files:");
    for file in DATA_FILES {
        let path = data_dir.join(file);
        let status = match std::fs::metadata(&path) {
            Ok(meta) => format_bytes(meta.len()),
            Err(_) => "missing (collection will be empty)".to_string(),
        };
        println!("  {file:<20} {status}");
    }
    println!();

    match Catalog::load(&data_dir) {
        Ok(catalog) => {
            println!("Record counts:");
            println!("  Restaurants:     {}", catalog.restaurants.len());
            println!("  Lineages:        {}", catalog.lineages.len());
            println!("  Eating guides:   {}", catalog.guides.len());
            println!("  Side dishes:     {}", catalog.side_menus.side_dishes.len());
            println!("  Courses:         {}", catalog.side_menus.course_examples.len());
            println!();
            println!("Load check:        PASSED");
        }
        Err(e) => {
            println!("Load check:        FAILED");
            println!("  {e}");
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                println!("  caused by: {cause}");
                source = cause.source();
            }
            println!();
            println!("The server will refuse to start until this is fixed.");
        }
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
