//! Stats command implementation.

use std::path::Path;

use anyhow::Result;
use toolstats_core::{StatsReport, ToolStats};

use crate::cli_utils::{failure, load_config, load_item, success};

pub fn run(config: &Path, item: &Path, json: bool) -> Result<()> {
    let stats = ToolStats::new(load_config(config)?);
    let item = load_item(item)?;

    let Some(report) = stats.get_stats(&item) else {
        failure("Item does not have item meta.");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&report));
        success("Successfully sent stats info.");
    }
    Ok(())
}

/// One `Type: .., Value: .., Display: ..` line per category, `-1` for no position
pub fn format_report(report: &StatsReport) -> String {
    report
        .categories
        .iter()
        .map(|entry| {
            format!(
                "Type: {}, Value: {}, Display: {}\n",
                entry.category,
                entry.counter,
                entry.position.unwrap_or(-1)
            )
        })
        .collect()
}
