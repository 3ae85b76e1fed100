//! Refresh materials command implementation.

use std::path::Path;

use anyhow::Result;
use toolstats_core::ToolStats;

use crate::cli_utils::{failure, load_config, success};

pub fn run(config: &Path, json: bool) -> Result<()> {
    let mut stats = ToolStats::new(load_config(config)?);
    let report = stats.refresh_materials();
    stats.shutdown();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for entry in &report.categories {
        match &entry.error {
            None => success(&format!(
                "{}: loaded {} materials, skipped {}",
                entry.category, entry.loaded, entry.skipped
            )),
            Some(e) => failure(&format!("{}: {}", entry.category, e)),
        }
    }
    println!(
        "{} categories refreshed, {} failed",
        report.succeeded(),
        report.failed()
    );
    Ok(())
}
