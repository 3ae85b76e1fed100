//! Common CLI utility functions shared across commands.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use toolstats_core::{Config, Item, ToolStats};
use tracing::info;

/// Load the config, writing the default one first if the file is missing.
pub fn load_config(path: &Path) -> Result<Config> {
    if Config::write_default(path)
        .with_context(|| format!("Failed to write default config to {}", path.display()))?
    {
        info!("Created {}", path.display());
    }
    Config::load(path).with_context(|| format!("Failed to load config from {}", path.display()))
}

pub fn load_item(path: &Path) -> Result<Item> {
    toolstats_core::load_item(path)
        .with_context(|| format!("Failed to load item from {}", path.display()))
}

pub fn save_item(path: &Path, item: &Item) -> Result<()> {
    toolstats_core::save_item(path, item)
        .with_context(|| format!("Failed to save item to {}", path.display()))
}

/// Load the item, apply `f`, and save it back.
pub fn with_item<T>(
    config: &Path,
    item_path: &Path,
    f: impl FnOnce(&mut ToolStats, &mut Item) -> T,
) -> Result<T> {
    let mut stats = ToolStats::new(load_config(config)?);
    let mut item = load_item(item_path)?;

    let result = f(&mut stats, &mut item);

    save_item(item_path, &item)?;
    stats.shutdown();
    Ok(result)
}

pub fn success(message: &str) {
    println!("{}", message.green());
}

pub fn failure(message: &str) {
    println!("{}", message.red());
}
