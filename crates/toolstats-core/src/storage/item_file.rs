//! JSON item files.
//!
//! Stand-in for the host's own item serialization: the CLI keeps the held
//! item in a file between runs.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::item::Item;

pub fn load_item<P: AsRef<Path>>(path: P) -> Result<Item> {
    let content = fs::read_to_string(&path)?;
    parse_item(&content)
}

pub fn save_item<P: AsRef<Path>>(path: P, item: &Item) -> Result<()> {
    let content = serde_json::to_string_pretty(item)?;
    fs::write(path, content)?;
    Ok(())
}

fn parse_item(content: &str) -> Result<Item> {
    serde_json::from_str(content).map_err(|e| Error::ItemParseError(e.to_string()))
}
