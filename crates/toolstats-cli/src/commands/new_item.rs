//! New item command implementation.

use std::path::Path;

use anyhow::Result;
use toolstats_core::{Item, ItemMeta, Material};

use crate::cli_utils::{save_item, success};

pub fn run(item_path: &Path, material: &str, lore: Vec<String>, no_meta: bool) -> Result<()> {
    let material = Material::parse_strict(material)?;

    let item = if no_meta {
        Item::without_meta(material)
    } else if lore.is_empty() {
        Item::new(material)
    } else {
        Item::with_meta(material, ItemMeta::with_lore(lore))
    };

    save_item(item_path, &item)?;
    success(&format!("Created {} at {}", material, item_path.display()));
    Ok(())
}
