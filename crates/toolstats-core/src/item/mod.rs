//! Host-side item model.
//!
//! This module contains the item representation the core operates on:
//! - `Material` - item type identifier
//! - `DataContainer` - persistent per-item integer store
//! - `ItemMeta` - data container plus the lore block
//! - `Item` - a material with optional meta

mod material;

pub use material::*;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Persistent key-value store attached to an item.
///
/// Survives item serialization. Keys are namespaced strings
/// such as `toolstats:toolStats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataContainer {
    values: BTreeMap<String, i32>,
}

impl DataContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<i32> {
        self.values.get(key).copied()
    }

    pub fn get_or(&self, key: &str, default: i32) -> i32 {
        self.get(key).unwrap_or(default)
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: i32) {
        self.values.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<i32> {
        self.values.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Item metadata: persistent data plus the lore block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMeta {
    #[serde(default, skip_serializing_if = "DataContainer::is_empty")]
    data: DataContainer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lore: Option<Vec<String>>,
}

impl ItemMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lore<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data: DataContainer::new(),
            lore: Some(lines.into_iter().map(Into::into).collect()),
        }
    }

    pub fn data(&self) -> &DataContainer {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut DataContainer {
        &mut self.data
    }

    /// Lore lines; an unset lore reads as empty
    pub fn lore(&self) -> &[String] {
        self.lore.as_deref().unwrap_or(&[])
    }

    pub fn has_lore(&self) -> bool {
        self.lore.is_some()
    }

    pub fn set_lore(&mut self, lore: Option<Vec<String>>) {
        self.lore = lore;
    }
}

/// An item instance: a material and, usually, its meta.
///
/// Some item representations carry no meta at all. The core treats those as
/// untrackable and leaves them unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub material: Material,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    meta: Option<ItemMeta>,
}

impl Item {
    /// Create an item with empty meta
    pub fn new(material: Material) -> Self {
        Self {
            material,
            meta: Some(ItemMeta::new()),
        }
    }

    pub fn with_meta(material: Material, meta: ItemMeta) -> Self {
        Self {
            material,
            meta: Some(meta),
        }
    }

    pub fn without_meta(material: Material) -> Self {
        Self {
            material,
            meta: None,
        }
    }

    pub fn meta(&self) -> Option<&ItemMeta> {
        self.meta.as_ref()
    }

    pub fn has_meta(&self) -> bool {
        self.meta.is_some()
    }

    /// Replace the item's meta with an updated copy
    pub fn set_meta(&mut self, meta: ItemMeta) {
        self.meta = Some(meta);
    }

    /// Lore lines, empty when the item has no meta or no lore
    pub fn lore(&self) -> &[String] {
        self.meta.as_ref().map(ItemMeta::lore).unwrap_or(&[])
    }
}
