//! Counter and position marker storage on an item's data container.

use crate::category::Category;
use crate::item::{Item, ItemMeta};

/// Reads and writes per-category integers in item data containers.
///
/// Keys are `<namespace>:<key>`, where `<key>` comes from the category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterStore {
    namespace: String,
}

impl CounterStore {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn counter_key(&self, category: Category) -> String {
        format!("{}:{}", self.namespace, category.counter_key())
    }

    pub fn position_key(&self, category: Category) -> String {
        format!("{}:{}", self.namespace, category.position_key())
    }

    /// Stored counter, 0 if absent
    pub fn counter(&self, meta: &ItemMeta, category: Category) -> i32 {
        meta.data().get_or(&self.counter_key(category), 0)
    }

    /// Write the counter, or remove it when `value` is `None`
    pub fn set_counter(&self, meta: &mut ItemMeta, category: Category, value: Option<i32>) {
        let key = self.counter_key(category);
        match value {
            Some(v) => meta.data_mut().set(key, v),
            None => {
                meta.data_mut().remove(&key);
            }
        }
    }

    pub fn position(&self, meta: &ItemMeta, category: Category) -> Option<i32> {
        meta.data().get(&self.position_key(category))
    }

    pub fn set_position(&self, meta: &mut ItemMeta, category: Category, position: i32) {
        meta.data_mut().set(self.position_key(category), position);
    }

    pub fn clear_position(&self, meta: &mut ItemMeta, category: Category) {
        meta.data_mut().remove(&self.position_key(category));
    }

    /// Counter of an item, 0 if the item has no meta
    pub fn counter_of(&self, item: &Item, category: Category) -> i32 {
        item.meta().map_or(0, |meta| self.counter(meta, category))
    }

    pub fn position_of(&self, item: &Item, category: Category) -> Option<i32> {
        item.meta().and_then(|meta| self.position(meta, category))
    }

    /// Write the counter on an item. Silently does nothing if the item has no meta.
    pub fn set_counter_on(&self, item: &mut Item, category: Category, value: Option<i32>) {
        let Some(mut meta) = item.meta().cloned() else {
            return;
        };
        self.set_counter(&mut meta, category, value);
        item.set_meta(meta);
    }
}
