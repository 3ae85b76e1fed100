//! Keeps each category's lore line in step with its counter.
//!
//! Every category owns at most one lore line, at the index stored in its
//! position marker. Synchronizing replaces that single line in place, appends
//! it when the category has no line yet, or removes it when the counter has
//! dropped to zero. Lines owned by nobody (or by other categories) keep their
//! content and relative order.

use std::sync::Arc;

use tracing::{error, warn};

use crate::category::Category;
use crate::config::ConfigSource;
use crate::counter::CounterStore;
use crate::item::{Item, ItemMeta};

/// What a synchronize pass did to the item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Item has no meta; nothing was touched
    NoMeta,
    /// Line written at `position`
    Rendered { position: usize },
    /// Counter is zero or unset; the owned line (if any) and the marker are gone
    Removed,
    /// Stored marker did not point at a line; marker cleared, lore untouched
    InvalidPosition { position: i32, lore_len: usize },
}

/// Render a lore template.
///
/// The first `%d` is replaced by `value` and `%%` becomes `%`. Anything else
/// is copied verbatim.
pub fn render_template(template: &str, value: i32) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    let mut substituted = false;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some('d') if !substituted => {
                chars.next();
                out.push_str(&value.to_string());
                substituted = true;
            }
            _ => out.push('%'),
        }
    }

    out
}

pub struct AnnotationSynchronizer {
    store: CounterStore,
    source: Arc<dyn ConfigSource>,
}

impl AnnotationSynchronizer {
    pub fn new(store: CounterStore, source: Arc<dyn ConfigSource>) -> Self {
        Self { store, source }
    }

    pub fn store(&self) -> &CounterStore {
        &self.store
    }

    /// Configured template for `category`, or the built-in one if the
    /// configuration has none
    pub fn template(&self, category: Category) -> String {
        self.source.message_template(category).unwrap_or_else(|| {
            warn!("No message configured for {}, using default", category);
            category.default_message().to_string()
        })
    }

    /// Synchronize one category's line on an item.
    ///
    /// Reads the meta once, mutates the copy and writes it back once.
    pub fn synchronize(&self, item: &mut Item, category: Category) -> SyncOutcome {
        let Some(mut meta) = item.meta().cloned() else {
            warn!(
                "Cannot update lore of {}: item has no meta ({})",
                item.material, category
            );
            return SyncOutcome::NoMeta;
        };

        let outcome = self.synchronize_meta(&mut meta, category);
        item.set_meta(meta);
        outcome
    }

    pub fn synchronize_meta(&self, meta: &mut ItemMeta, category: Category) -> SyncOutcome {
        let mut lore = meta.lore().to_vec();
        let value = self.store.counter(meta, category);

        let display_pos = match self.store.position(meta, category) {
            Some(position) => match usize::try_from(position) {
                Ok(pos) if pos < lore.len() => pos,
                _ => {
                    error!(
                        "Position marker of {} holds invalid value {} for lore of {} lines",
                        category,
                        position,
                        lore.len()
                    );
                    self.store.clear_position(meta, category);
                    return SyncOutcome::InvalidPosition {
                        position,
                        lore_len: lore.len(),
                    };
                }
            },
            None => {
                let pos = lore.len();
                self.store
                    .set_position(meta, category, i32::try_from(pos).unwrap_or(i32::MAX));
                pos
            }
        };

        if value <= 0 {
            if display_pos < lore.len() {
                lore.remove(display_pos);
            }
            self.store.clear_position(meta, category);
            store_lore(meta, lore);
            return SyncOutcome::Removed;
        }

        let line = render_template(&self.template(category), value);
        if display_pos < lore.len() {
            lore.remove(display_pos);
        }
        lore.insert(display_pos, line);
        store_lore(meta, lore);

        SyncOutcome::Rendered {
            position: display_pos,
        }
    }
}

fn store_lore(meta: &mut ItemMeta, lore: Vec<String>) {
    if lore.is_empty() {
        meta.set_lore(None);
    } else {
        meta.set_lore(Some(lore));
    }
}
