//! Routes world events to counter increments.

use strum::{Display, IntoEnumIterator};
use tracing::{debug, warn};

use crate::annotation::AnnotationSynchronizer;
use crate::cache::CategoryCache;
use crate::category::Category;
use crate::item::{Item, Material};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum EventKind {
    BlockBreak,
    EntityKill,
}

/// A world event with the acting player's active (main hand) item.
#[derive(Debug)]
pub struct WorldEvent<'a> {
    pub kind: EventKind,
    /// Acting player; `None` for kills without a player killer
    pub actor: Option<&'a str>,
    pub item: &'a mut Item,
}

impl<'a> WorldEvent<'a> {
    pub fn block_break(actor: &'a str, item: &'a mut Item) -> Self {
        Self {
            kind: EventKind::BlockBreak,
            actor: Some(actor),
            item,
        }
    }

    pub fn entity_kill(killer: Option<&'a str>, item: &'a mut Item) -> Self {
        Self {
            kind: EventKind::EntityKill,
            actor: killer,
            item,
        }
    }
}

/// Per-event view over the cache and synchronizer.
pub struct TrackingDispatcher<'a> {
    cache: &'a mut CategoryCache,
    synchronizer: &'a AnnotationSynchronizer,
}

impl<'a> TrackingDispatcher<'a> {
    pub fn new(cache: &'a mut CategoryCache, synchronizer: &'a AnnotationSynchronizer) -> Self {
        Self {
            cache,
            synchronizer,
        }
    }

    /// First category (in declaration order) that contains `material`
    pub fn category_of(&mut self, material: Material) -> Option<Category> {
        Category::iter().find(|&category| self.cache.is_member(category, material))
    }

    /// Increment the matching category of the event's item by one and
    /// re-render its lore line. Returns the category that was incremented.
    pub fn dispatch(&mut self, event: WorldEvent<'_>) -> Option<Category> {
        let Some(actor) = event.actor else {
            debug!("Ignoring {} without a player", event.kind);
            return None;
        };
        let item = event.item;
        let material = item.material;

        let Some(mut meta) = item.meta().cloned() else {
            warn!(
                "Failed to increment stats of {} held by {}: item has no meta",
                material, actor
            );
            return None;
        };

        let Some(category) = self.category_of(material) else {
            warn!(
                "Failed to increment stats of {} held by {}: not a tracked material",
                material, actor
            );
            return None;
        };

        let store = self.synchronizer.store();
        let value = store.counter(&meta, category).saturating_add(1);
        store.set_counter(&mut meta, category, Some(value));
        self.synchronizer.synchronize_meta(&mut meta, category);
        item.set_meta(meta);

        debug!("{} {} -> {} ({})", actor, category, value, event.kind);
        Some(category)
    }
}
