use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{info, warn};

use crate::annotation::{AnnotationSynchronizer, SyncOutcome};
use crate::cache::CategoryCache;
use crate::category::Category;
use crate::clock::{Clock, SystemClock};
use crate::config::{Config, ConfigSource};
use crate::counter::CounterStore;
use crate::dispatch::{TrackingDispatcher, WorldEvent};
use crate::item::Item;

/// Stored values of one category on an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub category: Category,
    pub counter: i32,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsReport {
    pub categories: Vec<CategoryStats>,
}

impl StatsReport {
    pub fn get(&self, category: Category) -> Option<&CategoryStats> {
        self.categories.iter().find(|s| s.category == category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRefresh {
    pub category: Category,
    pub loaded: usize,
    pub skipped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CategoryRefresh {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshReport {
    pub categories: Vec<CategoryRefresh>,
}

impl RefreshReport {
    pub fn succeeded(&self) -> usize {
        self.categories.iter().filter(|c| c.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.categories.len() - self.succeeded()
    }
}

/// Item stat tracker.
///
/// Owns the category cache and the lore synchronizer, and exposes the
/// operations the command layer and event feed call.
pub struct ToolStats {
    cache: CategoryCache,
    synchronizer: AnnotationSynchronizer,
}

impl ToolStats {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        let namespace = config.namespace.clone();
        let ttl = config.ttl();
        Self::with_source(Arc::new(config), &namespace, ttl, clock)
    }

    pub fn with_source(
        source: Arc<dyn ConfigSource>,
        namespace: &str,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            cache: CategoryCache::new(source.clone(), clock, ttl),
            synchronizer: AnnotationSynchronizer::new(CounterStore::new(namespace), source),
        }
    }

    pub fn cache(&self) -> &CategoryCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut CategoryCache {
        &mut self.cache
    }

    pub fn store(&self) -> &CounterStore {
        self.synchronizer.store()
    }

    pub fn synchronizer(&self) -> &AnnotationSynchronizer {
        &self.synchronizer
    }

    /// Feed a world event. Returns the category that was incremented.
    pub fn handle_event(&mut self, event: WorldEvent<'_>) -> Option<Category> {
        TrackingDispatcher::new(&mut self.cache, &self.synchronizer).dispatch(event)
    }

    /// Counter and stored position per category; `None` if the item has no meta
    pub fn get_stats(&self, item: &Item) -> Option<StatsReport> {
        let meta = item.meta()?;
        let store = self.store();

        let categories = Category::iter()
            .map(|category| CategoryStats {
                category,
                counter: store.counter(meta, category),
                position: store.position(meta, category),
            })
            .collect();

        Some(StatsReport { categories })
    }

    /// Remove every category's counter and owned lore line.
    ///
    /// Lines are removed from the highest position down so that a removal
    /// never shifts a line another category still has to find.
    pub fn reset_stats(&self, item: &mut Item) -> bool {
        let Some(mut meta) = item.meta().cloned() else {
            warn!("Cannot reset stats of {}: item has no meta", item.material);
            return false;
        };
        let store = self.store();

        let mut categories: Vec<Category> = Category::iter().collect();
        categories.sort_by_key(|&c| std::cmp::Reverse(store.position(&meta, c)));

        for category in categories {
            store.set_counter(&mut meta, category, None);
            self.synchronizer.synchronize_meta(&mut meta, category);
        }

        item.set_meta(meta);
        true
    }

    /// Re-render every category's line
    pub fn update_lore(&self, item: &mut Item) -> Vec<(Category, SyncOutcome)> {
        Category::iter()
            .map(|category| (category, self.synchronizer.synchronize(item, category)))
            .collect()
    }

    /// Drop the whole lore block, including lines other systems wrote.
    ///
    /// Position markers are left in place; the next synchronize pass detects
    /// and clears them.
    pub fn remove_lore(&self, item: &mut Item) -> bool {
        let Some(mut meta) = item.meta().cloned() else {
            warn!("Cannot remove lore of {}: item has no meta", item.material);
            return false;
        };
        meta.set_lore(None);
        item.set_meta(meta);
        true
    }

    /// Reload every category's materials. A failing category does not stop
    /// the others.
    pub fn refresh_materials(&mut self) -> RefreshReport {
        let mut categories = Vec::new();

        for category in Category::iter() {
            let refresh = match self.cache.reload_with_report(category) {
                Ok(outcome) => CategoryRefresh {
                    category,
                    loaded: outcome.loaded,
                    skipped: outcome.skipped,
                    error: None,
                },
                Err(e) => {
                    warn!("Failed to refresh materials for {}: {}", category, e);
                    CategoryRefresh {
                        category,
                        loaded: 0,
                        skipped: 0,
                        error: Some(e.to_string()),
                    }
                }
            };
            categories.push(refresh);
        }

        let report = RefreshReport { categories };
        info!(
            "Refreshed materials: {} succeeded, {} failed",
            report.succeeded(),
            report.failed()
        );
        report
    }

    /// Forget all cached membership
    pub fn shutdown(&mut self) {
        self.cache.invalidate_all();
        info!("Category cache invalidated");
    }
}
