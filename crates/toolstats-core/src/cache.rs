//! Time-bounded cache of category membership.
//!
//! Membership lists come from configuration as strings and are parsed into
//! `Material`s on reload. A category is reloaded on first use, when its entry
//! is older than the TTL, or on explicit request. The cache lives for the
//! process only; `invalidate_all` forces every category cold again.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use crate::category::Category;
use crate::clock::Clock;
use crate::config::ConfigSource;
use crate::error::{Error, Result};
use crate::item::Material;

/// Result of a single category reload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReloadOutcome {
    pub category: Category,
    /// Distinct materials now in the category
    pub loaded: usize,
    /// Config entries that did not name a known material
    pub skipped: usize,
}

#[derive(Debug, Default)]
struct CacheEntry {
    members: HashSet<Material>,
    /// `None` until the first successful reload
    last_refreshed_at: Option<i64>,
}

pub struct CategoryCache {
    source: Arc<dyn ConfigSource>,
    clock: Arc<dyn Clock>,
    ttl_ms: i64,
    entries: HashMap<Category, CacheEntry>,
}

impl CategoryCache {
    pub fn new(source: Arc<dyn ConfigSource>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            source,
            clock,
            ttl_ms: i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX),
            entries: HashMap::new(),
        }
    }

    /// Whether `material` belongs to `category`, reloading first if the
    /// entry was never populated or has outlived the TTL.
    ///
    /// Never fails. If the reload fails, the previously cached membership
    /// answers (empty if there is none) and the failure is stamped like a
    /// reload, so the next attempt waits out the TTL.
    pub fn is_member(&mut self, category: Category, material: Material) -> bool {
        if self.is_stale(category)
            && let Err(e) = self.reload(category).map(|_| ())
        {
            warn!("Failed to reload materials for {}: {}", category, e);
            let now = self.clock.now_millis();
            self.entries.entry(category).or_default().last_refreshed_at = Some(now);
        }

        self.entries
            .get(&category)
            .is_some_and(|entry| entry.members.contains(&material))
    }

    pub fn is_stale(&self, category: Category) -> bool {
        match self.last_refreshed_at(category) {
            None => true,
            Some(at) => self.clock.now_millis().saturating_sub(at) > self.ttl_ms,
        }
    }

    /// Re-read the category's materials from configuration and return them.
    pub fn reload(&mut self, category: Category) -> Result<&HashSet<Material>> {
        let (members, _) = self.load_entry(category)?;
        Ok(members)
    }

    /// Same as `reload`, reporting how many entries were loaded and skipped.
    pub fn reload_with_report(&mut self, category: Category) -> Result<ReloadOutcome> {
        let (members, skipped) = self.load_entry(category)?;
        Ok(ReloadOutcome {
            category,
            loaded: members.len(),
            skipped,
        })
    }

    fn load_entry(&mut self, category: Category) -> Result<(&HashSet<Material>, usize)> {
        let names = self
            .source
            .material_names(category)
            .ok_or(Error::MissingCategory(category))?;

        let mut members = HashSet::with_capacity(names.len());
        let mut skipped = 0;
        for name in &names {
            match Material::parse(name) {
                Some(material) => {
                    members.insert(material);
                }
                None => {
                    warn!("Skipping unknown material '{}' in {}", name, category);
                    skipped += 1;
                }
            }
        }

        info!(
            "Reloaded {} materials for {} ({} skipped)",
            members.len(),
            category,
            skipped
        );

        let now = self.clock.now_millis();
        let entry = self.entries.entry(category).or_default();
        entry.members = members;
        entry.last_refreshed_at = Some(now);

        Ok((&entry.members, skipped))
    }

    /// Cached members without triggering a reload
    pub fn members(&self, category: Category) -> Option<&HashSet<Material>> {
        self.entries
            .get(&category)
            .filter(|entry| entry.last_refreshed_at.is_some())
            .map(|entry| &entry.members)
    }

    pub fn last_refreshed_at(&self, category: Category) -> Option<i64> {
        self.entries
            .get(&category)
            .and_then(|entry| entry.last_refreshed_at)
    }

    /// Mark every category as never populated
    pub fn invalidate_all(&mut self) {
        for entry in self.entries.values_mut() {
            entry.last_refreshed_at = None;
        }
    }
}
