//! Integration tests for toolstats-core
//!
//! These tests drive the public API the way the event feed and the command
//! layer do.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use toolstats_core::config::CategoryConfig;
use toolstats_core::{
    Category, Config, ConfigSource, Item, ItemMeta, ManualClock, Material, SyncOutcome, ToolStats,
    WorldEvent,
};

const HOUR_MS: i64 = 60 * 60 * 1000;

fn weapon_config() -> Config {
    let mut config = Config::default();
    config.categories.insert(
        "weapon".to_string(),
        CategoryConfig {
            message: Some("Kills: %d".to_string()),
            materials: vec!["WOODEN_SWORD".to_string(), "DIAMOND_SWORD".to_string()],
        },
    );
    config
}

fn tracker(config: Config) -> ToolStats {
    ToolStats::with_clock(config, Arc::new(ManualClock::new(0)))
}

fn kill(stats: &mut ToolStats, item: &mut Item) {
    stats.handle_event(WorldEvent::entity_kill(Some("steve"), item));
}

/// Counter and lore behaviour across repeated events
mod counter_tests {
    use super::*;

    #[test]
    fn test_weapon_scenario() {
        let mut stats = tracker(weapon_config());
        let mut sword = Item::new(Material::DiamondSword);

        kill(&mut stats, &mut sword);
        let report = stats.get_stats(&sword).unwrap();
        let weapon = report.get(Category::Weapon).unwrap();
        assert_eq!(weapon.counter, 1);
        assert_eq!(weapon.position, Some(0));
        assert_eq!(sword.lore(), ["Kills: 1"]);

        kill(&mut stats, &mut sword);
        let report = stats.get_stats(&sword).unwrap();
        let weapon = report.get(Category::Weapon).unwrap();
        assert_eq!(weapon.counter, 2);
        assert_eq!(weapon.position, Some(0));
        assert_eq!(sword.lore(), ["Kills: 2"]);

        assert!(stats.reset_stats(&mut sword));
        let report = stats.get_stats(&sword).unwrap();
        let weapon = report.get(Category::Weapon).unwrap();
        assert_eq!(weapon.counter, 0);
        assert_eq!(weapon.position, None);
        assert!(sword.lore().is_empty());
        assert!(sword.meta().unwrap().data().is_empty());
    }

    #[test]
    fn test_n_increments_keep_unrelated_lines() {
        let mut stats = tracker(Config::default());
        let mut pick = Item::with_meta(
            Material::IronPickaxe,
            ItemMeta::with_lore(["Efficiency V", "Unbreaking III"]),
        );

        for n in 1..=25 {
            stats.handle_event(WorldEvent::block_break("steve", &mut pick));
            assert_eq!(stats.store().counter_of(&pick, Category::Tool), n);
            assert_eq!(
                pick.lore(),
                [
                    "Efficiency V".to_string(),
                    "Unbreaking III".to_string(),
                    format!("Blocks mined: {}", n),
                ]
            );
            assert_eq!(stats.store().position_of(&pick, Category::Tool), Some(2));
        }
    }

    #[test]
    fn test_foreign_line_preserved() {
        let mut stats = tracker(weapon_config());
        let mut meta = ItemMeta::with_lore(["Enchanted", "Kills: 3"]);
        stats
            .store()
            .set_counter(&mut meta, Category::Weapon, Some(3));
        stats.store().set_position(&mut meta, Category::Weapon, 1);
        let mut sword = Item::with_meta(Material::WoodenSword, meta);

        kill(&mut stats, &mut sword);

        assert_eq!(sword.lore(), ["Enchanted", "Kills: 4"]);
    }

    #[test]
    fn test_foreign_lines_added_after_owned_line() {
        let mut stats = tracker(weapon_config());
        let mut sword = Item::new(Material::WoodenSword);
        kill(&mut stats, &mut sword);

        // Another system appends its own line after ours
        let mut meta = sword.meta().unwrap().clone();
        let mut lore = meta.lore().to_vec();
        lore.push("Soulbound".to_string());
        meta.set_lore(Some(lore));
        sword.set_meta(meta);

        kill(&mut stats, &mut sword);
        assert_eq!(sword.lore(), ["Kills: 2", "Soulbound"]);
    }

    #[test]
    fn test_synchronize_is_idempotent() {
        let mut stats = tracker(weapon_config());
        let mut sword = Item::with_meta(Material::WoodenSword, ItemMeta::with_lore(["A", "B"]));
        kill(&mut stats, &mut sword);

        stats.update_lore(&mut sword);
        let first = sword.clone();
        stats.update_lore(&mut sword);

        assert_eq!(sword, first);
        assert_eq!(sword.lore(), ["A", "B", "Kills: 1"]);
    }

    #[test]
    fn test_zero_counter_removes_owned_line() {
        let mut stats = tracker(weapon_config());
        let mut sword = Item::with_meta(Material::WoodenSword, ItemMeta::with_lore(["A", "B"]));
        kill(&mut stats, &mut sword);
        assert_eq!(sword.lore().len(), 3);

        stats
            .store()
            .set_counter_on(&mut sword, Category::Weapon, Some(0));
        let outcome = stats
            .synchronizer()
            .synchronize(&mut sword, Category::Weapon);

        assert_eq!(outcome, SyncOutcome::Removed);
        assert_eq!(sword.lore(), ["A", "B"]);
        assert_eq!(stats.store().position_of(&sword, Category::Weapon), None);
    }

    #[test]
    fn test_negative_counter_never_renders() {
        let mut stats = tracker(weapon_config());
        let mut meta = ItemMeta::with_lore(["A", "Kills: 3", "B"]);
        stats
            .store()
            .set_counter(&mut meta, Category::Weapon, Some(-2));
        stats.store().set_position(&mut meta, Category::Weapon, 1);
        let mut sword = Item::with_meta(Material::WoodenSword, meta);

        kill(&mut stats, &mut sword);
        assert_eq!(stats.store().counter_of(&sword, Category::Weapon), -1);
        assert_eq!(sword.lore(), ["A", "B"]);
        assert_eq!(stats.store().position_of(&sword, Category::Weapon), None);

        // Back at zero: still nothing to show
        kill(&mut stats, &mut sword);
        assert_eq!(stats.store().counter_of(&sword, Category::Weapon), 0);
        assert_eq!(sword.lore(), ["A", "B"]);

        kill(&mut stats, &mut sword);
        assert_eq!(sword.lore(), ["A", "B", "Kills: 1"]);
    }

    #[test]
    fn test_reset_keeps_foreign_lines() {
        let mut stats = tracker(weapon_config());
        let mut sword = Item::with_meta(Material::WoodenSword, ItemMeta::with_lore(["Lore"]));
        kill(&mut stats, &mut sword);

        stats.reset_stats(&mut sword);

        assert_eq!(sword.lore(), ["Lore"]);
    }

    #[test]
    fn test_item_without_meta_is_untouched() {
        let mut stats = tracker(weapon_config());
        let mut sword = Item::without_meta(Material::WoodenSword);

        kill(&mut stats, &mut sword);
        assert!(!stats.reset_stats(&mut sword));
        assert!(!stats.remove_lore(&mut sword));
        stats.update_lore(&mut sword);

        assert_eq!(sword, Item::without_meta(Material::WoodenSword));
        assert!(stats.get_stats(&sword).is_none());
    }
}

/// Category cache expiry and refresh
mod cache_tests {
    use super::*;

    struct CountingConfig {
        config: Config,
        loads: AtomicUsize,
    }

    impl ConfigSource for CountingConfig {
        fn message_template(&self, category: Category) -> Option<String> {
            self.config.message_template(category)
        }

        fn material_names(&self, category: Category) -> Option<Vec<String>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            self.config.material_names(category)
        }
    }

    fn counting_tracker(config: Config) -> (ToolStats, Arc<CountingConfig>, Arc<ManualClock>) {
        let source = Arc::new(CountingConfig {
            config,
            loads: AtomicUsize::new(0),
        });
        let clock = Arc::new(ManualClock::new(100 * HOUR_MS));
        let stats = ToolStats::with_source(
            source.clone(),
            "toolstats",
            Duration::from_millis(8 * HOUR_MS as u64),
            clock.clone(),
        );
        (stats, source, clock)
    }

    #[test]
    fn test_stale_entry_reloads_once() {
        let (mut stats, source, clock) = counting_tracker(Config::default());
        let cache = stats.cache_mut();

        cache.reload(Category::Weapon).unwrap();
        assert_eq!(source.loads.load(Ordering::SeqCst), 1);

        clock.advance(8 * HOUR_MS + 1);
        assert!(cache.is_member(Category::Weapon, Material::IronSword));
        assert_eq!(source.loads.load(Ordering::SeqCst), 2);

        assert!(cache.is_member(Category::Weapon, Material::IronSword));
        assert_eq!(source.loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_recent_entry_does_not_reload() {
        let (mut stats, source, clock) = counting_tracker(Config::default());
        let cache = stats.cache_mut();

        cache.reload(Category::Weapon).unwrap();
        clock.advance(1);
        assert!(cache.is_member(Category::Weapon, Material::IronSword));

        assert_eq!(source.loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_refresh_materials_isolates_failures() {
        let mut config = Config::default();
        config.categories.remove("tool");
        config
            .categories
            .get_mut("weapon")
            .unwrap()
            .materials
            .push("NOT_A_MATERIAL".to_string());
        let (mut stats, _, _) = counting_tracker(config);

        let report = stats.refresh_materials();

        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 1);
        let tool = &report.categories[0];
        assert_eq!(tool.category, Category::Tool);
        assert!(tool.error.is_some());
        let weapon = &report.categories[1];
        assert_eq!(weapon.category, Category::Weapon);
        assert_eq!(weapon.loaded, Category::Weapon.default_materials().len());
        assert_eq!(weapon.skipped, 1);
    }

    #[test]
    fn test_shutdown_forces_cold_start() {
        let (mut stats, source, _) = counting_tracker(Config::default());
        let mut sword = Item::new(Material::IronSword);

        kill(&mut stats, &mut sword);
        let loads = source.loads.load(Ordering::SeqCst);

        stats.shutdown();
        assert!(stats.cache().last_refreshed_at(Category::Weapon).is_none());

        kill(&mut stats, &mut sword);
        assert!(source.loads.load(Ordering::SeqCst) > loads);
        assert_eq!(stats.store().counter_of(&sword, Category::Weapon), 2);
    }

    #[test]
    fn test_missing_category_is_not_retried_per_event() {
        let mut config = Config::default();
        config.categories.clear();
        config.categories.insert(
            "weapon".to_string(),
            CategoryConfig {
                message: Some("K %d".to_string()),
                materials: vec!["IRON_SWORD".to_string()],
            },
        );
        let (mut stats, source, clock) = counting_tracker(config);
        let mut sword = Item::new(Material::IronSword);

        for _ in 0..3 {
            kill(&mut stats, &mut sword);
        }

        assert_eq!(sword.lore(), ["K 3"]);
        assert!(stats.cache().last_refreshed_at(Category::Tool).is_some());
        // One lookup for the tool table, one for the weapon table
        assert_eq!(source.loads.load(Ordering::SeqCst), 2);

        clock.advance(8 * HOUR_MS + 1);
        kill(&mut stats, &mut sword);
        assert_eq!(source.loads.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_membership_follows_config() {
        let mut stats = tracker(weapon_config());
        let mut iron = Item::new(Material::IronSword);

        // IRON_SWORD is not in the weapon list
        kill(&mut stats, &mut iron);
        assert_eq!(stats.store().counter_of(&iron, Category::Weapon), 0);

        // The default list includes it
        let mut stats = tracker(Config::default());
        kill(&mut stats, &mut iron);
        assert_eq!(stats.store().counter_of(&iron, Category::Weapon), 1);
    }
}
