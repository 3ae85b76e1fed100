use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::info;

use crate::category::Category;
use crate::config::{ConfigSource, DEFAULT_NAMESPACE, HelpTopic, cache};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub ttl_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_ms: cache::DEFAULT_TTL_MS,
        }
    }
}

/// One `[categories.<name>]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub materials: Vec<String>,
}

impl CategoryConfig {
    fn defaults_for(category: Category) -> Self {
        Self {
            message: Some(category.default_message().to_string()),
            materials: category
                .default_materials()
                .iter()
                .map(|m| m.name().to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpConfig {
    pub index: String,
    pub get_stats: String,
    pub update_lore: String,
    pub remove_lore: String,
    pub remove_stats: String,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            index: "Usage: <command> <stats|updatelore|removelore|reset|help> \
                    - use '<command> help <subcommand>' for details"
                .to_string(),
            get_stats: "<command> stats - show the stored counters of the held item".to_string(),
            update_lore: "<command> updatelore - re-render the stat lines of the held item"
                .to_string(),
            remove_lore: "<command> removelore - remove every lore line from the held item"
                .to_string(),
            remove_stats: "<command> reset - clear all stats of the held item".to_string(),
        }
    }
}

/// Top-level config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub namespace: String,
    pub cache: CacheConfig,
    pub categories: BTreeMap<String, CategoryConfig>,
    pub help: HelpConfig,
}

impl Default for Config {
    fn default() -> Self {
        let categories = Category::iter()
            .map(|c| (c.config_name().to_string(), CategoryConfig::defaults_for(c)))
            .collect();

        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            cache: CacheConfig::default(),
            categories,
            help: HelpConfig::default(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::ConfigParseError(e.to_string()))
    }

    /// Write the default config to `path` unless a file already exists there.
    ///
    /// Returns `true` if a file was written.
    pub fn write_default<P: AsRef<Path>>(path: P) -> Result<bool> {
        let path = path.as_ref();
        if path.exists() {
            return Ok(false);
        }

        fs::write(path, Self::default().to_toml()?)?;
        info!("Wrote default config to {:?}", path);
        Ok(true)
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.cache.ttl_ms)
    }

    pub fn category(&self, category: Category) -> Option<&CategoryConfig> {
        self.categories.get(category.config_name())
    }

    /// Help message for `topic` with `<command>` replaced by `label`
    pub fn help_text(&self, topic: HelpTopic, label: &str) -> String {
        let template = match topic {
            HelpTopic::Index => &self.help.index,
            HelpTopic::GetStats => &self.help.get_stats,
            HelpTopic::UpdateLore => &self.help.update_lore,
            HelpTopic::RemoveLore => &self.help.remove_lore,
            HelpTopic::RemoveStats => &self.help.remove_stats,
        };
        template.replace("<command>", label)
    }
}

impl ConfigSource for Config {
    fn message_template(&self, category: Category) -> Option<String> {
        self.category(category).and_then(|c| c.message.clone())
    }

    fn material_names(&self, category: Category) -> Option<Vec<String>> {
        self.category(category).map(|c| c.materials.clone())
    }
}
