//! Configuration.
//!
//! This module contains:
//! - `ConfigSource` - what the core reads from configuration
//! - `Config` - the TOML config file
//! - `HelpTopic` - help message lookup for the command layer
//! - Cache and namespace constants

mod file;
mod help;

pub use file::*;
pub use help::*;

use crate::category::Category;

/// Category membership cache configuration.
pub mod cache {
    /// Default time-to-live of cached category membership (8 hours).
    pub const DEFAULT_TTL_MS: u64 = 28_800_000;
}

/// Default namespace for data container keys.
pub const DEFAULT_NAMESPACE: &str = "toolstats";

/// Read access to per-category configuration.
///
/// Returning `None` means the category has no configuration entry.
pub trait ConfigSource: Send + Sync {
    /// Lore line template with a single `%d` placeholder.
    fn message_template(&self, category: Category) -> Option<String>;

    /// Raw material names as written in configuration. Entries are parsed
    /// (and possibly rejected) by the caller.
    fn material_names(&self, category: Category) -> Option<Vec<String>>;
}
