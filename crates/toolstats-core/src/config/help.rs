use serde::{Deserialize, Serialize};
use strum::Display;

/// Help message topics, one per command plus the index page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum HelpTopic {
    Index,
    GetStats,
    UpdateLore,
    RemoveLore,
    RemoveStats,
}

impl HelpTopic {
    /// Resolve a command name or alias (case-insensitive) to its topic.
    ///
    /// Unknown names fall back to `Index`.
    pub fn from_alias(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "stats" | "getstats" | "get-stats" => Self::GetStats,
            "updatelore" | "update-lore" => Self::UpdateLore,
            "removelore" | "resetlore" | "remove-lore" => Self::RemoveLore,
            "reset" | "removestats" | "remove-stats" => Self::RemoveStats,
            _ => Self::Index,
        }
    }
}
