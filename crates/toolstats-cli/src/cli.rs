//! CLI argument definitions for toolstats.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "toolstats")]
#[command(about = "Per-item usage counters rendered as lore lines", version)]
pub struct Args {
    /// Config file (written with defaults if it does not exist)
    #[arg(short, long, default_value = "toolstats.toml", env = "TOOLSTATS_CONFIG")]
    pub config: PathBuf,

    /// Item file the commands operate on
    #[arg(short, long, default_value = "item.json")]
    pub item: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the stored counters and line positions of the item
    #[command(visible_alias = "getstats")]
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Re-render the stat lines of the item
    #[command(visible_alias = "updatelore")]
    UpdateLore,
    /// Remove every lore line from the item
    #[command(visible_aliases = ["removelore", "resetlore"])]
    RemoveLore,
    /// Clear all stats of the item
    #[command(visible_alias = "removestats")]
    Reset,
    /// Reload the material lists of every category
    RefreshMaterials {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a new item file
    New {
        /// Material name (e.g. DIAMOND_PICKAXE)
        #[arg(short, long)]
        material: String,
        /// Existing lore lines
        #[arg(long)]
        lore: Vec<String>,
        /// Create the item without meta
        #[arg(long)]
        no_meta: bool,
    },
    /// Break blocks with the item
    Break {
        /// Player holding the item
        #[arg(long, default_value = "player")]
        actor: String,
        /// Number of events
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
    /// Kill entities with the item
    Kill {
        /// Player holding the item
        #[arg(long, default_value = "player")]
        actor: String,
        /// Number of events
        #[arg(long, default_value_t = 1)]
        count: u32,
        /// The victim died without a player killer
        #[arg(long)]
        no_killer: bool,
    },
    /// Print the configured help message for a command
    HelpText {
        /// Command name or alias; the index page if omitted
        topic: Option<String>,
    },
}
