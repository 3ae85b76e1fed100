mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use toolstats_core::EventKind;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("toolstats=info,toolstats_core=info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = args.config.as_path();
    let item = args.item.as_path();

    match args.command {
        Command::Stats { json } => commands::stats::run(config, item, json),
        Command::UpdateLore => commands::lore::update(config, item),
        Command::RemoveLore => commands::lore::remove(config, item),
        Command::Reset => commands::reset::run(config, item),
        Command::RefreshMaterials { json } => commands::refresh::run(config, json),
        Command::New {
            material,
            lore,
            no_meta,
        } => commands::new_item::run(item, &material, lore, no_meta),
        Command::Break { actor, count } => commands::events::run(
            config,
            item,
            EventKind::BlockBreak,
            Some(actor.as_str()),
            count,
        ),
        Command::Kill {
            actor,
            count,
            no_killer,
        } => {
            let killer = (!no_killer).then_some(actor.as_str());
            commands::events::run(config, item, EventKind::EntityKill, killer, count)
        }
        Command::HelpText { topic } => commands::help_text::run(config, topic.as_deref()),
    }
}
