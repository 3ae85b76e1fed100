//! Configured help messages.

use std::path::Path;

use anyhow::Result;
use toolstats_core::HelpTopic;

use crate::cli_utils::load_config;

pub fn run(config: &Path, topic: Option<&str>) -> Result<()> {
    let config = load_config(config)?;
    let topic = topic.map_or(HelpTopic::Index, HelpTopic::from_alias);
    println!("{}", config.help_text(topic, "toolstats"));
    Ok(())
}
