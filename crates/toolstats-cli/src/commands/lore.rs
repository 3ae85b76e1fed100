//! Lore update and removal commands.

use std::path::Path;

use anyhow::Result;
use toolstats_core::SyncOutcome;

use crate::cli_utils::{failure, success, with_item};

pub fn update(config: &Path, item: &Path) -> Result<()> {
    let outcomes = with_item(config, item, |stats, item| stats.update_lore(item))?;

    if outcomes
        .iter()
        .all(|(_, outcome)| *outcome == SyncOutcome::NoMeta)
    {
        failure("Item does not have item meta.");
    } else {
        success("Successfully updated lore.");
    }
    Ok(())
}

pub fn remove(config: &Path, item: &Path) -> Result<()> {
    if with_item(config, item, |stats, item| stats.remove_lore(item))? {
        success("Successfully removed lore.");
    } else {
        failure("Item does not have item meta.");
    }
    Ok(())
}
