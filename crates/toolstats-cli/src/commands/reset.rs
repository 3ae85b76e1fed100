//! Reset command implementation.

use std::path::Path;

use anyhow::Result;

use crate::cli_utils::{failure, success, with_item};

pub fn run(config: &Path, item: &Path) -> Result<()> {
    if with_item(config, item, |stats, item| stats.reset_stats(item))? {
        success("Successfully removed stats.");
    } else {
        failure("Item does not have item meta.");
    }
    Ok(())
}
