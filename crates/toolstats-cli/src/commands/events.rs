//! Block break and kill event commands.

use std::path::Path;

use anyhow::Result;
use toolstats_core::{EventKind, WorldEvent};

use crate::cli_utils::{failure, success, with_item};

pub fn run(
    config: &Path,
    item: &Path,
    kind: EventKind,
    actor: Option<&str>,
    count: u32,
) -> Result<()> {
    let counted = with_item(config, item, |stats, item| {
        let mut counted = 0;
        for _ in 0..count {
            let event = match kind {
                EventKind::BlockBreak => {
                    WorldEvent::block_break(actor.unwrap_or("player"), &mut *item)
                }
                EventKind::EntityKill => WorldEvent::entity_kill(actor, &mut *item),
            };
            if stats.handle_event(event).is_some() {
                counted += 1;
            }
        }
        counted
    })?;

    if counted == 0 {
        failure(&format!("No stats were counted for {} {} event(s).", count, kind));
    } else {
        success(&format!("Counted {} of {} {} event(s).", counted, count, kind));
    }
    Ok(())
}
