//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod events;
pub mod help_text;
pub mod lore;
pub mod new_item;
pub mod refresh;
pub mod reset;
pub mod stats;
