use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::{Error, Result};

/// Item type identifier.
///
/// Names follow the game's `SCREAMING_SNAKE_CASE` registry names
/// (e.g. `DIAMOND_PICKAXE`). Parsing is case-insensitive and accepts an
/// optional `minecraft:` namespace prefix.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Material {
    Air,
    Stick,
    Dirt,
    Stone,

    WoodenShovel,
    WoodenPickaxe,
    WoodenAxe,
    WoodenHoe,
    WoodenSword,

    StoneShovel,
    StonePickaxe,
    StoneAxe,
    StoneHoe,
    StoneSword,

    IronShovel,
    IronPickaxe,
    IronAxe,
    IronHoe,
    IronSword,

    GoldenShovel,
    GoldenPickaxe,
    GoldenAxe,
    GoldenHoe,
    GoldenSword,

    DiamondShovel,
    DiamondPickaxe,
    DiamondAxe,
    DiamondHoe,
    DiamondSword,

    NetheriteShovel,
    NetheritePickaxe,
    NetheriteAxe,
    NetheriteHoe,
    NetheriteSword,

    Bow,
    Crossbow,
    Trident,
    Shears,
    FishingRod,
}

impl Material {
    /// Lenient lookup used for config entries. Returns `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        let name = name
            .strip_prefix("minecraft:")
            .or_else(|| name.strip_prefix("MINECRAFT:"))
            .unwrap_or(name);

        if name.is_empty() {
            return None;
        }

        Self::from_str(name).ok()
    }

    pub fn parse_strict(name: &str) -> Result<Self> {
        Self::parse(name).ok_or_else(|| Error::InvalidMaterial(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}
