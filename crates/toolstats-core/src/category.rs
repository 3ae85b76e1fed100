use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::item::Material;

/// Trackable item category.
///
/// Each variant owns one counter and one lore line on an item. Iteration
/// order (`Category::iter()`) is declaration order and is the order in which
/// categories are matched against an item's material.
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
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Tool,
    Weapon,
}

impl Category {
    /// Key of the integer counter in an item's data container
    pub fn counter_key(&self) -> &'static str {
        match self {
            Self::Tool => "toolStats",
            Self::Weapon => "weaponStats",
        }
    }

    /// Key of the lore line position marker
    pub fn position_key(&self) -> &'static str {
        match self {
            Self::Tool => "toolStatsDisplay",
            Self::Weapon => "weaponStatsDisplay",
        }
    }

    /// Table name under `[categories]` in the config file
    pub fn config_name(&self) -> &'static str {
        match self {
            Self::Tool => "tool",
            Self::Weapon => "weapon",
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Tool => "Blocks mined: %d",
            Self::Weapon => "Kills: %d",
        }
    }

    pub fn default_materials(&self) -> &'static [Material] {
        match self {
            Self::Tool => &[
                Material::WoodenShovel,
                Material::WoodenPickaxe,
                Material::WoodenAxe,
                Material::WoodenHoe,
                Material::StoneShovel,
                Material::StonePickaxe,
                Material::StoneAxe,
                Material::StoneHoe,
                Material::IronShovel,
                Material::IronPickaxe,
                Material::IronAxe,
                Material::IronHoe,
                Material::GoldenShovel,
                Material::GoldenPickaxe,
                Material::GoldenAxe,
                Material::GoldenHoe,
                Material::DiamondShovel,
                Material::DiamondPickaxe,
                Material::DiamondAxe,
                Material::DiamondHoe,
            ],
            Self::Weapon => &[
                Material::WoodenSword,
                Material::StoneSword,
                Material::IronSword,
                Material::GoldenSword,
                Material::DiamondSword,
            ],
        }
    }
}
