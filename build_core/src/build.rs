//! BuildSelection - The user's equipment and decoration choices

use crate::config::{self, ConfigError};
use crate::types::{ArmorSlot, SkillGrant};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Maximum free skills on a talisman
pub const TALISMAN_SKILLS: usize = 2;
/// Maximum decoration slots on a talisman
pub const TALISMAN_SLOTS: usize = 3;

/// Snapshot of a build, referencing catalog entries by name
///
/// Decoration lists are aligned positionally with the owning item's slot
/// list. An absent entry or an empty name means the slot is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSelection {
    #[serde(default)]
    pub name: String,
    pub weapon: WeaponChoice,
    #[serde(default)]
    pub head: ArmorChoice,
    #[serde(default)]
    pub body: ArmorChoice,
    #[serde(default)]
    pub arms: ArmorChoice,
    #[serde(default)]
    pub waist: ArmorChoice,
    #[serde(default)]
    pub legs: ArmorChoice,
    #[serde(default)]
    pub talisman: TalismanChoice,
    /// Conditional skill toggles; a skill mapped to `false` has no effect
    #[serde(default)]
    pub active_skills: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponChoice {
    pub name: String,
    #[serde(default)]
    pub decorations: Vec<Option<String>>,
    #[serde(default)]
    pub rampage_decorations: Vec<Option<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorChoice {
    /// Armor piece name; empty when nothing is equipped
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub decorations: Vec<Option<String>>,
}

impl ArmorChoice {
    pub fn new(name: impl Into<String>) -> Self {
        ArmorChoice {
            name: name.into(),
            decorations: Vec::new(),
        }
    }

    pub fn with_decorations(mut self, decorations: &[&str]) -> Self {
        self.decorations = decorations.iter().map(|d| Some(d.to_string())).collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// A decoration slot carved into a talisman
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalismanSlot {
    pub size: u32,
    #[serde(default)]
    pub decoration: Option<String>,
}

/// Talisman: free-form skills plus its own decoration slots
///
/// Only the first [`TALISMAN_SKILLS`] skills and [`TALISMAN_SLOTS`] slots count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalismanChoice {
    #[serde(default)]
    pub skills: Vec<SkillGrant>,
    #[serde(default)]
    pub slots: Vec<TalismanSlot>,
}

impl BuildSelection {
    /// Start a build around a weapon with nothing else equipped
    pub fn with_weapon(weapon: impl Into<String>) -> Self {
        BuildSelection {
            weapon: WeaponChoice {
                name: weapon.into(),
                ..WeaponChoice::default()
            },
            ..BuildSelection::default()
        }
    }

    /// Get the armor choice for a slot
    pub fn armor(&self, slot: ArmorSlot) -> &ArmorChoice {
        match slot {
            ArmorSlot::Head => &self.head,
            ArmorSlot::Body => &self.body,
            ArmorSlot::Arms => &self.arms,
            ArmorSlot::Waist => &self.waist,
            ArmorSlot::Legs => &self.legs,
        }
    }

    pub fn armor_mut(&mut self, slot: ArmorSlot) -> &mut ArmorChoice {
        match slot {
            ArmorSlot::Head => &mut self.head,
            ArmorSlot::Body => &mut self.body,
            ArmorSlot::Arms => &mut self.arms,
            ArmorSlot::Waist => &mut self.waist,
            ArmorSlot::Legs => &mut self.legs,
        }
    }

    /// Whether a skill's effect should be applied; defaults to active
    pub fn is_skill_active(&self, skill: &str) -> bool {
        self.active_skills.get(skill).copied().unwrap_or(true)
    }
}

/// Name in a decoration slot, treating `None` and `""` as empty
pub fn filled_slot(slot: &Option<String>) -> Option<&str> {
    slot.as_deref().filter(|name| !name.is_empty())
}

/// Load a build selection from a `.toml` or `.json` file
pub fn load_build(path: &Path) -> Result<BuildSelection, ConfigError> {
    config::load_data_file(path)
}
