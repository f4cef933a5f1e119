//! Item and skill definitions as stored in the reference catalog

use crate::types::{ArmorSlot, ElementTable, ElementType, SkillGrant, StatusType};
use serde::{Deserialize, Serialize};

/// Weapon class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeaponType {
    GreatSword,
    SwordAndShield,
    DualBlades,
    LongSword,
    Hammer,
    HuntingHorn,
    Lance,
    Gunlance,
    SwitchAxe,
    ChargeBlade,
    InsectGlaive,
    Bow,
    HeavyBowgun,
    LightBowgun,
}

/// Elemental power on a weapon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponElement {
    #[serde(rename = "type")]
    pub element: ElementType,
    pub power: f64,
}

/// Status power on a weapon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponStatus {
    #[serde(rename = "type")]
    pub status: StatusType,
    pub power: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    pub attack: f64,
    #[serde(default)]
    pub affinity: f64,
    #[serde(default)]
    pub defense: f64,
    #[serde(default)]
    pub element: Option<WeaponElement>,
    #[serde(default)]
    pub status: Option<WeaponStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub weapon_type: WeaponType,
    #[serde(default)]
    pub rarity: u32,
    /// Decoration slot sizes
    #[serde(default)]
    pub slots: Vec<u32>,
    #[serde(default)]
    pub rampage_slots: Vec<u32>,
    pub stats: WeaponStats,
    /// Current sharpness length per tier, red first
    #[serde(default)]
    pub sharpness: Vec<u32>,
    /// Sharpness length per tier with maximum Handicraft
    #[serde(default)]
    pub max_sharpness: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArmorStats {
    pub defense: f64,
    #[serde(default)]
    pub resistances: ElementTable<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmorDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub armor_type: ArmorSlot,
    #[serde(default)]
    pub rarity: u32,
    #[serde(default)]
    pub slots: Vec<u32>,
    pub stats: ArmorStats,
    #[serde(default)]
    pub skills: Vec<SkillGrant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecorationDefinition {
    pub name: String,
    pub size: u32,
    pub skill: SkillGrant,
}

/// Rampage decoration: grants a rampage skill with no level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RampageDecorationDefinition {
    pub name: String,
    pub size: u32,
    pub skill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub level: u32,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub levels: Vec<SkillLevel>,
}

impl SkillDefinition {
    /// Highest level this skill can reach; one per level description
    pub fn max_level(&self) -> u32 {
        self.levels.len() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RampageSkillDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
}
