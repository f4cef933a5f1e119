//! Engine constants configuration

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Number of sharpness tiers (red through purple)
pub const SHARPNESS_TIERS: usize = 7;

/// Tunable engine constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConstants {
    #[serde(default)]
    pub affinity: AffinityConstants,
    #[serde(default)]
    pub propagation: PropagationConstants,
    #[serde(default)]
    pub sharpness: SharpnessTable,
}

impl Default for EngineConstants {
    fn default() -> Self {
        EngineConstants {
            affinity: AffinityConstants::default(),
            propagation: PropagationConstants::default(),
            sharpness: SharpnessTable::default(),
        }
    }
}

impl EngineConstants {
    /// Reject constants the stat pipeline cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        let affinity = &self.affinity;
        let multipliers = [
            ("affinity.base_crit_multiplier", affinity.base_crit_multiplier),
            ("affinity.base_element_crit_multiplier", affinity.base_element_crit_multiplier),
            ("affinity.negative_crit_multiplier", affinity.negative_crit_multiplier),
            ("affinity.negative_element_crit_multiplier", affinity.negative_element_crit_multiplier),
        ];
        for (name, value) in multipliers {
            if !value.is_finite() {
                problems.push(format!("{name} must be finite, got {value}"));
            }
        }
        if !affinity.cap.is_finite() || affinity.cap < 0.0 {
            problems.push(format!(
                "affinity.cap must be finite and non-negative, got {}",
                affinity.cap
            ));
        }

        for (tier, entry) in self.sharpness.tiers.iter().enumerate() {
            if !entry.raw.is_finite() || !entry.elemental.is_finite() {
                problems.push(format!("sharpness tier {tier} has a non-finite multiplier"));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::ValidationError(problems.join("; ")))
        }
    }
}

/// Load the bundled engine constants, falling back to the compiled defaults
pub fn default_constants() -> EngineConstants {
    let toml = include_str!("../../config/engine.toml");
    super::parse_toml(toml)
        .and_then(|constants: EngineConstants| constants.validate().map(|()| constants))
        .unwrap_or_else(|err| {
            tracing::warn!("bundled engine.toml is unusable, using defaults: {err}");
            EngineConstants::default()
        })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffinityConstants {
    /// Physical crit multiplier before any skill (1.25 = 125%)
    #[serde(default = "default_crit_multiplier")]
    pub base_crit_multiplier: f64,
    /// Elemental crit multiplier before any skill
    #[serde(default = "default_element_crit_multiplier")]
    pub base_element_crit_multiplier: f64,
    /// Physical multiplier used on a negative-affinity hit
    #[serde(default = "default_negative_crit_multiplier")]
    pub negative_crit_multiplier: f64,
    /// Elemental multiplier used on a negative-affinity hit
    #[serde(default = "default_element_crit_multiplier")]
    pub negative_element_crit_multiplier: f64,
    /// Largest affinity magnitude that still changes the blended result
    #[serde(default = "default_affinity_cap")]
    pub cap: f64,
}

impl Default for AffinityConstants {
    fn default() -> Self {
        AffinityConstants {
            base_crit_multiplier: 1.25,
            base_element_crit_multiplier: 1.0,
            negative_crit_multiplier: 0.75,
            negative_element_crit_multiplier: 1.0,
            cap: 100.0,
        }
    }
}

fn default_crit_multiplier() -> f64 {
    1.25
}
fn default_element_crit_multiplier() -> f64 {
    1.0
}
fn default_negative_crit_multiplier() -> f64 {
    0.75
}
fn default_affinity_cap() -> f64 {
    100.0
}

/// The skill whose level raises every other skill's level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropagationConstants {
    #[serde(default = "default_propagation_skill")]
    pub skill: String,
    /// Effective level of `skill` → levels added to every other skill
    #[serde(default = "default_propagation_levels")]
    pub levels: Vec<PropagationLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropagationLevel {
    pub level: u32,
    pub bonus: u32,
}

impl PropagationConstants {
    /// Bonus granted to other skills when the propagation skill sits at `level`
    pub fn bonus_at(&self, level: u32) -> u32 {
        self.levels
            .iter()
            .find(|entry| entry.level == level)
            .map(|entry| entry.bonus)
            .unwrap_or(0)
    }
}

impl Default for PropagationConstants {
    fn default() -> Self {
        PropagationConstants {
            skill: default_propagation_skill(),
            levels: default_propagation_levels(),
        }
    }
}

fn default_propagation_skill() -> String {
    "Stormsoul".to_string()
}
fn default_propagation_levels() -> Vec<PropagationLevel> {
    vec![
        PropagationLevel { level: 4, bonus: 1 },
        PropagationLevel { level: 5, bonus: 2 },
    ]
}

/// Damage multipliers for one sharpness tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SharpnessMultipliers {
    pub raw: f64,
    pub elemental: f64,
}

/// Tier index (0 = red ... 6 = purple) → multipliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharpnessTable {
    #[serde(default = "default_sharpness_tiers")]
    pub tiers: [SharpnessMultipliers; SHARPNESS_TIERS],
}

impl SharpnessTable {
    /// Multipliers for a tier; indices past purple use purple
    pub fn multipliers(&self, tier: usize) -> SharpnessMultipliers {
        self.tiers[tier.min(SHARPNESS_TIERS - 1)]
    }
}

impl Default for SharpnessTable {
    fn default() -> Self {
        SharpnessTable {
            tiers: default_sharpness_tiers(),
        }
    }
}

fn default_sharpness_tiers() -> [SharpnessMultipliers; SHARPNESS_TIERS] {
    [
        SharpnessMultipliers { raw: 0.5, elemental: 0.25 },
        SharpnessMultipliers { raw: 0.75, elemental: 0.5 },
        SharpnessMultipliers { raw: 1.0, elemental: 0.75 },
        SharpnessMultipliers { raw: 1.05, elemental: 1.0 },
        SharpnessMultipliers { raw: 1.2, elemental: 1.0625 },
        SharpnessMultipliers { raw: 1.32, elemental: 1.15 },
        SharpnessMultipliers { raw: 1.39, elemental: 1.27 },
    ]
}
