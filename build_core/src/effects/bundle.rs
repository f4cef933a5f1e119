//! ModifierBundle - Every numeric skill effect, folded together

use super::modifier::Modifier;
use crate::config::AffinityConstants;
use crate::types::{ElementTable, ElementType, StatusTable, StatusType};
use serde::{Deserialize, Serialize};

/// One primitive change a skill level makes to the bundle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    AttackBonus(f64),
    AttackMultiplier(f64),
    AffinityBonus(f64),
    /// Replaces the physical crit multiplier
    CritMultiplier(f64),
    /// Replaces the elemental crit multiplier
    ElementCritMultiplier(f64),
    ElementBonus(ElementType, f64),
    ElementMultiplier(ElementType, f64),
    AllElementBonus(f64),
    AllElementMultiplier(f64),
    StatusBonus(StatusType, f64),
    StatusMultiplier(StatusType, f64),
    AllStatusBonus(f64),
    AllStatusMultiplier(f64),
    SharpnessBonus(u32),
    DefenseBonus(f64),
    DefenseMultiplier(f64),
    ResistanceBonus(ElementType, f64),
    AllResistanceBonus(f64),
    /// Replaces the Dragonheart resistance value
    DragonheartResistance(f64),
}

/// Accumulated numeric effect of all active skills
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierBundle {
    pub attack: Modifier,
    pub affinity_bonus: f64,
    pub crit_multiplier: f64,
    pub element_crit_multiplier: f64,
    pub elements: ElementTable<Modifier>,
    pub statuses: StatusTable<Modifier>,
    pub sharpness_bonus: u32,
    pub defense: Modifier,
    pub resistances: ElementTable<Modifier>,
    /// Tracked for display; not folded into resistances
    pub dragonheart_resistance: f64,
}

impl Default for ModifierBundle {
    fn default() -> Self {
        Self::baseline(&AffinityConstants::default())
    }
}

impl ModifierBundle {
    /// Bundle with no skills applied
    pub fn baseline(affinity: &AffinityConstants) -> Self {
        ModifierBundle {
            attack: Modifier::default(),
            affinity_bonus: 0.0,
            crit_multiplier: affinity.base_crit_multiplier,
            element_crit_multiplier: affinity.base_element_crit_multiplier,
            elements: ElementTable::default(),
            statuses: StatusTable::default(),
            sharpness_bonus: 0,
            defense: Modifier::default(),
            resistances: ElementTable::default(),
            dragonheart_resistance: 0.0,
        }
    }

    /// Return the bundle with one effect applied
    pub fn with_effect(mut self, effect: &Effect) -> Self {
        match *effect {
            Effect::AttackBonus(v) => self.attack.add_bonus(v),
            Effect::AttackMultiplier(v) => self.attack.scale(v),
            Effect::AffinityBonus(v) => self.affinity_bonus += v,
            Effect::CritMultiplier(v) => self.crit_multiplier = v,
            Effect::ElementCritMultiplier(v) => self.element_crit_multiplier = v,
            Effect::ElementBonus(element, v) => self.elements.get_mut(element).add_bonus(v),
            Effect::ElementMultiplier(element, v) => self.elements.get_mut(element).scale(v),
            Effect::AllElementBonus(v) => {
                for element in ElementType::all() {
                    self.elements.get_mut(*element).add_bonus(v);
                }
            }
            Effect::AllElementMultiplier(v) => {
                for element in ElementType::all() {
                    self.elements.get_mut(*element).scale(v);
                }
            }
            Effect::StatusBonus(status, v) => self.statuses.get_mut(status).add_bonus(v),
            Effect::StatusMultiplier(status, v) => self.statuses.get_mut(status).scale(v),
            Effect::AllStatusBonus(v) => {
                for status in StatusType::all() {
                    self.statuses.get_mut(*status).add_bonus(v);
                }
            }
            Effect::AllStatusMultiplier(v) => {
                for status in StatusType::all() {
                    self.statuses.get_mut(*status).scale(v);
                }
            }
            Effect::SharpnessBonus(v) => self.sharpness_bonus += v,
            Effect::DefenseBonus(v) => self.defense.add_bonus(v),
            Effect::DefenseMultiplier(v) => self.defense.scale(v),
            Effect::ResistanceBonus(element, v) => self.resistances.get_mut(element).add_bonus(v),
            Effect::AllResistanceBonus(v) => {
                for element in ElementType::all() {
                    self.resistances.get_mut(*element).add_bonus(v);
                }
            }
            Effect::DragonheartResistance(v) => self.dragonheart_resistance = v,
        }
        self
    }

    /// Return the bundle with every effect in `effects` applied in order
    pub fn with_effects(self, effects: &[Effect]) -> Self {
        effects.iter().fold(self, |bundle, effect| bundle.with_effect(effect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_values() {
        let bundle = ModifierBundle::default();
        assert!(bundle.attack.is_neutral());
        assert!(bundle.defense.is_neutral());
        assert!((bundle.crit_multiplier - 1.25).abs() < f64::EPSILON);
        assert!((bundle.element_crit_multiplier - 1.0).abs() < f64::EPSILON);
        assert_eq!(bundle.sharpness_bonus, 0);
        assert!(bundle.elements.iter().all(|(_, m)| m.is_neutral()));
        assert!(bundle.statuses.iter().all(|(_, m)| m.is_neutral()));
        assert!(bundle.resistances.iter().all(|(_, m)| m.is_neutral()));
    }

    #[test]
    fn test_all_element_effects_touch_every_element() {
        let bundle = ModifierBundle::default().with_effects(&[
            Effect::AllElementBonus(4.0),
            Effect::AllElementMultiplier(1.1),
        ]);
        for (_, modifier) in bundle.elements.iter() {
            assert!((modifier.bonus - 4.0).abs() < f64::EPSILON);
            assert!((modifier.multiplier - 1.1).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_single_element_effect_is_isolated() {
        let bundle = ModifierBundle::default()
            .with_effect(&Effect::ElementMultiplier(ElementType::Ice, 1.05));
        assert!((bundle.elements.ice.multiplier - 1.05).abs() < f64::EPSILON);
        assert!(bundle.elements.fire.is_neutral());
    }

    #[test]
    fn test_crit_multiplier_is_replaced_not_scaled() {
        let bundle = ModifierBundle::default().with_effect(&Effect::CritMultiplier(1.4));
        assert!((bundle.crit_multiplier - 1.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_resistance_bonus() {
        let bundle = ModifierBundle::default().with_effect(&Effect::AllResistanceBonus(-10.0));
        assert!((bundle.resistances.dragon.bonus + 10.0).abs() < f64::EPSILON);
    }
}
