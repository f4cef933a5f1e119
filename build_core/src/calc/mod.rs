//! Stat calculation - Base item stats combined with the modifier bundle

mod sharpness;

pub use sharpness::{simulate_sharpness, SharpnessResult};

use crate::catalog::{ArmorDefinition, WeaponDefinition};
use crate::config::{EngineConstants, SharpnessMultipliers, SHARPNESS_TIERS};
use crate::effects::ModifierBundle;
use crate::types::{ElementTable, ElementType, StatusType};
use serde::{Deserialize, Serialize};

/// Final stats for a build, composites plus every intermediate value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatedStats {
    // === Physical ===
    /// Raw averaged over crit chance and sharpness
    pub effective_raw: f64,
    /// `(attack + bonus) × multiplier`
    pub raw: f64,
    /// Unclamped; may be negative or above 100
    pub affinity: f64,
    pub crit_multiplier: f64,

    // === Element / Status ===
    pub element_type: Option<ElementType>,
    pub effective_element: f64,
    pub element: f64,
    pub element_crit_multiplier: f64,
    pub status_type: Option<StatusType>,
    pub status: f64,

    // === Defense ===
    pub defense: f64,
    pub resistances: ElementTable<f64>,

    // === Sharpness ===
    pub sharpness: [u32; SHARPNESS_TIERS],
    pub sharpness_class: usize,
    pub sharpness_multipliers: SharpnessMultipliers,
}

impl CalculatedStats {
    /// Names of every float field that is NaN or infinite
    pub fn non_finite_fields(&self) -> Vec<String> {
        let mut fields: Vec<(String, f64)> = vec![
            ("effective_raw".into(), self.effective_raw),
            ("raw".into(), self.raw),
            ("affinity".into(), self.affinity),
            ("crit_multiplier".into(), self.crit_multiplier),
            ("effective_element".into(), self.effective_element),
            ("element".into(), self.element),
            ("element_crit_multiplier".into(), self.element_crit_multiplier),
            ("status".into(), self.status),
            ("defense".into(), self.defense),
            ("sharpness_multipliers.raw".into(), self.sharpness_multipliers.raw),
            (
                "sharpness_multipliers.elemental".into(),
                self.sharpness_multipliers.elemental,
            ),
        ];
        fields.extend(
            self.resistances
                .iter()
                .map(|(element, value)| (format!("resistances.{element:?}").to_lowercase(), *value)),
        );

        fields
            .into_iter()
            .filter(|(_, value)| !value.is_finite())
            .map(|(name, _)| name)
            .collect()
    }
}

/// Combine base stats with the bundle
///
/// A missing weapon contributes zero attack, no element and no sharpness.
pub fn calculate_stats(
    weapon: Option<&WeaponDefinition>,
    armor: &[&ArmorDefinition],
    bundle: &ModifierBundle,
    constants: &EngineConstants,
) -> CalculatedStats {
    let affinity_constants = &constants.affinity;
    let stats = weapon.map(|w| w.stats.clone()).unwrap_or_default();

    // Physical
    let raw = bundle.attack.apply(stats.attack);
    let affinity = stats.affinity + bundle.affinity_bonus;
    let negative = affinity < 0.0;
    let crit_multiplier = if negative {
        affinity_constants.negative_crit_multiplier
    } else {
        bundle.crit_multiplier
    };

    // Element / status
    let element = stats
        .element
        .map(|e| bundle.elements.get(e.element).apply(e.power))
        .unwrap_or(0.0);
    let element_crit_multiplier = if negative {
        affinity_constants.negative_element_crit_multiplier
    } else {
        bundle.element_crit_multiplier
    };
    let status = stats
        .status
        .map(|s| bundle.statuses.get(s.status).apply(s.power))
        .unwrap_or(0.0);

    // Defense / resistance
    let base_defense = stats.defense + armor.iter().map(|a| a.stats.defense).sum::<f64>();
    let defense = bundle.defense.apply(base_defense);
    let resistances = ElementTable::from_fn(|element| {
        let base: f64 = armor.iter().map(|a| *a.stats.resistances.get(element)).sum();
        bundle.resistances.get(element).apply(base)
    });

    // Sharpness
    let (current, max) = weapon
        .map(|w| (w.sharpness.as_slice(), w.max_sharpness.as_slice()))
        .unwrap_or_default();
    let sharpness = simulate_sharpness(current, max, bundle.sharpness_bonus);
    let tier = constants.sharpness.multipliers(sharpness.class);

    // Effective values
    // a negative or NaN cap blends nothing
    let effective_affinity = affinity.abs().min(affinity_constants.cap.max(0.0)) / 100.0;
    let effective_raw = raw * tier.raw * (1.0 + (crit_multiplier - 1.0) * effective_affinity);
    let effective_element =
        element * tier.elemental * (1.0 + (element_crit_multiplier - 1.0) * effective_affinity);

    CalculatedStats {
        effective_raw,
        raw,
        affinity,
        crit_multiplier,
        element_type: stats.element.map(|e| e.element),
        effective_element,
        element,
        element_crit_multiplier,
        status_type: stats.status.map(|s| s.status),
        status,
        defense,
        resistances,
        sharpness: sharpness.values,
        sharpness_class: sharpness.class,
        sharpness_multipliers: tier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;
    use crate::effects::Effect;

    fn constants() -> EngineConstants {
        EngineConstants::default()
    }

    #[test]
    fn test_plain_weapon() {
        let catalog = sample_catalog().unwrap();
        let weapon = catalog.weapon("Kamura Cleaver I");
        let stats = calculate_stats(weapon, &[], &ModifierBundle::default(), &constants());

        assert!((stats.raw - 100.0).abs() < f64::EPSILON);
        assert_eq!(stats.sharpness_class, 3);
        // green: 1.05
        assert!((stats.effective_raw - 105.0).abs() < 1e-9);
        assert!((stats.crit_multiplier - 1.25).abs() < f64::EPSILON);
        assert!(stats.element_type.is_none());
        assert!(stats.element.abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_weapon() {
        let stats = calculate_stats(None, &[], &ModifierBundle::default(), &constants());
        assert!(stats.raw.abs() < f64::EPSILON);
        assert_eq!(stats.sharpness, [0; 7]);
        assert!(stats.non_finite_fields().is_empty());
    }

    #[test]
    fn test_bonus_before_multiplier() {
        let catalog = sample_catalog().unwrap();
        let bundle = ModifierBundle::default()
            .with_effects(&[Effect::AttackBonus(10.0), Effect::AttackMultiplier(1.1)]);
        let stats = calculate_stats(catalog.weapon("Kamura Cleaver I"), &[], &bundle, &constants());
        assert!((stats.raw - 121.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_affinity_forces_penalty() {
        let catalog = sample_catalog().unwrap();
        let bundle = ModifierBundle::default().with_effects(&[
            Effect::CritMultiplier(1.4),
            Effect::ElementCritMultiplier(1.15),
        ]);
        let weapon = catalog.weapon("Rathalos Firesword");
        let stats = calculate_stats(weapon, &[], &bundle, &constants());

        assert!(stats.affinity < 0.0);
        assert!((stats.crit_multiplier - 0.75).abs() < f64::EPSILON);
        assert!((stats.element_crit_multiplier - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_positive_affinity_blends_crit() {
        let catalog = sample_catalog().unwrap();
        let bundle = ModifierBundle::default().with_effect(&Effect::AffinityBonus(90.0));
        let weapon = catalog.weapon("Kamura Cleaver I");
        let stats = calculate_stats(weapon, &[], &bundle, &constants());

        // 100 affinity after clamp: full 1.25 crit
        assert!((stats.affinity - 90.0).abs() < f64::EPSILON);
        let expected = 100.0 * 1.05 * (1.0 + 0.25 * 0.9);
        assert!((stats.effective_raw - expected).abs() < 1e-9);
    }

    #[test]
    fn test_affinity_above_cap_is_clamped_for_blending() {
        let catalog = sample_catalog().unwrap();
        let bundle = ModifierBundle::default().with_effect(&Effect::AffinityBonus(150.0));
        let stats = calculate_stats(catalog.weapon("Kamura Cleaver I"), &[], &bundle, &constants());
        assert!((stats.affinity - 150.0).abs() < f64::EPSILON);
        assert!((stats.effective_raw - 100.0 * 1.05 * 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_element_applies_matching_modifier() {
        let catalog = sample_catalog().unwrap();
        let bundle = ModifierBundle::default().with_effects(&[
            Effect::ElementBonus(ElementType::Thunder, 4.0),
            Effect::ElementMultiplier(ElementType::Thunder, 1.1),
            Effect::ElementBonus(ElementType::Fire, 100.0),
        ]);
        let stats = calculate_stats(catalog.weapon("Thunderbolt Blade"), &[], &bundle, &constants());
        assert_eq!(stats.element_type, Some(ElementType::Thunder));
        assert!((stats.element - (25.0 + 4.0) * 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_status_has_no_crit() {
        let catalog = sample_catalog().unwrap();
        let bundle = ModifierBundle::default().with_effects(&[
            Effect::StatusBonus(StatusType::Poison, 5.0),
            Effect::AffinityBonus(100.0),
        ]);
        let stats = calculate_stats(catalog.weapon("Venom Fang"), &[], &bundle, &constants());
        assert_eq!(stats.status_type, Some(StatusType::Poison));
        assert!((stats.status - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_defense_and_resistances_sum_armor() {
        let catalog = sample_catalog().unwrap();
        let armor: Vec<&ArmorDefinition> = ["Kamura Head Scarf", "Kamura Garb"]
            .iter()
            .filter_map(|name| catalog.armor(name))
            .collect();
        assert_eq!(armor.len(), 2);

        let bundle = ModifierBundle::default().with_effects(&[
            Effect::DefenseBonus(6.0),
            Effect::DefenseMultiplier(1.5),
            Effect::ResistanceBonus(ElementType::Fire, 6.0),
        ]);
        let stats = calculate_stats(None, &armor, &bundle, &constants());
        assert!((stats.defense - (2.0 + 2.0 + 6.0) * 1.5).abs() < 1e-9);
        assert!((stats.resistances.fire - 8.0).abs() < 1e-9);
        assert!((stats.resistances.water - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_affinity_cap_does_not_panic() {
        let catalog = sample_catalog().unwrap();
        let bundle = ModifierBundle::default().with_effect(&Effect::AffinityBonus(50.0));
        for cap in [-1.0, f64::NAN] {
            let mut constants = constants();
            constants.affinity.cap = cap;
            let stats = calculate_stats(catalog.weapon("Kamura Cleaver I"), &[], &bundle, &constants);
            assert!((stats.effective_raw - 105.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_non_finite_fields_reported() {
        let catalog = sample_catalog().unwrap();
        let bundle = ModifierBundle::default().with_effect(&Effect::AttackMultiplier(f64::NAN));
        let stats = calculate_stats(catalog.weapon("Kamura Cleaver I"), &[], &bundle, &constants());
        let fields = stats.non_finite_fields();
        assert!(fields.contains(&"raw".to_string()));
        assert!(fields.contains(&"effective_raw".to_string()));
    }
}
