//! Effect resolution - Folding skill levels through the rule table

mod bundle;
mod modifier;
mod rules;

pub use bundle::{Effect, ModifierBundle};
pub use modifier::Modifier;
pub use rules::{all_rules, rule_for, SkillRule};

use crate::config::AffinityConstants;
use crate::skills::SkillSummary;
use std::collections::BTreeMap;

/// Fold every aggregated skill into one modifier bundle
///
/// Each skill contributes exactly the rule for its effective level. Skills
/// with no rule at that level, or no rule at all, are no-ops.
pub fn resolve_effects(skills: &SkillSummary, affinity: &AffinityConstants) -> ModifierBundle {
    resolve_active_effects(skills, &BTreeMap::new(), affinity)
}

/// Like [`resolve_effects`], skipping skills flagged `false` in `active`
pub fn resolve_active_effects(
    skills: &SkillSummary,
    active: &BTreeMap<String, bool>,
    affinity: &AffinityConstants,
) -> ModifierBundle {
    skills
        .iter()
        .filter(|(name, _)| active.get(*name).copied().unwrap_or(true))
        .filter_map(|(name, skill)| rule_for(name, skill.effective_level))
        .fold(ModifierBundle::baseline(affinity), |bundle, effects| {
            bundle.with_effects(effects)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::AggregatedSkill;

    fn summary(entries: &[(&str, u32, u32)]) -> SkillSummary {
        let map = entries
            .iter()
            .map(|(name, level, max)| {
                let mut skill = AggregatedSkill::new(*max);
                skill.level = *level;
                skill.clamp();
                (name.to_string(), skill)
            })
            .collect();
        SkillSummary::from_map(map)
    }

    #[test]
    fn test_attack_boost_seven() {
        let bundle = resolve_effects(&summary(&[("Attack Boost", 7, 7)]), &AffinityConstants::default());
        assert!((bundle.attack.bonus - 10.0).abs() < f64::EPSILON);
        assert!((bundle.attack.multiplier - 1.10).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rule_is_not_cumulative() {
        let bundle = resolve_effects(&summary(&[("Critical Eye", 3, 7)]), &AffinityConstants::default());
        assert!((bundle.affinity_bonus - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_handicraft_five() {
        let bundle = resolve_effects(&summary(&[("Handicraft", 5, 5)]), &AffinityConstants::default());
        assert_eq!(bundle.sharpness_bonus, 50);
    }

    #[test]
    fn test_over_cap_uses_effective_level() {
        let bundle = resolve_effects(&summary(&[("Handicraft", 9, 5)]), &AffinityConstants::default());
        assert_eq!(bundle.sharpness_bonus, 50);
    }

    #[test]
    fn test_skills_without_rules_are_ignored() {
        let bundle = resolve_effects(
            &summary(&[("Recovery Up", 3, 3), ("Affinity Sliding", 0, 1)]),
            &AffinityConstants::default(),
        );
        assert_eq!(bundle, ModifierBundle::default());
    }

    #[test]
    fn test_separate_skills_stack() {
        let bundle = resolve_effects(
            &summary(&[("Attack Boost", 3, 7), ("Peak Performance", 3, 3), ("Critical Boost", 2, 3)]),
            &AffinityConstants::default(),
        );
        assert!((bundle.attack.bonus - 29.0).abs() < f64::EPSILON);
        assert!((bundle.crit_multiplier - 1.35).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cross_element_rules_multiply() {
        // Stormsoul and Element Exploit both scale thunder
        let bundle = resolve_effects(
            &summary(&[("Stormsoul", 3, 5), ("Element Exploit", 1, 3)]),
            &AffinityConstants::default(),
        );
        assert!((bundle.elements.thunder.multiplier - 1.15 * 1.1).abs() < 1e-12);
        assert!((bundle.elements.fire.multiplier - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_inactive_skills_are_skipped() {
        let skills = summary(&[("Attack Boost", 7, 7), ("Agitator", 5, 5)]);
        let active = BTreeMap::from([("Agitator".to_string(), false)]);
        let bundle = resolve_active_effects(&skills, &active, &AffinityConstants::default());
        assert!((bundle.attack.bonus - 10.0).abs() < f64::EPSILON);
        assert!(bundle.affinity_bonus.abs() < f64::EPSILON);
    }

    #[test]
    fn test_baseline_follows_constants() {
        let affinity = AffinityConstants {
            base_crit_multiplier: 1.3,
            ..AffinityConstants::default()
        };
        let bundle = resolve_effects(&SkillSummary::default(), &affinity);
        assert!((bundle.crit_multiplier - 1.3).abs() < f64::EPSILON);
    }
}
