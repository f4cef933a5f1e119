//! Skill aggregation - Summing, capping and propagating skill levels

mod aggregator;

pub use aggregator::SkillAccumulator;

use crate::build::BuildSelection;
use crate::catalog::ReferenceCatalog;
use crate::config::PropagationConstants;
use crate::diagnostic::Diagnostics;
use crate::source::{ArmorSource, SkillSource, TalismanSource, WeaponSource};
use crate::types::ArmorSlot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One skill's totals for a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedSkill {
    /// Sum of every grant, uncapped
    pub level: u32,
    /// Number of levels in the skill definition
    pub max_level: u32,
    /// `min(level, max_level)`
    pub effective_level: u32,
}

impl AggregatedSkill {
    pub fn new(max_level: u32) -> Self {
        AggregatedSkill {
            level: 0,
            max_level,
            effective_level: 0,
        }
    }

    pub(crate) fn clamp(&mut self) {
        self.effective_level = self.level.min(self.max_level);
    }

    /// More levels were granted than the skill can use
    pub fn is_over_cap(&self) -> bool {
        self.level > self.max_level
    }
}

/// Skill name → aggregated totals, in name order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSummary {
    skills: BTreeMap<String, AggregatedSkill>,
}

impl SkillSummary {
    pub fn from_map(skills: BTreeMap<String, AggregatedSkill>) -> Self {
        SkillSummary { skills }
    }

    pub fn get(&self, name: &str) -> Option<&AggregatedSkill> {
        self.skills.get(name)
    }

    /// Effective level of a skill, 0 when the build has none
    pub fn effective_level(&self, name: &str) -> u32 {
        self.skills.get(name).map(|s| s.effective_level).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AggregatedSkill)> {
        self.skills.iter().map(|(name, skill)| (name.as_str(), skill))
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Highest effective level first, ties broken by name
    pub fn sorted_for_display(&self) -> Vec<(&str, &AggregatedSkill)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| {
            b.1.effective_level
                .cmp(&a.1.effective_level)
                .then_with(|| a.0.cmp(b.0))
        });
        entries
    }
}

/// Everything the aggregation step produces for a build
#[derive(Debug, Clone, Default)]
pub struct SkillAggregation {
    pub skills: SkillSummary,
    /// Flat rampage skills granted by weapon rampage decorations
    pub rampage_skills: Vec<String>,
    pub diagnostics: Diagnostics,
}

/// Collect, sum, cap and propagate every skill a build grants
pub fn aggregate_skills(
    build: &BuildSelection,
    catalog: &ReferenceCatalog,
    propagation: &PropagationConstants,
) -> SkillAggregation {
    let mut accumulator = SkillAccumulator::new(catalog);

    WeaponSource::new(&build.weapon).apply(&mut accumulator);
    for slot in ArmorSlot::all() {
        ArmorSource::new(*slot, build.armor(*slot)).apply(&mut accumulator);
    }
    TalismanSource::new(&build.talisman).apply(&mut accumulator);

    let (skills, rampage_skills, diagnostics) = accumulator.finish(propagation);
    SkillAggregation {
        skills,
        rampage_skills,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::ArmorChoice;
    use crate::catalog::sample_catalog;

    fn narwa_build() -> BuildSelection {
        let mut build = BuildSelection::with_weapon("Thunderbolt Blade");
        build.head = ArmorChoice::new("Narwa Soul Helm");
        build.body = ArmorChoice::new("Narwa Soul Mail");
        build.arms = ArmorChoice::new("Narwa Soul Vambraces");
        build
    }

    #[test]
    fn test_full_set_triggers_propagation() {
        let catalog = sample_catalog().unwrap();
        let aggregation =
            aggregate_skills(&narwa_build(), &catalog, &PropagationConstants::default());
        let skills = &aggregation.skills;

        // 2 + 2 + 1 Stormsoul = 5, so every other skill gets +2
        assert_eq!(skills.effective_level("Stormsoul"), 5);
        assert_eq!(skills.get("Thunder Attack").unwrap().level, 3);
        assert_eq!(skills.get("Attack Boost").unwrap().level, 4);
        assert_eq!(skills.get("Critical Eye").unwrap().level, 4);
        assert!(aggregation.diagnostics.is_empty());
    }

    #[test]
    fn test_sorted_for_display() {
        let catalog = sample_catalog().unwrap();
        let aggregation =
            aggregate_skills(&narwa_build(), &catalog, &PropagationConstants::default());
        let names: Vec<&str> = aggregation
            .skills
            .sorted_for_display()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            vec!["Stormsoul", "Attack Boost", "Critical Eye", "Thunder Attack"]
        );
    }

    #[test]
    fn test_empty_build_has_no_skills() {
        let catalog = sample_catalog().unwrap();
        let build = BuildSelection::with_weapon("Kamura Cleaver I");
        let aggregation = aggregate_skills(&build, &catalog, &PropagationConstants::default());
        assert!(aggregation.skills.is_empty());
        assert!(aggregation.rampage_skills.is_empty());
    }
}
