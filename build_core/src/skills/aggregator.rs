//! SkillAccumulator - Collects skill grants before capping and propagation

use super::{AggregatedSkill, SkillSummary};
use crate::catalog::ReferenceCatalog;
use crate::config::PropagationConstants;
use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::types::SkillGrant;
use std::collections::BTreeMap;

/// Accumulates skill levels from every source in a build
///
/// Sources push grants in any order; levels are summed per skill name so
/// the result does not depend on enumeration order. Capping and
/// propagation happen once, in [`SkillAccumulator::finish`].
#[derive(Debug)]
pub struct SkillAccumulator<'c> {
    catalog: &'c ReferenceCatalog,
    skills: BTreeMap<String, AggregatedSkill>,
    rampage_skills: Vec<String>,
    diagnostics: Diagnostics,
}

impl<'c> SkillAccumulator<'c> {
    pub fn new(catalog: &'c ReferenceCatalog) -> Self {
        SkillAccumulator {
            catalog,
            skills: BTreeMap::new(),
            rampage_skills: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// The catalog grants are resolved against
    pub fn catalog(&self) -> &'c ReferenceCatalog {
        self.catalog
    }

    /// Add a leveled skill grant; unknown skills are reported and dropped
    pub fn add_grant(&mut self, grant: &SkillGrant, source_name: &str) {
        let catalog = self.catalog;
        let Some(definition) = catalog.skill(&grant.name) else {
            self.report(Diagnostic::UnknownSkill {
                name: grant.name.clone(),
                source_name: source_name.to_string(),
            });
            return;
        };

        let entry = self
            .skills
            .entry(grant.name.clone())
            .or_insert_with(|| AggregatedSkill::new(definition.max_level()));
        entry.level = entry.level.saturating_add(grant.level);
    }

    /// Add a flat rampage skill (no level, no effect rule)
    pub fn add_rampage_skill(&mut self, skill: &str, source_name: &str) {
        if self.catalog.rampage_skill(skill).is_none() {
            self.report(Diagnostic::UnknownSkill {
                name: skill.to_string(),
                source_name: source_name.to_string(),
            });
            return;
        }
        self.rampage_skills.push(skill.to_string());
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Cap every skill, then apply the propagation bonus once
    ///
    /// The propagation skill's own effective level picks the bonus, which is
    /// added to every other skill's raw level before re-capping. The bonus is
    /// single-hop: a skill raised by it cannot trigger further propagation.
    pub fn finish(
        mut self,
        propagation: &PropagationConstants,
    ) -> (SkillSummary, Vec<String>, Diagnostics) {
        for skill in self.skills.values_mut() {
            skill.clamp();
        }

        let bonus = self
            .skills
            .get(&propagation.skill)
            .map(|skill| propagation.bonus_at(skill.effective_level))
            .unwrap_or(0);

        if bonus > 0 {
            tracing::debug!(
                skill = %propagation.skill,
                bonus,
                "propagating bonus levels to {} other skills",
                self.skills.len().saturating_sub(1)
            );
            for (name, skill) in self.skills.iter_mut() {
                if *name != propagation.skill {
                    skill.level = skill.level.saturating_add(bonus);
                    skill.clamp();
                }
            }
        }

        (
            SkillSummary::from_map(self.skills),
            self.rampage_skills,
            self.diagnostics,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;

    fn finish(grants: &[(&str, u32)]) -> SkillSummary {
        let catalog = sample_catalog().unwrap();
        let mut acc = SkillAccumulator::new(&catalog);
        for (name, level) in grants {
            acc.add_grant(&SkillGrant::new(*name, *level), "test");
        }
        acc.finish(&PropagationConstants::default()).0
    }

    #[test]
    fn test_levels_sum_and_cap() {
        let summary = finish(&[("Weakness Exploit", 2), ("Weakness Exploit", 2)]);
        let skill = summary.get("Weakness Exploit").unwrap();
        assert_eq!(skill.level, 4);
        assert_eq!(skill.max_level, 3);
        assert_eq!(skill.effective_level, 3);
        assert!(skill.is_over_cap());
    }

    #[test]
    fn test_propagation_level_four_adds_one() {
        let summary = finish(&[("Stormsoul", 4), ("Attack Boost", 2), ("Critical Boost", 3)]);
        assert_eq!(summary.get("Attack Boost").unwrap().level, 3);
        assert_eq!(summary.effective_level("Attack Boost"), 3);
        // already at max: raw goes up, effective stays capped
        assert_eq!(summary.get("Critical Boost").unwrap().level, 4);
        assert_eq!(summary.effective_level("Critical Boost"), 3);
        assert_eq!(summary.effective_level("Stormsoul"), 4);
    }

    #[test]
    fn test_propagation_level_five_adds_two() {
        let summary = finish(&[("Stormsoul", 7), ("Handicraft", 1)]);
        assert_eq!(summary.effective_level("Stormsoul"), 5);
        assert_eq!(summary.get("Stormsoul").unwrap().level, 7);
        assert_eq!(summary.effective_level("Handicraft"), 3);
    }

    #[test]
    fn test_propagation_below_threshold_adds_nothing() {
        let summary = finish(&[("Stormsoul", 3), ("Handicraft", 1)]);
        assert_eq!(summary.effective_level("Handicraft"), 1);
    }

    #[test]
    fn test_huge_levels_saturate() {
        let summary = finish(&[("Attack Boost", u32::MAX), ("Attack Boost", 2), ("Stormsoul", 5)]);
        let skill = summary.get("Attack Boost").unwrap();
        assert_eq!(skill.level, u32::MAX);
        assert_eq!(skill.effective_level, 7);
        assert!(skill.is_over_cap());
    }

    #[test]
    fn test_unknown_skill_is_reported_not_counted() {
        let catalog = sample_catalog().unwrap();
        let mut acc = SkillAccumulator::new(&catalog);
        acc.add_grant(&SkillGrant::new("Nonexistent Skill", 2), "talisman");
        let (summary, _, diagnostics) = acc.finish(&PropagationConstants::default());

        assert!(summary.is_empty());
        assert_eq!(
            diagnostics.into_vec(),
            vec![Diagnostic::UnknownSkill {
                name: "Nonexistent Skill".into(),
                source_name: "talisman".into(),
            }]
        );
    }
}
