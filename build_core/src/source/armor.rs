//! ArmorSource - Skills from an equipped armor piece

use super::{apply_decorations, SkillSource};
use crate::build::ArmorChoice;
use crate::skills::SkillAccumulator;
use crate::types::ArmorSlot;

/// Innate skills and decoration skills of one armor piece
pub struct ArmorSource<'a> {
    pub slot: ArmorSlot,
    pub choice: &'a ArmorChoice,
    label: String,
}

impl<'a> ArmorSource<'a> {
    pub fn new(slot: ArmorSlot, choice: &'a ArmorChoice) -> Self {
        let label = format!("{} armor", serde_label(slot));
        ArmorSource { slot, choice, label }
    }
}

/// Lowercase slot name as used in data files
pub(crate) fn serde_label(slot: ArmorSlot) -> &'static str {
    match slot {
        ArmorSlot::Head => "head",
        ArmorSlot::Body => "body",
        ArmorSlot::Arms => "arms",
        ArmorSlot::Waist => "waist",
        ArmorSlot::Legs => "legs",
    }
}

impl SkillSource for ArmorSource<'_> {
    fn id(&self) -> &str {
        &self.label
    }

    fn apply(&self, skills: &mut SkillAccumulator<'_>) {
        if self.choice.is_empty() {
            return;
        }

        // Unknown armor is reported by the engine when it resolves stats
        let Some(armor) = skills.catalog().armor(&self.choice.name) else {
            return;
        };
        for grant in &armor.skills {
            skills.add_grant(grant, &self.choice.name);
        }

        apply_decorations(&self.label, &armor.slots, &self.choice.decorations, skills);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;
    use crate::config::PropagationConstants;

    #[test]
    fn test_innate_and_decoration_skills_sum() {
        let catalog = sample_catalog().unwrap();
        let choice = ArmorChoice::new("Kamura Head Scarf").with_decorations(&["Attack Jewel 1"]);

        let mut acc = SkillAccumulator::new(&catalog);
        ArmorSource::new(ArmorSlot::Head, &choice).apply(&mut acc);
        let (summary, _, diagnostics) = acc.finish(&PropagationConstants::default());

        assert_eq!(summary.effective_level("Attack Boost"), 2);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_empty_armor_grants_nothing() {
        let catalog = sample_catalog().unwrap();
        let choice = ArmorChoice::default();

        let mut acc = SkillAccumulator::new(&catalog);
        ArmorSource::new(ArmorSlot::Legs, &choice).apply(&mut acc);
        let (summary, _, diagnostics) = acc.finish(&PropagationConstants::default());

        assert!(summary.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_source_label() {
        let choice = ArmorChoice::new("Kamura Obi");
        assert_eq!(ArmorSource::new(ArmorSlot::Waist, &choice).id(), "waist armor");
    }
}
