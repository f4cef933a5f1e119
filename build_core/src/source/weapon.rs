//! WeaponSource - Skills from weapon decorations and rampage decorations

use super::{apply_decorations, SkillSource};
use crate::build::{filled_slot, WeaponChoice};
use crate::diagnostic::Diagnostic;
use crate::skills::SkillAccumulator;

/// Skills granted through the weapon
///
/// Weapons have no innate skills; only their decorations count. Rampage
/// decorations grant flat rampage skills that are listed separately and
/// never enter level aggregation.
pub struct WeaponSource<'a> {
    pub choice: &'a WeaponChoice,
}

impl<'a> WeaponSource<'a> {
    pub fn new(choice: &'a WeaponChoice) -> Self {
        WeaponSource { choice }
    }
}

impl SkillSource for WeaponSource<'_> {
    fn id(&self) -> &str {
        "weapon"
    }

    fn apply(&self, skills: &mut SkillAccumulator<'_>) {
        if self.choice.name.is_empty() {
            return;
        }

        // Unknown weapons are reported by the engine when it resolves stats
        let Some(weapon) = skills.catalog().weapon(&self.choice.name) else {
            return;
        };
        apply_decorations(self.id(), &weapon.slots, &self.choice.decorations, skills);

        let rampage_slots = weapon.rampage_slots.len();
        for (index, slot) in self.choice.rampage_decorations.iter().enumerate() {
            let Some(name) = filled_slot(slot) else {
                continue;
            };
            // Extra rampage decorations are dropped, not counted
            if index >= rampage_slots {
                skills.report(Diagnostic::NoSuchSlot {
                    owner: "weapon rampage slots".to_string(),
                    name: name.to_string(),
                    index,
                    slot_count: rampage_slots,
                });
                continue;
            }
            match skills.catalog().rampage_decoration(name) {
                Some(decoration) => skills.add_rampage_skill(&decoration.skill, name),
                None => skills.report(Diagnostic::UnknownRampageDecoration {
                    owner: self.id().to_string(),
                    name: name.to_string(),
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;
    use crate::config::PropagationConstants;

    #[test]
    fn test_weapon_decorations_grant_skills() {
        let catalog = sample_catalog().unwrap();
        let choice = WeaponChoice {
            name: "Thunderbolt Blade".into(),
            decorations: vec![Some("Tenderizer Jewel 2".into()), Some("Attack Jewel 1".into())],
            rampage_decorations: vec![Some("Thunder Boost Jewel II".into())],
        };

        let mut acc = SkillAccumulator::new(&catalog);
        WeaponSource::new(&choice).apply(&mut acc);
        let (summary, rampage, diagnostics) = acc.finish(&PropagationConstants::default());

        assert_eq!(summary.effective_level("Weakness Exploit"), 1);
        assert_eq!(summary.effective_level("Attack Boost"), 1);
        assert_eq!(rampage, vec!["Thunder Boost II".to_string()]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_oversized_decoration_is_counted_and_reported() {
        let catalog = sample_catalog().unwrap();
        let choice = WeaponChoice {
            name: "Kamura Cleaver I".into(),
            decorations: vec![Some("Handicraft Jewel 3".into())],
            rampage_decorations: vec![],
        };

        let mut acc = SkillAccumulator::new(&catalog);
        WeaponSource::new(&choice).apply(&mut acc);
        let (summary, _, diagnostics) = acc.finish(&PropagationConstants::default());

        assert_eq!(summary.effective_level("Handicraft"), 1);
        assert!(matches!(
            diagnostics.iter().next(),
            Some(Diagnostic::DecorationTooLarge { slot_size: 1, decoration_size: 3, .. })
        ));
    }

    #[test]
    fn test_unknown_rampage_decoration_reported() {
        let catalog = sample_catalog().unwrap();
        let choice = WeaponChoice {
            name: "Kamura Cleaver I".into(),
            decorations: vec![],
            rampage_decorations: vec![Some("Lost Jewel".into())],
        };

        let mut acc = SkillAccumulator::new(&catalog);
        WeaponSource::new(&choice).apply(&mut acc);
        let (_, rampage, diagnostics) = acc.finish(&PropagationConstants::default());

        assert!(rampage.is_empty());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_extra_rampage_decoration_reported() {
        let catalog = sample_catalog().unwrap();
        let choice = WeaponChoice {
            name: "Kamura Cleaver I".into(),
            decorations: vec![],
            rampage_decorations: vec![
                Some("Attack Boost Jewel I".into()),
                Some("Thunder Boost Jewel II".into()),
            ],
        };

        let mut acc = SkillAccumulator::new(&catalog);
        WeaponSource::new(&choice).apply(&mut acc);
        let (_, rampage, diagnostics) = acc.finish(&PropagationConstants::default());

        assert_eq!(rampage, vec!["Attack Boost I".to_string()]);
        assert_eq!(
            diagnostics.into_vec(),
            vec![Diagnostic::NoSuchSlot {
                owner: "weapon rampage slots".into(),
                name: "Thunder Boost Jewel II".into(),
                index: 1,
                slot_count: 1,
            }]
        );
    }
}
