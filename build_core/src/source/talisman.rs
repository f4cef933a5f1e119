//! TalismanSource - Skills from the talisman's free skills and slots

use super::{apply_decorations, SkillSource};
use crate::build::{filled_slot, TalismanChoice, TALISMAN_SKILLS, TALISMAN_SLOTS};
use crate::diagnostic::Diagnostic;
use crate::skills::SkillAccumulator;

pub struct TalismanSource<'a> {
    pub choice: &'a TalismanChoice,
}

impl<'a> TalismanSource<'a> {
    pub fn new(choice: &'a TalismanChoice) -> Self {
        TalismanSource { choice }
    }
}

impl SkillSource for TalismanSource<'_> {
    fn id(&self) -> &str {
        "talisman"
    }

    fn apply(&self, skills: &mut SkillAccumulator<'_>) {
        for (index, grant) in self.choice.skills.iter().enumerate() {
            if index < TALISMAN_SKILLS {
                skills.add_grant(grant, self.id());
            } else {
                skills.report(Diagnostic::NoSuchSlot {
                    owner: "talisman skill list".to_string(),
                    name: grant.name.clone(),
                    index,
                    slot_count: TALISMAN_SKILLS,
                });
            }
        }

        // Extra slots are dropped, not counted
        for (index, slot) in self.choice.slots.iter().enumerate().skip(TALISMAN_SLOTS) {
            if let Some(name) = filled_slot(&slot.decoration) {
                skills.report(Diagnostic::NoSuchSlot {
                    owner: self.id().to_string(),
                    name: name.to_string(),
                    index,
                    slot_count: TALISMAN_SLOTS,
                });
            }
        }

        let slots: Vec<_> = self.choice.slots.iter().take(TALISMAN_SLOTS).collect();
        let sizes: Vec<u32> = slots.iter().map(|slot| slot.size).collect();
        let decorations: Vec<Option<String>> =
            slots.iter().map(|slot| slot.decoration.clone()).collect();

        apply_decorations(self.id(), &sizes, &decorations, skills);
    }
}
