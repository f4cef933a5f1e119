//! SkillSource - Trait and implementations for skill providers

mod armor;
mod talisman;
mod weapon;

pub use armor::ArmorSource;
pub(crate) use armor::serde_label;
pub use talisman::TalismanSource;
pub use weapon::WeaponSource;

use crate::build::filled_slot;
use crate::diagnostic::Diagnostic;
use crate::skills::SkillAccumulator;

/// Anything in a build that grants skills
pub trait SkillSource {
    /// Label used in diagnostics ("weapon", "head armor", ...)
    fn id(&self) -> &str;

    /// Push this source's skill grants into the accumulator
    fn apply(&self, skills: &mut SkillAccumulator<'_>);
}

/// Grant the skill of every filled decoration slot
///
/// Slot sizes come from the owning item. A decoration that is too large
/// for its slot, or sits past the last slot, is still counted and a
/// diagnostic is raised; keeping slots well-formed is the selector's job.
pub(crate) fn apply_decorations(
    owner: &str,
    slot_sizes: &[u32],
    decorations: &[Option<String>],
    skills: &mut SkillAccumulator<'_>,
) {
    for (index, slot) in decorations.iter().enumerate() {
        let Some(name) = filled_slot(slot) else {
            continue;
        };

        let Some(decoration) = skills.catalog().decoration(name) else {
            skills.report(Diagnostic::UnknownDecoration {
                owner: owner.to_string(),
                name: name.to_string(),
            });
            continue;
        };

        match slot_sizes.get(index) {
            Some(&slot_size) if decoration.size > slot_size => {
                skills.report(Diagnostic::DecorationTooLarge {
                    owner: owner.to_string(),
                    name: name.to_string(),
                    index,
                    decoration_size: decoration.size,
                    slot_size,
                });
            }
            Some(_) => {}
            None => {
                skills.report(Diagnostic::NoSuchSlot {
                    owner: owner.to_string(),
                    name: name.to_string(),
                    index,
                    slot_count: slot_sizes.len(),
                });
            }
        }

        skills.add_grant(&decoration.skill, name);
    }
}
