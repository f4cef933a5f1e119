//! Skill effect rule table
//!
//! Each skill lists the full effect of every level it has a mechanical
//! effect at. A level's entry already contains what lower levels grant,
//! so exactly one entry is applied per skill.

use super::bundle::Effect;
use super::bundle::Effect::*;
use crate::types::ElementType::{self, Dragon, Fire, Ice, Thunder, Water};
use crate::types::StatusType::{self, Blast, Paralyze, Poison, Sleep};

/// Effects of one skill, indexed by `level - 1`
#[derive(Debug)]
pub struct SkillRule {
    pub skill: &'static str,
    pub levels: &'static [&'static [Effect]],
}

impl SkillRule {
    /// Effects at exactly `level`, if the skill defines that level
    pub fn at_level(&self, level: u32) -> Option<&'static [Effect]> {
        let index = (level as usize).checked_sub(1)?;
        self.levels.get(index).copied()
    }
}

/// Rule for a skill at a level; `None` means the level has no modeled effect
pub fn rule_for(skill: &str, level: u32) -> Option<&'static [Effect]> {
    SKILL_RULES
        .iter()
        .find(|rule| rule.skill == skill)
        .and_then(|rule| rule.at_level(level))
}

/// Every skill with a modeled effect
pub fn all_rules() -> &'static [SkillRule] {
    SKILL_RULES
}

macro_rules! element_attack {
    ($e:expr) => {
        &[
            &[ElementBonus($e, 2.0)],
            &[ElementBonus($e, 3.0)],
            &[ElementBonus($e, 4.0), ElementMultiplier($e, 1.05)],
            &[ElementBonus($e, 4.0), ElementMultiplier($e, 1.1)],
            &[ElementBonus($e, 4.0), ElementMultiplier($e, 1.2)],
        ]
    };
}

macro_rules! status_attack {
    ($s:expr) => {
        &[
            &[StatusBonus($s, 1.0), StatusMultiplier($s, 1.05)],
            &[StatusBonus($s, 2.0), StatusMultiplier($s, 1.1)],
            &[StatusBonus($s, 5.0), StatusMultiplier($s, 1.2)],
        ]
    };
}

macro_rules! element_resistance {
    ($e:expr) => {
        &[
            &[ResistanceBonus($e, 6.0)],
            &[ResistanceBonus($e, 12.0)],
            &[ResistanceBonus($e, 20.0), DefenseBonus(10.0)],
        ]
    };
}

macro_rules! alignment {
    ($e:expr) => {
        &[
            &[ResistanceBonus($e, 1.0)],
            &[ResistanceBonus($e, 2.0)],
            &[ResistanceBonus($e, 3.0)],
            &[ResistanceBonus($e, 4.0)],
            &[ResistanceBonus($e, 4.0)],
        ]
    };
}

const fn dual_element(a: ElementType, b: ElementType, factor: f64) -> [Effect; 2] {
    [ElementMultiplier(a, factor), ElementMultiplier(b, factor)]
}

const fn element_and_status(e: ElementType, s: StatusType, factor: f64) -> [Effect; 2] {
    [ElementMultiplier(e, factor), StatusMultiplier(s, factor)]
}

static SKILL_RULES: &[SkillRule] = &[
    SkillRule {
        skill: "Attack Boost",
        levels: &[
            &[AttackBonus(3.0)],
            &[AttackBonus(6.0)],
            &[AttackBonus(9.0)],
            &[AttackBonus(7.0), AttackMultiplier(1.05)],
            &[AttackBonus(8.0), AttackMultiplier(1.06)],
            &[AttackBonus(9.0), AttackMultiplier(1.08)],
            &[AttackBonus(10.0), AttackMultiplier(1.10)],
        ],
    },
    SkillRule {
        skill: "Agitator",
        levels: &[
            &[AttackBonus(4.0), AffinityBonus(3.0)],
            &[AttackBonus(8.0), AffinityBonus(5.0)],
            &[AttackBonus(12.0), AffinityBonus(7.0)],
            &[AttackBonus(16.0), AffinityBonus(10.0)],
            &[AttackBonus(20.0), AffinityBonus(15.0)],
        ],
    },
    SkillRule {
        skill: "Peak Performance",
        levels: &[&[AttackBonus(5.0)], &[AttackBonus(10.0)], &[AttackBonus(20.0)]],
    },
    SkillRule {
        skill: "Resentment",
        levels: &[
            &[AttackBonus(5.0)],
            &[AttackBonus(10.0)],
            &[AttackBonus(15.0)],
            &[AttackBonus(20.0)],
            &[AttackBonus(25.0)],
        ],
    },
    SkillRule {
        skill: "Resuscitate",
        levels: &[&[AttackBonus(5.0)], &[AttackBonus(10.0)], &[AttackBonus(20.0)]],
    },
    SkillRule {
        skill: "Critical Eye",
        levels: &[
            &[AffinityBonus(5.0)],
            &[AffinityBonus(10.0)],
            &[AffinityBonus(15.0)],
            &[AffinityBonus(20.0)],
            &[AffinityBonus(25.0)],
            &[AffinityBonus(30.0)],
            &[AffinityBonus(40.0)],
        ],
    },
    SkillRule {
        skill: "Critical Boost",
        levels: &[&[CritMultiplier(1.3)], &[CritMultiplier(1.35)], &[CritMultiplier(1.4)]],
    },
    SkillRule {
        skill: "Weakness Exploit",
        levels: &[&[AffinityBonus(15.0)], &[AffinityBonus(30.0)], &[AffinityBonus(50.0)]],
    },
    SkillRule {
        skill: "Latent Power",
        levels: &[
            &[AffinityBonus(10.0)],
            &[AffinityBonus(20.0)],
            &[AffinityBonus(30.0)],
            &[AffinityBonus(40.0)],
            &[AffinityBonus(50.0)],
        ],
    },
    SkillRule {
        skill: "Maximum Might",
        levels: &[&[AffinityBonus(10.0)], &[AffinityBonus(20.0)], &[AffinityBonus(30.0)]],
    },
    SkillRule {
        skill: "Critical Element",
        levels: &[
            &[ElementCritMultiplier(1.05)],
            &[ElementCritMultiplier(1.1)],
            &[ElementCritMultiplier(1.15)],
        ],
    },
    SkillRule { skill: "Fire Attack", levels: element_attack!(Fire) },
    SkillRule { skill: "Water Attack", levels: element_attack!(Water) },
    SkillRule { skill: "Ice Attack", levels: element_attack!(Ice) },
    SkillRule { skill: "Thunder Attack", levels: element_attack!(Thunder) },
    SkillRule { skill: "Dragon Attack", levels: element_attack!(Dragon) },
    SkillRule { skill: "Poison Attack", levels: status_attack!(Poison) },
    SkillRule { skill: "Paralysis Attack", levels: status_attack!(Paralyze) },
    SkillRule { skill: "Sleep Attack", levels: status_attack!(Sleep) },
    SkillRule { skill: "Blast Attack", levels: status_attack!(Blast) },
    SkillRule {
        skill: "Handicraft",
        levels: &[
            &[SharpnessBonus(10)],
            &[SharpnessBonus(20)],
            &[SharpnessBonus(30)],
            &[SharpnessBonus(40)],
            &[SharpnessBonus(50)],
        ],
    },
    SkillRule {
        skill: "Bludgeoner",
        levels: &[
            &[AttackMultiplier(1.05)],
            &[AttackMultiplier(1.1)],
            &[AttackMultiplier(1.1)],
        ],
    },
    SkillRule {
        skill: "Offensive Guard",
        levels: &[
            &[AttackMultiplier(1.05)],
            &[AttackMultiplier(1.1)],
            &[AttackMultiplier(1.15)],
        ],
    },
    SkillRule {
        skill: "Critical Draw",
        levels: &[&[AffinityBonus(10.0)], &[AffinityBonus(20.0)], &[AffinityBonus(40.0)]],
    },
    SkillRule {
        skill: "Punishing Draw",
        levels: &[&[AttackBonus(3.0)], &[AttackBonus(5.0)], &[AttackBonus(7.0)]],
    },
    SkillRule {
        skill: "Affinity Sliding",
        levels: &[&[AffinityBonus(30.0)]],
    },
    SkillRule {
        skill: "Defense Boost",
        levels: &[
            &[DefenseBonus(5.0)],
            &[DefenseBonus(10.0)],
            &[DefenseBonus(10.0), DefenseMultiplier(1.05)],
            &[DefenseBonus(20.0), DefenseMultiplier(1.05), AllResistanceBonus(3.0)],
            &[DefenseBonus(20.0), DefenseMultiplier(1.08), AllResistanceBonus(3.0)],
            &[DefenseBonus(35.0), DefenseMultiplier(1.08), AllResistanceBonus(5.0)],
            &[DefenseBonus(35.0), DefenseMultiplier(1.10), AllResistanceBonus(5.0)],
        ],
    },
    SkillRule { skill: "Fire Resistance", levels: element_resistance!(Fire) },
    SkillRule { skill: "Water Resistance", levels: element_resistance!(Water) },
    SkillRule { skill: "Ice Resistance", levels: element_resistance!(Ice) },
    SkillRule { skill: "Thunder Resistance", levels: element_resistance!(Thunder) },
    SkillRule { skill: "Dragon Resistance", levels: element_resistance!(Dragon) },
    SkillRule {
        skill: "Heroics",
        levels: &[
            &[DefenseBonus(50.0)],
            &[DefenseBonus(50.0), AttackMultiplier(1.05)],
            &[DefenseBonus(100.0), AttackMultiplier(1.05)],
            &[DefenseBonus(100.0), AttackMultiplier(1.1)],
            &[AttackMultiplier(1.3)],
        ],
    },
    SkillRule {
        skill: "Kushala Blessing",
        levels: &[
            &dual_element(Water, Ice, 1.05),
            &dual_element(Water, Ice, 1.1),
            &dual_element(Water, Ice, 1.1),
            &dual_element(Water, Ice, 1.1),
        ],
    },
    SkillRule {
        skill: "Teostra Blessing",
        levels: &[
            &element_and_status(Fire, Blast, 1.05),
            &element_and_status(Fire, Blast, 1.1),
            &element_and_status(Fire, Blast, 1.1),
            &element_and_status(Fire, Blast, 1.1),
        ],
    },
    SkillRule {
        skill: "Dragonheart",
        levels: &[
            &[DragonheartResistance(30.0)],
            &[DragonheartResistance(50.0)],
            &[DragonheartResistance(50.0)],
            &[DragonheartResistance(50.0), AttackMultiplier(1.05)],
            &[DragonheartResistance(50.0), AttackMultiplier(1.1)],
        ],
    },
    SkillRule {
        skill: "Counterstrike",
        levels: &[&[AttackBonus(10.0)], &[AttackBonus(15.0)], &[AttackBonus(25.0)]],
    },
    SkillRule { skill: "Wind Alignment", levels: alignment!(Dragon) },
    SkillRule { skill: "Thunder Alignment", levels: alignment!(Thunder) },
    SkillRule {
        skill: "Stormsoul",
        levels: &[
            &dual_element(Thunder, Dragon, 1.05),
            &dual_element(Thunder, Dragon, 1.1),
            &dual_element(Thunder, Dragon, 1.15),
            &dual_element(Thunder, Dragon, 1.15),
            &dual_element(Thunder, Dragon, 1.15),
        ],
    },
    SkillRule {
        skill: "Dereliction",
        levels: &[
            &[AttackBonus(25.0), AllElementBonus(12.0), AllStatusBonus(6.0)],
            &[AttackBonus(30.0), AllElementBonus(15.0), AllStatusBonus(8.0)],
            &[AttackBonus(35.0), AllElementBonus(20.0), AllStatusBonus(10.0)],
        ],
    },
    SkillRule {
        skill: "Furious",
        levels: &[
            &[DefenseBonus(10.0), AllResistanceBonus(5.0)],
            &[DefenseBonus(20.0), AllResistanceBonus(10.0)],
            &[DefenseBonus(30.0), AllResistanceBonus(20.0)],
        ],
    },
    SkillRule {
        skill: "Mail of Hellfire",
        levels: &[
            &[AttackBonus(15.0), DefenseBonus(-50.0), AllElementMultiplier(1.05), AllResistanceBonus(-10.0)],
            &[AttackBonus(25.0), DefenseBonus(-75.0), AllElementMultiplier(1.1), AllResistanceBonus(-25.0)],
            &[AttackBonus(35.0), DefenseBonus(-100.0), AllElementMultiplier(1.2), AllResistanceBonus(-50.0)],
        ],
    },
    SkillRule {
        skill: "Coalescence",
        levels: &[
            &[AttackBonus(12.0), AllElementBonus(2.0), AllStatusMultiplier(1.05)],
            &[AttackBonus(15.0), AllElementBonus(3.0), AllStatusMultiplier(1.1)],
            &[AttackBonus(18.0), AllElementBonus(4.0), AllStatusMultiplier(1.2)],
        ],
    },
    SkillRule {
        skill: "Bloodlust",
        levels: &[
            &[AttackBonus(10.0), AllElementBonus(5.0), AllStatusBonus(5.0)],
            &[AttackBonus(15.0), AllElementBonus(7.0), AllStatusBonus(7.0)],
            &[AttackBonus(20.0), AllElementBonus(10.0), AllStatusBonus(10.0)],
        ],
    },
    SkillRule {
        skill: "Defiance",
        levels: &[
            &[],
            &[DefenseBonus(5.0)],
            &[DefenseBonus(10.0)],
            &[DefenseBonus(20.0)],
            &[DefenseBonus(30.0)],
        ],
    },
    SkillRule {
        skill: "Sneak Attack",
        levels: &[
            &[AttackMultiplier(1.05)],
            &[AttackMultiplier(1.1)],
            &[AttackMultiplier(1.12)],
        ],
    },
    SkillRule {
        skill: "Adrenaline Rush",
        levels: &[&[AttackBonus(10.0)], &[AttackBonus(15.0)], &[AttackBonus(30.0)]],
    },
    SkillRule {
        skill: "Foray",
        levels: &[
            &[AttackBonus(10.0)],
            &[AttackBonus(10.0), AffinityBonus(10.0)],
            &[AttackBonus(15.0), AffinityBonus(20.0)],
        ],
    },
    SkillRule {
        skill: "Element Exploit",
        levels: &[
            &[AllElementMultiplier(1.1)],
            &[AllElementMultiplier(1.125)],
            &[AllElementMultiplier(1.15)],
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_attack_boost_seven() {
        let rule = rule_for("Attack Boost", 7).unwrap();
        assert_eq!(rule, &[AttackBonus(10.0), AttackMultiplier(1.10)]);
    }

    #[test]
    fn test_level_zero_and_past_max_have_no_rule() {
        assert!(rule_for("Attack Boost", 0).is_none());
        assert!(rule_for("Attack Boost", 8).is_none());
        assert!(rule_for("Affinity Sliding", 2).is_none());
    }

    #[test]
    fn test_unknown_skill_has_no_rule() {
        assert!(rule_for("Recovery Up", 1).is_none());
    }

    #[test]
    fn test_defiance_level_one_is_empty() {
        assert_eq!(rule_for("Defiance", 1), Some(&[][..]));
    }

    #[test]
    fn test_skill_names_are_unique() {
        let names: HashSet<&str> = all_rules().iter().map(|r| r.skill).collect();
        assert_eq!(names.len(), all_rules().len());
    }

    #[test]
    fn test_element_attack_macro_uses_its_element() {
        let rule = rule_for("Ice Attack", 5).unwrap();
        assert_eq!(rule, &[ElementBonus(Ice, 4.0), ElementMultiplier(Ice, 1.2)]);
    }

    #[test]
    fn test_all_multipliers_positive() {
        for rule in all_rules() {
            for effects in rule.levels {
                for effect in *effects {
                    let factor = match *effect {
                        AttackMultiplier(v)
                        | ElementMultiplier(_, v)
                        | AllElementMultiplier(v)
                        | StatusMultiplier(_, v)
                        | AllStatusMultiplier(v)
                        | DefenseMultiplier(v) => v,
                        _ => continue,
                    };
                    assert!(factor > 0.0, "{} has a non-positive multiplier", rule.skill);
                }
            }
        }
    }
}
