//! build_core - Stat calculation engine for hunter equipment builds
//!
//! This library provides:
//! - ReferenceCatalog: Read-only weapon, armor, decoration and skill data
//! - BuildSelection: A loadout referencing catalog entries by name
//! - Skill aggregation: Summed, capped and propagated skill levels
//! - Effect resolution: Skill levels folded into a ModifierBundle
//! - Stat calculation: Final stats, including the sharpness simulation
//!
//! The whole pipeline is a pure function of the build, the catalog and the
//! engine constants; see [`calculate_build`].

pub mod build;
pub mod calc;
pub mod catalog;
pub mod config;
pub mod diagnostic;
pub mod effects;
pub mod engine;
pub mod prelude;
pub mod skills;
pub mod source;
pub mod types;

// Re-export core types for convenience
pub use build::{load_build, ArmorChoice, BuildSelection, TalismanChoice, TalismanSlot, WeaponChoice};
pub use calc::{calculate_stats, simulate_sharpness, CalculatedStats, SharpnessResult};
pub use catalog::{load_catalog, sample_catalog, CatalogData, ReferenceCatalog};
pub use config::{default_constants, ConfigError, EngineConstants};
pub use diagnostic::{Diagnostic, Diagnostics};
pub use effects::{resolve_active_effects, resolve_effects, rule_for, Effect, Modifier, ModifierBundle};
pub use engine::{calculate_build, BuildReport, MemoizedCalculator};
pub use skills::{aggregate_skills, AggregatedSkill, SkillAggregation, SkillSummary};
pub use source::{ArmorSource, SkillSource, TalismanSource, WeaponSource};
pub use types::{ArmorSlot, ElementTable, ElementType, SkillGrant, StatusTable, StatusType};
