//! Prelude module for convenient imports
//!
//! ```rust
//! use build_core::prelude::*;
//! ```

// Build and catalog
pub use crate::build::{ArmorChoice, BuildSelection, TalismanChoice, WeaponChoice};
pub use crate::catalog::ReferenceCatalog;

// Pipeline
pub use crate::engine::{calculate_build, BuildReport, MemoizedCalculator};
pub use crate::skills::{AggregatedSkill, SkillSummary};
pub use crate::effects::ModifierBundle;
pub use crate::calc::CalculatedStats;

// Config and diagnostics
pub use crate::config::{default_constants, EngineConstants};
pub use crate::diagnostic::Diagnostic;

// Types
pub use crate::types::{ArmorSlot, ElementType, SkillGrant, StatusType};
