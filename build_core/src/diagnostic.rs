//! Diagnostic - Non-fatal data problems found while evaluating a build

use serde::Serialize;
use thiserror::Error;

/// Something in the build did not line up with the catalog
///
/// The engine never fails on these: the offending contribution is
/// dropped (or kept, for oversized decorations) and the issue is
/// reported so callers can warn about stale saved builds.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    #[error("unknown weapon '{name}'")]
    UnknownWeapon { name: String },

    #[error("unknown armor '{name}' in {slot} slot")]
    UnknownArmor { slot: String, name: String },

    #[error("unknown decoration '{name}' on {owner}")]
    UnknownDecoration { owner: String, name: String },

    #[error("unknown rampage decoration '{name}' on {owner}")]
    UnknownRampageDecoration { owner: String, name: String },

    #[error("unknown skill '{name}' granted by {source_name}")]
    UnknownSkill { name: String, source_name: String },

    #[error("decoration '{name}' (size {decoration_size}) does not fit slot {index} (size {slot_size}) on {owner}")]
    DecorationTooLarge {
        owner: String,
        name: String,
        index: usize,
        decoration_size: u32,
        slot_size: u32,
    },

    #[error("'{name}' is in slot {index}, but {owner} only has {slot_count} slots")]
    NoSuchSlot {
        owner: String,
        name: String,
        index: usize,
        slot_count: usize,
    },

    #[error("calculated stat '{field}' is not a finite number")]
    NonFiniteStat { field: String },
}

/// Collects diagnostics and logs each one as it arrives
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
