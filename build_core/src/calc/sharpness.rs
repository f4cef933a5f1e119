//! Sharpness - Filling the gap toward max sharpness with a bonus budget
//!
//! The budget is spent tier by tier from red toward purple. Each tier can
//! grow by at most `max - current`; whatever cannot be placed is dropped.

use crate::config::SHARPNESS_TIERS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharpnessResult {
    /// Tier lengths after the bonus, red first
    pub values: [u32; SHARPNESS_TIERS],
    /// Highest tier index with a nonzero length
    pub class: usize,
    /// Budget left after every tier reached its max
    pub unused_budget: u32,
}

impl SharpnessResult {
    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }
}

/// Spend `budget` extra sharpness on `current`, bounded by `max`
///
/// Missing entries in either slice count as zero, and a tier whose current
/// value already exceeds its max has no headroom.
pub fn simulate_sharpness(current: &[u32], max: &[u32], budget: u32) -> SharpnessResult {
    let mut values = [0u32; SHARPNESS_TIERS];
    let mut remaining = budget;

    for (tier, value) in values.iter_mut().enumerate() {
        let base = current.get(tier).copied().unwrap_or(0);
        let cap = max.get(tier).copied().unwrap_or(0);
        let headroom = cap.saturating_sub(base);
        let added = remaining.min(headroom);

        *value = base + added;
        remaining -= added;
    }

    let class = values.iter().rposition(|&v| v > 0).unwrap_or(0);

    SharpnessResult {
        values,
        class,
        unused_budget: remaining,
    }
}
