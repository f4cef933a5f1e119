//! Modifier - The bonus/multiplier pair (bonus before multiplier)

use serde::{Deserialize, Serialize};

/// A flat bonus and a multiplier applied to one base value
///
/// Final value is `(base + bonus) × multiplier`. Bonuses from several
/// skills add; multipliers from several skills multiply, so the result
/// is the same whatever order skills are folded in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub bonus: f64,
    pub multiplier: f64,
}

impl Default for Modifier {
    fn default() -> Self {
        Modifier {
            bonus: 0.0,
            multiplier: 1.0,
        }
    }
}

impl Modifier {
    pub fn add_bonus(&mut self, value: f64) {
        self.bonus += value;
    }

    pub fn scale(&mut self, factor: f64) {
        self.multiplier *= factor;
    }

    /// `(base + bonus) × multiplier`
    pub fn apply(&self, base: f64) -> f64 {
        (base + self.bonus) * self.multiplier
    }

    pub fn is_neutral(&self) -> bool {
        self.bonus == 0.0 && self.multiplier == 1.0
    }
}
