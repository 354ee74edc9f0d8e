//! Strength scoring.

use serde::Serialize;

/// Character class counts gathered by the rule sections during one pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCounters {
    pub digits: usize,
    pub specials: usize,
    /// Lowercase plus uppercase letters.
    pub letters: usize,
}

/// Heuristic strength in `0..=100`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    /// Clamps a raw score into range.
    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(Self::MIN.into(), Self::MAX.into()) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// Applies the class-combination adjustments to the score accumulated by the
/// sections, then clamps it.
pub fn final_score(accumulated: i64, counters: &ScoreCounters) -> PasswordScore {
    let ScoreCounters {
        digits,
        specials,
        letters,
    } = *counters;
    let mut score = accumulated;

    if digits > 0 && specials > 0 {
        score += 15;
    }
    if digits > 0 && letters > 0 {
        score += 15;
    }
    if specials > 0 && letters > 0 {
        score += 15;
    }
    if digits == 0 && specials == 0 {
        score -= 10;
    }
    if specials == 0 && letters == 0 {
        score -= 10;
    }

    PasswordScore::new(score)
}
