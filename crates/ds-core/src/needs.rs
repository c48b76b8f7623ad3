//! The four bounded character needs.
//!
//! # Invariant
//!
//! Every component of [`Needs`] is within `[NEED_MIN, NEED_MAX]` after every
//! mutation.  All writes go through [`Needs::apply`] (or the constructor),
//! which computes the clamped result before storing it, so an out-of-range
//! value is never observable.
//!
//! Values are `f64` because passive decay removes fractional amounts per tick
//! (e.g. 0.05 health).  Presentation layers round for display.

use crate::Need;
#[cfg(feature = "serde")]
use crate::CoreError;

pub const NEED_MIN: f64 = 0.0;
pub const NEED_MAX: f64 = 100.0;

/// Lower bound (inclusive) of the [`NeedLevel::Good`] band.
const GOOD_THRESHOLD: f64 = 70.0;
/// Lower bound (inclusive) of the [`NeedLevel::Fair`] band.
const FAIR_THRESHOLD: f64 = 40.0;

#[inline]
fn clamp(v: f64) -> f64 {
    // NaN never reaches here: deltas come from the catalog or validated config.
    v.clamp(NEED_MIN, NEED_MAX)
}

// ── NeedDelta ─────────────────────────────────────────────────────────────────

/// A signed change to each of the four needs.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeedDelta {
    pub energy:    f64,
    pub sleep:     f64,
    pub health:    f64,
    pub happiness: f64,
}

impl NeedDelta {
    pub const fn new(energy: f64, sleep: f64, health: f64, happiness: f64) -> Self {
        Self { energy, sleep, health, happiness }
    }

    pub fn get(&self, need: Need) -> f64 {
        match need {
            Need::Energy    => self.energy,
            Need::Sleep     => self.sleep,
            Need::Health    => self.health,
            Need::Happiness => self.happiness,
        }
    }
}

// ── NeedLevel ─────────────────────────────────────────────────────────────────

/// Coarse status band for a single need value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeedLevel {
    /// ≥ 70
    Good,
    /// ≥ 40
    Fair,
    /// < 40
    Critical,
}

impl NeedLevel {
    pub fn of(value: f64) -> Self {
        if value >= GOOD_THRESHOLD {
            NeedLevel::Good
        } else if value >= FAIR_THRESHOLD {
            NeedLevel::Fair
        } else {
            NeedLevel::Critical
        }
    }
}

// ── Needs ─────────────────────────────────────────────────────────────────────

/// Current values of the four needs, each clamped to `[0, 100]`.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawNeeds"))]
pub struct Needs {
    energy:    f64,
    sleep:     f64,
    health:    f64,
    happiness: f64,
}

/// Unchecked wire form of [`Needs`]; clamped on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawNeeds {
    energy:    f64,
    sleep:     f64,
    health:    f64,
    happiness: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawNeeds> for Needs {
    type Error = CoreError;

    fn try_from(raw: RawNeeds) -> Result<Self, CoreError> {
        let values = [raw.energy, raw.sleep, raw.health, raw.happiness];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(CoreError::InvalidNeed(format!("{values:?}")));
        }
        Ok(Needs::new(raw.energy, raw.sleep, raw.health, raw.happiness))
    }
}

impl Default for Needs {
    /// The starting needs of a new story.
    fn default() -> Self {
        Self::new(80.0, 70.0, 85.0, 75.0)
    }
}

impl Needs {
    /// Build a need set, clamping every component into range.
    pub fn new(energy: f64, sleep: f64, health: f64, happiness: f64) -> Self {
        Self {
            energy:    clamp(energy),
            sleep:     clamp(sleep),
            health:    clamp(health),
            happiness: clamp(happiness),
        }
    }

    #[inline]
    pub fn energy(&self) -> f64 {
        self.energy
    }

    #[inline]
    pub fn sleep(&self) -> f64 {
        self.sleep
    }

    #[inline]
    pub fn health(&self) -> f64 {
        self.health
    }

    #[inline]
    pub fn happiness(&self) -> f64 {
        self.happiness
    }

    pub fn get(&self, need: Need) -> f64 {
        match need {
            Need::Energy    => self.energy,
            Need::Sleep     => self.sleep,
            Need::Health    => self.health,
            Need::Happiness => self.happiness,
        }
    }

    pub fn level(&self, need: Need) -> NeedLevel {
        NeedLevel::of(self.get(need))
    }

    /// The need with the smallest current value (first in declaration order
    /// on ties).
    pub fn lowest(&self) -> Need {
        let mut lowest = Need::Energy;
        for &need in &Need::ALL[1..] {
            if self.get(need) < self.get(lowest) {
                lowest = need;
            }
        }
        lowest
    }

    /// Apply `delta` to all four needs at once.
    ///
    /// The clamped values are computed first and stored together.
    pub fn apply(&mut self, delta: &NeedDelta) {
        *self = Self::new(
            self.energy + delta.energy,
            self.sleep + delta.sleep,
            self.health + delta.health,
            self.happiness + delta.happiness,
        );
    }

    /// `true` if `need` has reached the lower bound.
    #[inline]
    pub fn is_depleted(&self, need: Need) -> bool {
        self.get(need) <= NEED_MIN
    }
}
