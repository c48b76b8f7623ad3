//! In-game time model.
//!
//! # Design
//!
//! Game time is a calendar-like triple `(day, hour, minute)` rather than a
//! flat counter, because decay rates depend on the hour of day and action
//! usage resets on the day boundary.  All arithmetic is integral:
//!
//! ```text
//! minute' = (minute + n) % 60
//! hour'   = (hour + (minute + n) / 60) % 24
//! day'    = day + (hour + (minute + n) / 60) / 24
//! ```
//!
//! `advance` reports how many day boundaries were crossed so callers can run
//! the rollover logic exactly once per boundary.

use std::fmt;

use crate::CoreError;

pub const MINUTES_PER_HOUR: u32 = 60;
pub const HOURS_PER_DAY:    u32 = 24;
pub const MINUTES_PER_DAY:  u32 = MINUTES_PER_HOUR * HOURS_PER_DAY;
pub const DAYS_PER_WEEK:    u32 = 7;

/// Length of the story in weeks, used by the week-progress readout.
pub const WEEKS_IN_STORY: u32 = 2;

// ── GameTime ──────────────────────────────────────────────────────────────────

/// Day (≥ 1), hour (0–23) and minute (0–59).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTime"))]
pub struct GameTime {
    day:    u32,
    hour:   u32,
    minute: u32,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTime {
    day:    u32,
    hour:   u32,
    minute: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTime> for GameTime {
    type Error = CoreError;

    fn try_from(raw: RawTime) -> Result<Self, CoreError> {
        GameTime::new(raw.day, raw.hour, raw.minute)
    }
}

impl Default for GameTime {
    /// Day 1, 07:00.
    fn default() -> Self {
        Self { day: 1, hour: 7, minute: 0 }
    }
}

impl GameTime {
    /// Build a time value.  Fails if any component is out of range.
    pub fn new(day: u32, hour: u32, minute: u32) -> Result<Self, CoreError> {
        if day == 0 || hour >= HOURS_PER_DAY || minute >= MINUTES_PER_HOUR {
            return Err(CoreError::InvalidTime { day, hour, minute });
        }
        Ok(Self { day, hour, minute })
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.day
    }

    #[inline]
    pub fn hour(&self) -> u32 {
        self.hour
    }

    #[inline]
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Minutes elapsed since 00:00 of the current day.
    #[inline]
    pub fn minute_of_day(&self) -> u32 {
        self.hour * MINUTES_PER_HOUR + self.minute
    }

    /// Advance by `minutes`, carrying into hour and day.
    ///
    /// Returns the number of day boundaries crossed (0 in the common case).
    pub fn advance(&mut self, minutes: u32) -> u32 {
        let total = self.minute + minutes;
        self.minute = total % MINUTES_PER_HOUR;

        let hours = self.hour + total / MINUTES_PER_HOUR;
        self.hour = hours % HOURS_PER_DAY;

        let days = hours / HOURS_PER_DAY;
        self.day += days;
        days
    }

    /// The value of `self` after `minutes`, and the number of days crossed.
    pub fn after(mut self, minutes: u32) -> (Self, u32) {
        let days = self.advance(minutes);
        (self, days)
    }

    /// `true` if the hour lies in the wrapping window `[from, 24) ∪ [0, to]`.
    #[inline]
    pub fn hour_in_night_window(&self, from: u32, to: u32) -> bool {
        self.hour >= from || self.hour <= to
    }

    /// Story week (1-based): `ceil(day / 7)`.
    pub fn week(&self) -> u32 {
        self.day.div_ceil(DAYS_PER_WEEK)
    }

    /// Week progress readout, e.g. `"1/2"`.
    pub fn week_progress(&self) -> String {
        format!("{}/{}", self.week(), WEEKS_IN_STORY)
    }
}

impl fmt::Display for GameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {} {:02}:{:02}", self.day, self.hour, self.minute)
    }
}

// ── Speed ─────────────────────────────────────────────────────────────────────

/// Simulation speed multiplier: simulated minutes per real tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub enum Speed {
    #[default]
    X1,
    X2,
    X4,
}

impl Speed {
    #[inline]
    pub fn minutes_per_tick(self) -> u32 {
        match self {
            Speed::X1 => 1,
            Speed::X2 => 2,
            Speed::X4 => 4,
        }
    }

    /// Cycle 1 → 2 → 4 → 1.
    pub fn next(self) -> Self {
        match self {
            Speed::X1 => Speed::X2,
            Speed::X2 => Speed::X4,
            Speed::X4 => Speed::X1,
        }
    }
}

impl TryFrom<u32> for Speed {
    type Error = CoreError;

    fn try_from(multiplier: u32) -> Result<Self, Self::Error> {
        match multiplier {
            1 => Ok(Speed::X1),
            2 => Ok(Speed::X2),
            4 => Ok(Speed::X4),
            other => Err(CoreError::InvalidSpeed(other)),
        }
    }
}

impl From<Speed> for u32 {
    fn from(speed: Speed) -> u32 {
        speed.minutes_per_tick()
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.minutes_per_tick())
    }
}
