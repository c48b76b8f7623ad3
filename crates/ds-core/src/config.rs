//! Simulation configuration.
//!
//! Typically loaded from a TOML file by the application crate (with the
//! `serde` feature) and passed to the simulation builder.  Every field has a
//! default equal to the reference tuning, so a config file only needs to list
//! what it overrides.

use crate::CoreError;

// ── DecayConfig ───────────────────────────────────────────────────────────────

/// Passive need decay applied on every clock tick.
///
/// Night windows wrap around midnight: an hour `h` is inside the window when
/// `h >= *_from_hour || h <= *_to_hour`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecayConfig {
    pub energy_day:           f64,
    pub energy_night:         f64,
    pub night_from_hour:      u32,
    pub night_to_hour:        u32,

    pub sleep_day:            f64,
    pub sleep_deep_night:     f64,
    pub deep_night_from_hour: u32,
    pub deep_night_to_hour:   u32,

    pub health:               f64,
    pub happiness:            f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            energy_day:           0.1,
            energy_night:         0.3,
            night_from_hour:      22,
            night_to_hour:        6,
            sleep_day:            0.1,
            sleep_deep_night:     0.4,
            deep_night_from_hour: 23,
            deep_night_to_hour:   5,
            health:               0.05,
            happiness:            0.08,
        }
    }
}

impl DecayConfig {
    fn validate(&self) -> Result<(), CoreError> {
        let rates = [
            ("energy_day", self.energy_day),
            ("energy_night", self.energy_night),
            ("sleep_day", self.sleep_day),
            ("sleep_deep_night", self.sleep_deep_night),
            ("health", self.health),
            ("happiness", self.happiness),
        ];
        for (name, rate) in rates {
            if !rate.is_finite() || rate < 0.0 {
                return Err(CoreError::Config(format!(
                    "decay rate `{name}` must be a finite non-negative number, got {rate}"
                )));
            }
        }
        let hours = [
            ("night_from_hour", self.night_from_hour),
            ("night_to_hour", self.night_to_hour),
            ("deep_night_from_hour", self.deep_night_from_hour),
            ("deep_night_to_hour", self.deep_night_to_hour),
        ];
        for (name, hour) in hours {
            if hour > 23 {
                return Err(CoreError::Config(format!("`{name}` must be in 0..=23, got {hour}")));
            }
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Wall-clock milliseconds between clock ticks.  Default: 100.
    pub tick_interval_ms: u64,

    /// Wall-clock milliseconds after an action starts before the character
    /// returns to idle.  Default: 2000.
    pub idle_revert_ms: u64,

    /// When an action's duration crosses midnight, the rollover clears the
    /// usage log, including the record of the action itself, so it is
    /// available again right away.  Set to `false` to record such an action
    /// against the new day instead.  Default: `true`.
    pub clear_usage_on_action_rollover: bool,

    /// Passive decay rates.
    pub decay: DecayConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms:               100,
            idle_revert_ms:                 2_000,
            clear_usage_on_action_rollover: true,
            decay:                          DecayConfig::default(),
        }
    }
}

impl SimConfig {
    /// Check field ranges.  Called by the simulation builder.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.tick_interval_ms == 0 {
            return Err(CoreError::Config("tick_interval_ms must be > 0".into()));
        }
        if self.idle_revert_ms == 0 {
            return Err(CoreError::Config("idle_revert_ms must be > 0".into()));
        }
        self.decay.validate()
    }

    #[inline]
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }

    #[inline]
    pub fn idle_revert(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.idle_revert_ms)
    }
}
