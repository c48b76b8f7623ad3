//! Plain data row types written by output backends.

use ds_core::{ActionId, Activity, Room};
use ds_sim::{ActionApplied, SimStatus, Snapshot};

/// The state at one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotRow {
    pub tick:      u64,
    pub day:       u32,
    pub hour:      u32,
    pub minute:    u32,
    pub energy:    f64,
    pub sleep:     f64,
    pub health:    f64,
    pub happiness: f64,
    pub location:  Room,
    pub activity:  Activity,
    pub status:    SimStatus,
}

impl From<&Snapshot> for SnapshotRow {
    fn from(s: &Snapshot) -> Self {
        Self {
            tick:      s.ticks,
            day:       s.time.day(),
            hour:      s.time.hour(),
            minute:    s.time.minute(),
            energy:    s.needs.energy(),
            sleep:     s.needs.sleep(),
            health:    s.needs.health(),
            happiness: s.needs.happiness(),
            location:  s.location,
            activity:  s.activity,
            status:    s.status,
        }
    }
}

/// One applied action.  Needs are the values after the action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionRow {
    /// Clock tick the action was applied after.
    pub tick:         u64,
    pub action:       ActionId,
    pub start_day:    u32,
    pub start_minute: u32,
    pub end_day:      u32,
    pub end_minute:   u32,
    pub energy:       f64,
    pub sleep:        f64,
    pub health:       f64,
    pub happiness:    f64,
}

impl ActionRow {
    /// `start_minute` and `end_minute` are minutes since midnight.
    pub fn new(tick: u64, applied: &ActionApplied) -> Self {
        let after = &applied.needs_after;
        Self {
            tick,
            action:       applied.action,
            start_day:    applied.started_at.day(),
            start_minute: applied.started_at.minute_of_day(),
            end_day:      applied.finished_at.day(),
            end_minute:   applied.finished_at.minute_of_day(),
            energy:       after.energy(),
            sleep:        after.sleep(),
            health:       after.health(),
            happiness:    after.happiness(),
        }
    }
}
