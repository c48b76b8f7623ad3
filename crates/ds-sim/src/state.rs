//! `SimulationState` — the single mutable aggregate, plus its read-only views.
//!
//! Fields are private to this crate.  The clock and the action resolver in
//! [`Sim`][crate::Sim] are the only writers; everyone else reads through the
//! accessors or a [`Snapshot`].

use std::collections::BTreeMap;
use std::fmt;

use ds_core::{ActionId, Activity, GameTime, Need, Needs, Room, Speed};

// ── TerminalReason ────────────────────────────────────────────────────────────

/// Which need ended the story.  Checked in declaration order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminalReason {
    EnergyDepleted,
    SleepDepleted,
    HealthDepleted,
}

impl TerminalReason {
    /// Priority order for the terminal check.  Happiness never terminates.
    pub const PRIORITY: [TerminalReason; 3] = [
        TerminalReason::EnergyDepleted,
        TerminalReason::SleepDepleted,
        TerminalReason::HealthDepleted,
    ];

    pub fn need(self) -> Need {
        match self {
            TerminalReason::EnergyDepleted => Need::Energy,
            TerminalReason::SleepDepleted  => Need::Sleep,
            TerminalReason::HealthDepleted => Need::Health,
        }
    }

    /// The first depleted need in priority order, if any.
    pub fn check(needs: &Needs) -> Option<TerminalReason> {
        Self::PRIORITY.into_iter().find(|r| needs.is_depleted(r.need()))
    }

    /// Game-over text shown to the player.
    pub fn message(self) -> &'static str {
        match self {
            TerminalReason::EnergyDepleted => {
                "Your energy ran out! Alex passed out from exhaustion."
            }
            TerminalReason::SleepDepleted => {
                "Alex can't stay awake any longer and urgently needs to sleep."
            }
            TerminalReason::HealthDepleted => {
                "Alex's health is far too low and needs medical care."
            }
        }
    }
}

impl fmt::Display for TerminalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ── SimStatus ─────────────────────────────────────────────────────────────────

/// Coarse state-machine position.
///
/// ```text
/// Running ⇄ Paused
/// Running → Terminal(reason)      (decay)
/// any     → Running               (reset)
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimStatus {
    Running,
    Paused,
    Terminal(TerminalReason),
}

// ── UsageLog ──────────────────────────────────────────────────────────────────

/// Which actions were used on which day.
///
/// Stored as `ActionId → last day used`.  An action is used today when its
/// entry equals the current day.  [`roll_over`][Self::roll_over] drops every
/// entry that does not belong to the new day, so the log never carries
/// records from a past day.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsageLog {
    last_used: BTreeMap<ActionId, u32>,
}

impl UsageLog {
    pub fn record(&mut self, id: ActionId, day: u32) {
        self.last_used.insert(id, day);
    }

    pub fn is_used(&self, id: ActionId, day: u32) -> bool {
        self.last_used.get(&id) == Some(&day)
    }

    /// Prune entries that do not belong to `day`.
    pub fn roll_over(&mut self, day: u32) {
        self.last_used.retain(|_, &mut used| used == day);
    }

    /// Actions used on `day`, in id order.
    pub fn used_on(&self, day: u32) -> impl Iterator<Item = ActionId> + '_ {
        self.last_used
            .iter()
            .filter(move |&(_, &used)| used == day)
            .map(|(&id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.last_used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_used.is_empty()
    }
}

// ── SimulationState ───────────────────────────────────────────────────────────

/// The complete mutable simulation record.
///
/// Replaced wholesale on reset; never partially reconstructed.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationState {
    pub(crate) needs:    Needs,
    pub(crate) time:     GameTime,
    pub(crate) speed:    Speed,
    pub(crate) paused:   bool,
    pub(crate) terminal: Option<TerminalReason>,
    pub(crate) location: Room,
    pub(crate) activity: Activity,
    pub(crate) usage:    UsageLog,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationState {
    /// The start of a new story: day 1 07:00 in the bedroom, idle, 1x speed.
    pub fn new() -> Self {
        Self {
            needs:    Needs::default(),
            time:     GameTime::default(),
            speed:    Speed::X1,
            paused:   false,
            terminal: None,
            location: Room::Bedroom,
            activity: Activity::Idle,
            usage:    UsageLog::default(),
        }
    }

    // ── Starting-point overrides (builder inputs, tests) ──────────────────

    pub fn with_needs(mut self, needs: Needs) -> Self {
        self.needs = needs;
        self
    }

    pub fn with_time(mut self, time: GameTime) -> Self {
        self.time = time;
        self
    }

    pub fn with_location(mut self, room: Room) -> Self {
        self.location = room;
        self
    }

    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.speed = speed;
        self
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn needs(&self) -> &Needs {
        &self.needs
    }

    #[inline]
    pub fn time(&self) -> GameTime {
        self.time
    }

    #[inline]
    pub fn speed(&self) -> Speed {
        self.speed
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn terminal(&self) -> Option<TerminalReason> {
        self.terminal
    }

    #[inline]
    pub fn location(&self) -> Room {
        self.location
    }

    #[inline]
    pub fn activity(&self) -> Activity {
        self.activity
    }

    #[inline]
    pub fn usage(&self) -> &UsageLog {
        &self.usage
    }

    pub fn is_used_today(&self, id: ActionId) -> bool {
        self.usage.is_used(id, self.time.day())
    }

    pub fn status(&self) -> SimStatus {
        match (self.terminal, self.paused) {
            (Some(reason), _) => SimStatus::Terminal(reason),
            (None, true)      => SimStatus::Paused,
            (None, false)     => SimStatus::Running,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.terminal.is_none() && !self.paused
    }

    /// Advance the clock and prune usage on rollover.  Returns days crossed.
    pub(crate) fn advance_time(&mut self, minutes: u32) -> u32 {
        let days = self.time.advance(minutes);
        if days > 0 {
            self.usage.roll_over(self.time.day());
        }
        days
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// A detached, read-only copy of the state for presentation and recording.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Clock ticks applied since the story started.
    pub ticks:      u64,
    pub needs:      Needs,
    pub time:       GameTime,
    pub speed:      Speed,
    pub status:     SimStatus,
    pub location:   Room,
    pub activity:   Activity,
    /// Actions already used on `time.day()`, in id order.
    pub used_today: Vec<ActionId>,
}

impl Snapshot {
    pub(crate) fn capture(state: &SimulationState, ticks: u64) -> Self {
        Self {
            ticks,
            needs:      state.needs,
            time:       state.time,
            speed:      state.speed,
            status:     state.status(),
            location:   state.location,
            activity:   state.activity,
            used_today: state.usage.used_on(state.time.day()).collect(),
        }
    }

    pub fn is_used_today(&self, id: ActionId) -> bool {
        self.used_today.contains(&id)
    }

    pub fn terminal(&self) -> Option<TerminalReason> {
        match self.status {
            SimStatus::Terminal(reason) => Some(reason),
            _ => None,
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} in {} | energy {:.0} sleep {:.0} health {:.0} happiness {:.0}",
            self.time,
            self.speed,
            self.activity,
            self.location.display_name(),
            self.needs.energy(),
            self.needs.sleep(),
            self.needs.health(),
            self.needs.happiness(),
        )?;
        match self.status {
            SimStatus::Running => Ok(()),
            SimStatus::Paused => f.write_str(" (paused)"),
            SimStatus::Terminal(reason) => write!(f, " (ended: {reason})"),
        }
    }
}
