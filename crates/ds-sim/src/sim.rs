//! The `Sim` engine: clock and decay, action resolution, and commands.

use ds_catalog::ActionCatalog;
use ds_core::{ActionId, Activity, DecayConfig, GameTime, NeedDelta, Needs, Room, SimConfig, Speed};
use tracing::{debug, info, trace};

use crate::{
    ActionApplied, ActivityRevert, AvailableAction, NoopObserver, Rejection, SimObserver,
    SimResult, SimStatus, SimulationState, Snapshot, TerminalReason, TickOutcome,
};

/// The simulation engine.
///
/// `Sim` owns the [`SimulationState`] and is its only writer.  Every command
/// takes `&mut self` and runs to completion, so callers on a single-threaded
/// event loop need no locking; hosts that dispatch concurrently must funnel
/// commands through one owner (see `ds-runtime`).
///
/// Create via [`SimBuilder`][crate::SimBuilder].
#[derive(Clone, Debug)]
pub struct Sim {
    pub(crate) config:  SimConfig,
    pub(crate) catalog: ActionCatalog,
    pub(crate) state:   SimulationState,

    /// Clock ticks applied since the story started (reset with the state).
    pub(crate) ticks: u64,

    /// Last idle-revert sequence number issued.  Monotonic across resets so a
    /// handle from a discarded story can never match a new one.
    pub(crate) revert_seq: u64,

    /// The live idle-revert handle, if an activity is waiting to end.
    pub(crate) pending_revert: Option<ActivityRevert>,
}

impl Sim {
    // ── Queries ───────────────────────────────────────────────────────────

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ActionCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn needs(&self) -> &Needs {
        self.state.needs()
    }

    pub fn time(&self) -> GameTime {
        self.state.time()
    }

    pub fn location(&self) -> Room {
        self.state.location()
    }

    pub fn activity(&self) -> Activity {
        self.state.activity()
    }

    pub fn speed(&self) -> Speed {
        self.state.speed()
    }

    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn terminal(&self) -> Option<TerminalReason> {
        self.state.terminal()
    }

    pub fn status(&self) -> SimStatus {
        self.state.status()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_used_today(&self, id: ActionId) -> bool {
        self.state.is_used_today(id)
    }

    /// The handle of the activity currently waiting to revert to idle.
    pub fn pending_revert(&self) -> Option<ActivityRevert> {
        self.pending_revert
    }

    /// Objects in the current room with their used-today flag.
    pub fn available_actions(&self) -> Vec<AvailableAction<'_>> {
        self.catalog
            .by_room(self.state.location)
            .map(|definition| AvailableAction {
                definition,
                used_today: self.state.is_used_today(definition.id),
            })
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, self.ticks)
    }

    // ── Clock & decay ─────────────────────────────────────────────────────

    /// Advance one clock tick.  Safe to call while paused or terminal.
    pub fn tick(&mut self) -> TickOutcome {
        self.tick_with(&mut NoopObserver)
    }

    /// [`tick`][Self::tick] with observer callbacks.
    pub fn tick_with<O: SimObserver>(&mut self, observer: &mut O) -> TickOutcome {
        if !self.state.is_running() {
            return TickOutcome::Skipped;
        }

        // ① time, ② rollover
        let days_rolled = self.state.advance_time(self.state.speed.minutes_per_tick());

        // ③ decay, evaluated on the new hour
        let decay = decay_for(&self.config.decay, self.state.time);
        self.state.needs.apply(&decay);

        // ④ terminal check on post-decay values
        let outcome = match TerminalReason::check(&self.state.needs) {
            Some(reason) => {
                self.state.terminal = Some(reason);
                TickOutcome::Terminated(reason)
            }
            None => TickOutcome::Advanced { days_rolled },
        };
        self.ticks += 1;

        let snapshot = self.snapshot();
        trace!(tick = self.ticks, time = %snapshot.time, "tick");
        if days_rolled > 0 {
            debug!(day = snapshot.time.day(), "day rollover: usage cleared");
            observer.on_day_rollover(snapshot.time.day());
        }
        observer.on_tick(&snapshot, &outcome);
        if let TickOutcome::Terminated(reason) = outcome {
            info!(?reason, time = %snapshot.time, "simulation ended");
            observer.on_terminal(reason, &snapshot);
        }
        outcome
    }

    /// Run `n` ticks, stopping early if the simulation stops running.
    ///
    /// Returns the number of ticks that advanced time.  Useful for headless
    /// runs and tests.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> u64 {
        let mut advanced = 0;
        for _ in 0..n {
            if !self.tick_with(observer).advanced() {
                break;
            }
            advanced += 1;
            if !self.state.is_running() {
                break;
            }
        }
        observer.on_sim_end(&self.snapshot());
        advanced
    }

    // ── Action resolution ─────────────────────────────────────────────────

    /// Perform the action offered by object `id`.
    pub fn perform(&mut self, id: ActionId) -> Result<ActionApplied, Rejection> {
        self.perform_with(id, &mut NoopObserver)
    }

    /// Perform an action by its string id (as sent by a presentation layer).
    pub fn perform_named(&mut self, name: &str) -> Result<ActionApplied, Rejection> {
        match name.parse::<ActionId>() {
            Ok(id) => self.perform(id),
            Err(_) => {
                debug!(name, "rejected action: unknown name");
                Err(Rejection::UnknownName(name.to_owned()))
            }
        }
    }

    /// [`perform`][Self::perform] with observer callbacks.
    pub fn perform_with<O: SimObserver>(
        &mut self,
        id:       ActionId,
        observer: &mut O,
    ) -> Result<ActionApplied, Rejection> {
        let result = self.resolve(id);
        match &result {
            Ok(applied) => {
                let snapshot = self.snapshot();
                debug!(action = %id, time = %snapshot.time, "action applied");
                if applied.days_rolled > 0 {
                    observer.on_day_rollover(snapshot.time.day());
                }
                observer.on_action(applied, &snapshot);
            }
            Err(rejection) => debug!(action = %id, %rejection, "action rejected"),
        }
        result
    }

    fn resolve(&mut self, id: ActionId) -> Result<ActionApplied, Rejection> {
        if self.state.terminal.is_some() {
            return Err(Rejection::Terminal);
        }
        if self.state.paused {
            return Err(Rejection::Paused);
        }
        let definition = self.catalog.lookup(id).ok_or(Rejection::UnknownAction(id))?;
        let day = self.state.time.day();
        if self.state.usage.is_used(id, day) {
            return Err(Rejection::AlreadyUsedToday { id, day });
        }

        let needs_before = self.state.needs;
        let started_at = self.state.time;

        self.state.usage.record(id, day);
        self.state.needs.apply(&definition.delta);
        let days_rolled = self.state.advance_time(definition.duration_minutes);
        if days_rolled > 0 && !self.config.clear_usage_on_action_rollover {
            self.state.usage.record(id, self.state.time.day());
        }
        self.state.activity = definition.activity;

        self.revert_seq += 1;
        let revert = ActivityRevert(self.revert_seq);
        self.pending_revert = Some(revert);

        Ok(ActionApplied {
            action: id,
            activity: definition.activity,
            needs_before,
            needs_after: self.state.needs,
            started_at,
            finished_at: self.state.time,
            days_rolled,
            revert,
        })
    }

    /// End the activity started by the action that issued `handle`.
    ///
    /// Returns `false` (and changes nothing) if the handle was superseded by a
    /// later action, invalidated by a reset, or the simulation is terminal.
    pub fn revert_activity(&mut self, handle: ActivityRevert) -> bool {
        if self.pending_revert != Some(handle) || self.state.terminal.is_some() {
            return false;
        }
        self.pending_revert = None;
        self.state.activity = Activity::Idle;
        debug!(seq = handle.0, "activity reverted to idle");
        true
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Returns `true` if the state changed.
    pub fn pause(&mut self) -> bool {
        self.set_paused(true)
    }

    /// Returns `true` if the state changed.
    pub fn resume(&mut self) -> bool {
        self.set_paused(false)
    }

    pub fn toggle_pause(&mut self) -> bool {
        let paused = self.state.paused;
        self.set_paused(!paused)
    }

    fn set_paused(&mut self, paused: bool) -> bool {
        if self.state.terminal.is_some() || self.state.paused == paused {
            return false;
        }
        self.state.paused = paused;
        debug!(paused, "pause toggled");
        true
    }

    /// Set the speed multiplier.  Only 1, 2 and 4 are accepted; anything else
    /// is a caller defect and fails loudly.
    pub fn set_speed(&mut self, multiplier: u32) -> SimResult<Speed> {
        let speed = Speed::try_from(multiplier)?;
        if self.state.terminal.is_none() {
            self.state.speed = speed;
        }
        Ok(self.state.speed)
    }

    /// Cycle the speed 1x → 2x → 4x → 1x.  Returns the new speed.
    pub fn cycle_speed(&mut self) -> Speed {
        if self.state.terminal.is_none() {
            self.state.speed = self.state.speed.next();
        }
        self.state.speed
    }

    /// Move to `room` and stop whatever the character was doing.
    ///
    /// Ignored once the simulation is terminal.
    pub fn change_room(&mut self, room: Room) -> bool {
        if self.state.terminal.is_some() {
            return false;
        }
        self.state.location = room;
        self.state.activity = Activity::Idle;
        true
    }

    /// Discard the current story and start a fresh one.
    pub fn reset(&mut self) {
        self.reset_with(&mut NoopObserver)
    }

    pub fn reset_with<O: SimObserver>(&mut self, observer: &mut O) {
        self.state = SimulationState::new();
        self.ticks = 0;
        self.pending_revert = None;
        info!("simulation reset");
        observer.on_reset();
    }
}

/// Passive decay for one tick at `time`, as a negative delta.
fn decay_for(decay: &DecayConfig, time: GameTime) -> NeedDelta {
    let energy = if time.hour_in_night_window(decay.night_from_hour, decay.night_to_hour) {
        decay.energy_night
    } else {
        decay.energy_day
    };
    let sleep = if time.hour_in_night_window(decay.deep_night_from_hour, decay.deep_night_to_hour) {
        decay.sleep_deep_night
    } else {
        decay.sleep_day
    };
    NeedDelta::new(-energy, -sleep, -decay.health, -decay.happiness)
}
