//! Simulation observer trait for progress reporting and data collection.

use crate::{ActionApplied, Snapshot, TerminalReason, TickOutcome};

/// Callbacks invoked by [`Sim`][crate::Sim] after each state change.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Every callback runs after the mutation is
/// complete, so the snapshot is always a consistent post-change view.
///
/// # Example
///
/// ```rust,ignore
/// struct DayPrinter;
///
/// impl SimObserver for DayPrinter {
///     fn on_day_rollover(&mut self, day: u32) {
///         println!("good morning, day {day}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after every tick that advanced time (skipped ticks are silent).
    fn on_tick(&mut self, _snapshot: &Snapshot, _outcome: &TickOutcome) {}

    /// Called once per day boundary crossed, by a tick or by an action.
    fn on_day_rollover(&mut self, _day: u32) {}

    /// Called after an action was applied.
    fn on_action(&mut self, _applied: &ActionApplied, _snapshot: &Snapshot) {}

    /// Called once, on the tick that latched the terminal state.
    fn on_terminal(&mut self, _reason: TerminalReason, _snapshot: &Snapshot) {}

    /// Called after the state was replaced by a fresh one.
    fn on_reset(&mut self) {}

    /// Called by [`Sim::run_ticks`][crate::Sim::run_ticks] when it returns.
    fn on_sim_end(&mut self, _snapshot: &Snapshot) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
