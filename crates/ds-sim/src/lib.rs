//! `ds-sim` — the simulation engine.
//!
//! # Tick contract
//!
//! ```text
//! tick():
//!   ① guard      no-op while paused or terminal
//!   ② advance    time += speed minutes, carrying into hour and day
//!   ③ rollover   if the day changed, prune the usage log (once)
//!   ④ decay      hour-dependent energy/sleep decay, flat health/happiness
//!   ⑤ terminal   energy, then sleep, then health; first ≤ 0 latches
//! ```
//!
//! All five steps run inside one `&mut self` call, so no intermediate state
//! is ever observable.
//!
//! # Action contract
//!
//! ```text
//! perform(id):
//!   reject if terminal / paused / unknown id / already used today
//!   record usage → apply deltas (clamped) → advance time by duration
//!   (rollover prunes usage) → set activity → issue an idle-revert token
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ds_core::{ActionId, SimConfig};
//! use ds_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! sim.perform(ActionId::Bed)?;
//! sim.run_ticks(600, &mut NoopObserver);
//! println!("{}", sim.time());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod outcome;
pub mod sim;
pub mod state;


pub use builder::SimBuilder;
pub use error::{Rejection, SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use outcome::{ActionApplied, ActivityRevert, AvailableAction, TickOutcome};
pub use sim::Sim;
pub use state::{SimStatus, SimulationState, Snapshot, TerminalReason, UsageLog};
