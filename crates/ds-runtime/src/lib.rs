//! `ds-runtime` — real-time driver for a [`Sim`][ds_sim::Sim].
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`command`] | `Command` enum accepted by a running session                  |
//! | [`session`] | `Session::spawn`, `SessionHandle`, `SessionConfig`            |
//! | [`error`]   | `RuntimeError`, `RuntimeResult<T>`                            |
//!
//! # Design notes
//!
//! One tokio task owns the `Sim` for the whole session.  Three event sources
//! feed it, and it handles them one at a time, so the engine never sees
//! concurrent mutation:
//!
//! 1. **Commands** from any number of callers, queued on an `mpsc` channel
//!    and applied in arrival order.
//! 2. **Clock ticks** from a `tokio::time::Interval`, polled only while the
//!    simulation is running.  Pausing, or reaching a terminal state, simply
//!    stops polling it; resuming resets it so the first tick after a resume
//!    comes one full interval later.
//! 3. **The idle-revert deadline**, a single re-armable `Sleep`.  Each
//!    successful action re-arms it; reset and shutdown disarm it.
//!
//! Every change is published as a [`Snapshot`][ds_sim::Snapshot] on a
//! `watch` channel; readers never touch the engine itself.

pub mod command;
pub mod error;
pub mod session;


pub use command::Command;
pub use error::{RuntimeError, RuntimeResult};
pub use session::{Session, SessionConfig, SessionHandle};
