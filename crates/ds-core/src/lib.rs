//! `ds-core` — foundational types for the dream story life simulation.
//!
//! This crate is a dependency of every other `ds-*` crate.  It has no `ds-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`ids`]    | `Room`, `Activity`, `ActionId`, `Need`                  |
//! | [`needs`]  | `Needs`, `NeedDelta`, `NeedLevel`                       |
//! | [`time`]   | `GameTime`, `Speed`                                     |
//! | [`config`] | `SimConfig`, `DecayConfig`                              |
//! | [`error`]  | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod needs;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DecayConfig, SimConfig};
pub use error::{CoreError, CoreResult};
pub use ids::{ActionId, Activity, Need, Room};
pub use needs::{NEED_MAX, NEED_MIN, NeedDelta, NeedLevel, Needs};
pub use time::{GameTime, MINUTES_PER_DAY, Speed, WEEKS_IN_STORY};
