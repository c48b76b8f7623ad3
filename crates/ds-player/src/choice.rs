//! Player choices — the commands a player can request between ticks.

use ds_core::{ActionId, Room};

/// One command a [`Player`][crate::Player] wants applied before the next tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Choice {
    /// Walk to `room`.  The character's activity drops to idle.
    ChangeRoom(Room),

    /// Use the object `ActionId`.  Rejections (already used today, paused)
    /// are counted by the driver and otherwise ignored.
    Perform(ActionId),
}
