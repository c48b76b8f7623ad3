//! Return values of the engine's commands.

use ds_catalog::ActionDefinition;
use ds_core::{ActionId, Activity, GameTime, Needs};

use crate::TerminalReason;

/// What one call to [`Sim::tick`][crate::Sim::tick] did.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    /// Paused or already terminal: nothing changed.
    Skipped,
    /// Time advanced and decay was applied.  `days_rolled` is the number of
    /// day boundaries crossed (0 or 1 at the supported speeds).
    Advanced { days_rolled: u32 },
    /// This tick's decay depleted a need.  The state is now terminal.
    Terminated(TerminalReason),
}

impl TickOutcome {
    pub fn advanced(self) -> bool {
        !matches!(self, TickOutcome::Skipped)
    }
}

/// Handle for the pending "back to idle" transition of one action.
///
/// Issued by [`Sim::perform`][crate::Sim::perform].  Only the most recently
/// issued handle is live; starting another action or resetting the
/// simulation makes older handles inert.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ActivityRevert(pub(crate) u64);

/// Report of a successfully applied action.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionApplied {
    pub action:       ActionId,
    pub activity:     Activity,
    pub needs_before: Needs,
    pub needs_after:  Needs,
    pub started_at:   GameTime,
    pub finished_at:  GameTime,
    /// Day boundaries crossed while the action ran.
    pub days_rolled:  u32,
    pub revert:       ActivityRevert,
}

/// An action offered in the current room, with its usage flag for today.
#[derive(Clone, Debug)]
pub struct AvailableAction<'a> {
    pub definition: &'a ActionDefinition,
    pub used_today: bool,
}
