//! Commands accepted by a running session.

use ds_core::{ActionId, Room, Speed};
use ds_sim::{ActionApplied, Rejection};
use tokio::sync::oneshot;

/// A request applied by the session task, in arrival order.
///
/// Each maps one-to-one onto a [`Sim`][ds_sim::Sim] command.  `SetSpeed`
/// carries an already-validated [`Speed`], so an unsupported multiplier is
/// rejected by [`SessionHandle::set_speed`][crate::SessionHandle::set_speed]
/// before it is ever queued.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Pause,
    Resume,
    TogglePause,
    CycleSpeed,
    SetSpeed(Speed),
    ChangeRoom(Room),
    Perform(ActionId),
    Reset,
    /// Stop the session.  The task publishes a final snapshot and exits.
    Shutdown,
}

pub(crate) type PerformReply = oneshot::Sender<Result<ActionApplied, Rejection>>;

/// A queued command, with a reply slot when the caller waits for the result.
pub(crate) struct Envelope {
    pub command: Command,
    pub reply:   Option<PerformReply>,
}

impl From<Command> for Envelope {
    fn from(command: Command) -> Self {
        Self { command, reply: None }
    }
}
