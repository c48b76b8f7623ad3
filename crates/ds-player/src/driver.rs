//! Headless tick loop that lets a [`Player`] drive a [`Sim`].

use ds_sim::{Sim, SimObserver};
use tracing::debug;

use crate::{Choice, Player, PlayerContext, PlayerRng};

/// Counters collected by [`play`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayStats {
    /// Ticks that advanced time.
    pub ticks:        u64,
    pub decisions:    u64,
    pub actions:      u64,
    pub rejections:   u64,
    pub room_changes: u64,
}

/// Run up to `ticks` clock ticks, consulting `player` before each one.
///
/// Stops early once the simulation is no longer running.  There is no wall
/// clock here, so an activity started by an action reverts to idle at the
/// next decision rather than after the configured delay.
///
/// Calls `observer.on_sim_end` once on return.
pub fn play<P, O>(
    sim:      &mut Sim,
    player:   &P,
    rng:      &mut PlayerRng,
    ticks:    u64,
    observer: &mut O,
) -> PlayStats
where
    P: Player + ?Sized,
    O: SimObserver,
{
    let mut stats = PlayStats::default();

    for _ in 0..ticks {
        if !sim.is_running() {
            break;
        }
        if let Some(handle) = sim.pending_revert() {
            sim.revert_activity(handle);
        }

        let snapshot = sim.snapshot();
        let choice = player.choose(&PlayerContext::of(sim, &snapshot), rng);
        stats.decisions += 1;

        match choice {
            None => {}
            Some(Choice::ChangeRoom(room)) => {
                if sim.change_room(room) {
                    stats.room_changes += 1;
                }
            }
            Some(Choice::Perform(id)) => match sim.perform_with(id, observer) {
                Ok(_) => stats.actions += 1,
                Err(rejection) => {
                    stats.rejections += 1;
                    debug!(player = player.name(), %rejection, "choice rejected");
                }
            },
        }

        if sim.tick_with(observer).advanced() {
            stats.ticks += 1;
        }
    }

    observer.on_sim_end(&sim.snapshot());
    stats
}
