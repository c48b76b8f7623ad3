//! Built-in players.

use ds_catalog::ActionDefinition;
use ds_core::{NEED_MAX, NEED_MIN, Room};
use tracing::trace;

use crate::{Choice, Player, PlayerContext, PlayerError, PlayerResult, PlayerRng};

// ── IdlePlayer ────────────────────────────────────────────────────────────────

/// A [`Player`] that never does anything.  The character decays until the
/// story ends; handy as a baseline and in tests.
pub struct IdlePlayer;

impl Player for IdlePlayer {
    fn choose(&self, _ctx: &PlayerContext<'_>, _rng: &mut PlayerRng) -> Option<Choice> {
        None
    }

    fn name(&self) -> &'static str {
        "idle"
    }
}

// ── GreedyPlayer ──────────────────────────────────────────────────────────────

/// Looks after whichever need is lowest.
///
/// Once the lowest need drops below `threshold`, picks the unused action
/// (anywhere in the house) that raises that need the most, walks to its room
/// and uses it.  Ties go to the action with the larger total delta, then to
/// table order.
pub struct GreedyPlayer {
    threshold: f64,
}

impl GreedyPlayer {
    pub const DEFAULT_THRESHOLD: f64 = 60.0;

    pub fn new(threshold: f64) -> PlayerResult<Self> {
        if !(NEED_MIN..=NEED_MAX).contains(&threshold) {
            return Err(PlayerError::Config(format!(
                "greedy threshold must be within {NEED_MIN}..={NEED_MAX}, got {threshold}"
            )));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for GreedyPlayer {
    fn default() -> Self {
        Self { threshold: Self::DEFAULT_THRESHOLD }
    }
}

fn total(a: &ActionDefinition) -> f64 {
    a.delta.energy + a.delta.sleep + a.delta.health + a.delta.happiness
}

impl Player for GreedyPlayer {
    fn choose(&self, ctx: &PlayerContext<'_>, _rng: &mut PlayerRng) -> Option<Choice> {
        let needs = &ctx.snapshot.needs;
        let lowest = needs.lowest();
        if needs.get(lowest) >= self.threshold {
            return None;
        }

        let mut best: Option<&ActionDefinition> = None;
        for action in ctx.unused_actions() {
            let gain = action.delta.get(lowest);
            if gain <= 0.0 {
                continue;
            }
            let better = match best {
                None => true,
                Some(b) => {
                    let b_gain = b.delta.get(lowest);
                    gain > b_gain || (gain == b_gain && total(action) > total(b))
                }
            };
            if better {
                best = Some(action);
            }
        }

        let action = best?;
        trace!(need = %lowest, action = %action.id, "greedy pick");
        if action.room != ctx.snapshot.location {
            Some(Choice::ChangeRoom(action.room))
        } else {
            Some(Choice::Perform(action.id))
        }
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

// ── RandomPlayer ──────────────────────────────────────────────────────────────

/// Acts with probability `act_probability` per decision.
///
/// When it acts, it uses a random unused object in the current room, or
/// wanders to a random other room when nothing here is left.
pub struct RandomPlayer {
    act_probability: f64,
}

impl RandomPlayer {
    pub fn new(act_probability: f64) -> PlayerResult<Self> {
        if !(0.0..=1.0).contains(&act_probability) {
            return Err(PlayerError::Config(format!(
                "act probability must be within 0..=1, got {act_probability}"
            )));
        }
        Ok(Self { act_probability })
    }
}

impl Player for RandomPlayer {
    fn choose(&self, ctx: &PlayerContext<'_>, rng: &mut PlayerRng) -> Option<Choice> {
        if !rng.gen_bool(self.act_probability) {
            return None;
        }

        let here: Vec<&ActionDefinition> = ctx.unused_here().collect();
        if let Some(action) = rng.choose(&here) {
            return Some(Choice::Perform(action.id));
        }

        let elsewhere: Vec<Room> = Room::ALL
            .iter()
            .copied()
            .filter(|&r| r != ctx.snapshot.location)
            .collect();
        rng.choose(&elsewhere).map(|&room| Choice::ChangeRoom(room))
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
