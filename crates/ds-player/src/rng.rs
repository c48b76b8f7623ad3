//! Seeded RNG for players.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Deterministic RNG handed to [`Player::choose`][crate::Player::choose].
///
/// One per run, seeded from the run's seed, so the same seed and player
/// always produce the same story.
pub struct PlayerRng(SmallRng);

impl PlayerRng {
    pub fn new(seed: u64) -> Self {
        PlayerRng(SmallRng::seed_from_u64(seed))
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element.  Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }
}
