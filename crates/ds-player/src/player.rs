//! The `Player` trait — the extension point for automated play.

use crate::{Choice, PlayerContext, PlayerRng};

/// Pluggable decision-maker for headless runs.
///
/// The driver calls [`choose`][Self::choose] once between ticks while the
/// simulation is running.  Returning `None` lets the clock run on.
///
/// Implementations take `&self` and keep no per-run state of their own; all
/// randomness goes through the supplied [`PlayerRng`] so a run is
/// reproducible from its seed.
///
/// # Example
///
/// ```rust,ignore
/// struct Insomniac;
///
/// impl Player for Insomniac {
///     fn choose(&self, ctx: &PlayerContext<'_>, _rng: &mut PlayerRng) -> Option<Choice> {
///         ctx.unused_here()
///             .find(|a| a.id != ActionId::Bed)
///             .map(|a| Choice::Perform(a.id))
///     }
/// }
/// ```
pub trait Player: Send + Sync + 'static {
    fn choose(&self, ctx: &PlayerContext<'_>, rng: &mut PlayerRng) -> Option<Choice>;

    /// Short label for logs and output file names.
    fn name(&self) -> &'static str {
        "player"
    }
}
