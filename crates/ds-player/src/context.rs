//! Read-only simulation view passed to every player decision.

use ds_catalog::{ActionCatalog, ActionDefinition};
use ds_sim::{Sim, Snapshot};

/// What a [`Player`][crate::Player] may look at when deciding.
///
/// Built fresh by the driver before each decision; borrows live only for
/// that call.
pub struct PlayerContext<'a> {
    /// State after the most recent tick or command.
    pub snapshot: &'a Snapshot,

    /// The action table the simulation resolves against.
    pub catalog: &'a ActionCatalog,
}

impl<'a> PlayerContext<'a> {
    #[inline]
    pub fn new(snapshot: &'a Snapshot, catalog: &'a ActionCatalog) -> Self {
        Self { snapshot, catalog }
    }

    /// Context for `sim`'s current state.  `snapshot` must come from the
    /// same simulation.
    #[inline]
    pub fn of(sim: &'a Sim, snapshot: &'a Snapshot) -> Self {
        Self::new(snapshot, sim.catalog())
    }

    /// Actions not yet used today, anywhere in the house, in table order.
    pub fn unused_actions(&self) -> impl Iterator<Item = &'a ActionDefinition> + '_ {
        self.catalog
            .iter()
            .filter(move |a| !self.snapshot.is_used_today(a.id))
    }

    /// Actions in the current room not yet used today, in table order.
    pub fn unused_here(&self) -> impl Iterator<Item = &'a ActionDefinition> + '_ {
        self.catalog
            .by_room(self.snapshot.location)
            .filter(move |a| !self.snapshot.is_used_today(a.id))
    }
}
