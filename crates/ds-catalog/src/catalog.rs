//! `ActionCatalog` — lookup by id and filter by room.

use std::collections::HashMap;

use ds_core::{ActionId, Room};

use crate::builtin::BUILTIN_ACTIONS;
use crate::{ActionDefinition, CatalogError, CatalogResult};

/// A read-only table of [`ActionDefinition`]s.
///
/// Iteration order is the order the definitions were supplied in, so
/// `by_room` lists objects the way the room presents them.
#[derive(Clone, Debug)]
pub struct ActionCatalog {
    actions: Vec<ActionDefinition>,
    index:   HashMap<ActionId, usize>,
}

impl Default for ActionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ActionCatalog {
    /// Build a catalog from `actions`.  Ids must be unique.
    pub fn new(actions: Vec<ActionDefinition>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(actions.len());
        for (i, action) in actions.iter().enumerate() {
            if index.insert(action.id, i).is_some() {
                return Err(CatalogError::DuplicateAction(action.id));
            }
        }
        Ok(Self { actions, index })
    }

    /// The fixed 16-object table.
    pub fn builtin() -> Self {
        let actions = BUILTIN_ACTIONS.to_vec();
        let index = actions.iter().enumerate().map(|(i, a)| (a.id, i)).collect();
        Self { actions, index }
    }

    pub fn lookup(&self, id: ActionId) -> Option<&ActionDefinition> {
        self.index.get(&id).map(|&i| &self.actions[i])
    }

    /// All actions offered by objects in `room`.
    pub fn by_room(&self, room: Room) -> impl Iterator<Item = &ActionDefinition> + '_ {
        self.actions.iter().filter(move |a| a.room == room)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionDefinition> + '_ {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
