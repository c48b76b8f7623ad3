//! One catalog entry.

use ds_core::{ActionId, Activity, NeedDelta, Room};

/// An immutable description of what using an object does.
///
/// `duration_minutes` is simulated time, not wall time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ActionDefinition {
    pub id:               ActionId,
    /// Human-readable label shown next to the object.
    pub name:             &'static str,
    pub delta:            NeedDelta,
    pub duration_minutes: u32,
    /// The room the object stands in.
    pub room:             Room,
    /// Activity the character switches to while performing the action.
    pub activity:         Activity,
}
