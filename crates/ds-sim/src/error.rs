use ds_catalog::CatalogError;
use ds_core::{ActionId, CoreError};
use thiserror::Error;

/// Caller defects: invalid configuration or an unsupported speed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type SimResult<T> = Result<T, SimError>;

/// Why `perform` left the state untouched.
///
/// These are expected runtime conditions, not failures: a presentation layer
/// may ignore them entirely.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("action `{0}` is not in the catalog")]
    UnknownAction(ActionId),

    #[error("no action is named `{0}`")]
    UnknownName(String),

    #[error("action `{id}` was already used on day {day}")]
    AlreadyUsedToday { id: ActionId, day: u32 },

    #[error("simulation is paused")]
    Paused,

    #[error("simulation has ended")]
    Terminal,
}
