use ds_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The session task has stopped; no further commands can be delivered.
    #[error("session closed")]
    Closed,

    #[error("session task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
