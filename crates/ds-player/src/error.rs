use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PlayerError {
    #[error("player configuration error: {0}")]
    Config(String),
}

pub type PlayerResult<T> = Result<T, PlayerError>;
