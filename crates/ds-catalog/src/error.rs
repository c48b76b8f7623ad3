use ds_core::ActionId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("action `{0}` is defined more than once")]
    DuplicateAction(ActionId),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
