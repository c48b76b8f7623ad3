//! `ds-catalog` — the action catalog.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`action`]  | `ActionDefinition`                                    |
//! | [`catalog`] | `ActionCatalog` (lookup by id, filter by room)        |
//! | [`builtin`] | The fixed 16-object table                             |
//! | [`error`]   | `CatalogError`, `CatalogResult<T>`                    |
//!
//! The catalog is static read-only data.  It has no behavior beyond lookup;
//! the simulation crate decides when and how an action is applied.

pub mod action;
pub mod builtin;
pub mod catalog;
pub mod error;


pub use action::ActionDefinition;
pub use catalog::ActionCatalog;
pub use error::{CatalogError, CatalogResult};
