//! `ds-player` — automated players that drive a [`Sim`][ds_sim::Sim] without
//! a human at the controls.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                       |
//! |-------------|----------------------------------------------------------------|
//! | [`choice`]  | `Choice` enum (`ChangeRoom`, `Perform`)                        |
//! | [`context`] | `PlayerContext<'a>`: read-only view handed to every decision   |
//! | [`player`]  | `Player` trait                                                 |
//! | [`players`] | `IdlePlayer`, `GreedyPlayer`, `RandomPlayer`                   |
//! | [`rng`]     | `PlayerRng` — seeded `SmallRng` wrapper                        |
//! | [`driver`]  | `play`: tick loop that consults a player between ticks         |
//! | [`error`]   | `PlayerError`, `PlayerResult<T>`                               |
//!
//! # Design notes
//!
//! Players never touch the simulation directly.  They read a
//! [`PlayerContext`] and return at most one [`Choice`]; the [`driver`]
//! applies it through the same commands a presentation layer would use, so
//! an automated run exercises exactly the public command surface.

pub mod choice;
pub mod context;
pub mod driver;
pub mod error;
pub mod player;
pub mod players;
pub mod rng;


pub use choice::Choice;
pub use context::PlayerContext;
pub use driver::{PlayStats, play};
pub use error::{PlayerError, PlayerResult};
pub use player::Player;
pub use players::{GreedyPlayer, IdlePlayer, RandomPlayer};
pub use rng::PlayerRng;
