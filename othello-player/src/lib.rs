//! Command line Othello: a human against another human or a computer that
//! plays random legal moves.
//!
//! The rules live in `othello_engine`; this crate adds the players, the
//! turn-taking loop, console output and the game log digest used by check mode.

pub mod colorprint;
pub mod digest;
pub mod othello;
pub mod player;
pub mod settings;

mod error;

pub use error::GameError;
pub use othello::Othello;
pub use player::{Player, PlayerType};
pub use settings::{PlayerSettings, Settings};
