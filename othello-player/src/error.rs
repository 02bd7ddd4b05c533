use derive_more::{Display, Error, From};
use othello_engine::OthelloError;
use std::io;

/// Failures that end a game early.
#[derive(Debug, Display, Error, From)]
pub enum GameError {
    #[display(fmt = "board error: {}", _0)]
    Engine(OthelloError),

    #[display(fmt = "i/o error: {}", _0)]
    Io(io::Error),

    /// The human player's input stream ended while a move was expected.
    #[display(fmt = "input closed while waiting for a move")]
    #[from(ignore)]
    InputClosed,

    /// A player was asked to choose from an empty list of moves.
    #[display(fmt = "no legal moves to choose from")]
    #[from(ignore)]
    NoMoves,
}
