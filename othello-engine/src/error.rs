use crate::location::Square;
use crate::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use derive_more::{Display, Error};

/// Misuse of the board engine. These indicate a caller bug, never a normal
/// game condition, and the board is left untouched when one is returned.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum OthelloError {
    #[display(
        fmt = "unsupported board size {}, expected {}..={}",
        size,
        MIN_BOARD_SIZE,
        MAX_BOARD_SIZE
    )]
    UnsupportedSize { size: usize },

    #[display(fmt = "square {} is outside the board", square)]
    OutOfBounds { square: Square },

    #[display(fmt = "cannot place a disk on occupied square {}", square)]
    OccupiedSquare { square: Square },

    #[display(fmt = "cannot place an empty disk at {}", square)]
    EmptyDisk { square: Square },
}
