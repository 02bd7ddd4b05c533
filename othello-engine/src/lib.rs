//! `othello-engine` implements Othello move generation and board dynamics
//! for square boards between [`MIN_BOARD_SIZE`] and [`MAX_BOARD_SIZE`] squares per edge.
//!
//! The crate is split into two layers:
//!
//!  - The geometry and move model: [`Disk`], [`Square`], [`Step`], [`Direction`]
//!    and [`Move`]. These are plain values with no behaviour beyond arithmetic and ordering.
//!  - [`Board`], which owns the disks and answers which moves are legal for a color
//!    ([`Board::possible_moves`]) and applies them ([`Board::place_disk`]).
//!
//! Turn-taking, player input and presentation live outside this crate.

pub mod test_utils;

mod board;
mod disk;
mod error;
mod location;
mod moves;
mod utils;

pub use board::*;
pub use disk::*;
pub use error::*;
pub use location::*;
pub use moves::*;

/// The smallest supported number of squares on one edge of the board.
pub const MIN_BOARD_SIZE: usize = 4;

/// The largest supported number of squares on one edge of the board.
pub const MAX_BOARD_SIZE: usize = 10;

/// The number of squares on one edge of a standard Othello board.
pub const DEFAULT_BOARD_SIZE: usize = 8;
