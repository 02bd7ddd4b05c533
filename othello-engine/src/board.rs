//! Board state and the core game rules: move generation and disk flipping.
//!
//! Both queries and updates are driven by the same directional walk: a
//! [`Ray`] of on-board squares leaving a square along one [`Step`].
//! [`Board::possible_moves`] follows rays to count capturable runs, and
//! [`Board::place_disk`] follows the recorded runs again to flip them.

use crate::disk::Disk;
use crate::error::OthelloError;
use crate::location::{Direction, Square, Step, STEP_DIRECTIONS};
use crate::moves::Move;
use crate::{utils, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// Handles game board state and logic.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    board: Vec<Disk>,
    /// Every square whose content is [`Disk::Empty`], kept in sync on each placement.
    empty_squares: BTreeSet<Square>,
    size: usize,
}

/// The squares met when walking from a start square in one direction,
/// excluding the start and stopping at the board edge.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pos: Square,
    step: Step,
    size: usize,
}

impl Ray {
    pub fn new(start: Square, step: Step, size: usize) -> Self {
        Self {
            pos: start,
            step,
            size,
        }
    }
}

impl Iterator for Ray {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let next = self.pos + self.step;
        if !next.is_inside(self.size) {
            return None;
        }
        self.pos = next;
        Some(next)
    }
}

impl Board {
    /// Create a board with the four starting disks in the center.
    /// Sizes outside `MIN_BOARD_SIZE..=MAX_BOARD_SIZE` are rejected, not clamped.
    pub fn new(size: usize) -> Result<Self, OthelloError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(OthelloError::UnsupportedSize { size });
        }

        let board = Self::starting_disks(size);
        let empty_squares = board
            .iter()
            .enumerate()
            .filter(|(_, disk)| **disk == Disk::Empty)
            .map(|(index, _)| Square::from_index(index, size))
            .collect();

        Ok(Self {
            board,
            empty_squares,
            size,
        })
    }

    /// Number of squares along one edge.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return true if the board still has empty squares.
    #[inline]
    pub fn can_play(&self) -> bool {
        !self.empty_squares.is_empty()
    }

    /// Iterate the empty squares in ascending order.
    pub fn empty_squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.empty_squares.iter().copied()
    }

    /// Returns the disk at `square`, or None if it is off the board.
    #[inline]
    pub fn get_square(&self, square: &Square) -> Option<Disk> {
        if square.is_inside(self.size) {
            Some(self.board[square.to_index(self.size)])
        } else {
            None
        }
    }

    /// All disks in row-major order.
    #[inline]
    pub fn disks(&self) -> &[Disk] {
        &self.board
    }

    /// Returns the legal moves for `disk`, best ranked first.
    /// An empty list means the player has to pass.
    pub fn possible_moves(&self, disk: Disk) -> Vec<Move> {
        if disk == Disk::Empty {
            return Vec::new();
        }

        let mut moves: Vec<Move> = self
            .empty_squares
            .iter()
            .filter_map(|&square| self.capturing_move(square, disk))
            .collect();
        moves.sort_by(Move::ranking);

        trace!("{} possible moves for {}", moves.len(), disk);
        moves
    }

    /// Update the board for the given disk placement.
    ///
    /// The move must come from [`Board::possible_moves`] on this same board state:
    /// only the target square is checked, the recorded runs are flipped as is.
    pub fn place_disk(&mut self, player_move: &Move) -> Result<(), OthelloError> {
        let start = player_move.square;
        match self.get_square(&start) {
            None => return Err(OthelloError::OutOfBounds { square: start }),
            Some(Disk::Empty) => {}
            Some(_) => return Err(OthelloError::OccupiedSquare { square: start }),
        }
        if player_move.disk == Disk::Empty {
            return Err(OthelloError::EmptyDisk { square: start });
        }

        debug!(
            "{} places at {}, flipping {}",
            player_move.disk, start, player_move.value
        );

        self.set_square(start, player_move.disk);
        self.empty_squares.remove(&start);
        for &Direction { step, count } in &player_move.directions {
            for square in Ray::new(start, step, self.size).take(count) {
                self.set_square(square, player_move.disk);
            }
        }
        Ok(())
    }

    /// Returns the winning disk color. `Empty` indicates a draw.
    pub fn result(&self) -> Disk {
        match self.score().cmp(&0) {
            Ordering::Greater => Disk::White,
            Ordering::Less => Disk::Black,
            Ordering::Equal => Disk::Empty,
        }
    }

    /// Board snapshot for the game log: one character per square, row-major.
    pub fn log_entry(&self) -> String {
        self.board.iter().map(|disk| disk.board_char()).collect()
    }

    /// Count the black and white disks.
    pub fn player_scores(&self) -> (usize, usize) {
        self.board
            .iter()
            .fold((0, 0), |(black, white), disk| match disk {
                Disk::Black => (black + 1, white),
                Disk::White => (black, white + 1),
                Disk::Empty => (black, white),
            })
    }

    /// Total score: positive means more white disks, negative more black disks.
    pub fn score(&self) -> i32 {
        self.board.iter().map(|disk| disk.weight()).sum()
    }

    /// Build the move `disk` would make at the empty `square`, if it captures anything.
    fn capturing_move(&self, square: Square, disk: Disk) -> Option<Move> {
        let directions: Vec<Direction> = STEP_DIRECTIONS
            .iter()
            .filter_map(|&step| {
                self.capture_run(square, step, disk)
                    .map(|count| Direction::new(step, count))
            })
            .collect();

        let value: usize = directions.iter().map(|dir| dir.count).sum();
        if value == 0 {
            return None;
        }

        Some(Move {
            square,
            disk,
            value,
            directions,
        })
    }

    /// Length of the run of opposing disks next to `square` along `step`,
    /// if the run is closed off by one of `disk`'s own pieces.
    fn capture_run(&self, square: Square, step: Step, disk: Disk) -> Option<usize> {
        let opponent = disk.opponent();
        let mut count = 0;
        for pos in Ray::new(square, step, self.size) {
            let current = self.board[pos.to_index(self.size)];
            if current == opponent {
                count += 1;
            } else if current == disk && count > 0 {
                return Some(count);
            } else {
                return None;
            }
        }
        None
    }

    fn set_square(&mut self, square: Square, disk: Disk) {
        let index = square.to_index(self.size);
        self.board[index] = disk;
    }

    /// Empty board with the starting pattern: white on the main diagonal of the
    /// center, black on the anti-diagonal.
    fn starting_disks(size: usize) -> Vec<Disk> {
        let mut board = vec![Disk::Empty; size * size];
        let row = if size % 2 == 0 {
            (size - 1) / 2
        } else {
            (size - 1) / 2 - 1
        };
        let col = size / 2;
        board[row * size + row] = Disk::White;
        board[row * size + col] = Disk::Black;
        board[col * size + row] = Disk::Black;
        board[col * size + col] = Disk::White;
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.board.iter().map(|disk| disk.board_char()),
            self.size,
            f,
        )
    }
}
