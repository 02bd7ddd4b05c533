//! The contents of a square, which double as player colors.

use std::fmt;

/// One game piece or the lack of one.
///
/// `Black` and `White` also name the two players. The discriminants are the
/// weight each disk contributes to [`Board::score`](crate::Board::score).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Disk {
    Black = -1,
    Empty = 0,
    White = 1,
}

impl Default for Disk {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl Disk {
    /// Return the opposing color. `Empty` has no opponent and maps to itself.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::Empty => Self::Empty,
            Self::White => Self::Black,
        }
    }

    /// Single character used for this disk in board snapshots.
    #[inline]
    pub const fn board_char(self) -> char {
        match self {
            Self::Black => 'B',
            Self::Empty => '_',
            Self::White => 'W',
        }
    }

    /// Score contribution: +1 for white, -1 for black.
    #[inline]
    pub const fn weight(self) -> i32 {
        self as i32
    }
}

impl std::ops::Not for Disk {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        self.opponent()
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Black => "BLACK",
            Self::Empty => "EMPTY",
            Self::White => "WHITE",
        })
    }
}
