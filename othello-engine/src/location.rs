//! Code for working with [`Square`]s and stepping between them on the board.

use derive_more::{Display, Error};
use std::fmt::{self, Formatter};
use std::ops::{Add, AddAssign};

/// A location on the Othello board.
///
/// Coordinates are signed so that stepping off the edge of the board yields a
/// representable (but out of bounds) square. Squares order by `x`, then `y`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Square {
    pub x: isize,
    pub y: isize,
}

/// One of the eight compass directions a line of disks can run in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Step {
    pub x: isize,
    pub y: isize,
}

/// A continuous line of opposing disks in one direction.
///
/// The `step` field determines the direction on the board,
/// and `count` describes how many consecutive squares in that direction there are.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Direction {
    /// Direction of travel on the board.
    pub step: Step,
    /// Number of consecutive opposing disks along this direction.
    pub count: usize,
}

const UP: isize = 1;
const DOWN: isize = -1;
const LEFT: isize = -1;
const RIGHT: isize = 1;
const STILL: isize = 0;

/// All possible step directions from a square on the board.
pub const STEP_DIRECTIONS: [Step; 8] = [
    Step { x: UP, y: LEFT },
    Step { x: UP, y: STILL },
    Step { x: UP, y: RIGHT },
    Step { x: STILL, y: LEFT },
    Step { x: STILL, y: RIGHT },
    Step { x: DOWN, y: LEFT },
    Step { x: DOWN, y: STILL },
    Step { x: DOWN, y: RIGHT },
];

impl Square {
    #[inline]
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// Convert into a row-major index for a board with `size` squares per edge.
    /// Only meaningful for squares inside the board.
    #[inline]
    pub const fn to_index(self, size: usize) -> usize {
        self.y as usize * size + self.x as usize
    }

    /// Convert from a row-major index for a board with `size` squares per edge.
    #[inline]
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self {
            x: (index % size) as isize,
            y: (index / size) as isize,
        }
    }

    /// Returns whether this square lies on a board with `size` squares per edge.
    #[inline]
    pub const fn is_inside(self, size: usize) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < size as isize && self.y < size as isize
    }
}

impl Direction {
    pub const fn new(step: Step, count: usize) -> Self {
        Self { step, count }
    }
}

/// Convert this [`Square`] into coordinate notation ("(3,2)").
impl fmt::Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl Add for Square {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Add<Step> for Square {
    type Output = Self;

    fn add(self, step: Step) -> Self {
        Self::new(self.x + step.x, self.y + step.y)
    }
}

impl AddAssign for Square {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl AddAssign<Step> for Square {
    fn add_assign(&mut self, step: Step) {
        *self = *self + step;
    }
}

impl Add for Step {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid square string, expected 'x,y'")]
pub struct ParseSquareError;

/// Build a [`Square`] from "x,y" notation with non-negative coordinates.
/// Whitespace around either coordinate is ignored.
impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(',');
        let x: usize = parts
            .next()
            .ok_or(ParseSquareError)?
            .trim()
            .parse()
            .or(Err(ParseSquareError))?;
        let y: usize = parts
            .next()
            .ok_or(ParseSquareError)?
            .trim()
            .parse()
            .or(Err(ParseSquareError))?;

        if parts.next().is_some() {
            return Err(ParseSquareError);
        }

        Ok(Self::new(x as isize, y as isize))
    }
}
