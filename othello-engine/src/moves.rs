//! Candidate disk placements and their ranking.

use crate::disk::Disk;
use crate::location::{Direction, Square};
use std::cmp::{Ordering, Reverse};
use std::fmt;

/// One possible disk placement for the given disk color.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Move {
    pub square: Square,
    pub disk: Disk,
    /// Total number of opposing disks this placement flips.
    pub value: usize,
    /// Every capturing line, whose counts sum to `value`.
    pub directions: Vec<Direction>,
}

impl Move {
    /// Key that ranks moves: highest value first, then the smallest square.
    #[inline]
    pub fn rank_key(&self) -> (Reverse<usize>, Square) {
        (Reverse(self.value), self.square)
    }

    /// Comparator form of [`Move::rank_key`], for use with `sort_by`.
    pub fn ranking(a: &Self, b: &Self) -> Ordering {
        a.rank_key().cmp(&b.rank_key())
    }

    /// Get all the squares playing this move will flip, sorted.
    pub fn affected_squares(&self) -> Vec<Square> {
        let mut squares: Vec<Square> = Vec::with_capacity(self.value);
        for &Direction { step, count } in &self.directions {
            let mut pos = self.square + step;
            for _ in 0..count {
                squares.push(pos);
                pos += step;
            }
        }
        squares.sort();
        squares
    }

    /// Format move for the game log: "B:(3,2),10".
    pub fn log_entry(&self) -> String {
        format!("{}:{},{}", self.disk.board_char(), self.square, self.value)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square: {} -> value: {}", self.square, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Step;

    fn test_move(x: isize, y: isize, value: usize) -> Move {
        Move {
            square: Square::new(x, y),
            disk: Disk::Black,
            value,
            directions: vec![Direction::new(Step { x: 1, y: 0 }, value)],
        }
    }

    #[test]
    fn move_ranking() {
        let mut moves = vec![
            test_move(3, 0, 1),
            test_move(0, 4, 2),
            test_move(1, 1, 1),
            test_move(0, 2, 2),
            test_move(1, 0, 1),
        ];
        moves.sort_by(Move::ranking);

        let order: Vec<(isize, isize, usize)> = moves
            .iter()
            .map(|m| (m.square.x, m.square.y, m.value))
            .collect();
        assert_eq!(
            order,
            vec![(0, 2, 2), (0, 4, 2), (1, 0, 1), (1, 1, 1), (3, 0, 1)]
        );
    }

    #[test]
    fn move_affected_squares() {
        let mv = Move {
            square: Square::new(4, 4),
            disk: Disk::White,
            value: 3,
            directions: vec![
                Direction::new(Step { x: -1, y: 0 }, 2),
                Direction::new(Step { x: 1, y: 1 }, 1),
            ],
        };
        assert_eq!(
            mv.affected_squares(),
            vec![Square::new(2, 4), Square::new(3, 4), Square::new(5, 5)]
        );
    }

    #[test]
    fn move_log_entry() {
        assert_eq!(test_move(3, 2, 10).log_entry(), "B:(3,2),10");

        let white = Move {
            disk: Disk::White,
            ..test_move(0, 0, 1)
        };
        assert_eq!(white.log_entry(), "W:(0,0),1");
    }

    #[test]
    fn move_to_str() {
        assert_eq!(test_move(2, 3, 4).to_string(), "Square: (2,3) -> value: 4");
    }
}
