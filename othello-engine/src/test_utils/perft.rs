//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking move generation against known counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Board, Disk, OthelloError};

pub fn run_perft(size: usize, depth: u64) -> Result<u64, OthelloError> {
    leaves_below(&Board::new(size)?, Disk::Black, depth, false)
}

fn leaves_below(board: &Board, disk: Disk, depth: u64, passed: bool) -> Result<u64, OthelloError> {
    // Leaf node for this depth
    if depth == 0 {
        return Ok(1);
    }

    let all_moves = board.possible_moves(disk);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return Ok(1);
        }

        return leaves_below(board, !disk, depth - 1, true);
    }

    let mut leaves = 0;
    for mv in &all_moves {
        let mut next = board.clone();
        next.place_disk(mv)?;
        leaves += leaves_below(&next, !disk, depth - 1, false)?;
    }
    Ok(leaves)
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(8, 1), Ok(4));
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(8, 2), Ok(12));
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(8, 3), Ok(56));
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(8, 4), Ok(244));
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(8, 5), Ok(1396));
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(8, 6), Ok(8200));
}

#[test]
fn perft_unsupported_size() {
    assert_eq!(
        run_perft(12, 1),
        Err(OthelloError::UnsupportedSize { size: 12 })
    );
}
