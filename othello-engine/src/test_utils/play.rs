use crate::{Board, Disk, Move, OthelloError};
use rand::seq::SliceRandom;
use rand::Rng;

/// Play one game to the end with both colors picking uniformly random legal moves.
/// Returns the final board and every move played, in order.
pub fn play_random_game<R: Rng>(
    size: usize,
    rng: &mut R,
) -> Result<(Board, Vec<Move>), OthelloError> {
    let mut board = Board::new(size)?;
    let mut history = Vec::new();
    let mut disk = Disk::Black;
    let mut passed = false;

    while board.can_play() {
        let moves = board.possible_moves(disk);
        match moves.choose(rng) {
            Some(mv) => {
                board.place_disk(mv)?;
                history.push(mv.clone());
                passed = false;
            }
            None if passed => break,
            None => passed = true,
        }
        disk = !disk;
    }

    Ok((board, history))
}
