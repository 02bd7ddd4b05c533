//! Whole games in check mode: deterministic computer moves on every board size.

use othello_engine::{Disk, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use othello_player::{Othello, Settings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Cursor;

fn check_settings(board_size: usize) -> Settings {
    Settings {
        board_size,
        autoplay_mode: true,
        check_mode: true,
        test_mode: true,
        ..Settings::default()
    }
}

fn play_check_game(board_size: usize, seed: u64) -> Othello<StdRng, Cursor<&'static str>> {
    let mut game = Othello::new(
        check_settings(board_size),
        StdRng::seed_from_u64(seed),
        Cursor::new(""),
    )
    .unwrap();
    game.play().unwrap();
    game
}

#[test]
fn check_mode_is_independent_of_seed() {
    for size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
        let first = play_check_game(size, 1);
        let second = play_check_game(size, 2);
        assert_eq!(first.formatted_log(), second.formatted_log());
        assert_eq!(first.digest(), second.digest());
        assert_eq!(first.digest().len(), 64);
    }
}

#[test]
fn check_mode_games_end_without_moves() {
    for size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
        let game = play_check_game(size, 0);
        let board = game.board();
        assert!(board.possible_moves(Disk::Black).is_empty());
        assert!(board.possible_moves(Disk::White).is_empty());

        // Every log line ends with the board snapshot after that move.
        let last_line = game.formatted_log().lines().last().unwrap().to_string();
        assert!(last_line.ends_with(&board.log_entry()));
    }
}
