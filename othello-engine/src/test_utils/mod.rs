//! Utilities used for testing and benchmarking.

mod perft;
pub use perft::run_perft;

mod play;
pub use play::play_random_game;
