//! Gameplay loop: turn-taking between the two players, the game log and the result.

use crate::colorprint::{self, print_warn};
use crate::digest;
use crate::error::GameError;
use crate::player::Player;
use crate::settings::Settings;
use colored::Colorize;
use log::info;
use othello_engine::{Board, Disk, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Plays games of Othello between two players on one board.
pub struct Othello<R, I> {
    board: Board,
    settings: Settings,
    player_black: Player,
    player_white: Player,
    game_log: Vec<String>,
    games_played: usize,
    rounds_played: usize,
    rng: R,
    input: I,
}

impl<R: Rng, I: BufRead> Othello<R, I> {
    /// Set up a game. `rng` drives the computer's choices and `input` feeds
    /// the human players' answers.
    pub fn new(settings: Settings, rng: R, input: I) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(settings.board_size)?,
            settings,
            player_black: Player::black(settings.to_player_settings()),
            player_white: Player::white(settings.to_player_settings()),
            game_log: Vec::new(),
            games_played: 0,
            rounds_played: 0,
            rng,
            input,
        })
    }

    /// Keep playing full games until the user wants to stop.
    pub fn play(&mut self) -> Result<(), GameError> {
        loop {
            self.init_game()?;
            self.game_loop()?;
            if self.settings.check_mode {
                println!("{}", self.digest());
            } else {
                self.print_result();
                if self.settings.show_log {
                    self.print_log();
                }
            }
            if self.settings.autoplay_mode
                || !self.get_answer("Would you like to play again", "y", "n")?
            {
                break;
            }
        }
        Ok(())
    }

    /// The board of the current (or last finished) game.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The numbered log of the current game, one line per move.
    pub fn formatted_log(&self) -> String {
        digest::format_game_log(&self.game_log)
    }

    /// SHA-256 hex digest of [`Othello::formatted_log`].
    pub fn digest(&self) -> String {
        digest::calculate_sha256(&self.formatted_log())
    }

    /// Reset the board and players for a new game and decide who is controlled by the computer.
    fn init_game(&mut self) -> Result<(), GameError> {
        if self.games_played > 0 {
            self.board = Board::new(self.settings.board_size)?;
            self.player_black.reset();
            self.player_white.reset();
            self.rounds_played = 0;
            self.game_log.clear();
        }

        if self.settings.autoplay_mode {
            self.player_black.set_computer();
            self.player_white.set_computer();
        } else if self.settings.use_defaults {
            self.player_black.set_human();
            self.player_white.set_computer();
        } else if self.get_answer("Would you like to play against the computer", "y", "n")? {
            if self.get_answer("Would you like to play as black or white", "b", "w")? {
                self.player_black.set_human();
                self.player_white.set_computer();
            } else {
                self.player_black.set_computer();
                self.player_white.set_human();
            }
        } else {
            self.player_black.set_human();
            self.player_white.set_human();
        }

        info!(
            "new {0}x{0} game, computer plays black: {1}, white: {2}",
            self.settings.board_size,
            self.player_black.computer(),
            self.player_white.computer()
        );
        if !self.settings.check_mode {
            println!("{}", "\nPlayers:".bold());
            self.print_status();
        }
        Ok(())
    }

    /// Keep making moves until the board is full or neither player could move in the last round.
    fn game_loop(&mut self) -> Result<(), GameError> {
        while self.board.can_play() && (self.player_black.can_play || self.player_white.can_play) {
            self.rounds_played += 1;
            if !self.settings.check_mode {
                println!(
                    "{}",
                    format!("\n=========== ROUND: {} ===========", self.rounds_played).bold()
                );
            }
            for player in [&mut self.player_black, &mut self.player_white].iter_mut() {
                if let Some(entry) =
                    player.play_one_move(&mut self.board, &mut self.rng, &mut self.input)?
                {
                    self.game_log
                        .push(format!("{};{}", entry, self.board.log_entry()));
                }
                if !self.settings.check_mode {
                    println!("--------------------------------");
                }
            }
        }

        self.games_played += 1;
        info!(
            "game {} finished after {} rounds, winner: {}",
            self.games_played,
            self.rounds_played,
            self.board.result()
        );
        if !self.settings.check_mode {
            println!("{}", "\n================================".bold());
            println!("{}", "The game is finished!\n".green().bold());
        }
        Ok(())
    }

    /// Print the game log showing every move and the board after it, followed by its digest.
    fn print_log(&self) {
        println!("{}", "Game log:".yellow().bold());
        println!("{}", self.formatted_log());
        println!("{}", self.digest());
    }

    /// Print ending status and winner info.
    fn print_result(&self) {
        println!("{}", "Result:".bold());
        self.print_status();
        println!();

        match self.board.result() {
            Disk::Empty => println!("The game ended in a tie...\n"),
            winner => println!("The winner is {}!\n", colorprint::colored_name(winner)),
        }
    }

    fn print_status(&self) {
        println!("{}", self.player_black);
        println!("{}\n", self.player_white);
        println!("{}", colorprint::format_board(&self.board));
    }

    /// Ask a question with two options. True if the answer is `yes`.
    fn get_answer(&mut self, question: &str, yes: &str, no: &str) -> Result<bool, GameError> {
        print!("{} ({}/{})? ", question, yes, no);
        io::stdout().flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(answer.trim().to_lowercase() == yes)
    }
}

/// Ask for the board size. Out of range values are clamped and
/// anything unparseable falls back to the default.
pub fn get_board_size<I: BufRead>(input: &mut I) -> Result<usize, GameError> {
    print!("Choose board size (default is {}): ", DEFAULT_BOARD_SIZE);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    if let Ok(board_size) = line.trim().parse::<usize>() {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
            print_warn(&format!(
                "Limiting board size to valid range {}..{}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE
            ));
        }
        return Ok(board_size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE));
    }

    print_warn(&format!(
        "Invalid size, defaulting to {}...",
        DEFAULT_BOARD_SIZE
    ));
    Ok(DEFAULT_BOARD_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
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

    #[test]
    fn board_size_prompt() {
        assert_eq!(get_board_size(&mut Cursor::new("6\n")).unwrap(), 6);
        assert_eq!(get_board_size(&mut Cursor::new("2\n")).unwrap(), MIN_BOARD_SIZE);
        assert_eq!(get_board_size(&mut Cursor::new("42\n")).unwrap(), MAX_BOARD_SIZE);
        assert_eq!(
            get_board_size(&mut Cursor::new("big\n")).unwrap(),
            DEFAULT_BOARD_SIZE
        );
        assert_eq!(get_board_size(&mut Cursor::new("")).unwrap(), DEFAULT_BOARD_SIZE);
    }

    #[test]
    fn unsupported_size_is_an_error() {
        let result = Othello::new(check_settings(12), StdRng::seed_from_u64(0), Cursor::new(""));
        assert!(matches!(result, Err(GameError::Engine(_))));
    }

    #[test]
    fn check_mode_game_4x4() {
        let mut game =
            Othello::new(check_settings(4), StdRng::seed_from_u64(0), Cursor::new("")).unwrap();
        game.play().unwrap();
        assert_eq!(game.board().log_entry(), "WWWBWWWBWWWWBBBW");
        assert_eq!(game.board().result(), Disk::White);
        assert!(game
            .formatted_log()
            .starts_with("01: B:(0,1),1;____BBB__BW_____\n02: W:(0,0),1;W___BWB__BW_____"));
        assert_eq!(
            game.digest(),
            "ad4679949110ed7997aa1bf09441a7eb491b498189c03685ffdd6ddbb70e3c22"
        );
    }

    #[test]
    fn check_mode_game_8x8() {
        let mut game =
            Othello::new(check_settings(8), StdRng::seed_from_u64(0), Cursor::new("")).unwrap();
        game.play().unwrap();
        assert_eq!(game.formatted_log().lines().count(), 60);
        assert!(!game.board().can_play());
        assert_eq!(game.board().score(), 26);
        assert_eq!(
            game.digest(),
            "2e9929fc0c2e6a2218dad6b7ad5e5c631708060bb4407d36e5cff6126181f05a"
        );
    }

    #[test]
    fn human_game_from_scripted_input() {
        // Two humans on 4x4: play one move each, then run out of input.
        let settings = Settings {
            board_size: 4,
            test_mode: true,
            ..Settings::default()
        };
        let input = Cursor::new("n\n0,1\n0,0\n");
        let mut game = Othello::new(settings, StdRng::seed_from_u64(0), input).unwrap();
        assert!(matches!(game.play(), Err(GameError::InputClosed)));
        assert_eq!(game.board().log_entry(), "W___BWB__BW_____");
        assert_eq!(
            game.formatted_log(),
            "01: B:(0,1),1;____BBB__BW_____\n02: W:(0,0),1;W___BWB__BW_____"
        );
    }

    #[test]
    fn defaults_play_against_computer() {
        let settings = Settings {
            board_size: 4,
            test_mode: true,
            use_defaults: true,
            ..Settings::default()
        };
        // Black is human and white the computer, which answers with its best move.
        let input = Cursor::new("0,1\n");
        let mut game = Othello::new(settings, StdRng::seed_from_u64(0), input).unwrap();
        assert!(matches!(game.play(), Err(GameError::InputClosed)));
        assert_eq!(game.formatted_log().lines().count(), 2);
    }
}
