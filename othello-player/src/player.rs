//! One player of the game, controlled either by a human or by the computer.

use crate::colorprint::{self, print_error};
use crate::error::GameError;
use crate::settings::PlayerSettings;
use colored::Colorize;
use log::debug;
use othello_engine::{Board, Disk, Move, Square};
use rand::seq::SliceRandom;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::{fmt, thread, time::Duration};

/// Who decides the moves for a [`Player`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerType {
    Human,
    Computer,
}

/// One player that can be either human or computer controlled.
#[derive(Debug)]
pub struct Player {
    /// Whether the player had a move available in its latest turn.
    pub can_play: bool,
    disk: Disk,
    player_type: PlayerType,
    rounds_played: usize,
    settings: PlayerSettings,
}

impl Player {
    pub const fn new(disk: Disk, settings: PlayerSettings, player_type: PlayerType) -> Self {
        Self {
            can_play: true,
            disk,
            player_type,
            rounds_played: 0,
            settings,
        }
    }

    /// Shorthand for a human player with black disks.
    pub const fn black(settings: PlayerSettings) -> Self {
        Self::new(Disk::Black, settings, PlayerType::Human)
    }

    /// Shorthand for a human player with white disks.
    pub const fn white(settings: PlayerSettings) -> Self {
        Self::new(Disk::White, settings, PlayerType::Human)
    }

    /// Play one turn. Returns the move's log entry, or None if the player had to pass.
    pub fn play_one_move<R: Rng, I: BufRead>(
        &mut self,
        board: &mut Board,
        rng: &mut R,
        input: &mut I,
    ) -> Result<Option<String>, GameError> {
        if !self.settings.check_mode {
            println!("Turn: {}", colorprint::colored_name(self.disk));
        }
        let moves = board.possible_moves(self.disk);
        if moves.is_empty() {
            self.can_play = false;
            if !self.settings.check_mode {
                println!("{}", "  No moves available...".yellow());
            }
            return Ok(None);
        }

        self.can_play = true;
        if self.human() && self.settings.show_helpers && !self.settings.check_mode {
            println!("{}", colorprint::format_possible_moves(board, &moves));
        }

        let chosen_move = self.choose_move(&moves, rng, input)?;
        board.place_disk(chosen_move)?;
        if !self.settings.check_mode {
            colorprint::print_score(board);
        }
        self.rounds_played += 1;
        if !self.settings.test_mode {
            thread::sleep(Duration::from_secs(1));
        }
        Ok(Some(chosen_move.log_entry()))
    }

    /// Pick one of the legal `moves`, which must not be empty.
    pub fn choose_move<'a, R: Rng, I: BufRead>(
        &self,
        moves: &'a [Move],
        rng: &mut R,
        input: &mut I,
    ) -> Result<&'a Move, GameError> {
        match self.player_type {
            PlayerType::Human => self.human_move(moves, input),
            PlayerType::Computer => self.computer_move(moves, rng),
        }
    }

    /// Reset status for a new game.
    pub fn reset(&mut self) {
        self.can_play = true;
        self.rounds_played = 0;
    }

    #[inline]
    pub fn disk(&self) -> Disk {
        self.disk
    }

    #[inline]
    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    pub fn human(&self) -> bool {
        self.player_type == PlayerType::Human
    }

    pub fn computer(&self) -> bool {
        self.player_type == PlayerType::Computer
    }

    pub fn set_player_type(&mut self, player_type: PlayerType) {
        self.player_type = player_type;
    }

    pub fn set_human(&mut self) {
        self.set_player_type(PlayerType::Human);
    }

    pub fn set_computer(&mut self) {
        self.set_player_type(PlayerType::Computer);
    }

    /// Test mode always takes the best ranked move, otherwise a random one.
    fn computer_move<'a, R: Rng>(
        &self,
        moves: &'a [Move],
        rng: &mut R,
    ) -> Result<&'a Move, GameError> {
        if !self.settings.check_mode {
            println!("  Computer plays...");
        }
        let picked = if self.settings.test_mode {
            moves.first()
        } else {
            // Pause a bit so the move is visible
            thread::sleep(Duration::from_millis(rng.gen_range(1000..2000)));
            moves.choose(rng)
        };
        let chosen_move = picked.ok_or(GameError::NoMoves)?;

        debug!("computer {} chose {}", self.disk, chosen_move.square);
        if !self.settings.check_mode {
            println!("  {} -> {}", chosen_move.square, chosen_move.value);
        }
        Ok(chosen_move)
    }

    /// Keep asking for a square until it matches one of the legal moves.
    fn human_move<'a, I: BufRead>(
        &self,
        moves: &'a [Move],
        input: &mut I,
    ) -> Result<&'a Move, GameError> {
        if moves.is_empty() {
            return Err(GameError::NoMoves);
        }
        loop {
            let square = Self::read_square(input)?;
            if let Some(valid_move) = moves.iter().find(|m| m.square == square) {
                return Ok(valid_move);
            }
            print_error(&format!(
                "  Can't place a {} disk in square {}!",
                colorprint::colored_name(self.disk),
                square
            ));
        }
    }

    /// Ask for square coordinates until the input parses.
    fn read_square<I: BufRead>(input: &mut I) -> Result<Square, GameError> {
        loop {
            print!("  Give disk position (x,y): ");
            io::stdout().flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }
            match line.parse::<Square>() {
                Ok(square) => return Ok(square),
                Err(_) => print_error("  Give coordinates in the form 'x,y'!"),
            }
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::black(PlayerSettings::default())
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | Moves: {}",
            colorprint::colored_name(self.disk),
            self.player_type,
            self.rounds_played
        )
    }
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "Human   "),
            Self::Computer => write!(f, "Computer"),
        }
    }
}
