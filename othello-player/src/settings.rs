//! Game settings, built from the command line arguments.

use othello_engine::DEFAULT_BOARD_SIZE;
use std::fmt;

/// Game settings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Settings {
    pub board_size: usize,
    /// Computer plays both colors.
    pub autoplay_mode: bool,
    /// Only print the game log digest.
    pub check_mode: bool,
    pub show_helpers: bool,
    pub show_log: bool,
    /// Deterministic computer moves and no artificial delays.
    pub test_mode: bool,
    pub use_defaults: bool,
}

/// The subset of [`Settings`] a single player needs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlayerSettings {
    pub show_helpers: bool,
    pub check_mode: bool,
    pub test_mode: bool,
}

impl Settings {
    pub const fn to_player_settings(self) -> PlayerSettings {
        PlayerSettings {
            show_helpers: self.show_helpers,
            check_mode: self.check_mode,
            test_mode: self.test_mode,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            autoplay_mode: false,
            check_mode: false,
            show_helpers: true,
            show_log: false,
            test_mode: false,
            use_defaults: false,
        }
    }
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Settings::default().to_player_settings()
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Settings:")?;
        writeln!(f, "  board_size: {}", self.board_size)?;
        writeln!(f, "  autoplay: {}", self.autoplay_mode)?;
        writeln!(f, "  check_mode: {}", self.check_mode)?;
        writeln!(f, "  use_defaults: {}", self.use_defaults)?;
        writeln!(f, "  show_helpers: {}", self.show_helpers)?;
        writeln!(f, "  show_log: {}", self.show_log)?;
        write!(f, "  test_mode: {}", self.test_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.board_size, 8);
        assert!(settings.show_helpers);
        assert!(!settings.check_mode);
        assert_eq!(settings.to_player_settings(), PlayerSettings::default());
    }

    #[test]
    fn player_settings_follow_game_settings() {
        let settings = Settings {
            check_mode: true,
            test_mode: true,
            show_helpers: false,
            ..Settings::default()
        };
        assert_eq!(
            settings.to_player_settings(),
            PlayerSettings {
                show_helpers: false,
                check_mode: true,
                test_mode: true,
            }
        );
    }

    #[test]
    fn settings_to_str() {
        let text = Settings::default().to_string();
        assert!(text.starts_with("Settings:\n  board_size: 8\n"));
        assert!(text.ends_with("  test_mode: false"));
    }
}
