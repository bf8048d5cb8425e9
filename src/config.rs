//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::games::tictactoe::Mark;

/// Which side takes the first move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human moves first.
    Human,
    /// The computer moves first.
    Ai,
}

impl FirstPlayer {
    /// The mark that opens the game.
    pub fn mark(self) -> Mark {
        match self {
            Self::Human => Mark::Human,
            Self::Ai => Mark::Ai,
        }
    }

    /// Maps the answer to the "first or second" prompt.
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(Self::Human),
            "2" => Some(Self::Ai),
            _ => None,
        }
    }
}

/// How the console is cleared between turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearScreen {
    /// Use the clear command registered for the host platform.
    #[default]
    Auto,
    /// Write terminal escape sequences instead of spawning a command.
    Ansi,
}

/// Settings for one run of the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Side that moves first; asked interactively when unset.
    #[serde(default)]
    first_player: Option<FirstPlayer>,

    /// Enables alpha-beta pruning in the computer's search.
    #[serde(default)]
    pruning: bool,

    /// Screen clearing strategy.
    #[serde(default)]
    clear_screen: ClearScreen,

    /// File receiving tracing output; no logging when unset.
    #[serde(default)]
    log_file: Option<PathBuf>,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: None,
            pruning: false,
            clear_screen: ClearScreen::default(),
            log_file: None,
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            first_player = ?config.first_player,
            pruning = config.pruning,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Sets the side that moves first.
    pub fn with_first_player(mut self, first_player: FirstPlayer) -> Self {
        self.first_player = Some(first_player);
        self
    }

    /// Enables or disables pruning.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Sends tracing output to `log_file`.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = Some(log_file);
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert!(!config.pruning());
        assert_eq!(*config.clear_screen(), ClearScreen::Auto);
    }

    #[test]
    fn test_first_player_answers() {
        assert_eq!(FirstPlayer::from_answer("1\n"), Some(FirstPlayer::Human));
        assert_eq!(FirstPlayer::from_answer(" 2 "), Some(FirstPlayer::Ai));
        assert_eq!(FirstPlayer::from_answer("3"), None);
        assert_eq!(FirstPlayer::from_answer("first"), None);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<GameConfig, _> = toml::from_str("difficulty = \"hard\"");
        assert!(result.is_err());
    }
}
