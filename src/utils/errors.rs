use thiserror::Error;

use crate::core::board::CELL_COUNT;

pub type GameResult<T> = Result<T, GameError>;

/// Rejection reasons for a single move. None of them touch engine state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("Cell index {index} is out of range (expected 0..{})", CELL_COUNT)]
    OutOfRange { index: usize },

    #[error("Cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("The game is over; reset to play again")]
    GameOver,
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Display error: {message}")]
    Display { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Config error: {0}")]
    Config(#[from] ::config::ConfigError),
}

impl GameError {
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn display<S: Into<String>>(message: S) -> Self {
        Self::Display {
            message: message.into(),
        }
    }
}

impl From<dialoguer::Error> for GameError {
    fn from(err: dialoguer::Error) -> Self {
        Self::display(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        assert_eq!(
            MoveError::OutOfRange { index: 9 }.to_string(),
            "Cell index 9 is out of range (expected 0..9)"
        );
        assert_eq!(
            MoveError::CellOccupied { index: 4 }.to_string(),
            "Cell 4 is already occupied"
        );
        assert_eq!(
            MoveError::GameOver.to_string(),
            "The game is over; reset to play again"
        );
    }

    #[test]
    fn test_configuration_error() {
        let error = GameError::configuration("Invalid logging level");
        assert!(matches!(error, GameError::Configuration { .. }));
        assert_eq!(error.to_string(), "Configuration error: Invalid logging level");
    }
}
