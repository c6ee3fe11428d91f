//! Engine construction parameters.

use thiserror::Error;

use crate::constants::{DEFAULT_HISTORY, DEFAULT_KOMI, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};

/// Errors raised when building a [`crate::game::Game`] from a bad configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("board size must be between {MIN_SIZE} and {MAX_SIZE} (got {0})")]
    InvalidSize(usize),

    #[error("history length must be at least 1")]
    InvalidHistory,

    #[error("komi must be a finite number (got {0})")]
    InvalidKomi(f32),
}

/// Board size, komi and history depth of a game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub size: usize,
    pub komi: f32,
    pub history_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            komi: DEFAULT_KOMI,
            history_length: DEFAULT_HISTORY,
        }
    }
}

impl GameConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_komi(mut self, komi: f32) -> Self {
        self.komi = komi;
        self
    }

    pub fn with_history_length(mut self, history_length: usize) -> Self {
        self.history_length = history_length;
        self
    }

    /// Check every parameter, failing on the first bad one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::InvalidSize(self.size));
        }
        if self.history_length == 0 {
            return Err(ConfigError::InvalidHistory);
        }
        if !self.komi.is_finite() {
            return Err(ConfigError::InvalidKomi(self.komi));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.size, 19);
        assert_eq!(config.komi, 7.5);
        assert_eq!(config.history_length, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_size() {
        for size in [0, 1, 4, 20, 100] {
            let config = GameConfig::default().with_size(size);
            assert_eq!(config.validate(), Err(ConfigError::InvalidSize(size)));
        }
        assert!(GameConfig::default().with_size(5).validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_history() {
        let config = GameConfig::default().with_history_length(0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidHistory));
    }

    #[test]
    fn test_rejects_nan_komi() {
        let config = GameConfig::default().with_komi(f32::NAN);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidKomi(_))));
    }

    #[test]
    fn test_error_message() {
        let err = GameConfig::default().with_size(3).validate().unwrap_err();
        assert_eq!(err.to_string(), "board size must be between 5 and 19 (got 3)");
    }
}
