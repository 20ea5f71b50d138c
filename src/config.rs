//! Runtime configuration, read from the environment.
//!
//! | Variable                  | Meaning                                    | Default |
//! |---------------------------|--------------------------------------------|---------|
//! | `TURN_TETRIS_BOARD_SIZE`  | interior board size                        | 12      |
//! | `TURN_TETRIS_SEED`        | fixed seed, makes piece order reproducible | random  |
//! | `TURN_TETRIS_NO_CLEAR`    | `1`/`true`: append frames, never clear     | off     |
//!
//! Logging is configured separately through `RUST_LOG`.

use thiserror::Error;

use crate::types::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

pub const ENV_BOARD_SIZE: &str = "TURN_TETRIS_BOARD_SIZE";
pub const ENV_SEED: &str = "TURN_TETRIS_SEED";
pub const ENV_NO_CLEAR: &str = "TURN_TETRIS_NO_CLEAR";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a number")]
    NotANumber { var: &'static str, value: String },
    #[error("board size {size} is outside {min}..={max}")]
    BoardSizeOutOfRange { size: usize, min: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    /// `None` draws pieces from OS entropy.
    pub seed: Option<u32>,
    pub clear_screen: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            seed: None,
            clear_screen: true,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset and blank values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let board_size = match get(ENV_BOARD_SIZE) {
            Some(raw) => parse_number(ENV_BOARD_SIZE, raw)?,
            None => DEFAULT_BOARD_SIZE,
        };
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(ConfigError::BoardSizeOutOfRange {
                size: board_size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }

        let seed = get(ENV_SEED)
            .map(|raw| parse_number(ENV_SEED, raw))
            .transpose()?;

        let clear_screen = !get(ENV_NO_CLEAR)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            board_size,
            seed,
            clear_screen,
        })
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.parse()
        .map_err(|_| ConfigError::NotANumber { var, value: raw })
}
