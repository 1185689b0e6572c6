//! Game orchestration: level validation through to a finished grid

use crate::color::build_color_set;
use crate::config::{DifficultyLevel, GameConfig};
use crate::error::{GridError, Result};
use crate::grid::{compose_grid, Grid};
use crate::random::seeded_rng;
use log::{debug, error};
use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;
use serde_json::Value;

use super::resolver::validate_difficulty;
use super::validation::{ValidationResult, GAME_NOT_CREATED_MESSAGE};

/// Color sets drawn per request before generation gives up
///
/// A draw is discarded only when rounding leaves the last color without a
/// cell, which a handful of redraws resolves in practice.
pub const MAX_COLOR_SET_ATTEMPTS: usize = 64;

/// Grid generator bound to one configuration and one random source
///
/// A service owns its generator, so concurrent callers each build their own.
pub struct GameService<R: Rng = ThreadRng> {
    config: GameConfig,
    rng: R,
}

impl GameService<ThreadRng> {
    /// Service drawing from the thread-local generator
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl GameService<StdRng> {
    /// Reproducible service: the same seed yields the same grids
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, seeded_rng(seed))
    }
}

impl<R: Rng> GameService<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Validate the requested level and generate its grid
    ///
    /// An invalid level is passed through untouched. A generation failure is
    /// logged and reported with a retry hint instead of a grid.
    pub fn start_new_game(&mut self, requested: Option<&Value>) -> ValidationResult<Grid> {
        let level = match validate_difficulty(requested) {
            ValidationResult::Valid { data, message } => {
                if let Some(message) = message {
                    debug!("{message}");
                }
                data
            }
            ValidationResult::Invalid { message } => return ValidationResult::Invalid { message },
        };

        match self.create_grid_for_level(level) {
            Ok(grid) => ValidationResult::valid(grid),
            Err(e) => {
                error!("Could not create {level} grid: {e}");
                ValidationResult::invalid(GAME_NOT_CREATED_MESSAGE)
            }
        }
    }

    /// Generate a grid for an already validated level
    pub fn create_grid_for_level(&mut self, level: DifficultyLevel) -> Result<Grid> {
        let settings = *self.config.level(level);
        let mut last_err = GridError::EmptyColorSet;

        for attempt in 1..=MAX_COLOR_SET_ATTEMPTS {
            let colors = build_color_set(&mut self.rng, settings.color_count, &self.config)?;
            match compose_grid(&mut self.rng, &colors, settings.grid_size) {
                Ok(grid) => return Ok(grid),
                Err(e @ GridError::QuotaUnderflow { .. }) => {
                    debug!("Redrawing color set for {level} (attempt {attempt}): {e}");
                    last_err = e;
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_err)
    }
}
