//! Color Grid Core - randomized color grid generator for memory-matching games
//!
//! A grid is built in three layers: distinct colors are drawn and given
//! weightages summing to 100, the weightages are turned into exact cell
//! quotas, and the cells are filled by random draw against those quotas.

pub mod color;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod random;
pub mod route;

use crate::config::GameConfig;
use crate::error::{GridError, Result};
use crate::game::{GameService, ValidationResult};
use crate::grid::Grid;
use log::info;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;

// ============================================================================
// Cached Configuration
// ============================================================================

/// Global cached configuration
static CACHED_CONFIG: OnceCell<Arc<RwLock<GameConfig>>> = OnceCell::new();

/// Install the process-wide configuration (call once at startup)
///
/// The configuration is validated first; an invalid one is rejected and the
/// previous configuration stays in place.
pub fn init_config(config: GameConfig) -> Result<()> {
    config.validate()?;
    info!(
        "Grid configuration loaded: palette {} colors, minimum weightage {}",
        config.palette_size, config.minimum_weightage
    );

    // If already initialized, update the config
    let cached = CACHED_CONFIG.get_or_init(|| Arc::new(RwLock::new(GameConfig::default())));
    *cached.write() = config;

    Ok(())
}

/// Check if config is initialized
pub fn is_config_initialized() -> bool {
    CACHED_CONFIG.get().is_some()
}

/// Snapshot of the active configuration, defaults when none was installed
pub fn current_config() -> GameConfig {
    CACHED_CONFIG
        .get()
        .map(|cached| cached.read().clone())
        .unwrap_or_default()
}

// ============================================================================
// Game Entry Points
// ============================================================================

/// Start a new game with the active configuration
///
/// # Arguments
/// * `requested` - Raw level selector from the request, `None` when missing
///
/// # Returns
/// The grid on success, otherwise the player-facing failure message
pub fn start_new_game(requested: Option<&Value>) -> ValidationResult<Grid> {
    GameService::new(current_config()).start_new_game(requested)
}

/// Start a new game from a fixed seed, for reproducible grids
pub fn start_new_game_seeded(requested: Option<&Value>, seed: u64) -> ValidationResult<Grid> {
    GameService::seeded(current_config(), seed).start_new_game(requested)
}

/// Start a new game on Tokio's blocking pool
///
/// Generation is CPU-bound, so it runs under `spawn_blocking` to keep the
/// calling runtime responsive.
///
/// # Errors
/// `GridError::Task` if the blocking task panicked or was cancelled
pub async fn start_new_game_async(requested: Option<Value>) -> Result<ValidationResult<Grid>> {
    let config = current_config();
    tokio::task::spawn_blocking(move || {
        GameService::new(config).start_new_game(requested.as_ref())
    })
    .await
    .map_err(|e| GridError::Task(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_start_new_game_with_default_config() {
        let result = start_new_game(Some(&json!(2)));
        let grid = result.into_data().unwrap();
        assert_eq!(grid.size, current_config().level(config::DifficultyLevel::Difficult).grid_size);
    }

    #[test]
    fn test_seeded_entry_point_repeats() {
        let a = start_new_game_seeded(Some(&json!(1)), 5);
        let b = start_new_game_seeded(Some(&json!(1)), 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_init_config_rejects_invalid() {
        let config = GameConfig {
            palette_size: 0,
            ..GameConfig::default()
        };
        assert!(init_config(config).is_err());
    }

    #[test]
    fn test_init_config_installs() {
        init_config(GameConfig::default()).unwrap();
        assert!(is_config_initialized());
        assert_eq!(current_config(), GameConfig::default());
    }

    #[tokio::test]
    async fn test_start_new_game_async() {
        let result = start_new_game_async(Some(json!(0))).await.unwrap();
        assert!(result.is_valid());
        assert_eq!(result.data().unwrap().matrix.len(), 9);

        let rejected = start_new_game_async(None).await.unwrap();
        assert_eq!(rejected.message(), Some(game::INVALID_DIFFICULTY_MESSAGE));
    }
}
