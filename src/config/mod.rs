//! Configuration module for grid generation
//!
//! Holds the level table and the two palette constants. A configuration is
//! validated once when loaded and treated as immutable afterwards.

mod level;

pub use level::*;

use crate::error::{GridError, Result};
use serde::{Deserialize, Serialize};

/// Number of color identifiers known to the system
pub const DEFAULT_PALETTE_SIZE: usize = 5;

/// Smallest share (in percent) any color in a grid may receive
pub const MINIMUM_COLOR_WEIGHTAGE: u32 = 5;

/// Total weightage split across the colors of one grid
pub const TOTAL_WEIGHTAGE: u32 = 100;

/// Game configuration consumed by the generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Colors are drawn from the identifiers `0..palette_size`
    pub palette_size: usize,
    pub minimum_weightage: u32,
    pub levels: LevelTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            palette_size: DEFAULT_PALETTE_SIZE,
            minimum_weightage: MINIMUM_COLOR_WEIGHTAGE,
            levels: LevelTable::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a configuration document
    /// Expected format: {"palette_size": 5, "minimum_weightage": 5, "levels": {"easy": {...}, ...}}
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Settings for a difficulty level
    #[inline]
    pub fn level(&self, level: DifficultyLevel) -> &LevelConfig {
        self.levels.get(level)
    }

    /// Check the invariants every generation run relies on
    ///
    /// A level passing here can always draw its distinct colors and every
    /// reserve-minimum weightage range is non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.palette_size == 0 {
            return Err(GridError::InvalidConfig(
                "palette_size must be at least 1".to_string(),
            ));
        }
        if self.minimum_weightage == 0 || self.minimum_weightage > TOTAL_WEIGHTAGE {
            return Err(GridError::InvalidConfig(format!(
                "minimum_weightage must be within [1, {}], got {}",
                TOTAL_WEIGHTAGE, self.minimum_weightage
            )));
        }

        for (level, settings) in self.levels.iter() {
            if settings.grid_size == 0 {
                return Err(GridError::InvalidConfig(format!(
                    "{level}: grid_size must be at least 1"
                )));
            }
            if settings.color_count == 0 {
                return Err(GridError::InvalidConfig(format!(
                    "{level}: color_count must be at least 1"
                )));
            }
            if settings.color_count > self.palette_size {
                return Err(GridError::InvalidConfig(format!(
                    "{level}: color_count {} exceeds palette_size {}",
                    settings.color_count, self.palette_size
                )));
            }
            if settings.color_count > settings.flat_size() {
                return Err(GridError::InvalidConfig(format!(
                    "{level}: {} colors cannot fit in {} cells",
                    settings.color_count,
                    settings.flat_size()
                )));
            }
            let reserved = self.minimum_weightage as usize * settings.color_count;
            if reserved > TOTAL_WEIGHTAGE as usize {
                return Err(GridError::InvalidConfig(format!(
                    "{level}: {} colors at minimum weightage {} exceed {}",
                    settings.color_count, self.minimum_weightage, TOTAL_WEIGHTAGE
                )));
            }
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
        assert!(config.validate().is_ok());
        assert_eq!(config.palette_size, 5);
        assert_eq!(config.minimum_weightage, 5);
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let config = GameConfig::from_json(r#"{"levels": {"easy": {"grid_size": 4, "color_count": 2}}}"#)
            .unwrap();
        assert_eq!(config.level(DifficultyLevel::Easy), &LevelConfig::new(4, 2));
        assert_eq!(config.level(DifficultyLevel::Medium), &LevelConfig::new(4, 4));
        assert_eq!(config.palette_size, DEFAULT_PALETTE_SIZE);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = GameConfig::from_json("{palette_size:").unwrap_err();
        assert!(matches!(err, GridError::Deserialization(_)));
    }

    #[test]
    fn test_color_count_above_palette_rejected() {
        let mut config = GameConfig::default();
        config.palette_size = 4;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, GridError::InvalidConfig(msg) if msg.contains("DIFFICULT")));
    }

    #[test]
    fn test_minimum_weightage_overflow_rejected() {
        let config = GameConfig {
            minimum_weightage: 30,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_more_colors_than_cells_rejected() {
        let mut config = GameConfig::default();
        config.levels.easy = LevelConfig::new(1, 3);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_grid_size_rejected() {
        let mut config = GameConfig::default();
        config.levels.medium = LevelConfig::new(0, 1);
        assert!(config.validate().is_err());
    }
}
