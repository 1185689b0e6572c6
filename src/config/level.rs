//! Difficulty level and per-level grid settings

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty selector chosen by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Difficult,
}

impl DifficultyLevel {
    /// All levels, ordered by their wire index
    pub const ALL: [DifficultyLevel; 3] = [
        DifficultyLevel::Easy,
        DifficultyLevel::Medium,
        DifficultyLevel::Difficult,
    ];

    pub const MIN_INDEX: i64 = 0;
    pub const MAX_INDEX: i64 = 2;

    /// Map a wire index (0, 1, 2) to a level
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(DifficultyLevel::Easy),
            1 => Some(DifficultyLevel::Medium),
            2 => Some(DifficultyLevel::Difficult),
            _ => None,
        }
    }

    pub fn index(self) -> i64 {
        match self {
            DifficultyLevel::Easy => 0,
            DifficultyLevel::Medium => 1,
            DifficultyLevel::Difficult => 2,
        }
    }

    /// Display name used in player-facing messages
    pub fn name(self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "EASY",
            DifficultyLevel::Medium => "MEDIUM",
            DifficultyLevel::Difficult => "DIFFICULT",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Grid settings for a single difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Number of distinct colors placed in the grid
    pub color_count: usize,
}

impl LevelConfig {
    pub const fn new(grid_size: usize, color_count: usize) -> Self {
        Self {
            grid_size,
            color_count,
        }
    }

    /// Number of cells in the flattened grid
    #[inline]
    pub fn flat_size(&self) -> usize {
        self.grid_size * self.grid_size
    }
}

/// Level to settings mapping, one entry per [`DifficultyLevel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelTable {
    pub easy: LevelConfig,
    pub medium: LevelConfig,
    pub difficult: LevelConfig,
}

impl Default for LevelTable {
    fn default() -> Self {
        // Color counts are kept separate from grid sizes even though they match today
        Self {
            easy: LevelConfig::new(3, 3),
            medium: LevelConfig::new(4, 4),
            difficult: LevelConfig::new(5, 5),
        }
    }
}

impl LevelTable {
    pub fn get(&self, level: DifficultyLevel) -> &LevelConfig {
        match level {
            DifficultyLevel::Easy => &self.easy,
            DifficultyLevel::Medium => &self.medium,
            DifficultyLevel::Difficult => &self.difficult,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (DifficultyLevel, &LevelConfig)> + '_ {
        DifficultyLevel::ALL
            .into_iter()
            .map(move |level| (level, self.get(level)))
    }
}
