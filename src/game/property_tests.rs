//! Property tests for game start
//!
//! Property 9: Valid levels always yield a complete grid
//! Property 10: Invalid levels never yield a grid

use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::HashSet;

use crate::config::{DifficultyLevel, GameConfig};
use crate::game::{GameService, ValidationResult, INVALID_DIFFICULTY_MESSAGE};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

/// Generate request values outside the supported level set
fn invalid_level_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        (i64::MIN..0i64).prop_map(|v| json!(v)),
        (3..=i64::MAX).prop_map(|v| json!(v)),
        (0u32..2).prop_map(|v| json!(v as f64 + 0.5)),
        "[a-zA-Z]{1,8}".prop_map(Value::String),
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Null),
        Just(json!([0])),
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Property 9: size, cell count and color count follow the level table
    #[test]
    fn prop_valid_levels_generate(
        seed in any::<u64>(),
        index in 0..=2i64
    ) {
        let config = GameConfig::default();
        let level = DifficultyLevel::from_index(index).unwrap();
        let settings = *config.level(level);
        let mut service = GameService::seeded(config, seed);

        let result = service.start_new_game(Some(&json!(index)));
        prop_assert!(result.is_valid(), "level {} failed: {:?}", index, result.message());
        let grid = result.into_data().unwrap();

        prop_assert_eq!(grid.size, settings.grid_size);
        prop_assert_eq!(grid.matrix.len(), settings.grid_size * settings.grid_size);
        let distinct: HashSet<u32> = grid.matrix.iter().copied().collect();
        prop_assert_eq!(distinct.len(), settings.color_count);
    }

    /// Property 10: rejection carries the fixed message and no data
    #[test]
    fn prop_invalid_levels_rejected(
        seed in any::<u64>(),
        raw in invalid_level_strategy()
    ) {
        let mut service = GameService::seeded(GameConfig::default(), seed);
        let result = service.start_new_game(Some(&raw));
        prop_assert_eq!(result, ValidationResult::invalid(INVALID_DIFFICULTY_MESSAGE));
    }
}
