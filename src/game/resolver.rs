//! Difficulty level validation

use crate::config::DifficultyLevel;
use log::error;
use serde_json::Value;

use super::validation::{ValidationResult, INVALID_DIFFICULTY_MESSAGE};

/// Informational message for an accepted level
pub fn selected_level_message(level: DifficultyLevel) -> String {
    format!("Selected level is : {}", level.name())
}

/// Operator diagnostic for a rejected level, `shown` being the value as received
pub fn invalid_difficulty_log(shown: &str) -> String {
    format!(
        "Difficulty level {shown} is invalid : Expected values are : Easy : {}, Medium : {}, Difficult : {}",
        DifficultyLevel::Easy.index(),
        DifficultyLevel::Medium.index(),
        DifficultyLevel::Difficult.index()
    )
}

/// Coerce a raw request value into an integer level index
///
/// Numbers and numeric strings are accepted as long as they are integral.
/// Missing values, booleans, null, arrays and objects are not.
pub fn parse_level(raw: Option<&Value>) -> Option<i64> {
    let number = match raw? {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            n.as_f64()?
        }
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if number.is_finite() && number.fract() == 0.0 && number.abs() <= i64::MAX as f64 {
        Some(number as i64)
    } else {
        None
    }
}

/// Validate a requested difficulty level
///
/// Level 0 is a valid selection; only a missing value counts as absent.
/// Rejections are logged with the raw value for operators while the caller
/// only sees the fixed player-facing message.
pub fn validate_difficulty(raw: Option<&Value>) -> ValidationResult<DifficultyLevel> {
    match parse_level(raw).and_then(DifficultyLevel::from_index) {
        Some(level) => ValidationResult::valid_with_message(selected_level_message(level), level),
        None => {
            let shown = raw.map_or_else(|| "undefined".to_string(), Value::to_string);
            error!("{}", invalid_difficulty_log(&shown));
            ValidationResult::invalid(INVALID_DIFFICULTY_MESSAGE)
        }
    }
}
