//! Error types for the color grid core engine

use thiserror::Error;

/// Main error type for the color grid core engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Requested {requested} colors but the palette only holds {palette_size}")]
    PaletteTooSmall { requested: usize, palette_size: usize },

    #[error("Color set must contain at least one color")]
    EmptyColorSet,

    #[error("Weightage range is empty for color index {index}: [{min}, {max}]")]
    WeightageRange { index: usize, min: i32, max: i32 },

    #[error("Quota for color {color} fell to {quota}")]
    QuotaUnderflow { color: u32, quota: i64 },

    #[error("Quotas cover {assigned} cells but the grid has {cells}")]
    QuotaMismatch { assigned: usize, cells: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Generation task failed: {0}")]
    Task(String),
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::Deserialization(err.to_string())
    }
}

/// Result type alias for the color grid core engine
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GridError::PaletteTooSmall {
            requested: 6,
            palette_size: 5,
        };
        assert_eq!(
            err.to_string(),
            "Requested 6 colors but the palette only holds 5"
        );

        let err = GridError::QuotaUnderflow { color: 2, quota: -1 };
        assert_eq!(err.to_string(), "Quota for color 2 fell to -1");
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let converted: GridError = err.into();
        assert!(matches!(converted, GridError::Deserialization(_)));
    }
}
