//! Outcome type shared by level validation and grid generation

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Player-facing message for a level outside the supported set
pub const INVALID_DIFFICULTY_MESSAGE: &str = "Invalid Difficulty level selected";

/// Player-facing message when a grid could not be generated
pub const GAME_NOT_CREATED_MESSAGE: &str = "Could not load the Game. Refresh to try again";

/// Either validated data, or a message explaining why there is none
///
/// The message on a valid result is informational only; branch on the
/// variant, never on the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult<T> {
    Valid { message: Option<String>, data: T },
    Invalid { message: String },
}

impl<T> ValidationResult<T> {
    pub fn valid(data: T) -> Self {
        ValidationResult::Valid {
            message: None,
            data,
        }
    }

    pub fn valid_with_message(message: impl Into<String>, data: T) -> Self {
        ValidationResult::Valid {
            message: Some(message.into()),
            data,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        ValidationResult::Invalid {
            message: message.into(),
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid { message, .. } => message.as_deref(),
            ValidationResult::Invalid { message } => Some(message),
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ValidationResult::Valid { data, .. } => Some(data),
            ValidationResult::Invalid { .. } => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            ValidationResult::Valid { data, .. } => Some(data),
            ValidationResult::Invalid { .. } => None,
        }
    }
}

/// Serialized as `{"isValid": bool, "message"?: string, "data"?: T}`
impl<T: Serialize> Serialize for ValidationResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ValidationResult::Valid { message, data } => {
                let len = if message.is_some() { 3 } else { 2 };
                let mut state = serializer.serialize_struct("ValidationResult", len)?;
                state.serialize_field("isValid", &true)?;
                if let Some(message) = message {
                    state.serialize_field("message", message)?;
                }
                state.serialize_field("data", data)?;
                state.end()
            }
            ValidationResult::Invalid { message } => {
                let mut state = serializer.serialize_struct("ValidationResult", 2)?;
                state.serialize_field("isValid", &false)?;
                state.serialize_field("message", message)?;
                state.end()
            }
        }
    }
}
