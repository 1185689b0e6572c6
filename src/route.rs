//! `POST /start` request handling, independent of any HTTP server
//!
//! The handler maps a JSON body to a status code and a JSON response body so
//! a transport only has to copy both onto the wire.

use crate::game::{GameService, ValidationResult, GAME_NOT_CREATED_MESSAGE, INVALID_DIFFICULTY_MESSAGE};
use log::{error, warn};
use rand::Rng;
use serde::Serialize;
use serde_json::{json, Value};

pub const STATUS_OK: u16 = 200;
pub const STATUS_NOT_FOUND: u16 = 404;

/// Key holding the level selector in a start request
pub const LEVEL_KEY: &str = "level";

/// Body of a start request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartRequest {
    /// Raw level selector, kept untyped so validation sees exactly what was sent
    pub level: Option<Value>,
    /// Keys other than `level` found in the body
    pub unknown_keys: Vec<String>,
}

impl StartRequest {
    /// Parse a request body
    ///
    /// Only a JSON object is a request. Arrays, scalars and malformed text
    /// carry no level.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(mut fields)) => {
                let level = fields.remove(LEVEL_KEY).filter(|v| !v.is_null());
                StartRequest {
                    level,
                    unknown_keys: fields.into_iter().map(|(key, _)| key).collect(),
                }
            }
            _ => StartRequest::default(),
        }
    }
}

/// Status code and JSON body produced for a start request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    pub status: u16,
    pub body: Value,
}

impl RouteResponse {
    fn not_found(message: &str) -> Self {
        RouteResponse {
            status: STATUS_NOT_FOUND,
            body: json!({ "error": message }),
        }
    }

    /// Success returns the whole result, failure only `{"error": message}`
    pub fn from_result<T: Serialize>(result: &ValidationResult<T>) -> Self {
        match result {
            ValidationResult::Valid { .. } => match serde_json::to_value(result) {
                Ok(body) => RouteResponse {
                    status: STATUS_OK,
                    body,
                },
                Err(e) => {
                    error!("Could not serialize start response: {e}");
                    Self::not_found(GAME_NOT_CREATED_MESSAGE)
                }
            },
            ValidationResult::Invalid { message } => Self::not_found(message),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// 404 response for a request carrying keys besides `level`
///
/// Such bodies are rejected like an invalid level.
pub fn reject_unknown_keys(request: &StartRequest) -> Option<RouteResponse> {
    if request.unknown_keys.is_empty() {
        return None;
    }
    warn!("Start request rejected, unexpected keys: {:?}", request.unknown_keys);
    Some(RouteResponse::not_found(INVALID_DIFFICULTY_MESSAGE))
}

/// Handle a start request with the given service
pub fn handle_start<R: Rng>(service: &mut GameService<R>, body: &str) -> RouteResponse {
    let request = StartRequest::from_body(body);
    if let Some(rejected) = reject_unknown_keys(&request) {
        return rejected;
    }
    let result = service.start_new_game(request.level.as_ref());
    RouteResponse::from_result(&result)
}
