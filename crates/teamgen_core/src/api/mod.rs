//! JSON API surface.
//!
//! String-in/string-out endpoints a transport layer (HTTP, CLI, embedding)
//! can marshal directly. Every response is an [`ApiResponse`] envelope; the
//! flow is always parse, validate, execute, wrap.

pub mod gateway;
pub mod limiter;
pub mod player_json;
pub mod team_json;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

pub use gateway::ApiGateway;
pub use limiter::RateLimiter;
pub use player_json::{
    create_player_json, delete_player_json, get_player_json, list_players_json,
    players_by_position_json, update_player_json,
};
pub use team_json::{
    delete_team_json, get_team_json, list_teams_json, process_team_json, select_players_json,
};

/// API version for schema compatibility.
pub const API_VERSION: &str = "v1";

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

/// Structured API error with a stable code and optional details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub details: Option<HashMap<String, serde_json::Value>>,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self { code: code.to_string(), message: message.to_string(), details: None }
    }

    pub fn with_details(
        code: &str,
        message: &str,
        details: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self { code: code.to_string(), message: message.to_string(), details: Some(details) }
    }

    pub fn from_engine_error(error: &EngineError) -> Self {
        let code = match error {
            EngineError::Validation(_) => "VALIDATION_FAILED",
            EngineError::NoAvailablePlayer { .. } => "NO_AVAILABLE_PLAYER",
            EngineError::InsufficientPlayers { .. } => "INSUFFICIENT_PLAYERS",
            EngineError::Persistence(_) => "PERSISTENCE_FAILED",
            EngineError::NotFound(_) => "NOT_FOUND",
            EngineError::Serialization(_) => "INVALID_JSON",
        };
        Self::new(code, &error.to_string())
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Serialize an envelope, falling back to an empty object if even that fails.
pub(crate) fn to_json<T: Serialize>(response: &ApiResponse<T>) -> String {
    serde_json::to_string(response).unwrap_or_else(|_| "{}".to_string())
}

/// Shorthand for the error-envelope-to-string path every endpoint shares.
pub(crate) fn error_json<T: Serialize>(error: ApiError) -> String {
    to_json(&ApiResponse::<T>::error(error))
}
