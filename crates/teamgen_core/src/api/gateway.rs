//! Front door for transports: rate limiting and API-key checks around the
//! JSON endpoints.
//!
//! A transport identifies each caller with an opaque key (an IP address, a
//! session id); every call is metered per caller and destructive calls
//! additionally require the configured API key.

use std::time::Duration;

use tracing::warn;

use crate::config::ApiSettings;
use crate::store::RosterStore;

use super::{error_json, limiter::RateLimiter, player_json, team_json, ApiError};

pub struct ApiGateway {
    store: RosterStore,
    settings: ApiSettings,
    limiter: RateLimiter,
}

impl ApiGateway {
    pub fn new(store: RosterStore, settings: ApiSettings) -> Self {
        let limiter = RateLimiter::new(
            settings.rate_limit_requests,
            Duration::from_secs(settings.rate_limit_window_secs.max(1)),
        );
        Self { store, settings, limiter }
    }

    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    /// Rate-limit gate shared by all endpoints. Returns a ready error
    /// response when the caller is over budget.
    fn metered(&self, caller: &str) -> Option<String> {
        if self.limiter.try_acquire(caller) {
            return None;
        }
        warn!("Rate limit exceeded for caller {}", caller);
        Some(error_json::<()>(ApiError::new(
            "RATE_LIMITED",
            "Too many requests. Please try again later.",
        )))
    }

    /// API-key gate for destructive endpoints. An empty configured key
    /// disables the check.
    fn authorized(&self, api_key: Option<&str>) -> Option<String> {
        if self.settings.api_key.is_empty() || api_key == Some(self.settings.api_key.as_str()) {
            return None;
        }
        warn!("Rejected destructive call with missing or wrong API key");
        Some(error_json::<()>(ApiError::new("UNAUTHORIZED", "A valid API key is required")))
    }

    // Allocation operations

    pub fn process_team(&self, caller: &str, request_json: &str) -> String {
        self.metered(caller)
            .unwrap_or_else(|| team_json::process_team_json(&self.store, request_json))
    }

    pub fn select_players(&self, caller: &str, request_json: &str) -> String {
        self.metered(caller)
            .unwrap_or_else(|| team_json::select_players_json(&self.store, request_json))
    }

    // Team queries

    pub fn get_team(&self, caller: &str, team_id: &str) -> String {
        self.metered(caller).unwrap_or_else(|| team_json::get_team_json(&self.store, team_id))
    }

    pub fn list_teams(&self, caller: &str) -> String {
        self.metered(caller).unwrap_or_else(|| team_json::list_teams_json(&self.store))
    }

    pub fn delete_team(&self, caller: &str, api_key: Option<&str>, team_id: &str) -> String {
        self.metered(caller)
            .or_else(|| self.authorized(api_key))
            .unwrap_or_else(|| team_json::delete_team_json(&self.store, team_id))
    }

    // Player CRUD

    pub fn create_player(&self, caller: &str, request_json: &str) -> String {
        self.metered(caller)
            .unwrap_or_else(|| player_json::create_player_json(&self.store, request_json))
    }

    pub fn get_player(&self, caller: &str, player_id: &str) -> String {
        self.metered(caller)
            .unwrap_or_else(|| player_json::get_player_json(&self.store, player_id))
    }

    pub fn list_players(&self, caller: &str) -> String {
        self.metered(caller).unwrap_or_else(|| player_json::list_players_json(&self.store))
    }

    pub fn players_by_position(&self, caller: &str, position: &str) -> String {
        self.metered(caller)
            .unwrap_or_else(|| player_json::players_by_position_json(&self.store, position))
    }

    pub fn update_player(&self, caller: &str, request_json: &str) -> String {
        self.metered(caller)
            .unwrap_or_else(|| player_json::update_player_json(&self.store, request_json))
    }

    pub fn delete_player(&self, caller: &str, api_key: Option<&str>, player_id: &str) -> String {
        self.metered(caller)
            .or_else(|| self.authorized(api_key))
            .unwrap_or_else(|| player_json::delete_player_json(&self.store, player_id))
    }
}
