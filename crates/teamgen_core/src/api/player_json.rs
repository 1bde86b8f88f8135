//! JSON endpoints for player CRUD and position queries.

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::models::Player;
use crate::store::{PlayerRecord, RosterStore, SkillRecord};

use super::{error_json, to_json, ApiError, ApiResponse};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCreationRequest {
    pub schema_version: Option<String>,
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerUpdateRequest {
    pub schema_version: Option<String>,
    pub player_id: String,
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerListResponse {
    pub players: Vec<Player>,
    pub total: usize,
}

fn record_of(name: String, position: String, skills: Vec<SkillRecord>) -> PlayerRecord {
    PlayerRecord { name, position, skills }
}

/// Create a player from a JSON request string.
pub fn create_player_json(store: &RosterStore, request_json: &str) -> String {
    let request: PlayerCreationRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse PlayerCreationRequest: {}", e);
            return error_json::<Player>(ApiError::new(
                "INVALID_JSON",
                &format!("Invalid JSON format: {}", e),
            ));
        }
    };

    let record = record_of(request.name, request.position, request.skills);
    match store.add_player_record(&record) {
        Ok(player) => {
            info!("Created player {} ({})", player.name, player.id);
            to_json(&ApiResponse::success(player))
        }
        Err(e) => {
            warn!("Player creation rejected: {}", e);
            error_json::<Player>(ApiError::from_engine_error(&e))
        }
    }
}

/// Fetch one player by id.
pub fn get_player_json(store: &RosterStore, player_id: &str) -> String {
    match store.player(player_id) {
        Ok(Some(player)) => to_json(&ApiResponse::success(player)),
        Ok(None) => error_json::<Player>(ApiError::new(
            "NOT_FOUND",
            &format!("Not found: player {}", player_id),
        )),
        Err(e) => {
            error!("Player lookup failed: {}", e);
            error_json::<Player>(ApiError::from_engine_error(&e))
        }
    }
}

/// List the whole roster.
pub fn list_players_json(store: &RosterStore) -> String {
    match store.all_players() {
        Ok(players) => {
            let total = players.len();
            to_json(&ApiResponse::success(PlayerListResponse { players, total }))
        }
        Err(e) => {
            error!("Roster listing failed: {}", e);
            error_json::<PlayerListResponse>(ApiError::from_engine_error(&e))
        }
    }
}

/// List players in one position, matched case-insensitively.
pub fn players_by_position_json(store: &RosterStore, position: &str) -> String {
    match store.find_by_position(position) {
        Ok(players) => {
            let total = players.len();
            to_json(&ApiResponse::success(PlayerListResponse { players, total }))
        }
        Err(e) => {
            error!("Position query failed: {}", e);
            error_json::<PlayerListResponse>(ApiError::from_engine_error(&e))
        }
    }
}

/// Replace a player's name, position and skills from a JSON request string.
pub fn update_player_json(store: &RosterStore, request_json: &str) -> String {
    let request: PlayerUpdateRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse PlayerUpdateRequest: {}", e);
            return error_json::<Player>(ApiError::new(
                "INVALID_JSON",
                &format!("Invalid JSON format: {}", e),
            ));
        }
    };

    let record = record_of(request.name, request.position, request.skills);
    match store.update_player(&request.player_id, &record) {
        Ok(player) => {
            info!("Updated player {} ({})", player.name, player.id);
            to_json(&ApiResponse::success(player))
        }
        Err(e) => {
            warn!("Player update rejected: {}", e);
            error_json::<Player>(ApiError::from_engine_error(&e))
        }
    }
}

/// Remove a player from the roster.
pub fn delete_player_json(store: &RosterStore, player_id: &str) -> String {
    match store.remove_player(player_id) {
        Ok(true) => {
            info!("Deleted player {}", player_id);
            to_json(&ApiResponse::success(true))
        }
        Ok(false) => error_json::<bool>(ApiError::new(
            "NOT_FOUND",
            &format!("Not found: player {}", player_id),
        )),
        Err(e) => {
            error!("Player deletion failed: {}", e);
            error_json::<bool>(ApiError::from_engine_error(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seeded_demo_store;

    fn parse(raw: &str) -> serde_json::Value {
        serde_json::from_str(raw).expect("endpoint must return valid JSON")
    }

    #[test]
    fn create_then_get_round_trips() {
        let store = RosterStore::new();
        let raw = create_player_json(
            &store,
            r#"{"name": "New Guy", "position": "Forward", "skills": [{"name": "Attack", "value": 77}]}"#,
        );
        let value = parse(&raw);
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["position"], "forward");

        let id = value["data"]["id"].as_str().unwrap();
        let fetched = parse(&get_player_json(&store, id));
        assert_eq!(fetched["data"]["name"], "New Guy");
    }

    #[test]
    fn create_rejects_invalid_skill_value() {
        let store = RosterStore::new();
        let raw = create_player_json(
            &store,
            r#"{"name": "Bad", "position": "forward", "skills": [{"name": "attack", "value": 250}]}"#,
        );
        let value = parse(&raw);
        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["code"], "VALIDATION_FAILED");
    }

    #[test]
    fn malformed_json_is_reported_as_such() {
        let store = RosterStore::new();
        let value = parse(&create_player_json(&store, "{not json"));
        assert_eq!(value["error"]["code"], "INVALID_JSON");
    }

    #[test]
    fn position_listing_is_case_insensitive() {
        let store = seeded_demo_store().unwrap();
        let value = parse(&players_by_position_json(&store, "GOALKEEPER"));
        assert_eq!(value["data"]["total"], 2);
    }

    #[test]
    fn delete_missing_player_is_not_found() {
        let store = RosterStore::new();
        let value = parse(&delete_player_json(&store, "nope"));
        assert_eq!(value["error"]["code"], "NOT_FOUND");
    }
}
