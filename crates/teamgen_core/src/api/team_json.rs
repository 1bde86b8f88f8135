//! JSON endpoints for the two allocation operations and team queries.

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::models::{Player, Team};
use crate::selection::{PositionRequirement, PositionSlots, Selector, TeamRequest};
use crate::store::RosterStore;

use super::{error_json, to_json, ApiError, ApiResponse};

/// Positional-skill request: ordered positions, each with ordered skills.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamProcessRequest {
    pub schema_version: Option<String>,
    pub required_positions: Vec<PositionSlots>,
}

/// Requirement-batch request: ordered (position, main skill, count) triples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectPlayersRequest {
    pub schema_version: Option<String>,
    pub requirements: Vec<PositionRequirement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectPlayersResponse {
    pub players: Vec<Player>,
    pub total_selected: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamListResponse {
    pub teams: Vec<Team>,
    pub total: usize,
}

/// Assemble and persist a team from a JSON request string.
pub fn process_team_json(store: &RosterStore, request_json: &str) -> String {
    let request: TeamProcessRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse TeamProcessRequest: {}", e);
            return error_json::<Team>(ApiError::new(
                "INVALID_JSON",
                &format!("Invalid JSON format: {}", e),
            ));
        }
    };

    let team_request = TeamRequest { required_positions: request.required_positions };
    match Selector::new(store).assemble_team(&team_request) {
        Ok(team) => {
            info!("Assembled team {} with {} players", team.name, team.players.len());
            to_json(&ApiResponse::success(team))
        }
        Err(e) => {
            warn!("Team assembly failed: {}", e);
            error_json::<Team>(ApiError::from_engine_error(&e))
        }
    }
}

/// Select a batch of players from a JSON request string; persists nothing.
pub fn select_players_json(store: &RosterStore, request_json: &str) -> String {
    let request: SelectPlayersRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse SelectPlayersRequest: {}", e);
            return error_json::<SelectPlayersResponse>(ApiError::new(
                "INVALID_JSON",
                &format!("Invalid JSON format: {}", e),
            ));
        }
    };

    match Selector::new(store).select_batch(&request.requirements) {
        Ok(players) => {
            info!("Selected {} players for {} requirements", players.len(), request.requirements.len());
            let total_selected = players.len();
            to_json(&ApiResponse::success(SelectPlayersResponse { players, total_selected }))
        }
        Err(e) => {
            warn!("Batch selection failed: {}", e);
            error_json::<SelectPlayersResponse>(ApiError::from_engine_error(&e))
        }
    }
}

/// Fetch one persisted team by id.
pub fn get_team_json(store: &RosterStore, team_id: &str) -> String {
    match store.team(team_id) {
        Ok(Some(team)) => to_json(&ApiResponse::success(team)),
        Ok(None) => {
            error_json::<Team>(ApiError::new("NOT_FOUND", &format!("Not found: team {}", team_id)))
        }
        Err(e) => {
            error!("Team lookup failed: {}", e);
            error_json::<Team>(ApiError::from_engine_error(&e))
        }
    }
}

/// List all persisted teams.
pub fn list_teams_json(store: &RosterStore) -> String {
    match store.all_teams() {
        Ok(teams) => {
            let total = teams.len();
            to_json(&ApiResponse::success(TeamListResponse { teams, total }))
        }
        Err(e) => {
            error!("Team listing failed: {}", e);
            error_json::<TeamListResponse>(ApiError::from_engine_error(&e))
        }
    }
}

/// Remove a persisted team.
pub fn delete_team_json(store: &RosterStore, team_id: &str) -> String {
    match store.remove_team(team_id) {
        Ok(true) => {
            info!("Deleted team {}", team_id);
            to_json(&ApiResponse::success(true))
        }
        Ok(false) => {
            error_json::<bool>(ApiError::new("NOT_FOUND", &format!("Not found: team {}", team_id)))
        }
        Err(e) => {
            error!("Team deletion failed: {}", e);
            error_json::<bool>(ApiError::from_engine_error(&e))
        }
    }
}
