//! # teamgen_core - Roster Allocation Engine
//!
//! Assembles sports teams by picking the best available players for requested
//! positions and skills from a roster. The engine is greedy and
//! exclusivity-preserving: each request owns a private set of already-chosen
//! players, candidates are ranked by the target skill with a
//! skill-average tie-break, and the first unsatisfiable requirement aborts
//! the whole operation.
//!
//! ## Surface
//! - [`Selector`]: the two allocation operations (`assemble_team`,
//!   `select_batch`) over a [`RosterStore`].
//! - [`api`]: JSON string-in/string-out endpoints plus the [`ApiGateway`]
//!   that adds rate limiting and API-key checks for a transport layer.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod selection;
pub mod store;

pub use api::{ApiError, ApiGateway, ApiResponse, RateLimiter, API_VERSION};
pub use config::ApiSettings;
pub use error::{EngineError, Result};
pub use models::{Player, PlayerValidator, Skill, Team};
pub use selection::{ExclusivitySet, PositionRequirement, PositionSlots, Selector, TeamRequest};
pub use store::{demo_records, seeded_demo_store, PlayerRecord, RosterStore, SkillRecord};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_team_assembly() {
        let gateway = ApiGateway::new(seeded_demo_store().unwrap(), ApiSettings::default());

        let raw = gateway.process_team(
            "test",
            r#"{
                "required_positions": [
                    {"position": "forward", "skills": ["attack"]},
                    {"position": "midfielder", "skills": ["passing", "vision"]},
                    {"position": "goalkeeper", "skills": ["reflexes"]}
                ]
            }"#,
        );
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["success"], true);

        let members = value["data"]["players"].as_array().unwrap();
        assert_eq!(members.len(), 4);

        let names: Vec<&str> = members.iter().map(|p| p["name"].as_str().unwrap()).collect();
        // Best attack forward, both midfield specialists, best reflexes keeper.
        assert_eq!(names, ["Alex Smith", "Jane Wilson", "Mike Brown", "Tim Clark"]);
    }
}
