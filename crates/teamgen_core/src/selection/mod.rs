//! Roster allocation engine.
//!
//! Two entry points share one greedy core: `Selector::assemble_team` fills
//! one (position, skill) slot at a time and commits a team, while
//! `Selector::select_batch` picks N players per requirement and persists
//! nothing. Both thread a request-scoped [`ExclusivitySet`] through the run
//! so no player is picked twice within one request.

pub mod exclusive;
pub mod ranking;
pub mod selector;
pub mod validate;


use serde::{Deserialize, Serialize};

pub use exclusive::ExclusivitySet;
pub use selector::Selector;

/// One position with the ordered skills to fill, one player per skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionSlots {
    pub position: String,
    pub skills: Vec<String>,
}

/// Positional-skill request: assigns one distinct player per
/// (position, skill) pair, in the order given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRequest {
    pub required_positions: Vec<PositionSlots>,
}

/// One batch requirement: N players for a position, ranked by a main skill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionRequirement {
    pub position: String,
    pub main_skill: String,
    pub number_of_players: i64,
}
