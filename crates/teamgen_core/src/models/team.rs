//! Team entity produced by the positional-skill allocation path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Player;

/// A persisted team. Only ever created after every requested slot was filled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub players: Vec<Player>,
    pub created_at: DateTime<Utc>,
}

impl Team {
    pub fn new(name: &str, players: Vec<Player>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            players,
            created_at: Utc::now(),
        }
    }

    /// Generated team name derived from the creation timestamp.
    pub fn generated_name(at: DateTime<Utc>) -> String {
        format!("Team_{}", at.format("%Y%m%d_%H%M%S"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn generated_name_uses_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 14, 30, 5).unwrap();
        assert_eq!(Team::generated_name(at), "Team_20240307_143005");
    }
}
