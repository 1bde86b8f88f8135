//! In-memory roster store.
//!
//! Holds the player roster and persisted teams behind a single `RwLock`, so
//! concurrent readers are fine and a team commit is one atomic write. The
//! allocation engine only ever needs `find_by_position` and `create_team`;
//! the rest serves the player/team CRUD surface.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::models::{Player, PlayerValidator, Skill, Team};

/// Wire/file shape for loading players into a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Default)]
struct RosterState {
    players: Vec<Player>,
    teams: Vec<Team>,
}

/// Keyed collection of players and teams.
///
/// Insertion order of players is preserved; ranking relies on that for its
/// stable tie behavior.
#[derive(Debug, Default)]
pub struct RosterStore {
    inner: RwLock<RosterState>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from validated records, e.g. a roster file.
    pub fn from_records(records: &[PlayerRecord]) -> Result<Self> {
        let store = Self::new();
        for record in records {
            store.add_player_record(record)?;
        }
        Ok(store)
    }

    /// Validate a record and add it as a new player.
    pub fn add_player_record(&self, record: &PlayerRecord) -> Result<Player> {
        PlayerValidator::validate_name(&record.name)?;
        PlayerValidator::validate_position(&record.position)?;
        for skill in &record.skills {
            PlayerValidator::validate_skill(&skill.name, skill.value)?;
        }
        let skills =
            record.skills.iter().map(|s| Skill::new(&s.name, s.value as u8)).collect();
        let player = Player::new(&record.name, &record.position, skills);
        let mut state = self.write()?;
        state.players.push(player.clone());
        Ok(player)
    }

    /// Full replacement update, mirroring the creation validation.
    pub fn update_player(&self, id: &str, record: &PlayerRecord) -> Result<Player> {
        PlayerValidator::validate_name(&record.name)?;
        PlayerValidator::validate_position(&record.position)?;
        for skill in &record.skills {
            PlayerValidator::validate_skill(&skill.name, skill.value)?;
        }
        let skills: Vec<Skill> =
            record.skills.iter().map(|s| Skill::new(&s.name, s.value as u8)).collect();
        let mut state = self.write()?;
        let player = state
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| EngineError::NotFound(format!("player {}", id)))?;
        player.apply_update(&record.name, &record.position, skills);
        Ok(player.clone())
    }

    pub fn remove_player(&self, id: &str) -> Result<bool> {
        let mut state = self.write()?;
        let before = state.players.len();
        state.players.retain(|p| p.id != id);
        Ok(state.players.len() != before)
    }

    pub fn player(&self, id: &str) -> Result<Option<Player>> {
        let state = self.read()?;
        Ok(state.players.iter().find(|p| p.id == id).cloned())
    }

    pub fn all_players(&self) -> Result<Vec<Player>> {
        Ok(self.read()?.players.clone())
    }

    /// All players in a position, matched case-insensitively.
    pub fn find_by_position(&self, position: &str) -> Result<Vec<Player>> {
        let state = self.read()?;
        Ok(state.players.iter().filter(|p| p.plays_position(position)).cloned().collect())
    }

    /// Persist a new team in one atomic write and return it.
    pub fn create_team(&self, name: &str, members: Vec<Player>) -> Result<Team> {
        let team = Team::new(name, members);
        let mut state = self.write()?;
        state.teams.push(team.clone());
        Ok(team)
    }

    pub fn team(&self, id: &str) -> Result<Option<Team>> {
        let state = self.read()?;
        Ok(state.teams.iter().find(|t| t.id == id).cloned())
    }

    pub fn all_teams(&self) -> Result<Vec<Team>> {
        Ok(self.read()?.teams.clone())
    }

    pub fn remove_team(&self, id: &str) -> Result<bool> {
        let mut state = self.write()?;
        let before = state.teams.len();
        state.teams.retain(|t| t.id != id);
        Ok(state.teams.len() != before)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, RosterState>> {
        self.inner
            .read()
            .map_err(|_| EngineError::Persistence("roster store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, RosterState>> {
        self.inner
            .write()
            .map_err(|_| EngineError::Persistence("roster store lock poisoned".to_string()))
    }
}

/// Sample roster used by the CLI `seed` command and the demo flow.
pub fn demo_records() -> Vec<PlayerRecord> {
    fn record(name: &str, position: &str, skills: &[(&str, i64)]) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            position: position.to_string(),
            skills: skills
                .iter()
                .map(|(n, v)| SkillRecord { name: n.to_string(), value: *v })
                .collect(),
        }
    }

    vec![
        record("John Doe", "forward", &[("attack", 90), ("speed", 85), ("dribbling", 88)]),
        record("Alex Smith", "forward", &[("attack", 95), ("speed", 82), ("stamina", 78)]),
        record("Jane Wilson", "midfielder", &[("passing", 92), ("vision", 88), ("stamina", 85)]),
        record("Mike Brown", "midfielder", &[("passing", 90), ("vision", 94), ("attack", 75)]),
        record("Steve Johnson", "defender", &[("defense", 92), ("strength", 88), ("speed", 75)]),
        record("David Lee", "defender", &[("defense", 88), ("strength", 90), ("stamina", 82)]),
        record("Tim Clark", "goalkeeper", &[("reflexes", 93), ("handling", 89), ("defense", 85)]),
        record("Peter White", "goalkeeper", &[("reflexes", 90), ("handling", 92), ("defense", 82)]),
    ]
}

/// Convenience constructor for a store pre-loaded with the demo roster.
pub fn seeded_demo_store() -> Result<RosterStore> {
    RosterStore::from_records(&demo_records())
}
