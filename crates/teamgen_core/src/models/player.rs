//! Player and skill domain model.
//!
//! Positions and skill names are case-insensitive everywhere in the engine.
//! Normalization (lower-casing) happens once, at construction, so the rest of
//! the code can compare strings directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;

/// A named attribute with an integer value on a 0-100 scale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub value: u8,
}

impl Skill {
    /// Build a skill with a normalized (lower-cased, trimmed) name.
    pub fn new(name: &str, value: u8) -> Self {
        Self { name: name.trim().to_lowercase(), value }
    }
}

/// A roster member with a position and a set of skills.
///
/// Invariant: `position` and every skill name are stored lower-cased, and a
/// player carries at most one value per skill name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: String,
    pub skills: Vec<Skill>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Player {
    /// Create a player with a fresh id, normalizing position and skill names.
    ///
    /// Duplicate skill names collapse to the last value given.
    pub fn new(name: &str, position: &str, skills: Vec<Skill>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            position: position.trim().to_lowercase(),
            skills: dedup_skills(skills),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace name, position and skills in place, renormalizing.
    pub fn apply_update(&mut self, name: &str, position: &str, skills: Vec<Skill>) {
        self.name = name.trim().to_string();
        self.position = position.trim().to_lowercase();
        self.skills = dedup_skills(skills);
        self.updated_at = Utc::now();
    }

    /// True when the player's position matches `position` case-insensitively.
    pub fn plays_position(&self, position: &str) -> bool {
        self.position == position.trim().to_lowercase()
    }

    /// Look up a skill value by name. A missing skill is worth 0.
    pub fn skill_value(&self, skill: &str) -> u8 {
        let wanted = skill.trim().to_lowercase();
        self.skills.iter().find(|s| s.name == wanted).map(|s| s.value).unwrap_or(0)
    }

    /// True when the player carries the named skill at all.
    pub fn has_skill(&self, skill: &str) -> bool {
        let wanted = skill.trim().to_lowercase();
        self.skills.iter().any(|s| s.name == wanted)
    }

    /// Mean of all skill values. A player with no skills averages 0.
    pub fn skill_average(&self) -> f64 {
        if self.skills.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.skills.iter().map(|s| s.value as u32).sum();
        sum as f64 / self.skills.len() as f64
    }

    /// The player's single highest skill value, 0 when skill-less.
    pub fn max_skill_value(&self) -> u8 {
        self.skills.iter().map(|s| s.value).max().unwrap_or(0)
    }
}

/// Last write wins for repeated skill names.
fn dedup_skills(skills: Vec<Skill>) -> Vec<Skill> {
    let mut out: Vec<Skill> = Vec::with_capacity(skills.len());
    for skill in skills {
        if let Some(existing) = out.iter_mut().find(|s| s.name == skill.name) {
            existing.value = skill.value;
        } else {
            out.push(skill);
        }
    }
    out
}

/// Static validation for player data arriving from outside.
pub struct PlayerValidator;

impl PlayerValidator {
    pub const MAX_NAME_LEN: usize = 100;
    pub const MAX_POSITION_LEN: usize = 50;
    pub const MAX_SKILL_VALUE: i64 = 100;

    pub fn validate_name(name: &str) -> Result<(), EngineError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(EngineError::Validation("Player name cannot be empty".to_string()));
        }
        if trimmed.chars().count() > Self::MAX_NAME_LEN {
            return Err(EngineError::Validation(format!(
                "Player name cannot exceed {} characters",
                Self::MAX_NAME_LEN
            )));
        }
        Ok(())
    }

    pub fn validate_position(position: &str) -> Result<(), EngineError> {
        let trimmed = position.trim();
        if trimmed.is_empty() {
            return Err(EngineError::Validation("Position name cannot be empty".to_string()));
        }
        if trimmed.chars().count() > Self::MAX_POSITION_LEN {
            return Err(EngineError::Validation(format!(
                "Position name cannot exceed {} characters",
                Self::MAX_POSITION_LEN
            )));
        }
        Ok(())
    }

    /// Skill values arrive as wide integers from the wire; 0..=100 is legal.
    pub fn validate_skill(name: &str, value: i64) -> Result<(), EngineError> {
        if name.trim().is_empty() {
            return Err(EngineError::Validation("Skill name cannot be empty".to_string()));
        }
        if !(0..=Self::MAX_SKILL_VALUE).contains(&value) {
            return Err(EngineError::Validation(format!(
                "Invalid value {} for skill {}: must be between 0 and 100",
                value,
                name.trim()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward() -> Player {
        Player::new(
            "John Doe",
            "Forward",
            vec![Skill::new("Attack", 90), Skill::new("speed", 85)],
        )
    }

    #[test]
    fn position_and_skill_names_are_normalized() {
        let p = forward();
        assert_eq!(p.position, "forward");
        assert!(p.plays_position("FORWARD"));
        assert_eq!(p.skill_value("ATTACK"), 90);
    }

    #[test]
    fn missing_skill_is_zero() {
        let p = forward();
        assert_eq!(p.skill_value("stamina"), 0);
        assert!(!p.has_skill("stamina"));
    }

    #[test]
    fn skill_average_and_max() {
        let p = forward();
        assert_eq!(p.skill_average(), 87.5);
        assert_eq!(p.max_skill_value(), 90);

        let empty = Player::new("Nobody", "defender", vec![]);
        assert_eq!(empty.skill_average(), 0.0);
        assert_eq!(empty.max_skill_value(), 0);
    }

    #[test]
    fn duplicate_skill_names_collapse_to_last_value() {
        let p = Player::new(
            "Dup",
            "midfielder",
            vec![Skill::new("passing", 70), Skill::new("Passing", 88)],
        );
        assert_eq!(p.skills.len(), 1);
        assert_eq!(p.skill_value("passing"), 88);
    }

    #[test]
    fn validator_rejects_bad_input() {
        assert!(PlayerValidator::validate_name("  ").is_err());
        assert!(PlayerValidator::validate_position("").is_err());
        assert!(PlayerValidator::validate_skill("attack", 101).is_err());
        assert!(PlayerValidator::validate_skill("attack", -1).is_err());
        assert!(PlayerValidator::validate_skill("", 50).is_err());
        assert!(PlayerValidator::validate_skill("attack", 100).is_ok());
    }

    #[test]
    fn validator_counts_characters_not_bytes() {
        // 60 characters, 180 bytes in UTF-8.
        let name = "안".repeat(60);
        assert!(PlayerValidator::validate_name(&name).is_ok());
        assert!(PlayerValidator::validate_name(&"안".repeat(101)).is_err());
        assert!(PlayerValidator::validate_position(&"è".repeat(50)).is_ok());
    }
}
