//! Structural request validation.
//!
//! Fail-fast: the first violation in input order is reported and no selection
//! work happens.

use std::collections::HashSet;

use crate::error::{EngineError, Result};

use super::{PositionRequirement, TeamRequest};

pub fn validate_team_request(request: &TeamRequest) -> Result<()> {
    if request.required_positions.is_empty() {
        return Err(EngineError::Validation(
            "Required positions must be specified".to_string(),
        ));
    }

    for slot in &request.required_positions {
        if slot.position.trim().is_empty() {
            return Err(EngineError::Validation("Position name cannot be empty".to_string()));
        }
        if slot.skills.is_empty() {
            return Err(EngineError::Validation(format!(
                "Skills must be specified for position {}",
                slot.position
            )));
        }
    }

    Ok(())
}

pub fn validate_batch_request(requirements: &[PositionRequirement]) -> Result<()> {
    if requirements.is_empty() {
        return Err(EngineError::Validation("Requirements must be specified".to_string()));
    }

    let mut seen = HashSet::new();
    for requirement in requirements {
        if requirement.position.trim().is_empty() {
            return Err(EngineError::Validation("Position name cannot be empty".to_string()));
        }
        if requirement.main_skill.trim().is_empty() {
            return Err(EngineError::Validation(format!(
                "Main skill cannot be empty for position {}",
                requirement.position
            )));
        }
        if requirement.number_of_players <= 0 {
            return Err(EngineError::Validation(format!(
                "Number of players must be at least 1 for position {}",
                requirement.position
            )));
        }

        let key = format!(
            "{}_{}",
            requirement.position.trim().to_lowercase(),
            requirement.main_skill.trim().to_lowercase()
        );
        if !seen.insert(key) {
            return Err(EngineError::Validation(format!(
                "Duplicate requirement for position {} with skill {}",
                requirement.position, requirement.main_skill
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::PositionSlots;

    fn requirement(position: &str, skill: &str, count: i64) -> PositionRequirement {
        PositionRequirement {
            position: position.to_string(),
            main_skill: skill.to_string(),
            number_of_players: count,
        }
    }

    #[test]
    fn empty_team_request_is_rejected() {
        let request = TeamRequest { required_positions: vec![] };
        assert!(validate_team_request(&request).is_err());
    }

    #[test]
    fn blank_position_is_rejected() {
        let request = TeamRequest {
            required_positions: vec![PositionSlots {
                position: "   ".to_string(),
                skills: vec!["attack".to_string()],
            }],
        };
        assert!(validate_team_request(&request).is_err());
    }

    #[test]
    fn empty_skill_list_names_the_position() {
        let request = TeamRequest {
            required_positions: vec![PositionSlots {
                position: "forward".to_string(),
                skills: vec![],
            }],
        };
        let err = validate_team_request(&request).unwrap_err();
        assert!(err.to_string().contains("forward"));
    }

    #[test]
    fn blank_slot_skill_is_structurally_fine() {
        // A skill nobody has ranks everyone at 0; that is a selection concern,
        // not a request-shape one. Blank names fall in the same bucket.
        let request = TeamRequest {
            required_positions: vec![PositionSlots {
                position: "forward".to_string(),
                skills: vec!["   ".to_string()],
            }],
        };
        assert!(validate_team_request(&request).is_ok());
    }

    #[test]
    fn batch_rejects_non_positive_count() {
        assert!(validate_batch_request(&[requirement("forward", "attack", 0)]).is_err());
        assert!(validate_batch_request(&[requirement("forward", "attack", -3)]).is_err());
        assert!(validate_batch_request(&[requirement("forward", "attack", 1)]).is_ok());
    }

    #[test]
    fn duplicate_combination_is_rejected_case_insensitively() {
        let reqs =
            [requirement("Forward", "Attack", 1), requirement("forward", "attack", 2)];
        let err = validate_batch_request(&reqs).unwrap_err();
        assert!(err.to_string().to_lowercase().contains("duplicate"));
    }

    #[test]
    fn same_position_different_skill_is_allowed() {
        let reqs =
            [requirement("forward", "attack", 1), requirement("forward", "speed", 1)];
        assert!(validate_batch_request(&reqs).is_ok());
    }

    #[test]
    fn first_violation_wins() {
        // Second entry has two problems; the blank skill comes first in order.
        let reqs =
            [requirement("forward", "attack", 1), requirement("defender", "", 0)];
        let err = validate_batch_request(&reqs).unwrap_err();
        assert!(err.to_string().contains("Main skill"));
    }
}
