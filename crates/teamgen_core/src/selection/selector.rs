//! Greedy, exclusivity-preserving selection over the roster store.

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{EngineError, Result};
use crate::models::{Player, Team};
use crate::store::RosterStore;

use super::{ranking, validate, ExclusivitySet, PositionRequirement, TeamRequest};

/// Orchestrates validation, ranking and exclusivity over one store.
///
/// Each call owns an independent [`ExclusivitySet`]; two selectors (or two
/// calls on one selector) may run concurrently and may pick overlapping
/// players, which is by the engine's contract.
pub struct Selector<'a> {
    store: &'a RosterStore,
}

impl<'a> Selector<'a> {
    pub fn new(store: &'a RosterStore) -> Self {
        Self { store }
    }

    /// Fill every (position, skill) slot with a distinct best player, then
    /// commit the team. Any unmet slot aborts the whole request; nothing is
    /// persisted on partial success.
    pub fn assemble_team(&self, request: &TeamRequest) -> Result<Team> {
        validate::validate_team_request(request)?;

        let mut chosen = ExclusivitySet::new();
        let mut picked: Vec<Player> = Vec::new();

        for slot in &request.required_positions {
            for skill in &slot.skills {
                let player = self.best_for_slot(&slot.position, skill, &chosen)?;
                debug!(
                    player = %player.name,
                    position = %slot.position,
                    skill = %skill,
                    "slot filled"
                );
                chosen.insert(&player.id);
                picked.push(player);
            }
        }

        let name = Team::generated_name(Utc::now());
        let committed = self.store.create_team(&name, picked)?;
        info!(team = %committed.name, members = committed.players.len(), "team persisted");

        // Re-read through the store so the caller sees exactly what was stored.
        self.store
            .team(&committed.id)?
            .ok_or_else(|| EngineError::Persistence(format!("team {} vanished after commit", committed.id)))
    }

    /// Select a batch of players per requirement, in order, without creating
    /// a team. The availability check runs against the full position pool
    /// before exclusion; only the pick itself skips already-chosen players.
    pub fn select_batch(&self, requirements: &[PositionRequirement]) -> Result<Vec<Player>> {
        validate::validate_batch_request(requirements)?;

        let mut chosen = ExclusivitySet::new();
        let mut selected: Vec<Player> = Vec::new();

        for requirement in requirements {
            let pool = self.store.find_by_position(&requirement.position)?;
            if (pool.len() as i64) < requirement.number_of_players {
                return Err(EngineError::InsufficientPlayers {
                    position: requirement.position.clone(),
                    requested: requirement.number_of_players,
                    available: pool.len(),
                });
            }

            let candidates: Vec<Player> =
                pool.into_iter().filter(|p| !chosen.contains(&p.id)).collect();

            let anyone_has_main_skill =
                candidates.iter().any(|p| p.has_skill(&requirement.main_skill));
            let ranked = if anyone_has_main_skill {
                ranking::rank_by_skill(&candidates, &requirement.position, &requirement.main_skill)
            } else {
                debug!(
                    position = %requirement.position,
                    skill = %requirement.main_skill,
                    "no candidate carries the main skill, falling back to best-skill ranking"
                );
                ranking::rank_by_best_skill(&candidates, &requirement.position)
            };

            for player in ranked.into_iter().take(requirement.number_of_players as usize) {
                chosen.insert(&player.id);
                selected.push(player);
            }
        }

        Ok(selected)
    }

    fn best_for_slot(
        &self,
        position: &str,
        skill: &str,
        chosen: &ExclusivitySet,
    ) -> Result<Player> {
        let pool = self.store.find_by_position(position)?;
        let available: Vec<Player> =
            pool.into_iter().filter(|p| !chosen.contains(&p.id)).collect();
        let ranked = ranking::rank_by_skill(&available, position, skill);
        ranked.into_iter().next().ok_or_else(|| EngineError::NoAvailablePlayer {
            position: position.to_string(),
            skill: skill.to_string(),
        })
    }
}
