//! Candidate ranking: best-first ordering for a target skill.
//!
//! Primary key is the target-skill value (a missing skill counts as 0); ties
//! break on the descending mean of all the player's skills, rewarding
//! well-rounded players. Beyond that the sort is stable, so roster insertion
//! order decides and repeated runs agree.

use std::cmp::Ordering;

use crate::models::Player;

/// Best-first comparator for a target skill.
pub fn compare_for_skill(a: &Player, b: &Player, skill: &str) -> Ordering {
    b.skill_value(skill).cmp(&a.skill_value(skill)).then_with(|| {
        b.skill_average().partial_cmp(&a.skill_average()).unwrap_or(Ordering::Equal)
    })
}

/// Order a pool best-first for `skill`, keeping only players in `position`.
pub fn rank_by_skill(pool: &[Player], position: &str, skill: &str) -> Vec<Player> {
    let mut candidates: Vec<Player> =
        pool.iter().filter(|p| p.plays_position(position)).cloned().collect();
    candidates.sort_by(|a, b| compare_for_skill(a, b, skill));
    candidates
}

/// Fallback ordering when no candidate carries the requested skill: rank each
/// player by their own single highest skill value, descending.
pub fn rank_by_best_skill(pool: &[Player], position: &str) -> Vec<Player> {
    let mut candidates: Vec<Player> =
        pool.iter().filter(|p| p.plays_position(position)).cloned().collect();
    candidates.sort_by(|a, b| {
        b.max_skill_value().cmp(&a.max_skill_value()).then_with(|| {
            b.skill_average().partial_cmp(&a.skill_average()).unwrap_or(Ordering::Equal)
        })
    });
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Skill;

    fn forward(name: &str, skills: &[(&str, u8)]) -> Player {
        Player::new(
            name,
            "forward",
            skills.iter().map(|(n, v)| Skill::new(n, *v)).collect(),
        )
    }

    #[test]
    fn higher_target_skill_wins() {
        let pool = vec![
            forward("A", &[("attack", 85)]),
            forward("B", &[("attack", 92)]),
        ];
        let ranked = rank_by_skill(&pool, "forward", "attack");
        assert_eq!(ranked[0].name, "B");
    }

    #[test]
    fn tie_breaks_on_skill_average() {
        // Both tied at speed 90; averages 87.5 vs 90.
        let pool = vec![
            forward("LowAvg", &[("speed", 90), ("attack", 85)]),
            forward("HighAvg", &[("speed", 90), ("attack", 90)]),
        ];
        let ranked = rank_by_skill(&pool, "forward", "speed");
        assert_eq!(ranked[0].name, "HighAvg");
    }

    #[test]
    fn missing_target_skill_ranks_as_zero() {
        let pool = vec![
            forward("NoAttack", &[("speed", 99)]),
            forward("SomeAttack", &[("attack", 10)]),
        ];
        let ranked = rank_by_skill(&pool, "forward", "attack");
        assert_eq!(ranked[0].name, "SomeAttack");
    }

    #[test]
    fn other_positions_are_filtered_out() {
        let mut pool = vec![forward("F", &[("speed", 80)])];
        pool.push(Player::new("M", "midfielder", vec![Skill::new("speed", 99)]));
        let ranked = rank_by_skill(&pool, "forward", "speed");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "F");
    }

    #[test]
    fn full_tie_keeps_input_order() {
        let pool = vec![
            forward("First", &[("speed", 90)]),
            forward("Second", &[("speed", 90)]),
        ];
        let ranked = rank_by_skill(&pool, "forward", "speed");
        assert_eq!(ranked[0].name, "First");
        assert_eq!(ranked[1].name, "Second");
    }

    #[test]
    fn best_skill_fallback_orders_by_personal_maximum() {
        let pool = vec![
            forward("Mid", &[("dribbling", 70)]),
            forward("Top", &[("stamina", 95)]),
            forward("NoSkills", &[]),
        ];
        let ranked = rank_by_best_skill(&pool, "forward");
        assert_eq!(ranked[0].name, "Top");
        assert_eq!(ranked[1].name, "Mid");
        assert_eq!(ranked[2].name, "NoSkills");
    }
}
