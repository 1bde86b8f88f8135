//! Request-scoped record of players already committed to a run.

use std::collections::HashSet;

/// Set of player ids chosen so far during one allocation invocation.
///
/// Grows monotonically during a run and is dropped with it; never shared
/// across requests.
#[derive(Debug, Default)]
pub struct ExclusivitySet {
    chosen: HashSet<String>,
}

impl ExclusivitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a player as taken. Returns false if already present.
    pub fn insert(&mut self, player_id: &str) -> bool {
        self.chosen.insert(player_id.to_string())
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.chosen.contains(player_id)
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut set = ExclusivitySet::new();
        assert!(set.insert("a"));
        assert!(!set.insert("a"));
        assert!(set.contains("a"));
        assert!(!set.contains("b"));
        assert_eq!(set.len(), 1);
    }
}
