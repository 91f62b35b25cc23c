//! Q-table storage for temporal difference learning

use std::collections::{HashMap, hash_map};

use crate::types::{QKey, StateKey};

/// Value reported for any (state, action) pair the table has never stored.
pub const DEFAULT_Q_VALUE: f64 = 0.0;

/// Q-table mapping (state, action) pairs to Q-values
///
/// Lookups never insert. Entries are created by [`QTable::set`] and never
/// removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QTable {
    q_values: HashMap<QKey, f64>,
}

impl QTable {
    /// Create an empty Q-table
    pub fn new() -> Self {
        Self::default()
    }

    /// Get Q-value for a state-action pair, [`DEFAULT_Q_VALUE`] if absent
    pub fn get(&self, state: &StateKey, action: usize) -> f64 {
        self.q_values
            .get(&QKey {
                state: state.clone(),
                action,
            })
            .copied()
            .unwrap_or(DEFAULT_Q_VALUE)
    }

    /// Set Q-value for a state-action pair
    pub fn set(&mut self, state: StateKey, action: usize, value: f64) {
        self.q_values.insert(QKey { state, action }, value);
    }

    /// Insert an entry by its composite key
    pub fn insert(&mut self, key: QKey, value: f64) {
        self.q_values.insert(key, value);
    }

    /// Whether the pair has an explicit entry
    pub fn contains(&self, state: &StateKey, action: usize) -> bool {
        self.q_values.contains_key(&QKey {
            state: state.clone(),
            action,
        })
    }

    /// Maximum Q-value over `actions` in a state, [`DEFAULT_Q_VALUE`] for an
    /// empty action set
    pub fn max_q(&self, state: &StateKey, actions: &[usize]) -> f64 {
        if actions.is_empty() {
            return DEFAULT_Q_VALUE;
        }
        actions
            .iter()
            .map(|&action| self.get(state, action))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Actions among `legal_actions` sharing the highest Q-value, in input order
    pub fn best_actions(&self, state: &StateKey, legal_actions: &[usize]) -> Vec<usize> {
        let max = self.max_q(state, legal_actions);
        legal_actions
            .iter()
            .copied()
            .filter(|&action| self.get(state, action) == max)
            .collect()
    }

    /// Combine a persisted table with a newer one.
    ///
    /// The result holds every key of both tables; where a key is present in
    /// both, the value from `newer` wins.
    pub fn merge(persisted: &QTable, newer: &QTable) -> QTable {
        let mut merged = persisted.clone();
        merged.extend_from(newer);
        merged
    }

    /// Overwrite this table's entries with those of `other`
    pub fn extend_from(&mut self, other: &QTable) {
        self.q_values
            .extend(other.q_values.iter().map(|(k, &v)| (k.clone(), v)));
    }

    /// Get total number of Q-values stored
    pub fn size(&self) -> usize {
        self.q_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q_values.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, QKey, f64> {
        self.q_values.iter()
    }
}

impl FromIterator<(QKey, f64)> for QTable {
    fn from_iter<I: IntoIterator<Item = (QKey, f64)>>(iter: I) -> Self {
        Self {
            q_values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> StateKey {
        StateKey::parse(s).unwrap()
    }

    #[test]
    fn test_qtable_defaults_to_zero() {
        let qtable = QTable::new();
        assert_eq!(qtable.get(&StateKey::empty(), 0), 0.0);
        assert!(!qtable.contains(&StateKey::empty(), 0));
        assert!(qtable.is_empty());
    }

    #[test]
    fn test_qtable_set_get() {
        let mut qtable = QTable::new();
        let state = key("X........");
        qtable.set(state.clone(), 4, 1.5);
        assert_eq!(qtable.get(&state, 4), 1.5);
        assert_eq!(qtable.get(&state, 5), 0.0);
        assert_eq!(qtable.size(), 1);
    }

    #[test]
    fn test_max_q() {
        let mut qtable = QTable::new();
        let state = StateKey::empty();
        qtable.set(state.clone(), 0, -0.5);
        qtable.set(state.clone(), 1, -1.5);

        assert_eq!(qtable.max_q(&state, &[0, 1]), -0.5);
        // Unseen actions count as zero.
        assert_eq!(qtable.max_q(&state, &[0, 1, 2]), 0.0);
        assert_eq!(qtable.max_q(&state, &[]), 0.0);
    }

    #[test]
    fn test_best_actions_collects_ties() {
        let mut qtable = QTable::new();
        let state = StateKey::empty();
        qtable.set(state.clone(), 2, 0.8);
        qtable.set(state.clone(), 6, 0.8);
        qtable.set(state.clone(), 4, 0.3);

        assert_eq!(qtable.best_actions(&state, &[2, 4, 6]), vec![2, 6]);
        assert_eq!(qtable.best_actions(&state, &[4, 6]), vec![6]);
    }

    #[test]
    fn test_merge_prefers_newer_values() {
        let a = key("X........");
        let b = key("X...O....");

        let mut persisted = QTable::new();
        persisted.set(a.clone(), 1, 0.25);
        persisted.set(a.clone(), 2, -0.5);

        let mut newer = QTable::new();
        newer.set(a.clone(), 2, 0.75);
        newer.set(b.clone(), 8, 1.0);

        let merged = QTable::merge(&persisted, &newer);
        assert_eq!(merged.size(), 3);
        assert_eq!(merged.get(&a, 1), 0.25);
        assert_eq!(merged.get(&a, 2), 0.75);
        assert_eq!(merged.get(&b, 8), 1.0);
        // Inputs are untouched.
        assert_eq!(persisted.get(&a, 2), -0.5);
    }
}
