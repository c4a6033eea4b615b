#[cfg(test)]
#[path = "../../../tests/unit/algorithms/mdp/table_test.rs"]
mod table_test;

use crate::utils::Float;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A q-table which maps `(state, action)` pairs to their value estimates. Entries which were never
/// written read as the table's default value (`0.` unless specified), so the table grows only for
/// visited pairs.
#[derive(Clone, Debug)]
pub struct QTable<S, A> {
    values: FxHashMap<(S, A), Float>,
    default_value: Float,
}

impl<S, A> Default for QTable<S, A> {
    fn default() -> Self {
        Self { values: FxHashMap::default(), default_value: 0. }
    }
}

impl<S: Clone + Hash + Eq, A: Clone + Hash + Eq> QTable<S, A> {
    /// Creates a new empty table with custom default value.
    pub fn with_default_value(default_value: Float) -> Self {
        Self { values: FxHashMap::default(), default_value }
    }

    /// Returns the value of the pair or the default value if it was never set.
    pub fn get_or_default(&self, state: &S, action: &A) -> Float {
        self.values.get(&(state.clone(), action.clone())).copied().unwrap_or(self.default_value)
    }

    /// Returns the value of the pair if it was set.
    pub fn get(&self, state: &S, action: &A) -> Option<Float> {
        self.values.get(&(state.clone(), action.clone())).copied()
    }

    /// Sets the value of the pair.
    pub fn set(&mut self, state: S, action: A, value: Float) {
        self.values.insert((state, action), value);
    }

    /// Returns estimates of given actions in the given state, keeping actions order.
    pub fn estimates<I>(&self, state: &S, actions: I) -> Vec<(A, Float)>
    where
        I: IntoIterator<Item = A>,
    {
        actions
            .into_iter()
            .map(|action| {
                let value = self.get_or_default(state, &action);
                (action, value)
            })
            .collect()
    }

    /// Returns the default value.
    pub fn default_value(&self) -> Float {
        self.default_value
    }

    /// Returns amount of stored entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over stored entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &A, Float)> + '_ {
        self.values.iter().map(|((state, action), value)| (state, action, *value))
    }

    /// Converts the table into another one mapping states and actions with given functions.
    /// Entries for which any of the functions returns `None` are dropped.
    pub fn filter_map_keys<S2, A2, FS, FA>(&self, map_state: FS, map_action: FA) -> QTable<S2, A2>
    where
        S2: Clone + Hash + Eq,
        A2: Clone + Hash + Eq,
        FS: Fn(&S) -> Option<S2>,
        FA: Fn(&A) -> Option<A2>,
    {
        let values = self
            .values
            .iter()
            .filter_map(|((state, action), value)| Some(((map_state(state)?, map_action(action)?), *value)))
            .collect();

        QTable { values, default_value: self.default_value }
    }
}

impl<S: Clone + Hash + Eq, A: Clone + Hash + Eq> FromIterator<(S, A, Float)> for QTable<S, A> {
    fn from_iter<T: IntoIterator<Item = (S, A, Float)>>(iter: T) -> Self {
        let values = iter.into_iter().map(|(state, action, value)| ((state, action), value)).collect();

        Self { values, default_value: 0. }
    }
}
