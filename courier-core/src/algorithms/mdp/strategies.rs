#[cfg(test)]
#[path = "../../../tests/unit/algorithms/mdp/strategies_test.rs"]
mod strategies_test;

use super::*;
use crate::utils::{Random, compare_floats};
use std::cmp::Ordering;
use std::sync::Arc;

/// Applies q-learning strategy to calculate values for taken actions:
/// `Q(s,a) <- (1 - alpha) * Q(s,a) + alpha * (reward + gamma * max Q(s',a'))`.
pub struct QLearning {
    alpha: Float,
    gamma: Float,
}

impl QLearning {
    /// Creates a new instance of `QLearning`.
    pub fn new(alpha: Float, gamma: Float) -> Self {
        Self { alpha, gamma }
    }
}

impl LearningStrategy for QLearning {
    fn value(&self, reward_value: Float, old_value: Float, next_max: Option<Float>) -> Float {
        let next_max = next_max.unwrap_or(0.);

        (1. - self.alpha) * old_value + self.alpha * (reward_value + self.gamma * next_max)
    }
}

/// An e-greedy action selection strategy which acts as greedy except it can select some
/// random action with probability specified. Ties between best actions are broken randomly.
pub struct EpsilonGreedy {
    epsilon: Float,
    random: Arc<dyn Random>,
}

impl EpsilonGreedy {
    /// Creates a new instance of `EpsilonGreedy`.
    pub fn new(epsilon: Float, random: Arc<dyn Random>) -> Self {
        Self { epsilon, random }
    }
}

impl<A: Clone> PolicyStrategy<A> for EpsilonGreedy {
    fn select(&self, estimates: &[(A, Float)]) -> Option<A> {
        if estimates.is_empty() {
            return None;
        }

        if self.random.is_hit(self.epsilon) {
            return estimates.get(self.random.uniform_index(estimates.len())).map(|(action, _)| action.clone());
        }

        let best = max_estimate(estimates)?;
        let maximizers = estimates.iter().filter(|(_, value)| compare_floats(*value, best) == Ordering::Equal);
        let count = maximizers.clone().count();

        maximizers.map(|(action, _)| action.clone()).nth(self.random.uniform_index(count))
    }
}

/// A greedy strategy: selects the first action with the highest estimate.
#[derive(Default)]
pub struct Greedy;

impl<A: Clone> PolicyStrategy<A> for Greedy {
    fn select(&self, estimates: &[(A, Float)]) -> Option<A> {
        estimates
            .iter()
            .fold(None, |best: Option<&(A, Float)>, estimate| match best {
                Some((_, value)) if compare_floats(estimate.1, *value) != Ordering::Greater => best,
                _ => Some(estimate),
            })
            .map(|(action, _)| action.clone())
    }
}

/// Returns the highest estimate, if any.
pub fn max_estimate<A>(estimates: &[(A, Float)]) -> Option<Float> {
    estimates.iter().map(|(_, value)| *value).max_by(|a, b| compare_floats(*a, *b))
}
