//! This module contains building blocks of tabular reinforcement learning for Markov Decision Process
//! (MDP) models: a q-table with explicit default values and strategies to estimate and select actions.

mod strategies;
pub use self::strategies::*;

mod table;
pub use self::table::*;

use crate::utils::Float;

/// Keeps action estimates for one state in a stable order.
pub type ActionEstimates<A> = Vec<(A, Float)>;

/// A learning strategy for the MDP.
pub trait LearningStrategy {
    /// Estimates an action value given received reward, its current value and the best known
    /// value of the next state (`None` if the next state has no actions).
    fn value(&self, reward_value: Float, old_value: Float, next_max: Option<Float>) -> Float;
}

/// A policy strategy for MDP.
pub trait PolicyStrategy<A: Clone> {
    /// Selects an action from the estimated actions. Returns `None` if there are no actions.
    fn select(&self, estimates: &[(A, Float)]) -> Option<A>;
}
