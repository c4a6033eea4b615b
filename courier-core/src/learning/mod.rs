//! This module contains a delivery route simulation and a q-learning policy which learns routing
//! decisions by trial and error interaction with it.

mod environment;
pub use self::environment::*;

mod policy;
pub use self::policy::*;

use crate::algorithms::mdp::QTable;
use crate::utils::{Float, GenericError, GenericResult};

/// A q-table keyed by location names, used to hand over a trained policy to a store.
pub type NamedQTable = QTable<String, String>;

/// A persistence store of trained policy tables. The encoding is up to the implementation.
pub trait QTableStore {
    /// Saves the table.
    fn save(&self, table: &NamedQTable) -> GenericResult<()>;

    /// Loads previously saved table. Returns `GenericError::NotFound` if nothing was saved.
    fn load(&self) -> GenericResult<NamedQTable>;
}

/// Hyper parameters of q-learning, fixed for a training run.
#[derive(Clone, Debug, PartialEq)]
pub struct LearningConfig {
    /// A learning rate.
    pub alpha: Float,
    /// A discount factor.
    pub gamma: Float,
    /// An exploration rate.
    pub epsilon: Float,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self { alpha: 0.3, gamma: 0.9, epsilon: 0.2 }
    }
}

impl LearningConfig {
    /// Checks that all parameters are in [0, 1] range.
    pub fn validate(&self) -> GenericResult<()> {
        [("alpha", self.alpha), ("gamma", self.gamma), ("epsilon", self.epsilon)]
            .into_iter()
            .find(|(_, value)| !(0. ..=1.).contains(value))
            .map_or(Ok(()), |(name, value)| {
                Err(GenericError::Data(format!("learning parameter '{name}' must be in [0, 1] range, got: {value}")))
            })
    }
}
