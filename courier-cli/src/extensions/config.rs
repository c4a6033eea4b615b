//! Contains a training configuration which can be read from a json file.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use courier_core::learning::LearningConfig;
use courier_core::utils::Float;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A training configuration. All fields are optional: missing ones fall back to defaults.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainConfig {
    /// A learning rate.
    pub alpha: Option<Float>,
    /// A discount factor.
    pub gamma: Option<Float>,
    /// An exploration rate.
    pub epsilon: Option<Float>,
    /// Amount of training episodes.
    pub episodes: Option<usize>,
    /// A random seed to make training repeatable.
    pub seed: Option<u64>,
    /// Amount of episodes between progress messages.
    pub log_every: Option<usize>,
}

impl TrainConfig {
    /// Returns a new config where values set in `other` replace values of this one.
    pub fn merge(self, other: TrainConfig) -> Self {
        Self {
            alpha: other.alpha.or(self.alpha),
            gamma: other.gamma.or(self.gamma),
            epsilon: other.epsilon.or(self.epsilon),
            episodes: other.episodes.or(self.episodes),
            seed: other.seed.or(self.seed),
            log_every: other.log_every.or(self.log_every),
        }
    }

    /// Returns learning hyper parameters using defaults for missing ones.
    pub fn learning_config(&self) -> LearningConfig {
        let defaults = LearningConfig::default();

        LearningConfig {
            alpha: self.alpha.unwrap_or(defaults.alpha),
            gamma: self.gamma.unwrap_or(defaults.gamma),
            epsilon: self.epsilon.unwrap_or(defaults.epsilon),
        }
    }
}

/// Reads training config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<TrainConfig, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}
