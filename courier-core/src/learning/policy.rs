#[cfg(test)]
#[path = "../../tests/unit/learning/policy_test.rs"]
mod policy_test;

use super::*;
use crate::algorithms::mdp::*;
use crate::models::LocationId;
use crate::routing::Route;
use crate::utils::{Float, GenericResult, InfoLogger, Random, Timer};
use std::sync::Arc;

/// Amount of episodes between two training progress messages.
pub const DEFAULT_LOG_EVERY: usize = 100;

/// Keeps statistics of a training run.
#[derive(Clone, Debug, Default)]
pub struct TrainingStats {
    /// Total reward collected in each episode.
    pub rewards: Vec<Float>,
}

impl TrainingStats {
    /// Returns amount of trained episodes.
    pub fn episodes(&self) -> usize {
        self.rewards.len()
    }

    /// Returns mean total reward of the last `window` episodes.
    pub fn mean_reward(&self, window: usize) -> Option<Float> {
        let window = window.min(self.rewards.len());
        if window == 0 {
            return None;
        }

        Some(self.rewards.iter().rev().take(window).sum::<Float>() / window as Float)
    }
}

/// A tabular q-learning agent which learns to route a delivery in `RouteEnvironment`: states and
/// actions are locations, an action means "move to this neighbour".
pub struct QLearningPolicy {
    environment: RouteEnvironment,
    table: QTable<LocationId, LocationId>,
    learning: QLearning,
    exploration: EpsilonGreedy,
    logger: InfoLogger,
    log_every: usize,
}

impl QLearningPolicy {
    /// Creates a new instance of `QLearningPolicy` with an empty table.
    /// Exploration and tie breaks are driven only by the given `random`.
    pub fn new(
        environment: RouteEnvironment,
        config: LearningConfig,
        random: Arc<dyn Random>,
        logger: InfoLogger,
    ) -> GenericResult<Self> {
        config.validate()?;

        Ok(Self {
            environment,
            table: QTable::default(),
            learning: QLearning::new(config.alpha, config.gamma),
            exploration: EpsilonGreedy::new(config.epsilon, random),
            logger,
            log_every: DEFAULT_LOG_EVERY,
        })
    }

    /// Sets amount of episodes between progress messages, zero disables them.
    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    /// Selects an action in the given state: a random valid action with exploration probability,
    /// otherwise the best known one with random tie break. Returns `None` if there are no valid actions.
    pub fn select_action(&self, state: LocationId) -> Option<LocationId> {
        self.exploration.select(self.estimates(state).as_slice())
    }

    /// Trains the policy for the given amount of episodes.
    pub fn train(&mut self, episodes: usize) -> TrainingStats {
        let timer = Timer::start();
        let mut stats = TrainingStats { rewards: Vec::with_capacity(episodes) };

        for episode in 0..episodes {
            let total_reward = self.run_episode();
            stats.rewards.push(total_reward);

            if self.log_every > 0 && (episode + 1) % self.log_every == 0 {
                (self.logger)(&format!("episode {}/{episodes} | total reward: {total_reward:.2}", episode + 1));
            }
        }

        (self.logger)(&format!(
            "training of {episodes} episodes completed in {:.3}s, table size: {}",
            timer.elapsed_secs_as_float(),
            self.table.len()
        ));

        stats
    }

    /// Derives a route by greedily following the best known actions from `start` until `target` is
    /// reached or the step limit is exhausted. An insufficiently trained policy can produce a suboptimal
    /// route or a route which does not reach the target.
    pub fn derive_route(&mut self, start: &str, target: &str) -> GenericResult<Route> {
        self.environment.set_endpoints(start, target)?;

        let mut state = self.environment.reset();
        let mut path = vec![state];
        let mut cost = 0.;

        for _ in 0..self.environment.max_steps() {
            let Some(action) = Greedy.select(self.estimates(state).as_slice()) else {
                break;
            };

            let result = self.environment.step(action);
            cost -= result.reward;
            state = result.state;
            path.push(state);

            if result.done {
                break;
            }
        }

        let adjacency = self.environment.adjacency();

        Ok(Route { cost, path: path.into_iter().map(|id| adjacency.name(id).to_string()).collect() })
    }

    /// Returns the learned table keyed by location names.
    pub fn table(&self) -> NamedQTable {
        let adjacency = self.environment.adjacency();
        let to_name = |id: &LocationId| Some(adjacency.name(*id).to_string());

        self.table.filter_map_keys(to_name, to_name)
    }

    /// Replaces the learned table. Entries with unknown locations are dropped, missing ones read as zero.
    pub fn set_table(&mut self, table: &NamedQTable) {
        let adjacency = self.environment.adjacency();
        let to_id = |name: &String| adjacency.id(name);

        let table = table.filter_map_keys(to_id, to_id);
        self.table = table;
    }

    /// Saves the learned table into the store.
    pub fn save(&self, store: &dyn QTableStore) -> GenericResult<()> {
        store.save(&self.table())?;
        (self.logger)(&format!("policy table with {} entries saved", self.table.len()));

        Ok(())
    }

    /// Loads the table from the store replacing the current one.
    pub fn load(&mut self, store: &dyn QTableStore) -> GenericResult<()> {
        let table = store.load()?;
        self.set_table(&table);
        (self.logger)(&format!("policy table with {} entries loaded", self.table.len()));

        Ok(())
    }

    /// Returns the environment the policy is trained in.
    pub fn environment(&self) -> &RouteEnvironment {
        &self.environment
    }

    fn run_episode(&mut self) -> Float {
        let mut state = self.environment.reset();
        let mut total_reward = 0.;

        while let Some(action) = self.select_action(state) {
            let StepResult { state: next_state, reward, done, .. } = self.environment.step(action);

            let next_max = max_estimate(self.estimates(next_state).as_slice());
            let old_value = self.table.get_or_default(&state, &action);
            let new_value = self.learning.value(reward, old_value, next_max);
            self.table.set(state, action, new_value);

            state = next_state;
            total_reward += reward;

            if done {
                break;
            }
        }

        total_reward
    }

    fn estimates(&self, state: LocationId) -> ActionEstimates<LocationId> {
        let actions = self.environment.adjacency().neighbours_of(state).iter().map(|(neighbour, _)| *neighbour);

        self.table.estimates(&state, actions)
    }
}
