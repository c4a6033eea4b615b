#[cfg(test)]
#[path = "../../tests/unit/learning/environment_test.rs"]
mod environment_test;

use crate::models::{AdjacencyIndex, LocationId};
use crate::utils::{Float, GenericResult};
use std::sync::Arc;

/// A reward given for an attempt to move to a location which is not adjacent to the current one.
pub const INVALID_MOVE_PENALTY: Float = -10.;

/// Describes what happened on a step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepInfo {
    /// The move was made and the given cost was incurred.
    Moved {
        /// A cost of the traversed road.
        cost: Float,
    },
    /// The requested location is not adjacent: nothing has changed.
    InvalidMove,
}

/// A result of a single step in the environment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepResult {
    /// A location after the step.
    pub state: LocationId,
    /// A reward of the step: negated road cost or a penalty.
    pub reward: Float,
    /// True if the target is reached or the step limit is exhausted.
    pub done: bool,
    /// Step details.
    pub info: StepInfo,
}

/// Simulates a single delivery episode from a start location to a target location over the road graph.
///
/// A state is the current location, an action is a location to move to. The environment is fully
/// deterministic given the actions.
pub struct RouteEnvironment {
    adjacency: Arc<AdjacencyIndex>,
    start: LocationId,
    target: LocationId,
    current: LocationId,
    steps: usize,
    max_steps: usize,
}

impl RouteEnvironment {
    /// Creates a new instance of `RouteEnvironment` for given endpoints.
    pub fn new(adjacency: Arc<AdjacencyIndex>, start: &str, target: &str) -> GenericResult<Self> {
        let start = adjacency.require_id(start)?;
        let target = adjacency.require_id(target)?;
        let max_steps = adjacency.size() * 2;

        Ok(Self { adjacency, start, target, current: start, steps: 0, max_steps })
    }

    /// Changes episode endpoints. Takes effect on the next `reset`.
    pub fn set_endpoints(&mut self, start: &str, target: &str) -> GenericResult<()> {
        self.start = self.adjacency.require_id(start)?;
        self.target = self.adjacency.require_id(target)?;

        Ok(())
    }

    /// Starts a new episode: moves to the start location and resets the step counter.
    pub fn reset(&mut self) -> LocationId {
        self.current = self.start;
        self.steps = 0;

        self.current
    }

    /// Tries to move to the given location.
    pub fn step(&mut self, action: LocationId) -> StepResult {
        let Some(cost) = self.adjacency.cost_of(self.current, action) else {
            return StepResult {
                state: self.current,
                reward: INVALID_MOVE_PENALTY,
                done: false,
                info: StepInfo::InvalidMove,
            };
        };

        debug_assert!(cost >= 0., "road costs must be non-negative");

        self.current = action;
        self.steps += 1;

        StepResult { state: self.current, reward: -cost, done: self.is_done(), info: StepInfo::Moved { cost } }
    }

    /// Returns all neighbours of the current location. Revisits are allowed.
    pub fn valid_actions(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.adjacency.neighbours_of(self.current).iter().map(|(neighbour, _)| *neighbour)
    }

    /// Returns true if the target is reached or the step limit is exhausted.
    pub fn is_done(&self) -> bool {
        self.current == self.target || self.steps >= self.max_steps
    }

    /// Returns the current location.
    pub fn current(&self) -> LocationId {
        self.current
    }

    /// Returns the start location.
    pub fn start(&self) -> LocationId {
        self.start
    }

    /// Returns the target location.
    pub fn target(&self) -> LocationId {
        self.target
    }

    /// Returns amount of moves made in the current episode.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns max amount of moves in an episode: twice the amount of locations.
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Returns the adjacency index the environment operates on.
    pub fn adjacency(&self) -> &AdjacencyIndex {
        self.adjacency.as_ref()
    }

    /// Returns a one line description of the episode state.
    pub fn render(&self) -> String {
        format!(
            "current: {} | target: {} | step: {}/{}",
            self.adjacency.name(self.current),
            self.adjacency.name(self.target),
            self.steps,
            self.max_steps
        )
    }
}
