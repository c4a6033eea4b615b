//! This module contains exact routing algorithms: a shortest path search between two locations and
//! a multi-stop sequencer which finds the cheapest visiting order.

mod sequencer;
pub use self::sequencer::*;

mod shortest_path;
pub use self::shortest_path::*;

use crate::utils::Float;

/// A route found by one of routing algorithms.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    /// Total cost of the route measured in the metric of the adjacency index.
    /// Infinity means that there is no route.
    pub cost: Float,
    /// Location names in visiting order. Empty when there is no route.
    pub path: Vec<String>,
}

impl Route {
    /// Creates a route which signals that the destination is not reachable.
    pub fn unreachable() -> Self {
        Self { cost: Float::INFINITY, path: vec![] }
    }

    /// Returns true if the route leads to the destination.
    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite() && !self.path.is_empty()
    }
}
