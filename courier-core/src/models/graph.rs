#[cfg(test)]
#[path = "../../tests/unit/models/graph_test.rs"]
mod graph_test;

use crate::models::Metric;
use crate::utils::{Float, GenericError, GenericResult};
use rustc_hash::FxHashSet;

/// Represents a named location with its coordinate. Immutable after load.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    /// A unique location name.
    pub name: String,
    /// A horizontal coordinate.
    pub x: Float,
    /// A vertical coordinate.
    pub y: Float,
}

impl Location {
    /// Creates a new instance of `Location`.
    pub fn new(name: &str, x: Float, y: Float) -> Self {
        Self { name: name.to_string(), x, y }
    }
}

/// Represents an undirected road between two locations.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    /// A name of the first location.
    pub from: String,
    /// A name of the second location.
    pub to: String,
    /// A road length.
    pub distance: Float,
    /// A travel time.
    pub time: Float,
    /// A fuel cost.
    pub fuel_cost: Float,
}

impl Edge {
    /// Creates a new instance of `Edge`.
    pub fn new(from: &str, to: &str, distance: Float, time: Float, fuel_cost: Float) -> Self {
        Self { from: from.to_string(), to: to.to_string(), distance, time, fuel_cost }
    }

    /// Returns the weight of the edge for given metric.
    pub fn weight(&self, metric: Metric) -> Float {
        match metric {
            Metric::Distance => self.distance,
            Metric::Time => self.time,
            Metric::FuelCost => self.fuel_cost,
        }
    }
}

/// A road graph: a set of uniquely named locations and roads between them.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    locations: Vec<Location>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a new graph, fails if location names are not unique.
    /// Edges are validated when the graph is indexed, see `AdjacencyIndex`.
    pub fn new(locations: Vec<Location>, edges: Vec<Edge>) -> GenericResult<Self> {
        let mut names = FxHashSet::default();
        if let Some(duplicate) = locations.iter().find(|location| !names.insert(location.name.as_str())) {
            return Err(GenericError::Data(format!("duplicate location name: '{}'", duplicate.name)));
        }

        Ok(Self { locations, edges })
    }

    /// Returns locations in the order they were provided.
    pub fn locations(&self) -> &[Location] {
        self.locations.as_slice()
    }

    /// Returns edges in the order they were provided.
    pub fn edges(&self) -> &[Edge] {
        self.edges.as_slice()
    }

    /// Returns amount of locations.
    pub fn size(&self) -> usize {
        self.locations.len()
    }
}
