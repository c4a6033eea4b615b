#[cfg(test)]
#[path = "../../tests/unit/models/adjacency_test.rs"]
mod adjacency_test;

use crate::models::{Graph, LocationId, Metric};
use crate::utils::{Float, GenericError, GenericResult};
use rustc_hash::FxHashMap;

/// An adjacency index of the road graph built for one metric. Every road is stored as two directed
/// entries with identical cost. Locations are interned into dense ids following graph order, and
/// neighbours keep the order in which roads were provided.
#[derive(Clone, Debug)]
pub struct AdjacencyIndex {
    metric: Metric,
    names: Vec<String>,
    ids: FxHashMap<String, LocationId>,
    neighbours: Vec<Vec<(LocationId, Float)>>,
}

impl AdjacencyIndex {
    /// Creates a new index for given graph and metric. Fails if some edge references an unknown
    /// location or its weight is negative or not finite: the search and learning algorithms
    /// rely on non-negative costs.
    pub fn new(graph: &Graph, metric: Metric) -> GenericResult<Self> {
        let names = graph.locations().iter().map(|location| location.name.clone()).collect::<Vec<_>>();
        let ids = names.iter().enumerate().map(|(id, name)| (name.clone(), id)).collect::<FxHashMap<_, _>>();

        let init: Vec<Vec<(LocationId, Float)>> = vec![Vec::new(); names.len()];
        let neighbours = graph.edges().iter().try_fold(init, |mut neighbours, edge| -> GenericResult<_> {
            let from = ids.get(&edge.from).copied().ok_or_else(|| unknown_location(&edge.from, &edge.to))?;
            let to = ids.get(&edge.to).copied().ok_or_else(|| unknown_location(&edge.from, &edge.to))?;

            let cost = edge.weight(metric);
            if !cost.is_finite() || cost < 0. {
                return Err(GenericError::Data(format!(
                    "edge '{}' - '{}' has invalid {metric} weight: {cost}, expected non-negative number",
                    edge.from, edge.to
                )));
            }

            neighbours[from].push((to, cost));
            neighbours[to].push((from, cost));

            Ok(neighbours)
        })?;

        Ok(Self { metric, names, ids, neighbours })
    }

    /// Returns the metric used as a cost.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Returns amount of locations.
    pub fn size(&self) -> usize {
        self.names.len()
    }

    /// Returns location names in graph order.
    pub fn locations(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(|name| name.as_str())
    }

    /// Returns location id by its name.
    pub fn id(&self, name: &str) -> Option<LocationId> {
        self.ids.get(name).copied()
    }

    /// Returns location id by its name or a data error if location is unknown.
    pub fn require_id(&self, name: &str) -> GenericResult<LocationId> {
        self.id(name).ok_or_else(|| GenericError::Data(format!("unknown location: '{name}'")))
    }

    /// Returns location name by its id.
    ///
    /// # Panics
    /// Panics if id is out of range.
    pub fn name(&self, id: LocationId) -> &str {
        self.names[id].as_str()
    }

    /// Returns neighbours of the location with their costs. Unknown id has no neighbours.
    pub fn neighbours_of(&self, id: LocationId) -> &[(LocationId, Float)] {
        match self.neighbours.get(id) {
            Some(neighbours) => neighbours.as_slice(),
            None => &[],
        }
    }

    /// Returns neighbours of the location with their costs using location names.
    pub fn neighbours(&self, name: &str) -> Vec<(&str, Float)> {
        self.id(name)
            .map(|id| self.neighbours_of(id).iter().map(|&(neighbour, cost)| (self.name(neighbour), cost)).collect())
            .unwrap_or_default()
    }

    /// Returns a cost of moving directly from one location to another, if they are adjacent.
    /// When several roads connect the same pair, the first one wins.
    pub fn cost_of(&self, from: LocationId, to: LocationId) -> Option<Float> {
        self.neighbours_of(from).iter().find(|(neighbour, _)| *neighbour == to).map(|(_, cost)| *cost)
    }

    /// Returns a cost of moving directly between two named locations, if they are adjacent.
    pub fn cost(&self, from: &str, to: &str) -> Option<Float> {
        self.id(from).zip(self.id(to)).and_then(|(from, to)| self.cost_of(from, to))
    }

    /// Checks whether two named locations are connected by a road.
    pub fn is_adjacent(&self, from: &str, to: &str) -> bool {
        self.cost(from, to).is_some()
    }
}

fn unknown_location(from: &str, to: &str) -> GenericError {
    GenericError::Data(format!("edge '{from}' - '{to}' references unknown location"))
}
