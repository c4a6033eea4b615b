#[cfg(test)]
#[path = "../../tests/unit/routing/shortest_path_test.rs"]
mod shortest_path_test;

use super::Route;
use crate::models::{AdjacencyIndex, LocationId};
use crate::utils::{Float, compare_floats};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Finds the cheapest route between two named locations.
///
/// Returns a route with infinite cost and empty path if the target cannot be reached from the source
/// or any of them is unknown: this is a normal result and should be checked by the caller.
/// The same source and target always give a zero cost route, even for an unknown location.
pub fn shortest_path(adjacency: &AdjacencyIndex, source: &str, target: &str) -> Route {
    if source == target {
        return Route { cost: 0., path: vec![source.to_string()] };
    }

    adjacency
        .id(source)
        .zip(adjacency.id(target))
        .and_then(|(source, target)| find_shortest_path(adjacency, source, target))
        .map(|(cost, path)| Route { cost, path: path.into_iter().map(|id| adjacency.name(id).to_string()).collect() })
        .unwrap_or_else(Route::unreachable)
}

/// Finds the cheapest path between two locations using uniform cost search (Dijkstra).
///
/// Each location is settled at most once: stale frontier entries are skipped when popped. Instead of
/// carrying a path in every frontier entry, settled locations keep a back pointer to their predecessor
/// and the path is reconstructed once the target is settled. Equal costs are ordered by location id.
pub fn find_shortest_path(
    adjacency: &AdjacencyIndex,
    source: LocationId,
    target: LocationId,
) -> Option<(Float, Vec<LocationId>)> {
    let size = adjacency.size();
    if source >= size || target >= size {
        return None;
    }

    let mut costs = vec![Float::INFINITY; size];
    let mut predecessors: Vec<Option<LocationId>> = vec![None; size];
    let mut settled = vec![false; size];
    let mut frontier = BinaryHeap::new();

    costs[source] = 0.;
    frontier.push(FrontierEntry { cost: 0., location: source });

    while let Some(FrontierEntry { cost, location }) = frontier.pop() {
        if settled[location] {
            continue;
        }
        settled[location] = true;

        if location == target {
            return Some((cost, reconstruct_path(&predecessors, target)));
        }

        for &(neighbour, weight) in adjacency.neighbours_of(location) {
            if settled[neighbour] {
                continue;
            }

            let candidate = cost + weight;
            if candidate < costs[neighbour] {
                costs[neighbour] = candidate;
                predecessors[neighbour] = Some(location);
                frontier.push(FrontierEntry { cost: candidate, location: neighbour });
            }
        }
    }

    None
}

/// Returns a total cost of visiting given named locations in the given order: the sum of shortest
/// path costs between each consecutive pair. Infinity if some pair is not connected.
pub fn route_cost(adjacency: &AdjacencyIndex, stops: &[&str]) -> Float {
    stops.windows(2).map(|pair| shortest_path(adjacency, pair[0], pair[1]).cost).sum()
}

fn reconstruct_path(predecessors: &[Option<LocationId>], target: LocationId) -> Vec<LocationId> {
    let mut path = std::iter::successors(Some(target), |&location| predecessors[location]).collect::<Vec<_>>();
    path.reverse();

    path
}

/// A frontier entry ordered as a min-heap item by cost, then by location id.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    cost: Float,
    location: LocationId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed as BinaryHeap is a max-heap
        compare_floats(other.cost, self.cost).then_with(|| other.location.cmp(&self.location))
    }
}
