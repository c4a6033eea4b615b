#[cfg(test)]
#[path = "../../tests/unit/routing/sequencer_test.rs"]
mod sequencer_test;

use super::find_shortest_path;
use crate::models::{AdjacencyIndex, LocationId};
use crate::utils::{Float, GenericError, GenericResult, InfoLogger, Timer, get_permutations};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Max amount of distinct locations on a sequenced route, including start and end. Exhaustive
/// enumeration evaluates up to `(n - 1)!` visiting orders, so larger requests are rejected.
pub const MAX_SEQUENCE_STOPS: usize = 8;

/// A multi-stop route with the cheapest visiting order.
#[derive(Clone, Debug, PartialEq)]
pub struct SequencedRoute {
    /// Total cost of the route. Infinity if no visiting order connects all stops.
    pub cost: Float,
    /// Stops in visiting order, starting with the start and ending with the end (or the start again
    /// when the route returns). Empty when there is no route.
    pub stops: Vec<String>,
    /// The full road path which follows the visiting order through intermediate locations.
    pub path: Vec<String>,
}

impl SequencedRoute {
    /// Returns true if all stops can be visited.
    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite() && !self.stops.is_empty()
    }
}

/// Finds the cheapest order to visit a small set of stops by exhaustive enumeration of all visiting
/// orders. Pairwise hop costs are provided by the shortest path search.
pub struct RouteSequencer {
    adjacency: Arc<AdjacencyIndex>,
    logger: InfoLogger,
}

impl RouteSequencer {
    /// Creates a new instance of `RouteSequencer`.
    pub fn new(adjacency: Arc<AdjacencyIndex>, logger: InfoLogger) -> Self {
        Self { adjacency, logger }
    }

    /// Returns the cheapest visiting order of given stops.
    ///
    /// The route begins at `start` (the first stop when omitted) and finishes at `end` or, if it is
    /// omitted, returns to `start`. Visiting orders are enumerated lexicographically and the first
    /// one with the minimum cost wins.
    pub fn optimal_sequence(
        &self,
        stops: &[&str],
        start: Option<&str>,
        end: Option<&str>,
    ) -> GenericResult<SequencedRoute> {
        let stops = self.resolve_stops(stops)?;

        let start = match start {
            Some(start) => self.adjacency.require_id(start)?,
            None => stops[0],
        };
        let end = end.map(|end| self.adjacency.require_id(end)).transpose()?;
        let finish = end.unwrap_or(start);

        // start and end count as stops even when they are not listed
        let total = stops.len()
            + usize::from(!stops.contains(&start))
            + usize::from(end.is_some_and(|end| end != start && !stops.contains(&end)));
        if total > MAX_SEQUENCE_STOPS {
            return Err(GenericError::TooManyStops { actual: total, limit: MAX_SEQUENCE_STOPS });
        }

        let middle = stops.into_iter().filter(|&stop| stop != start && Some(stop) != end).collect::<Vec<_>>();

        let mut hops = HopCache::new(self.adjacency.as_ref());
        let mut evaluated = 0_usize;
        let timer = Timer::start();

        let best = get_permutations(middle.len()).fold(None, |best: Candidate, permutation| {
            evaluated += 1;

            let order = std::iter::once(start)
                .chain(permutation.iter().map(|&idx| middle[idx]))
                .chain(std::iter::once(finish))
                .collect::<Vec<_>>();
            let cost = order.windows(2).map(|pair| hops.cost(pair[0], pair[1])).sum::<Float>();

            match best {
                Some((best_cost, _)) if cost < best_cost => Some((cost, order)),
                None if cost < Float::INFINITY => Some((cost, order)),
                _ => best,
            }
        });

        (self.logger)(&format!(
            "evaluated {evaluated} visiting orders of {} stops in {}ms",
            middle.len() + 1,
            timer.elapsed_millis()
        ));

        Ok(match best {
            Some((cost, order)) => SequencedRoute {
                cost,
                stops: order.iter().map(|&id| self.adjacency.name(id).to_string()).collect(),
                path: self.expand_path(&mut hops, order.as_slice()),
            },
            None => SequencedRoute { cost: Float::INFINITY, stops: vec![], path: vec![] },
        })
    }

    fn resolve_stops(&self, stops: &[&str]) -> GenericResult<Vec<LocationId>> {
        if stops.is_empty() {
            return Err(GenericError::Data("no stops to sequence".to_string()));
        }

        stops.iter().try_fold(Vec::with_capacity(stops.len()), |mut acc, name| {
            let id = self.adjacency.require_id(name)?;
            if !acc.contains(&id) {
                acc.push(id);
            }

            Ok(acc)
        })
    }

    fn expand_path(&self, hops: &mut HopCache, order: &[LocationId]) -> Vec<String> {
        let mut path = order.first().map(|&first| vec![first]).unwrap_or_default();

        order.windows(2).for_each(|pair| {
            if let Some((_, hop)) = hops.get(pair[0], pair[1]) {
                path.extend(hop.iter().skip(1));
            }
        });

        path.into_iter().map(|id| self.adjacency.name(id).to_string()).collect()
    }
}

type Candidate = Option<(Float, Vec<LocationId>)>;

/// Memoizes shortest paths between pairs of stops so each pair is searched only once.
struct HopCache<'a> {
    adjacency: &'a AdjacencyIndex,
    hops: FxHashMap<(LocationId, LocationId), Option<(Float, Vec<LocationId>)>>,
}

impl<'a> HopCache<'a> {
    fn new(adjacency: &'a AdjacencyIndex) -> Self {
        Self { adjacency, hops: FxHashMap::default() }
    }

    fn get(&mut self, from: LocationId, to: LocationId) -> Option<&(Float, Vec<LocationId>)> {
        let adjacency = self.adjacency;
        self.hops.entry((from, to)).or_insert_with(|| find_shortest_path(adjacency, from, to)).as_ref()
    }

    fn cost(&mut self, from: LocationId, to: LocationId) -> Float {
        self.get(from, to).map_or(Float::INFINITY, |(cost, _)| *cost)
    }
}
