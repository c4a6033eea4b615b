use crate::models::{AdjacencyIndex, Edge, Graph, Location, Metric};
use crate::utils::Float;
use std::sync::Arc;

pub fn create_graph(names: &[&str], edges: &[(&str, &str, Float)]) -> Graph {
    let locations = names.iter().enumerate().map(|(idx, name)| Location::new(name, idx as Float, 0.)).collect();
    let edges = edges
        .iter()
        .map(|&(from, to, distance)| Edge::new(from, to, distance, distance * 2., distance / 10.))
        .collect();

    Graph::new(locations, edges).expect("cannot create graph")
}

pub fn create_adjacency(graph: &Graph, metric: Metric) -> Arc<AdjacencyIndex> {
    Arc::new(AdjacencyIndex::new(graph, metric).expect("cannot create adjacency index"))
}

/// X - Y (3), Y - Z (4), X - Z (10).
pub fn create_triangle_graph() -> Graph {
    create_graph(&["X", "Y", "Z"], &[("X", "Y", 3.), ("Y", "Z", 4.), ("X", "Z", 10.)])
}

/// A - B - C - D - A with uniform weight.
pub fn create_cycle_graph() -> Graph {
    create_graph(&["A", "B", "C", "D"], &[("A", "B", 1.), ("B", "C", 1.), ("C", "D", 1.), ("D", "A", 1.)])
}

/// Two components: A - B and C - D, E is isolated.
pub fn create_disconnected_graph() -> Graph {
    create_graph(&["A", "B", "C", "D", "E"], &[("A", "B", 2.), ("C", "D", 3.)])
}

/// A small city-like graph with several alternative roads.
pub fn create_city_graph() -> Graph {
    let locations = vec![
        Location::new("Depot", 0., 0.),
        Location::new("Market", 2., 1.),
        Location::new("Station", 4., 0.),
        Location::new("Temple", 1., 3.),
        Location::new("Airport", 6., 2.),
        Location::new("Campus", 3., 4.),
        Location::new("Harbor", 5., 5.),
    ];
    let edges = vec![
        Edge::new("Depot", "Market", 2.2, 6., 0.3),
        Edge::new("Depot", "Temple", 3.2, 5., 0.4),
        Edge::new("Market", "Station", 2.2, 4., 0.25),
        Edge::new("Market", "Temple", 2.2, 7., 0.2),
        Edge::new("Market", "Campus", 3.1, 3., 0.35),
        Edge::new("Station", "Airport", 2.8, 5., 0.3),
        Edge::new("Temple", "Campus", 2.2, 4., 0.3),
        Edge::new("Campus", "Harbor", 2.2, 3., 0.2),
        Edge::new("Airport", "Harbor", 3.1, 2., 0.45),
        Edge::new("Station", "Campus", 4.1, 9., 0.5),
    ];

    Graph::new(locations, edges).expect("cannot create graph")
}
