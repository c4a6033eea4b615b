//! A collection of models which describe the road graph and its metric specific index.

mod adjacency;
pub use self::adjacency::*;

mod graph;
pub use self::graph::*;

mod metric;
pub use self::metric::*;

/// A dense location identifier assigned by `AdjacencyIndex` in graph order.
pub type LocationId = usize;
