//! Contains functionality used by command line commands.

pub mod config;
pub mod results;

use courier_core::models::{AdjacencyIndex, Metric};
use courier_format::graph::GraphReader;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// Reads a road graph in json format and builds its adjacency index for the given metric.
pub fn read_adjacency<R: Read>(reader: BufReader<R>, metric: Metric) -> Result<Arc<AdjacencyIndex>, String> {
    reader
        .read_graph()
        .and_then(|graph| AdjacencyIndex::new(&graph, metric))
        .map(Arc::new)
        .map_err(|err| format!("cannot read graph: {err}"))
}
