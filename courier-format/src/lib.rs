//! This crate contains JSON formats used by the courier routing engine: a road graph definition
//! and a trained policy table.
//!
//! # Examples
//!
//! ```
//! use courier_core::prelude::*;
//! use courier_format::graph::GraphReader;
//! use std::io::BufReader;
//!
//! let json = r#"{
//!   "locations": { "X": { "x": 0, "y": 0 }, "Y": { "x": 3, "y": 0 } },
//!   "edges": [ { "from": "X", "to": "Y", "distance": 3, "time": 5, "fuel_cost": 0.3 } ]
//! }"#;
//!
//! let graph = BufReader::new(json.as_bytes()).read_graph()?;
//! let adjacency = AdjacencyIndex::new(&graph, Metric::Time)?;
//!
//! assert_eq!(shortest_path(&adjacency, "X", "Y").cost, 5.);
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod graph;
pub mod table;
