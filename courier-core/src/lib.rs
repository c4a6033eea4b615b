//! Core crate contains the routing decision engine to plan delivery routes over a small city road graph
//! using one of interchangeable cost metrics: distance, time or fuel cost.
//!
//! It consists of the following parts:
//! - **models**: locations, roads and the adjacency index built for the selected metric;
//! - **routing**: shortest path search between two locations and an exact multi-stop sequencer;
//! - **learning**: a delivery episode simulation and tabular q-learning policy trained against it;
//! - **algorithms**: reusable building blocks such as the MDP learning/policy strategies.
//!
//! # Examples
//!
//! ```
//! use courier_core::prelude::*;
//! use std::sync::Arc;
//!
//! let graph = Graph::new(
//!     vec![Location::new("X", 0., 0.), Location::new("Y", 3., 0.), Location::new("Z", 3., 4.)],
//!     vec![Edge::new("X", "Y", 3., 5., 0.3), Edge::new("Y", "Z", 4., 6., 0.4), Edge::new("X", "Z", 10., 9., 1.)],
//! )?;
//! let adjacency = Arc::new(AdjacencyIndex::new(&graph, Metric::Distance)?);
//!
//! let route = shortest_path(&adjacency, "X", "Z");
//! assert_eq!(route.cost, 7.);
//! assert_eq!(route.path, vec!["X", "Y", "Z"]);
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod learning;
pub mod models;
pub mod prelude;
pub mod routing;
pub mod utils;
