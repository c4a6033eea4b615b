//! Contains json representations of command results.

use courier_core::models::Metric;
use courier_core::routing::{Route, SequencedRoute};
use courier_core::utils::Float;
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};

/// A route between two locations.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    /// A metric used as a cost.
    pub metric: String,
    /// Total cost, absent when there is no route.
    pub cost: Option<Float>,
    /// Location names in visiting order.
    pub path: Vec<String>,
}

impl RouteResult {
    /// Creates a new instance of `RouteResult`.
    pub fn new(metric: Metric, route: &Route) -> Self {
        Self { metric: metric.to_string(), cost: route.cost.is_finite().then_some(route.cost), path: route.path.clone() }
    }
}

/// A multi-stop route.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SequenceResult {
    /// A metric used as a cost.
    pub metric: String,
    /// Total cost, absent when stops cannot be connected.
    pub cost: Option<Float>,
    /// Stops in visiting order.
    pub stops: Vec<String>,
    /// The full road path.
    pub path: Vec<String>,
}

impl SequenceResult {
    /// Creates a new instance of `SequenceResult`.
    pub fn new(metric: Metric, route: &SequencedRoute) -> Self {
        Self {
            metric: metric.to_string(),
            cost: route.cost.is_finite().then_some(route.cost),
            stops: route.stops.clone(),
            path: route.path.clone(),
        }
    }
}

/// A route derived from a policy together with the exact shortest route to compare with.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PolicyResult {
    /// A route derived from the policy.
    pub route: RouteResult,
    /// The shortest route.
    pub shortest: RouteResult,
}

/// A result of the training.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainResult {
    /// Amount of trained episodes.
    pub episodes: usize,
    /// Mean total reward of the last episodes.
    pub mean_reward: Option<Float>,
    /// Amount of entries in the trained table.
    pub table_size: usize,
    /// A path of the saved table.
    pub table_path: String,
    /// Routes of the trained policy.
    #[serde(flatten)]
    pub policy: PolicyResult,
}

/// Serializes the result in json format into `BufWriter`.
pub fn serialize_result<T: Serialize, W: Write>(result: &T, mut writer: BufWriter<W>) -> Result<(), String> {
    serde_json::to_writer_pretty(&mut writer, result)
        .map_err(|err| format!("cannot serialize result: '{err}'"))
        .and_then(|_| writer.flush().map_err(|err| err.to_string()))
}
