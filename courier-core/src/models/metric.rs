#[cfg(test)]
#[path = "../../tests/unit/models/metric_test.rs"]
mod metric_test;

use crate::utils::GenericError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Specifies which road weight is used as a cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Metric {
    /// A road length.
    #[default]
    Distance,
    /// A travel time.
    Time,
    /// A fuel cost.
    FuelCost,
}

impl Metric {
    /// Returns all supported metrics.
    pub fn all() -> &'static [Metric] {
        &[Metric::Distance, Metric::Time, Metric::FuelCost]
    }

    /// Returns a key used to refer to the metric in data files and command line.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Distance => "distance",
            Metric::Time => "time",
            Metric::FuelCost => "fuel_cost",
        }
    }
}

impl FromStr for Metric {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Metric::all()
            .iter()
            .find(|metric| metric.key() == value)
            .copied()
            .ok_or_else(|| {
                GenericError::Data(format!("unknown metric: '{value}', expected one of: distance, time, fuel_cost"))
            })
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
