#[cfg(test)]
#[path = "../../tests/unit/utils/comparison_test.rs"]
mod comparison_test;

use crate::utils::Float;
use std::cmp::Ordering;

/// Compares floating point numbers. `NaN` is considered greater than any other value.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}
