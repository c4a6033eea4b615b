use crate::utils::Float;
use std::time::Instant;

/// Implements performance timer functionality.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns elapsed time in seconds as a floating number.
    pub fn elapsed_secs_as_float(&self) -> Float {
        (Instant::now() - self.start).as_secs_f64()
    }

    /// Returns elapsed time in milliseconds.
    pub fn elapsed_millis(&self) -> u128 {
        (Instant::now() - self.start).as_millis()
    }
}
