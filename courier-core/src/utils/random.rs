#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use std::cell::RefCell;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: Float) -> bool {
        self.uniform_real(0., 1.) < probability.clamp(0., 1.)
    }

    /// Returns a random index in the range [0, size). `size` must be positive.
    fn uniform_index(&self, size: usize) -> usize {
        assert!(size > 0);
        self.uniform_int(0, size as i32 - 1) as usize
    }
}

/// A default random implementation which owns its own generator stream: two instances never share
/// a state, so independent policies stay independent and seeded runs are repeatable.
pub struct DefaultRandom {
    rng: RefCell<SmallRng>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` with a generator seeded by the given value.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { rng: RefCell::new(SmallRng::seed_from_u64(seed)) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: RefCell::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.rng.borrow_mut().gen_range(min..=max)
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.rng.borrow_mut().gen_range(min..max)
    }

    fn is_hit(&self, probability: Float) -> bool {
        self.rng.borrow_mut().gen_bool(probability.clamp(0., 1.))
    }
}
