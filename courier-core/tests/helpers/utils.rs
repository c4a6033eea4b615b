use crate::utils::{DefaultRandom, Float, Random};
use std::cell::RefCell;
use std::sync::Arc;

pub fn create_test_random() -> Arc<dyn Random> {
    Arc::new(DefaultRandom::new_repeatable(42))
}

struct FakeDistribution<T> {
    values: Vec<T>,
}

impl<T> FakeDistribution<T> {
    pub fn new(values: Vec<T>) -> Self {
        let mut values = values;
        values.reverse();
        Self { values }
    }

    pub fn next(&mut self) -> T {
        self.values.pop().expect("no more fake values")
    }
}

/// Returns scripted values in the order they were given.
pub struct FakeRandom {
    ints: RefCell<FakeDistribution<i32>>,
    reals: RefCell<FakeDistribution<Float>>,
}

impl FakeRandom {
    pub fn new(ints: Vec<i32>, reals: Vec<Float>) -> Self {
        Self { ints: RefCell::new(FakeDistribution::new(ints)), reals: RefCell::new(FakeDistribution::new(reals)) }
    }
}

impl Random for FakeRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        assert!(min <= max);
        let value = self.ints.borrow_mut().next();
        assert!(value >= min && value <= max, "fake value {value} is out of [{min}, {max}]");

        value
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        assert!(min < max);
        self.reals.borrow_mut().next()
    }
}
