/// Alias to a scalar floating type used for costs, rewards and action estimates.
pub type Float = f64;
