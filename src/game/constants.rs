/// Value a correct expression must produce
pub const TARGET: f64 = 24.0;

/// Tolerance when comparing a result against [`TARGET`]
pub const TOLERANCE: f64 = 1e-9;

/// Number of digits dealt per round
pub const DIGIT_COUNT: usize = 4;
