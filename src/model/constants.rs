// Model constants
pub const K_FACTOR: f64 = 32.0;
pub const DEFAULT_RATING: i64 = 1800;
/// Rating gap (in points) at which the stronger side is expected to score ~0.91
pub const LOGISTIC_SCALE: f64 = 400.0;
pub const WIN: f64 = 1.0;
pub const DRAW: f64 = 0.5;
pub const LOSS: f64 = 0.0;
// Competition used for cross-country fixtures in the source data
pub const DEFAULT_CONTINENTAL_CONTEXT: &str = "Europe";
