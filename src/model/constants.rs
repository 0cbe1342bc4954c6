use chrono::{DateTime, FixedOffset};
use lazy_static::lazy_static;

// Rating model constants
pub const WIN_PROBABILITY_BASE: f64 = 6.0;
pub const RATING_SCALE: f64 = 400.0;
// Center of the inner rating scale. The short-lived beta ratings published
// around the first rated round were centered at 1200 instead; priors here
// always live on the inner scale.
pub const DEFAULT_RATING: f64 = 1000.0;
pub const DECAY_FACTOR: f64 = 0.9;

// Performance solver search interval and precision
pub const PERF_SEARCH_LOWER: f64 = -2048.0;
pub const PERF_SEARCH_UPPER: f64 = 6144.0;
pub const PERF_TOLERANCE: f64 = 0.5;

// Rating-band checkpoints: 400, 800, ..., 2800
pub const BORDER_STEP: f64 = 400.0;
pub const BORDER_COUNT: usize = 7;

lazy_static! {
    /// Start instant of the first rated marathon round. Contests starting at
    /// or before this instant ran without a meaningful rating prior and get
    /// the corrective re-basing pass.
    pub static ref LEGACY_ERA_CUTOFF: DateTime<FixedOffset> = "2021-03-06T15:00:00+09:00"
        .parse()
        .expect("Expected a valid RFC 3339 cutoff instant");
}
