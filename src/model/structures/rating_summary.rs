use serde::{Deserialize, Serialize};

/// Final per-user record in the exported rating map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    /// Decayed inner rating, exactly what a hypothetical next round would
    /// use as this user's prior.
    pub rating: f64,
    /// Published form: participation-adjusted and compressed below 400.
    pub displayed_rating: f64,
    /// Number of rated rounds in the history.
    pub contests: usize
}
