use serde::{Deserialize, Serialize};

/// Per-round output and the shape of the published per-contest document:
/// the expected rank at each rating-band checkpoint plus one performance per
/// rank position, rank 1 first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestPerformances {
    pub borders: Vec<f64>,
    pub perfs: Vec<i32>
}
