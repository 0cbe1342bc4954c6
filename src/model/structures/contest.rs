use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};

/// One contest round as the pipeline consumes it: the descriptor joined with
/// its final standings and, when the rating authority published values for
/// the round, the per-user rating map.
#[derive(Debug, Clone)]
pub struct Contest {
    pub slug: String,
    pub name: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    /// Whether results feed the tracked rating histories. Unrated rounds
    /// still get performances and borders published.
    pub rated: bool,
    /// User names in final standings order, rank 1 first.
    pub standings: Vec<String>,
    /// Ratings published by the external authority, keyed by user name.
    pub authority_ratings: Option<HashMap<String, f64>>
}
