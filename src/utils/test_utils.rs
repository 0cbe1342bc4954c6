use std::collections::HashMap;

use chrono::{DateTime, Duration, FixedOffset};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::model::structures::contest::Contest;

/// Rating population spread around `center`, reproducible across runs.
pub fn generate_population(size: usize, center: f64, spread: f64) -> Vec<f64> {
    // Seeded RNG for reproducible results
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    (0..size).map(|_| center + rng.random_range(-spread..=spread)).collect()
}

/// Standings of `size` users named user1..userN, rank 1 first.
pub fn generate_standings(size: usize) -> Vec<String> {
    (1..=size).map(|i| format!("user{i}")).collect()
}

pub fn generate_contest(
    slug: &str,
    start_time: DateTime<FixedOffset>,
    duration_hours: i64,
    rated: bool,
    standings: Vec<String>
) -> Contest {
    Contest {
        slug: slug.to_string(),
        name: slug.to_uppercase(),
        start_time,
        end_time: start_time + Duration::hours(duration_hours),
        rated,
        standings,
        authority_ratings: None
    }
}

/// Authority rating for every listed user, spread around `center`.
pub fn generate_authority_ratings(standings: &[String], center: f64) -> HashMap<String, f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    standings
        .iter()
        .map(|user| (user.clone(), center + rng.random_range(-400.0..=400.0)))
        .collect()
}

/// A start instant comfortably after the legacy era.
pub fn modern_start_time() -> DateTime<FixedOffset> {
    "2022-06-04T19:00:00+09:00".parse().unwrap()
}
