use indexmap::IndexMap;

use crate::model::{
    constants::{DECAY_FACTOR, DEFAULT_RATING},
    rating_utils,
    structures::rating_summary::RatingSummary
};

pub struct RatingTracker {
    // Performance history per user, oldest round first. Users keep their
    // first-participation insertion order, which fixes the export order
    // across runs.
    histories: IndexMap<String, Vec<i32>>
}

impl Default for RatingTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RatingTracker {
    pub fn new() -> RatingTracker {
        RatingTracker {
            histories: IndexMap::new()
        }
    }

    /// Appends a realized performance to the user's history, creating the
    /// history on first participation.
    pub fn record_performance(&mut self, user: &str, perf: i32) {
        self.histories.entry(user.to_string()).or_default().push(perf);
    }

    /// Current rating estimate for the user: the weighted average of past
    /// performances where the newest round weighs 1.0 and every step back in
    /// time multiplies the weight by the decay factor. Users without any
    /// recorded history sit at the scale center.
    pub fn current_rating(&self, user: &str) -> f64 {
        match self.histories.get(user) {
            Some(history) => {
                let mut coefficient = 1.0;
                let mut numerator = 0.0;
                let mut denominator = 0.0;
                for perf in history.iter().rev() {
                    numerator += coefficient * f64::from(*perf);
                    denominator += coefficient;
                    coefficient *= DECAY_FACTOR;
                }

                assert!(
                    denominator > 0.0,
                    "Expected history for {} to carry weight",
                    user
                );
                numerator / denominator
            }
            None => DEFAULT_RATING
        }
    }

    pub fn history(&self, user: &str) -> Option<&[i32]> {
        self.histories.get(user).map(Vec::as_slice)
    }

    /// Builds the per-user export records, in first-participation order. The
    /// published value subtracts the participation correction and compresses
    /// the low end; the raw decayed estimate rides along unchanged since it
    /// is what the next round would use as a prior.
    pub fn rating_summaries(&self) -> IndexMap<String, RatingSummary> {
        self.histories
            .iter()
            .map(|(user, history)| {
                let rating = self.current_rating(user);
                let adjusted = rating - rating_utils::participation_adjustment(history.len());

                (
                    user.clone(),
                    RatingSummary {
                        rating,
                        displayed_rating: rating_utils::displayed_rating(adjusted),
                        contests: history.len()
                    }
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::model::rating_utils;

    #[test]
    fn test_unknown_user_sits_at_scale_center() {
        let rating_tracker = RatingTracker::new();

        assert_abs_diff_eq!(rating_tracker.current_rating("nobody"), DEFAULT_RATING);
    }

    #[test]
    fn test_single_performance_is_the_rating() {
        let mut rating_tracker = RatingTracker::new();
        rating_tracker.record_performance("alice", 1500);

        assert_abs_diff_eq!(rating_tracker.current_rating("alice"), 1500.0);
        assert_eq!(rating_tracker.history("alice"), Some([1500].as_slice()));
    }

    #[test]
    fn test_constant_history_keeps_its_value() {
        let mut rating_tracker = RatingTracker::new();
        for _ in 0..10 {
            rating_tracker.record_performance("bob", 2000);
        }

        assert_abs_diff_eq!(rating_tracker.current_rating("bob"), 2000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_decay_weights_favor_recent_rounds() {
        let mut rating_tracker = RatingTracker::new();
        rating_tracker.record_performance("carol", 100);
        rating_tracker.record_performance("carol", 200);

        // (1.0 * 200 + 0.9 * 100) / 1.9
        assert_abs_diff_eq!(
            rating_tracker.current_rating("carol"),
            290.0 / 1.9,
            epsilon = 1e-9
        );
        assert!(rating_tracker.current_rating("carol") > 150.0);
    }

    #[test]
    fn test_summaries_follow_first_participation_order() {
        let mut rating_tracker = RatingTracker::new();
        rating_tracker.record_performance("late", 1200);
        rating_tracker.record_performance("early", 900);
        rating_tracker.record_performance("late", 1400);

        let summaries = rating_tracker.rating_summaries();
        let users: Vec<&String> = summaries.keys().collect();

        assert_eq!(users, vec!["late", "early"]);
        assert_eq!(summaries["late"].contests, 2);
        assert_eq!(summaries["early"].contests, 1);
    }

    #[test]
    fn test_summary_publishes_adjusted_compressed_rating() {
        let mut rating_tracker = RatingTracker::new();
        rating_tracker.record_performance("dave", 1600);

        let summaries = rating_tracker.rating_summaries();
        let summary = &summaries["dave"];

        assert_abs_diff_eq!(summary.rating, 1600.0);
        // One round means the full 1200 correction applies before the
        // low-end compression.
        assert_abs_diff_eq!(
            summary.displayed_rating,
            rating_utils::displayed_rating(1600.0 - 1200.0),
            epsilon = 1e-9
        );
        assert!(summary.displayed_rating < 400.0);
        assert!(summary.displayed_rating > 0.0);
    }
}
