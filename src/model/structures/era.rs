use chrono::{DateTime, FixedOffset};

use crate::model::constants::LEGACY_ERA_CUTOFF;

/// Partition of rounds around the introduction of real rating priors.
/// Legacy rounds started at or before the first rated round did, so every
/// participant carried the same flat prior and the raw performances need the
/// corrective re-basing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Era {
    Legacy,
    Current
}

impl Era {
    pub fn from_start_time(start_time: DateTime<FixedOffset>) -> Era {
        if start_time <= *LEGACY_ERA_CUTOFF {
            Era::Legacy
        } else {
            Era::Current
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cutoff_instant_itself_is_legacy() {
        assert_eq!(Era::from_start_time(*LEGACY_ERA_CUTOFF), Era::Legacy);
    }

    #[test]
    fn test_one_second_past_cutoff_is_current() {
        let start: DateTime<FixedOffset> = "2021-03-06T15:00:01+09:00".parse().unwrap();

        assert_eq!(Era::from_start_time(start), Era::Current);
    }

    #[test]
    fn test_earlier_rounds_are_legacy() {
        let start: DateTime<FixedOffset> = "2019-12-01T12:00:00+09:00".parse().unwrap();

        assert_eq!(Era::from_start_time(start), Era::Legacy);
    }

    #[test]
    fn test_comparison_honors_offsets() {
        // Same instant as the cutoff, expressed in UTC.
        let start: DateTime<FixedOffset> = "2021-03-06T06:00:00+00:00".parse().unwrap();

        assert_eq!(Era::from_start_time(start), Era::Legacy);
    }
}
