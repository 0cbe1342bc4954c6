use indexmap::IndexMap;
use itertools::Itertools;
use tracing::{debug, warn};

use crate::{
    model::{
        constants::DEFAULT_RATING,
        performance::round_performances,
        rating_tracker::RatingTracker,
        structures::{contest::Contest, era::Era, performances::ContestPerformances},
        ProcessorError
    },
    utils::progress_utils::progress_bar
};

/// Replays an ordered contest history, deriving each round's performances
/// and borders from the priors accumulated over all earlier rounds.
pub struct AmrModel {
    pub rating_tracker: RatingTracker
}

impl Default for AmrModel {
    fn default() -> Self {
        Self::new()
    }
}

impl AmrModel {
    pub fn new() -> AmrModel {
        AmrModel {
            rating_tracker: RatingTracker::new()
        }
    }

    /// Processes every contest and returns the per-round results keyed by
    /// slug, in input order.
    ///
    /// Order is load-bearing: each round's priors are the histories folded
    /// over all earlier rounds, so the input must be ascending by end time
    /// (slug breaking ties). Out-of-order input fails up front instead of
    /// silently shifting every later rating.
    pub fn process(&mut self, contests: &[Contest]) -> Result<IndexMap<String, ContestPerformances>, ProcessorError> {
        self.validate_ordering(contests)?;

        let bar = progress_bar(contests.len() as u64, "Processing contests".to_string());
        let mut results = IndexMap::with_capacity(contests.len());

        for contest in contests {
            let performances = self.process_contest(contest)?;
            results.insert(contest.slug.clone(), performances);

            if let Some(bar) = &bar {
                bar.inc(1);
            }
        }

        Ok(results)
    }

    /// # Contest processing
    ///
    /// Steps, per round:
    /// 1. Validate the standings (non-empty, duplicate-free).
    /// 2. Resolve one rating prior per participant, in rank order.
    /// 3. Run the numeric stage over the anonymous prior population to get
    ///    per-rank performances and borders.
    /// 4. Legacy rounds predate real priors, so the flat-prior pass is only
    ///    a bootstrap: rerun the numeric stage with the first-pass
    ///    performances standing in as the population and publish that.
    /// 5. For rated rounds, join performances back to the users occupying
    ///    each rank and append them to the tracked histories.
    fn process_contest(&mut self, contest: &Contest) -> Result<ContestPerformances, ProcessorError> {
        self.validate_standings(contest)?;

        let priors = self.resolve_priors(contest);
        let first_pass = round_performances(&priors)?;

        let performances = match Era::from_start_time(contest.start_time) {
            Era::Legacy => {
                debug!("re-basing legacy contest {} on its first-pass performances", contest.slug);
                let rebased: Vec<f64> = first_pass.perfs.iter().map(|&perf| f64::from(perf)).collect();
                round_performances(&rebased)?
            }
            Era::Current => first_pass
        };

        if contest.rated {
            for (user, perf) in contest.standings.iter().zip(&performances.perfs) {
                self.rating_tracker.record_performance(user, *perf);
            }
        }

        debug!(
            "processed {}: {} participants, rated = {}",
            contest.slug,
            performances.perfs.len(),
            contest.rated
        );

        Ok(performances)
    }

    /// One prior per participant, in rank order. Authority-published ratings
    /// take precedence, but only where they are trustworthy: rated rounds
    /// after the legacy era. Anyone the authority has not seen starts from
    /// the scale center. Everywhere else the locally tracked histories
    /// supply the prior.
    fn resolve_priors(&self, contest: &Contest) -> Vec<f64> {
        let authority = match (
            &contest.authority_ratings,
            contest.rated,
            Era::from_start_time(contest.start_time)
        ) {
            (Some(ratings), true, Era::Current) => Some(ratings),
            (Some(_), _, _) => {
                warn!(
                    "ignoring authority ratings for {}: only rated rounds after the legacy era use them",
                    contest.slug
                );
                None
            }
            (None, _, _) => None
        };

        contest
            .standings
            .iter()
            .map(|user| match authority {
                Some(ratings) => ratings.get(user).copied().unwrap_or(DEFAULT_RATING),
                None => self.rating_tracker.current_rating(user)
            })
            .collect()
    }

    fn validate_standings(&self, contest: &Contest) -> Result<(), ProcessorError> {
        if contest.standings.is_empty() {
            return Err(ProcessorError::EmptyStandings {
                contest: contest.slug.clone()
            });
        }

        if let Some(user) = contest.standings.iter().duplicates().next() {
            return Err(ProcessorError::DuplicateParticipant {
                contest: contest.slug.clone(),
                user: user.clone()
            });
        }

        Ok(())
    }

    fn validate_ordering(&self, contests: &[Contest]) -> Result<(), ProcessorError> {
        for (previous, current) in contests.iter().tuple_windows() {
            if (current.end_time, current.slug.as_str()) <= (previous.end_time, previous.slug.as_str()) {
                return Err(ProcessorError::OrderingViolation {
                    previous: previous.slug.clone(),
                    current: current.slug.clone()
                });
            }
        }

        Ok(())
    }
}
