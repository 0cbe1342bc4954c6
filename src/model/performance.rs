use crate::model::{
    constants::{BORDER_COUNT, BORDER_STEP, PERF_SEARCH_LOWER, PERF_SEARCH_UPPER, PERF_TOLERANCE},
    rank_estimator::RankEstimator,
    structures::performances::ContestPerformances,
    ProcessorError
};

/// Recovers the performance whose expected rank equals `target_rank` by
/// bisecting the search interval until it is narrower than half a rating
/// point, then rounding the midpoint. Relies on `expected_rank` being
/// strictly decreasing: ranks above the target mean the probe was too strong.
pub fn solve_performance(estimator: &mut RankEstimator, target_rank: usize) -> i32 {
    let target = target_rank as f64;
    let mut lower = PERF_SEARCH_LOWER;
    let mut upper = PERF_SEARCH_UPPER;

    while upper - lower > PERF_TOLERANCE {
        let mid = (upper + lower) / 2.0;
        if target > estimator.expected_rank(mid) {
            upper = mid;
        } else {
            lower = mid;
        }
    }

    ((upper + lower) / 2.0).round() as i32
}

/// Expected rank at every rating-band checkpoint (400, 800, ..., 2800): the
/// rank a participant performing exactly on the band boundary would be
/// expected to take. The frontend draws these as horizontal color borders on
/// the standings chart.
pub fn rating_borders(estimator: &mut RankEstimator) -> Vec<f64> {
    (1..=BORDER_COUNT)
        .map(|step| estimator.expected_rank(step as f64 * BORDER_STEP))
        .collect()
}

/// Full numeric stage for one round: a performance per rank position (rank 1
/// first) plus the border set, evaluated against an anonymous copy of the
/// prior population. Which user occupies which rank is none of this
/// function's business; the pipeline joins identities back afterwards.
pub fn round_performances(population: &[f64]) -> Result<ContestPerformances, ProcessorError> {
    let mut anonymous = population.to_vec();
    anonymous.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let mut estimator = RankEstimator::new(anonymous)?;
    let perfs = (1..=estimator.population_len())
        .map(|rank| solve_performance(&mut estimator, rank))
        .collect();
    let borders = rating_borders(&mut estimator);

    Ok(ContestPerformances { borders, perfs })
}
