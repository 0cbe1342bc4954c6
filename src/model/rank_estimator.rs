use std::collections::HashMap;

use crate::model::{
    constants::{RATING_SCALE, WIN_PROBABILITY_BASE},
    ProcessorError
};

/// Expected-rank evaluator over one fixed rating population.
///
/// The performance solver probes the same handful of points thousands of
/// times per round, so evaluations are memoized. The memo is keyed by the
/// probe's bit pattern and lives exactly as long as the population it was
/// computed against; a new round means a new estimator.
pub struct RankEstimator {
    population: Vec<f64>,
    memo: HashMap<u64, f64>
}

impl RankEstimator {
    pub fn new(population: Vec<f64>) -> Result<RankEstimator, ProcessorError> {
        if population.is_empty() {
            return Err(ProcessorError::EmptyPopulation);
        }

        Ok(RankEstimator {
            population,
            memo: HashMap::new()
        })
    }

    /// Expected 1-indexed rank of a performance at level `x` against the
    /// population: `0.5 + sum(1 / (1 + 6^((x - r) / 400)))` over every
    /// population rating `r`. Each term is the probability the opponent
    /// places above `x`, so the sum is strictly decreasing in `x`.
    pub fn expected_rank(&mut self, x: f64) -> f64 {
        if let Some(&rank) = self.memo.get(&x.to_bits()) {
            return rank;
        }

        let mut rank = 0.5;
        for rating in &self.population {
            rank += 1.0 / (1.0 + WIN_PROBABILITY_BASE.powf((x - rating) / RATING_SCALE));
        }

        self.memo.insert(x.to_bits(), rank);
        rank
    }

    pub fn population_len(&self) -> usize {
        self.population.len()
    }
}
