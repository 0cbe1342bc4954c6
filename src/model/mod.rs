use thiserror::Error;

pub mod amr_model;
pub mod constants;
pub mod performance;
pub mod rank_estimator;
pub mod rating_tracker;
pub mod rating_utils;
pub mod structures;

/// Contract violations surfaced by the numeric stage and the contest
/// pipeline. None of these are transient; each one means the input broke a
/// precondition and continuing would corrupt every later rating.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProcessorError {
    #[error("rating population is empty")]
    EmptyPopulation,

    #[error("contest {contest} has no participants")]
    EmptyStandings { contest: String },

    #[error("duplicate participant {user} in standings for contest {contest}")]
    DuplicateParticipant { contest: String, user: String },

    #[error("contest {current} does not end after {previous}; input must be ordered by end time, then slug")]
    OrderingViolation { previous: String, current: String }
}
