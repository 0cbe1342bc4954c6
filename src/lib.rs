//! Replay-side rating engine for marathon programming contests.
//!
//! Folds an ordered contest history into per-round performances and
//! rating-band borders, and tracks the decay-weighted user ratings that
//! become each following round's priors. The binary reads the crawler's
//! normalized data directory and writes the static JSON documents the
//! frontend serves.

pub mod args;
pub mod model;
pub mod store;
pub mod utils;
