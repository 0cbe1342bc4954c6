use crate::model::constants::DECAY_FACTOR;

/// Correction subtracted from the decayed performance average before a
/// rating is published. Exactly 1200 after a single round and shrinking
/// toward zero as rounds accumulate, it keeps newcomers from debuting with
/// an established-looking rating.
pub fn participation_adjustment(rounds: usize) -> f64 {
    assert!(rounds > 0, "Expected at least one rated round");

    let decay = DECAY_FACTOR.powi(rounds as i32);
    let decay_squared = (DECAY_FACTOR * DECAY_FACTOR).powi(rounds as i32);

    1200.0 * (((1.0 - decay_squared).sqrt() / (1.0 - decay)) - 1.0) / (19.0_f64.sqrt() - 1.0)
}

/// Published form of an inner rating. Values of 400 and above pass through;
/// below that the scale is compressed exponentially so published ratings
/// stay positive no matter how far the inner value drops.
pub fn displayed_rating(real: f64) -> f64 {
    if real >= 400.0 {
        real
    } else {
        400.0 / ((400.0 - real) / 400.0).exp()
    }
}

/// Inverse of `displayed_rating`. The replay itself never needs it, priors
/// stay on the inner scale throughout, but consumers that only hold
/// published values use this to get back.
pub fn real_rating_from_displayed(displayed: f64) -> f64 {
    if displayed >= 400.0 {
        displayed
    } else {
        400.0 * (1.0 - (400.0 / displayed).ln())
    }
}
