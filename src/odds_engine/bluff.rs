//! Bluff signal from a sample of hypothetical hands.
//!
//! Every trial deals a fresh pair of hole cards from the unknown deck and
//! completes the board, then scores that hand. With the scores sorted from
//! best to worst, the hand at `percentile_index` is the reference. Bluffing
//! is suggested when the reference, divided by `divisor`, still beats the
//! mean of all sampled scores and the reference is better than a bare
//! straight-tier minimum.

use log::{debug, trace, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::odds_engine::{
    budget::TrialBudget,
    config::BluffConfig,
    equity::{complete_board, known_deck, showdown_score, BOARD_CARDS, HOLE_CARDS},
    error::{OddsError, Result},
    models::{Card, HandCategory, HandScore},
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BluffReport {
    /// Score at `percentile_index` in the descending sample.
    pub reference: HandScore,
    /// Mean sampled score.
    pub average: f64,
    pub trials: usize,
    pub should_bluff: bool,
}

/// Boolean bluff signal using the trial count, percentile and divisor in `config`.
pub fn should_bluff<R: Rng>(
    rng: &mut R,
    hole: &[Card],
    community: &[Card],
    config: &BluffConfig,
) -> Result<bool> {
    bluff_report(rng, hole, community, config, &config.budget()).map(|r| r.should_bluff)
}

/// Run the bluff sample under `budget`; `config` supplies the percentile
/// index and divisor.
pub fn bluff_report<R: Rng>(
    rng: &mut R,
    hole: &[Card],
    community: &[Card],
    config: &BluffConfig,
    budget: &TrialBudget<'_>,
) -> Result<BluffReport> {
    if budget.trials() == 0 {
        return Err(OddsError::NoTrials);
    }
    if config.percentile_index >= budget.trials() {
        return Err(OddsError::PercentileOutOfRange {
            index: config.percentile_index,
            trials: budget.trials(),
        });
    }
    if !(config.divisor.is_finite() && config.divisor > 0.0) {
        return Err(OddsError::InvalidDivisor(config.divisor));
    }

    let base = known_deck(hole, community)?;
    let needed = HOLE_CARDS + (BOARD_CARDS - community.len());
    if needed > base.len() {
        return Err(OddsError::DeckExhausted { requested: needed, remaining: base.len() });
    }

    debug!(
        "bluff: hole={:?} board={:?} trials={} index={} divisor={}",
        hole, community, budget.trials(), config.percentile_index, config.divisor
    );

    let mut scores = Vec::with_capacity(budget.trials());
    while scores.len() < budget.trials() {
        if budget.interrupted() {
            warn!("bluff: interrupted after {}/{} trials", scores.len(), budget.trials());
            break;
        }
        let mut deck = base.clone();
        let sampled = deck.draw(rng, HOLE_CARDS)?;
        let board = complete_board(rng, &mut deck, community)?;
        let score = showdown_score(&sampled, &board)?;
        trace!("bluff: trial {} score={score}", scores.len());
        scores.push(score);
    }

    if scores.is_empty() {
        return Err(OddsError::Interrupted);
    }
    if config.percentile_index >= scores.len() {
        return Err(OddsError::PercentileOutOfRange {
            index: config.percentile_index,
            trials: scores.len(),
        });
    }

    scores.sort_unstable_by(|a, b| b.cmp(a));
    let reference = scores[config.percentile_index];
    let average = scores.iter().map(|s| s.value() as f64).sum::<f64>() / scores.len() as f64;
    let should_bluff = reference.value() as f64 / config.divisor > average
        && reference > HandCategory::Straight.base();

    debug!("bluff: reference={reference} average={average:.0} bluff={should_bluff}");
    Ok(BluffReport { reference, average, trials: scores.len(), should_bluff })
}
