//! Monte Carlo win-probability estimate against random opponents.
//!
//! Each trial deals two hidden cards to every opponent and completes the
//! board from what is left of the deck, then compares showdown scores. A
//! trial is a win when no opponent scores strictly higher; ties count as wins.

use log::{debug, trace, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::odds_engine::{
    budget::TrialBudget,
    config::EquityConfig,
    deck::Deck,
    error::{OddsError, Result},
    evaluator::{check_distinct, evaluate_hand},
    models::{Card, HandScore},
};

pub const HOLE_CARDS: usize = 2;
pub const BOARD_CARDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityResult {
    pub wins: usize,
    /// Trials actually run; lower than requested when interrupted.
    pub trials: usize,
    pub ratio: f64,
}

/// Estimate the probability that `hole` is not beaten by any of `opponents`.
pub fn estimate_win_ratio<R: Rng>(
    rng: &mut R,
    hole: &[Card],
    community: &[Card],
    opponents: usize,
    config: &EquityConfig,
) -> Result<f64> {
    estimate_equity(rng, hole, community, opponents, &config.budget()).map(|r| r.ratio)
}

/// Full form of [`estimate_win_ratio`] with an explicit trial budget.
pub fn estimate_equity<R: Rng>(
    rng: &mut R,
    hole: &[Card],
    community: &[Card],
    opponents: usize,
    budget: &TrialBudget<'_>,
) -> Result<EquityResult> {
    if budget.trials() == 0 {
        return Err(OddsError::NoTrials);
    }
    let base = known_deck(hole, community)?;

    if opponents == 0 {
        debug!("equity: no opponents, {} trials trivially won", budget.trials());
        return Ok(EquityResult { wins: budget.trials(), trials: budget.trials(), ratio: 1.0 });
    }

    let needed = opponents * HOLE_CARDS + (BOARD_CARDS - community.len());
    if needed > base.len() {
        return Err(OddsError::DeckExhausted { requested: needed, remaining: base.len() });
    }

    debug!(
        "equity: hole={:?} board={:?} opponents={opponents} trials={}",
        hole, community, budget.trials()
    );

    let mut wins = 0;
    let mut trials = 0;
    while trials < budget.trials() {
        if budget.interrupted() {
            warn!("equity: interrupted after {trials}/{} trials", budget.trials());
            break;
        }
        let won = run_trial(rng, &base, hole, community, opponents)?;
        trace!("equity: trial {trials} won={won}");
        wins += won as usize;
        trials += 1;
    }

    if trials == 0 {
        return Err(OddsError::Interrupted);
    }
    let ratio = wins as f64 / trials as f64;
    debug!("equity: {wins}/{trials} wins, ratio={ratio:.3}");
    Ok(EquityResult { wins, trials, ratio })
}

/// Validate the known cards and build the deck of everything else.
pub(crate) fn known_deck(hole: &[Card], community: &[Card]) -> Result<Deck> {
    if hole.len() != HOLE_CARDS {
        return Err(OddsError::WrongHoleCardCount(hole.len()));
    }
    if community.len() > BOARD_CARDS {
        return Err(OddsError::TooManyCommunityCards(community.len()));
    }
    let known: Vec<Card> = hole.iter().chain(community).copied().collect();
    check_distinct(&known)?;
    Ok(Deck::without(&known))
}

/// Fill the board up to five cards from `deck`.
pub(crate) fn complete_board<R: Rng>(
    rng: &mut R,
    deck: &mut Deck,
    community: &[Card],
) -> Result<Vec<Card>> {
    let mut board = community.to_vec();
    board.extend(deck.draw(rng, BOARD_CARDS - community.len())?);
    Ok(board)
}

pub(crate) fn showdown_score(hole: &[Card], board: &[Card]) -> Result<HandScore> {
    let mut cards = Vec::with_capacity(hole.len() + board.len());
    cards.extend_from_slice(hole);
    cards.extend_from_slice(board);
    evaluate_hand(&cards)
}

/// One trial on a private copy of the deck.
fn run_trial<R: Rng>(
    rng: &mut R,
    base: &Deck,
    hole: &[Card],
    community: &[Card],
    opponents: usize,
) -> Result<bool> {
    let mut deck = base.clone();
    let hands = (0..opponents)
        .map(|_| deck.draw(rng, HOLE_CARDS))
        .collect::<Result<Vec<_>>>()?;
    let board = complete_board(rng, &mut deck, community)?;

    let own = showdown_score(hole, &board)?;
    for hand in &hands {
        if showdown_score(hand, &board)? > own {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odds_engine::models::parse_card_list;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::AtomicBool;
    use std::time::Instant;

    fn cards(text: &str) -> Vec<Card> {
        parse_card_list(text).unwrap()
    }

    #[test]
    fn zero_opponents_always_wins() {
        for trials in [1usize, 5, 100] {
            let mut rng = StdRng::seed_from_u64(trials as u64);
            let ratio = estimate_win_ratio(
                &mut rng, &cards("2c 7d"), &[], 0, &EquityConfig::with_trials(trials),
            ).unwrap();
            assert_eq!(ratio, 1.0);
        }
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let run = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            estimate_win_ratio(
                &mut rng, &cards("Ah Kd"), &cards("Qh 7c 2s"), 3, &EquityConfig::with_trials(200),
            ).unwrap()
        };
        assert_eq!(run(7), run(7));
    }

    #[test]
    fn ratio_is_a_probability() {
        let mut rng = StdRng::seed_from_u64(11);
        let result = estimate_equity(
            &mut rng, &cards("9c 4d"), &cards("Ks Qs 3h"), 4, &TrialBudget::new(300),
        ).unwrap();
        assert_eq!(result.trials, 300);
        assert!(result.wins <= result.trials);
        assert!((0.0..=1.0).contains(&result.ratio));
    }

    #[test]
    fn the_nuts_on_the_river_never_loses() {
        let mut rng = StdRng::seed_from_u64(5);
        let ratio = estimate_win_ratio(
            &mut rng, &cards("Ah Kh"), &cards("Qh Jh Th 2c 3d"), 5, &EquityConfig::with_trials(100),
        ).unwrap();
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn aces_beat_a_random_hand_most_of_the_time() {
        let mut rng = StdRng::seed_from_u64(2024);
        let ratio = estimate_win_ratio(
            &mut rng, &cards("As Ah"), &[], 1, &EquityConfig::with_trials(2000),
        ).unwrap();
        assert!(ratio > 0.75 && ratio < 0.95, "AA heads-up ratio {ratio}");
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = EquityConfig::default();
        assert!(matches!(
            estimate_win_ratio(&mut rng, &cards("Ah"), &[], 1, &config),
            Err(OddsError::WrongHoleCardCount(1))
        ));
        assert!(matches!(
            estimate_win_ratio(&mut rng, &cards("Ah Kh"), &cards("2c 3c 4c 5c 6c 7c"), 1, &config),
            Err(OddsError::TooManyCommunityCards(6))
        ));
        assert!(matches!(
            estimate_win_ratio(&mut rng, &cards("Ah Kh"), &cards("Ah 3c 4c"), 1, &config),
            Err(OddsError::DuplicateCard(_))
        ));
        assert!(matches!(
            estimate_win_ratio(&mut rng, &cards("Ah Kh"), &[], 1, &EquityConfig::with_trials(0)),
            Err(OddsError::NoTrials)
        ));
    }

    #[test]
    fn too_many_opponents_exhaust_the_deck_up_front() {
        let mut rng = StdRng::seed_from_u64(1);
        // 50 cards left: 23 opponents need 46 plus 5 board cards.
        match estimate_win_ratio(&mut rng, &cards("Ah Kh"), &[], 23, &EquityConfig::default()) {
            Err(OddsError::DeckExhausted { requested, remaining }) => {
                assert_eq!(requested, 51);
                assert_eq!(remaining, 50);
            }
            other => panic!("expected DeckExhausted, got {other:?}"),
        }
        // 22 opponents still fit.
        assert!(estimate_win_ratio(&mut rng, &cards("Ah Kh"), &[], 22, &EquityConfig::default()).is_ok());
    }

    #[test]
    fn expired_deadline_interrupts_before_first_trial() {
        let mut rng = StdRng::seed_from_u64(1);
        let budget = TrialBudget::new(100).with_deadline(Instant::now());
        assert!(matches!(
            estimate_equity(&mut rng, &cards("Ah Kh"), &[], 2, &budget),
            Err(OddsError::Interrupted)
        ));
    }

    #[test]
    fn cancelled_run_reports_zero_trials_as_interrupted() {
        let mut rng = StdRng::seed_from_u64(1);
        let flag = AtomicBool::new(true);
        let budget = TrialBudget::new(100).with_cancel(&flag);
        assert!(matches!(
            estimate_equity(&mut rng, &cards("Ah Kh"), &[], 2, &budget),
            Err(OddsError::Interrupted)
        ));
    }
}
