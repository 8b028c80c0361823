//! # poker_odds
//!
//! Hand ranking and Monte Carlo odds for Texas Hold'em decision agents.
//!
//! The crate turns any set of five or more cards into a single totally
//! ordered [`HandScore`], and estimates from partial board knowledge how
//! often a hand holds up against unknown opponents. Decision agents use the
//! win ratio to size bets; replay tools use the category names to label
//! recorded hands.
//!
//! ## How it works
//!
//! 1. Parse cards from their `<rank><suit>` text (`"Ah"`, `"Td"`, `"2c"`).
//! 2. [`evaluate_hand`] runs one detector per category, strongest first, and
//!    returns `tier * TIER_STEP + kicker`. Comparing two scores compares the
//!    hands.
//! 3. [`estimate_win_ratio`] samples opponents' hole cards and the missing
//!    board without replacement, and counts how often no opponent scores
//!    higher. [`should_bluff`] samples hypothetical hands and compares a
//!    reference percentile against the mean.
//!
//! ## Key features
//!
//! - **Injectable randomness**: every estimator takes `&mut impl Rng`; the
//!   request entry points take `rng_seed: Option<u64>`.
//! - **Stateless**: nothing survives between calls.
//! - **Bounded**: a [`TrialBudget`] can stop a run at a deadline or on a
//!   cancellation flag.
//!
//! ## Quick start
//!
//! ```rust
//! use poker_odds::{
//!     estimate_win_ratio, evaluate_hand, parse_card_list, EquityConfig, HandCategory,
//! };
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let hole = parse_card_list("Ah Kh").unwrap();
//! let board = parse_card_list("Qh Jh Th").unwrap();
//!
//! let cards: Vec<_> = hole.iter().chain(&board).copied().collect();
//! let score = evaluate_hand(&cards).unwrap();
//! assert_eq!(score.category(), HandCategory::StraightFlush);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let ratio = estimate_win_ratio(&mut rng, &hole, &board, 3, &EquityConfig::with_trials(100)).unwrap();
//! assert_eq!(ratio, 1.0);
//! ```

pub mod odds_engine;

// Convenience re-exports so callers can use `poker_odds::evaluate_hand`
// directly without reaching into `odds_engine::`.
pub use odds_engine::{
    bluff_report, build_deck, categorize, display_name, draw_cards, estimate_equity,
    estimate_win_ratio, evaluate_hand, evaluate_texts, label_at_street, label_hand,
    label_recorded, parse_card, parse_card_list, parse_cards, run_bluff, run_equity,
    should_bluff, BluffConfig, BluffReport, BluffRequest, Card, Deck, EquityConfig,
    EquityRequest, EquityResult, HandCategory, HandScore, OddsConfig, OddsError, Rank,
    Result, Street, Suit, TrialBudget,
};
