//! Core odds engine: hand ranking, sampling and the two estimators.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Cards, ranks, suits, streets, hand categories and scores |
//! | `error`     | The crate error type |
//! | `deck`      | 52-card deck minus the known cards |
//! | `sampler`   | Uniform draws without replacement from a deck |
//! | `detectors` | One detector per hand category |
//! | `evaluator` | `evaluate_hand()`: strongest matching detector wins |
//! | `label`     | Display names, including "Royal Flush", and replay labelling |
//! | `config`    | Tunable estimator parameters, loadable from JSON |
//! | `budget`    | Trial count with optional deadline and cancellation |
//! | `equity`    | Monte Carlo win ratio against random opponents |
//! | `bluff`     | Bluff signal from a sample of hypothetical hands |
//! | `estimator` | Seeded request entry points for both estimators |

pub mod bluff;
pub mod budget;
pub mod config;
pub mod deck;
pub mod detectors;
pub mod equity;
pub mod error;
pub mod estimator;
pub mod evaluator;
pub mod label;
pub mod models;
pub mod sampler;

pub use bluff::{bluff_report, should_bluff, BluffReport};
pub use budget::TrialBudget;
pub use config::{BluffConfig, EquityConfig, OddsConfig};
pub use deck::{build_deck, Deck};
pub use equity::{estimate_equity, estimate_win_ratio, EquityResult};
pub use error::{OddsError, Result};
pub use estimator::{run_bluff, run_equity, BluffRequest, EquityRequest};
pub use evaluator::{categorize, evaluate_hand, evaluate_texts};
pub use label::{display_name, label_at_street, label_hand, label_recorded};
pub use models::{
    parse_card, parse_card_list, parse_cards, Card, HandCategory, HandScore, Rank, Street, Suit,
};
pub use sampler::draw_cards;
