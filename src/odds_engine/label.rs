//! Human-readable hand names for replay and display.
//!
//! The evaluator only knows the nine categories. The extra "Royal Flush"
//! name and the street-by-street labelling of recorded hands live here.

use crate::odds_engine::{
    detectors::HandProfile,
    error::{OddsError, Result},
    evaluator::{check_distinct, score_profile},
    models::{Card, HandCategory, HandScore, Rank, Street},
};

pub const ROYAL_FLUSH: &str = "Royal Flush";

/// Names a recorded hand may carry that are trusted as-is.
const TRUSTED_NAMES: [&str; 4] = [ROYAL_FLUSH, "Straight Flush", "Flush", "Straight"];

/// Display name of a score: the category label, or "Royal Flush" for an
/// ace-high straight flush.
pub fn display_name(score: HandScore) -> &'static str {
    let category = score.category();
    if category == HandCategory::StraightFlush && score.kicker_ranks()[0] == Rank::ACE.value() {
        ROYAL_FLUSH
    } else {
        category.label()
    }
}

/// Category of any non-empty set of cards, fewer than five included.
///
/// With two hole cards before the flop only a pair or high card is possible.
pub fn label_hand(cards: &[Card]) -> Result<HandCategory> {
    if cards.is_empty() {
        return Err(OddsError::InsufficientCards(0));
    }
    check_distinct(cards)?;
    Ok(score_profile(&HandProfile::new(cards)).category())
}

/// Label a recorded hand, keeping the recorded name when it is one of the
/// straight/flush names and recomputing it otherwise.
pub fn label_recorded(cards: &[Card], recorded: Option<&str>) -> Result<String> {
    match recorded {
        Some(name) if TRUSTED_NAMES.contains(&name) => Ok(name.to_string()),
        _ => label_hand(cards).map(|c| c.label().to_string()),
    }
}

/// Label a player's hand as it stood on `street`, given the full board.
pub fn label_at_street(hole: &[Card], board: &[Card], street: Street) -> Result<HandCategory> {
    let mut cards = hole.to_vec();
    cards.extend_from_slice(street.visible_board(board));
    label_hand(&cards)
}

/// Format cards as a space-separated string (e.g. "Ac Ks 7h").
pub fn cards_str(cards: &[Card]) -> String {
    cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}
