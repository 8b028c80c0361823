use crate::odds_engine::{
    detectors::{high_card, HandProfile, DETECTORS},
    error::{OddsError, Result},
    models::{parse_cards, Card, HandCategory, HandScore},
};

/// Smallest hand the evaluator accepts.
pub const MIN_HAND_SIZE: usize = 5;

/// Score a hand of five or more cards.
///
/// Detectors run strongest category first and the first match wins; high
/// card is the fallback. For any two hands, the one with the higher score
/// wins at showdown and equal scores split.
pub fn evaluate_hand(cards: &[Card]) -> Result<HandScore> {
    if cards.len() < MIN_HAND_SIZE {
        return Err(OddsError::InsufficientCards(cards.len()));
    }
    check_distinct(cards)?;
    Ok(score_profile(&HandProfile::new(cards)))
}

/// Parse and score a hand given as card texts, e.g. `["Ah", "Kh", ...]`.
pub fn evaluate_texts<S: AsRef<str>>(texts: &[S]) -> Result<HandScore> {
    evaluate_hand(&parse_cards(texts)?)
}

/// Category of a hand of five or more cards.
pub fn categorize(cards: &[Card]) -> Result<HandCategory> {
    evaluate_hand(cards).map(HandScore::category)
}

pub(crate) fn score_profile(profile: &HandProfile) -> HandScore {
    DETECTORS
        .iter()
        .find_map(|(_, detect)| detect(profile))
        .unwrap_or_else(|| high_card(profile))
}

pub(crate) fn check_distinct(cards: &[Card]) -> Result<()> {
    for (i, card) in cards.iter().enumerate() {
        if cards[i + 1..].contains(card) {
            return Err(OddsError::DuplicateCard(*card));
        }
    }
    Ok(())
}
