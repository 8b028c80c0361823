use crate::odds_engine::models::{Card, Rank, Suit};

/// The cards still available to deal: the 52-card universe minus whatever
/// is already known (hole cards, visible board, previously drawn cards).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// A full, ordered 52-card deck.
    pub fn full() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::all().map(move |rank| Card { rank, suit }))
            .collect();
        Deck { cards }
    }

    /// The full deck minus `known`. Duplicates in `known` are not checked here.
    pub fn without(known: &[Card]) -> Self {
        let mut deck = Self::full();
        deck.cards.retain(|c| !known.contains(c));
        deck
    }

    /// Remaining cards available.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Take the card at `idx` out of the deck. Order is not preserved.
    pub(crate) fn take(&mut self, idx: usize) -> Card {
        self.cards.swap_remove(idx)
    }
}

/// Build the deck of cards not in `known_cards`.
pub fn build_deck(known_cards: &[Card]) -> Deck {
    Deck::without(known_cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odds_engine::models::parse_card_list;
    use std::collections::HashSet;

    #[test]
    fn full_deck_has_52_unique_cards() {
        let deck = Deck::full();
        assert_eq!(deck.len(), Deck::SIZE);
        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(unique.len(), Deck::SIZE);
    }

    #[test]
    fn known_cards_are_excluded() {
        let known = parse_card_list("Ah Kh Qh Jh Th").unwrap();
        let deck = build_deck(&known);
        assert_eq!(deck.len(), Deck::SIZE - known.len());
        for card in &known {
            assert!(!deck.contains(card), "{card} should have been removed");
        }
    }

    #[test]
    fn empty_known_set_gives_full_deck() {
        assert_eq!(build_deck(&[]), Deck::full());
    }
}
