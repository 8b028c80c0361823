//! Uniform sampling without replacement from a [`Deck`].

use rand::Rng;

use crate::odds_engine::{
    deck::Deck,
    error::{OddsError, Result},
    models::Card,
};

impl Deck {
    /// Draw `n` distinct cards uniformly at random, removing them from the deck.
    ///
    /// Fails with [`OddsError::DeckExhausted`] before touching the deck or the
    /// RNG if fewer than `n` cards remain.
    pub fn draw<R: Rng>(&mut self, rng: &mut R, n: usize) -> Result<Vec<Card>> {
        if n > self.len() {
            return Err(OddsError::DeckExhausted { requested: n, remaining: self.len() });
        }
        let drawn = (0..n)
            .map(|_| {
                let idx = rng.gen_range(0..self.len());
                self.take(idx)
            })
            .collect();
        Ok(drawn)
    }
}

/// Functional form of [`Deck::draw`]: returns the drawn cards and the
/// deck that remains.
pub fn draw_cards<R: Rng>(rng: &mut R, mut deck: Deck, n: usize) -> Result<(Vec<Card>, Deck)> {
    let cards = deck.draw(rng, n)?;
    Ok((cards, deck))
}
