use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::odds_engine::error::{OddsError, Result};

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Slot of this suit in per-suit count arrays.
    pub fn index(self) -> usize {
        match self {
            Suit::Clubs    => 0,
            Suit::Diamonds => 1,
            Suit::Hearts   => 2,
            Suit::Spades   => 3,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs    => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts   => 'h',
            Suit::Spades   => 's',
        }
    }

    pub fn from_symbol(c: char) -> Option<Suit> {
        match c {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _   => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Rank 2..=14 where 14 = Ace. Only valid ranks can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const TWO: Rank = Rank(2);
    pub const ACE: Rank = Rank(14);

    /// `None` outside 2..=14.
    pub fn new(value: u8) -> Option<Rank> {
        (Self::TWO.0..=Self::ACE.0).contains(&value).then_some(Rank(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// All thirteen ranks, deuce first.
    pub fn all() -> impl DoubleEndedIterator<Item = Rank> {
        (Self::TWO.0..=Self::ACE.0).map(Rank)
    }

    pub fn symbol(self) -> char {
        match self.0 {
            2 => '2', 3 => '3', 4 => '4', 5 => '5', 6 => '6',
            7 => '7', 8 => '8', 9 => '9', 10 => 'T',
            11 => 'J', 12 => 'Q', 13 => 'K', 14 => 'A',
            _ => '?',
        }
    }

    pub fn from_symbol(c: char) -> Option<Rank> {
        let value = match c {
            '2'..='9' => c as u8 - b'0',
            'T' => 10,
            'J' => 11,
            'Q' => 12,
            'K' => 13,
            'A' => 14,
            _ => return None,
        };
        Some(Rank(value))
    }
}

impl TryFrom<u8> for Rank {
    type Error = OddsError;

    fn try_from(value: u8) -> Result<Self> {
        Rank::new(value).ok_or_else(|| OddsError::InvalidCardFormat(format!("rank {value}")))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> u8 {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card. Serialises as its canonical text, e.g. `"Ah"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = OddsError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(su), None) => {
                let rank = Rank::from_symbol(r);
                let suit = Suit::from_symbol(su);
                match (rank, suit) {
                    (Some(rank), Some(suit)) => Ok(Card { rank, suit }),
                    _ => Err(OddsError::InvalidCardFormat(s.to_string())),
                }
            }
            _ => Err(OddsError::InvalidCardFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for Card {
    type Error = OddsError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> String {
        card.to_string()
    }
}

/// Parse one card in `<rank><suit>` form, e.g. `"Th"`.
pub fn parse_card(text: &str) -> Result<Card> {
    text.parse()
}

/// Parse a sequence of card texts, failing on the first malformed one.
pub fn parse_cards<S: AsRef<str>>(texts: &[S]) -> Result<Vec<Card>> {
    texts.iter().map(|t| parse_card(t.as_ref())).collect()
}

/// Parse a free-form list such as `"Ah Kh, Qh"` (whitespace or comma separated).
pub fn parse_card_list(text: &str) -> Result<Vec<Card>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(parse_card)
        .collect()
}

// ---------------------------------------------------------------------------
// Betting rounds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// Community cards visible on this street.
    pub fn community_count(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop    => 3,
            Street::Turn    => 4,
            Street::River   => 5,
        }
    }

    /// The part of a full board that is visible on this street.
    pub fn visible_board(self, board: &[Card]) -> &[Card] {
        &board[..self.community_count().min(board.len())]
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Street::Preflop => write!(f, "pre-flop"),
            Street::Flop    => write!(f, "flop"),
            Street::Turn    => write!(f, "turn"),
            Street::River   => write!(f, "river"),
        }
    }
}

// ---------------------------------------------------------------------------
// Hand categories and scores
// ---------------------------------------------------------------------------

/// The nine hand categories in strength order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard = 0,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl HandCategory {
    pub const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    pub fn tier(self) -> u64 {
        self as u64
    }

    pub fn from_tier(tier: u64) -> Option<HandCategory> {
        Self::ALL.get(usize::try_from(tier).ok()?).copied()
    }

    /// Lowest score any hand of this category can have.
    pub fn base(self) -> HandScore {
        HandScore(self.tier() * HandScore::TIER_STEP)
    }

    pub fn label(self) -> &'static str {
        match self {
            HandCategory::HighCard      => "High Card",
            HandCategory::Pair          => "Pair",
            HandCategory::TwoPair       => "Two Pair",
            HandCategory::ThreeOfAKind  => "Three of a Kind",
            HandCategory::Straight      => "Straight",
            HandCategory::Flush         => "Flush",
            HandCategory::FullHouse     => "Full House",
            HandCategory::FourOfAKind   => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Totally ordered hand strength: `tier * TIER_STEP + kicker`.
///
/// The kicker packs up to five ranks most-significant first with base-100
/// weights, so it never exceeds `14 * 1_01_01_01_01 < TIER_STEP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandScore(pub u64);

impl HandScore {
    pub const TIER_STEP: u64 = 10_000_000_000;

    /// Positional weights for the five kicker slots.
    const WEIGHTS: [u64; 5] = [100_000_000, 1_000_000, 10_000, 100, 1];

    /// Tag a kicker built from `ranks` (most significant first) with a tier.
    /// Only the first five ranks count.
    pub fn new(category: HandCategory, ranks: &[u8]) -> Self {
        HandScore(category.tier() * Self::TIER_STEP + Self::kicker_of(ranks))
    }

    pub fn kicker_of(ranks: &[u8]) -> u64 {
        ranks.iter()
            .zip(Self::WEIGHTS)
            .map(|(&r, w)| r as u64 * w)
            .sum()
    }

    pub fn category(self) -> HandCategory {
        // Scores are only built through `new`, so the tier is always in range.
        HandCategory::from_tier(self.0 / Self::TIER_STEP).unwrap_or(HandCategory::StraightFlush)
    }

    pub fn kicker(self) -> u64 {
        self.0 % Self::TIER_STEP
    }

    /// Decode the kicker back into its five rank slots.
    pub fn kicker_ranks(self) -> [u8; 5] {
        let k = self.kicker();
        Self::WEIGHTS.map(|w| ((k / w) % 100) as u8)
    }

    /// The same kicker re-tagged with another category.
    pub fn retag(self, category: HandCategory) -> Self {
        HandScore(category.tier() * Self::TIER_STEP + self.kicker())
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
