//! One detector per hand category.
//!
//! Every detector reads a [`HandProfile`] and returns `Some(score)` tagged with
//! its own tier, or `None` when the hand does not contain that category. The
//! detectors are independent of each other: a full house also "contains" a
//! pair, and the pair detector will say so. Priority is applied by the
//! evaluator, which walks [`DETECTORS`] from the strongest category down.

use crate::odds_engine::models::{Card, HandCategory, HandScore, Rank};

/// Rank and suit grouping of a set of cards.
///
/// Counts are kept in a fixed array indexed by the integer rank (2..=14).
#[derive(Debug, Clone)]
pub struct HandProfile {
    counts: [u8; 15],
    /// Every rank in the hand, highest first, duplicates kept.
    ranks: Vec<u8>,
    /// Ranks of each suit, highest first, indexed by [`Suit::index`].
    ///
    /// [`Suit::index`]: crate::odds_engine::models::Suit::index
    suited: [Vec<u8>; 4],
}

impl HandProfile {
    pub fn new(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        let mut suited: [Vec<u8>; 4] = Default::default();
        for c in cards {
            counts[c.rank.value() as usize] += 1;
            suited[c.suit.index()].push(c.rank.value());
        }

        let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        for s in &mut suited {
            s.sort_unstable_by(|a, b| b.cmp(a));
        }

        HandProfile { counts, ranks, suited }
    }

    pub fn count(&self, rank: u8) -> u8 {
        self.counts.get(rank as usize).copied().unwrap_or(0)
    }

    /// Ranks holding exactly `n` cards, highest first.
    fn ranks_with_count(&self, n: u8) -> impl Iterator<Item = u8> + '_ {
        Rank::all().rev().map(Rank::value).filter(move |&r| self.counts[r as usize] == n)
    }

    /// Ranks outside `exclude`, highest first, duplicates kept.
    fn rest<'a>(&'a self, exclude: &'a [u8]) -> impl Iterator<Item = u8> + 'a {
        self.ranks.iter().copied().filter(move |r| !exclude.contains(r))
    }

    /// Ranks of every suit holding at least five cards.
    fn flush_suits(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.suited.iter().filter(|s| s.len() >= 5).map(|s| s.as_slice())
    }
}

/// The detectors from strongest to weakest. High card is the fallback and
/// is not listed.
pub const DETECTORS: [(HandCategory, fn(&HandProfile) -> Option<HandScore>); 8] = [
    (HandCategory::StraightFlush, straight_flush),
    (HandCategory::FourOfAKind,   four_of_a_kind),
    (HandCategory::FullHouse,     full_house),
    (HandCategory::Flush,         flush),
    (HandCategory::Straight,      straight),
    (HandCategory::ThreeOfAKind,  three_of_a_kind),
    (HandCategory::TwoPair,       two_pair),
    (HandCategory::Pair,          one_pair),
];

/// Highest five-card run in `ranks` (any order, duplicates allowed).
///
/// An ace also plays as 1, so the wheel comes back as `[5, 4, 3, 2, 1]`.
pub fn highest_run(ranks: &[u8]) -> Option<[u8; 5]> {
    let mut distinct: Vec<u8> = ranks.to_vec();
    if distinct.contains(&Rank::ACE.value()) {
        distinct.push(1);
    }
    distinct.sort_unstable_by(|a, b| b.cmp(a));
    distinct.dedup();

    // Distinct and descending: a window is a run iff its ends differ by 4.
    distinct
        .windows(5)
        .find(|w| w[0] - w[4] == 4)
        .map(|w| [w[0], w[1], w[2], w[3], w[4]])
}

pub fn straight(p: &HandProfile) -> Option<HandScore> {
    highest_run(&p.ranks).map(|run| HandScore::new(HandCategory::Straight, &run))
}

/// Best flush among the suits with five or more cards.
pub fn flush(p: &HandProfile) -> Option<HandScore> {
    p.flush_suits()
        .map(|ranks| HandScore::new(HandCategory::Flush, ranks))
        .max()
}

/// A straight inside the cards of one flush suit, re-tagged from the
/// straight tier. An ace-high straight flush is still just a straight flush.
pub fn straight_flush(p: &HandProfile) -> Option<HandScore> {
    p.flush_suits()
        .filter_map(highest_run)
        .map(|run| HandScore::new(HandCategory::Straight, &run).retag(HandCategory::StraightFlush))
        .max()
}

pub fn four_of_a_kind(p: &HandProfile) -> Option<HandScore> {
    let quad = p.ranks_with_count(4).next()?;
    let mut ranks = vec![quad; 4];
    ranks.extend(p.rest(&[quad]).take(1));
    Some(HandScore::new(HandCategory::FourOfAKind, &ranks))
}

/// Highest triple plus the highest other rank with two or more cards, so a
/// second triple can serve as the pair.
pub fn full_house(p: &HandProfile) -> Option<HandScore> {
    let triple = Rank::all().rev().map(Rank::value).find(|&r| p.count(r) >= 3)?;
    let pair = Rank::all().rev().map(Rank::value).find(|&r| r != triple && p.count(r) >= 2)?;
    Some(HandScore::new(
        HandCategory::FullHouse,
        &[triple, triple, triple, pair, pair],
    ))
}

pub fn three_of_a_kind(p: &HandProfile) -> Option<HandScore> {
    let triple = p.ranks_with_count(3).next()?;
    let mut ranks = vec![triple; 3];
    ranks.extend(p.rest(&[triple]).take(2));
    Some(HandScore::new(HandCategory::ThreeOfAKind, &ranks))
}

pub fn two_pair(p: &HandProfile) -> Option<HandScore> {
    let mut pairs = p.ranks_with_count(2);
    let (high, low) = (pairs.next()?, pairs.next()?);
    let mut ranks = vec![high, high, low, low];
    ranks.extend(p.rest(&[high, low]).take(1));
    Some(HandScore::new(HandCategory::TwoPair, &ranks))
}

pub fn one_pair(p: &HandProfile) -> Option<HandScore> {
    let pair = p.ranks_with_count(2).next()?;
    let mut ranks = vec![pair, pair];
    ranks.extend(p.rest(&[pair]).take(3));
    Some(HandScore::new(HandCategory::Pair, &ranks))
}

/// Always matches.
pub fn high_card(p: &HandProfile) -> HandScore {
    HandScore::new(HandCategory::HighCard, &p.ranks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odds_engine::models::parse_card_list;

    fn profile(text: &str) -> HandProfile {
        HandProfile::new(&parse_card_list(text).unwrap())
    }

    #[test]
    fn wheel_plays_ace_low() {
        let s = straight(&profile("Ac 2d 3h 4s 5c")).unwrap();
        assert_eq!(s.category(), HandCategory::Straight);
        assert_eq!(s.kicker_ranks(), [5, 4, 3, 2, 1]);
    }

    #[test]
    fn higher_run_beats_wheel() {
        let s = straight(&profile("Ac 2d 3h 4s 5c 6d")).unwrap();
        assert_eq!(s.kicker_ranks(), [6, 5, 4, 3, 2]);

        let broadway = straight(&profile("Ac 2d 3h 4s 5c Kd Qh Js Tc")).unwrap();
        assert_eq!(broadway.kicker_ranks(), [14, 13, 12, 11, 10]);
    }

    #[test]
    fn straight_kicker_follows_the_matched_run() {
        // The run starts below the top card: K is not part of it.
        let s = straight(&profile("Kd 9c 8h 7s 6c 5d 2h")).unwrap();
        assert_eq!(s.kicker_ranks(), [9, 8, 7, 6, 5]);
    }

    #[test]
    fn no_straight_with_a_gap() {
        assert!(straight(&profile("2c 3d 4h 5s 7c 8d 9h")).is_none());
        assert!(straight(&profile("Qc Kd Ah 2s 3c")).is_none());
    }

    #[test]
    fn flush_uses_top_five_of_the_suit() {
        let s = flush(&profile("2h 5h 9h Jh Kh 3h Ac")).unwrap();
        assert_eq!(s.kicker_ranks(), [13, 11, 9, 5, 3]);
        assert!(flush(&profile("2h 5h 9h Jh Kc 3d Ac")).is_none());
    }

    #[test]
    fn flush_picks_the_stronger_suit_when_two_qualify() {
        let s = flush(&profile("2h 3h 4h 5h 7h 9s Ts Js Qs As")).unwrap();
        assert_eq!(s.kicker_ranks(), [14, 12, 11, 10, 9]);
    }

    #[test]
    fn straight_flush_needs_the_run_in_one_suit() {
        // Straight across suits plus an unrelated flush.
        let p = profile("5h 6h 7h 8c 9h Kh 2d");
        assert!(straight_flush(&p).is_none());
        assert!(straight(&p).is_some());
        assert!(flush(&p).is_some());

        let sf = straight_flush(&profile("5h 6h 7h 8h 9h Th 2d")).unwrap();
        assert_eq!(sf.category(), HandCategory::StraightFlush);
        assert_eq!(sf.kicker_ranks(), [10, 9, 8, 7, 6]);
    }

    #[test]
    fn steel_wheel() {
        let sf = straight_flush(&profile("Ad 2d 3d 4d 5d Kc")).unwrap();
        assert_eq!(sf.kicker_ranks(), [5, 4, 3, 2, 1]);
    }

    #[test]
    fn quads_take_the_best_side_card() {
        let s = four_of_a_kind(&profile("9c 9d 9h 9s 3c Kd 3h")).unwrap();
        assert_eq!(s.kicker_ranks(), [9, 9, 9, 9, 13]);
    }

    #[test]
    fn double_trips_make_a_full_house() {
        let s = full_house(&profile("7c 7d 7h 3c 3d 3s 9h")).unwrap();
        assert_eq!(s.kicker_ranks(), [7, 7, 7, 3, 3]);
    }

    #[test]
    fn full_house_takes_the_highest_pair() {
        let s = full_house(&profile("4c 4d 4h Qc Qd 8s 8h")).unwrap();
        assert_eq!(s.kicker_ranks(), [4, 4, 4, 12, 12]);
        assert!(full_house(&profile("4c 4d 4h Qc Jd 8s 2h")).is_none());
    }

    #[test]
    fn trips_two_pair_and_pair_kickers() {
        let t = three_of_a_kind(&profile("8c 8d 8h Ac 4d 3s 2h")).unwrap();
        assert_eq!(t.kicker_ranks(), [8, 8, 8, 14, 4]);

        let tp = two_pair(&profile("Jc Jd 4h 4c 6d 6s 2h")).unwrap();
        assert_eq!(tp.kicker_ranks(), [11, 11, 6, 6, 4]);

        let p = one_pair(&profile("Tc Td Ah 7c 4d 3s 2h")).unwrap();
        assert_eq!(p.kicker_ranks(), [10, 10, 14, 7, 4]);
    }

    #[test]
    fn high_card_takes_top_five() {
        let s = high_card(&profile("2c 9d 5h Jc 7d 8s Kc"));
        assert_eq!(s.category(), HandCategory::HighCard);
        assert_eq!(s.kicker_ranks(), [13, 11, 9, 8, 7]);
    }

    #[test]
    fn detector_list_is_strongest_first() {
        let tiers: Vec<HandCategory> = DETECTORS.iter().map(|(c, _)| *c).collect();
        let mut sorted = tiers.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(tiers, sorted);
        assert!(!tiers.contains(&HandCategory::HighCard));
    }
}
