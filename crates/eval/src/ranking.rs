// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand rankings.
//!
//! Each [Ranking] knows how to check if a [Canonical] hand belongs to it and
//! how to describe it. For any canonical hand and any [Options] exactly one
//! ranking is valid.
use pokerhand_cards::Rank;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{canonical::Canonical, options::Options};

/// Pair signatures, the number of cards sharing the rank of each position.
const NO_PAIRS: [u8; 5] = [1, 1, 1, 1, 1];
const ONE_PAIR: [u8; 5] = [2, 2, 1, 1, 1];
const TWO_PAIR: [u8; 5] = [2, 2, 2, 2, 1];
const THREE_OF_A_KIND: [u8; 5] = [3, 3, 3, 1, 1];
const FULL_HOUSE: [u8; 5] = [3, 3, 3, 2, 2];
const FOUR_OF_A_KIND: [u8; 5] = [4, 4, 4, 4, 1];

/// One of the ten hand rankings, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ranking {
    /// No pairs, straights, or flushes, e.g. `AS KS JC 7H 5D`.
    HighCard = 0,
    /// A single pair, e.g. `AS AC KC JH 5D`.
    Pair,
    /// Two pairs, e.g. `AS AC JC JD 5D`.
    TwoPair,
    /// Three cards of the same rank, e.g. `AS AC AD JH 5D`.
    ThreeOfAKind,
    /// Five cards of consecutive rank, e.g. `AS KC QD JH TD`.
    Straight,
    /// Five cards of the same suit, e.g. `TS 7S 4S 3S 2S`.
    Flush,
    /// Three of a kind and a pair, e.g. `4S 4C 4D 2S 2H`.
    FullHouse,
    /// Four cards of the same rank, e.g. `AS AC AD AH 5H`.
    FourOfAKind,
    /// A straight of the same suit, e.g. `5H 4H 3H 2H AH`.
    StraightFlush,
    /// An ace high straight flush, e.g. `AH KH QH JH TH`.
    RoyalFlush,
}

impl Ranking {
    /// All rankings from the weakest to the strongest.
    pub const ALL: [Ranking; 10] = [
        Ranking::HighCard,
        Ranking::Pair,
        Ranking::TwoPair,
        Ranking::ThreeOfAKind,
        Ranking::Straight,
        Ranking::Flush,
        Ranking::FullHouse,
        Ranking::FourOfAKind,
        Ranking::StraightFlush,
        Ranking::RoyalFlush,
    ];

    /// Returns the ranking of a canonical hand.
    ///
    /// Panics if no ranking matches the hand, this is a defect in the
    /// rankings predicates.
    pub fn classify(hand: &Canonical, opts: &Options) -> Ranking {
        match Self::ALL.into_iter().find(|r| r.is_valid(hand, opts)) {
            Some(ranking) => ranking,
            None => panic!("No ranking for hand {hand} with {opts:?}"),
        }
    }

    /// The ranking strength, 0 for a high card up to 9 for a royal flush.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// The ranking name.
    pub fn name(&self) -> &'static str {
        match self {
            Ranking::HighCard => "high card",
            Ranking::Pair => "pair",
            Ranking::TwoPair => "two pair",
            Ranking::ThreeOfAKind => "three of a kind",
            Ranking::Straight => "straight",
            Ranking::Flush => "flush",
            Ranking::FullHouse => "full house",
            Ranking::FourOfAKind => "four of a kind",
            Ranking::StraightFlush => "straight flush",
            Ranking::RoyalFlush => "royal flush",
        }
    }

    /// Checks if a canonical hand has this ranking.
    pub fn is_valid(&self, hand: &Canonical, opts: &Options) -> bool {
        // A straight or flush that is ignored doesn't exclude other rankings.
        let straight = || !opts.ignore_straights && hand.has_straight();
        let flush = || !opts.ignore_flushes && hand.has_flush();

        match self {
            Ranking::HighCard => hand.has_pairs(NO_PAIRS) && !straight() && !flush(),
            Ranking::Pair => hand.has_pairs(ONE_PAIR),
            Ranking::TwoPair => hand.has_pairs(TWO_PAIR),
            Ranking::ThreeOfAKind => hand.has_pairs(THREE_OF_A_KIND),
            Ranking::Straight => straight() && !flush(),
            Ranking::Flush => flush() && !straight(),
            Ranking::FullHouse => hand.has_pairs(FULL_HOUSE),
            Ranking::FourOfAKind => hand.has_pairs(FOUR_OF_A_KIND),
            Ranking::StraightFlush => {
                straight() && flush() && hand.rank_at(0) != Some(Rank::Ace)
            }
            Ranking::RoyalFlush => straight() && flush() && hand.rank_at(0) == Some(Rank::Ace),
        }
    }

    /// Describes a canonical hand with this ranking, e.g. "full house kings
    /// full of sixes".
    pub fn describe(&self, hand: &Canonical) -> String {
        let singular = |pos: usize| hand.rank_at(pos).map_or("blank", |r| r.singular_name());
        let plural = |pos: usize| hand.rank_at(pos).map_or("blanks", |r| r.plural_name());

        match self {
            Ranking::HighCard => format!("high card {} high", singular(0)),
            Ranking::Pair => format!("pair of {}", plural(0)),
            Ranking::TwoPair => format!("two pair {} and {}", plural(0), plural(2)),
            Ranking::ThreeOfAKind => format!("three of a kind {}", plural(0)),
            Ranking::Straight => format!("straight {} high", singular(0)),
            Ranking::Flush => format!("flush {} high", singular(0)),
            Ranking::FullHouse => format!("full house {} full of {}", plural(0), plural(3)),
            Ranking::FourOfAKind => format!("four of a kind {}", plural(0)),
            Ranking::StraightFlush => format!("straight flush {} high", singular(0)),
            Ranking::RoyalFlush => "royal flush".to_string(),
        }
    }
}

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokerhand_cards::{Card, Deck};
    use rand::prelude::*;

    fn canonical(s: &str, opts: &Options) -> Canonical {
        let cards = s
            .split_whitespace()
            .map(|c| c.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        Canonical::new(&cards, opts)
    }

    fn all_options() -> impl Iterator<Item = Options> {
        (0..8u8).map(|bits| {
            Options::default()
                .with_ignore_straights(bits & 1 != 0)
                .with_ignore_flushes(bits & 2 != 0)
                .with_ace_is_low(bits & 4 != 0)
        })
    }

    fn assert_one_ranking(hand: &Canonical, opts: &Options) -> Ranking {
        let valid = Ranking::ALL
            .into_iter()
            .filter(|r| r.is_valid(hand, opts))
            .collect::<Vec<_>>();
        assert_eq!(valid.len(), 1, "{hand} {opts:?} matches {valid:?}");
        valid[0]
    }

    #[test]
    fn rankings_order() {
        assert!(Ranking::ALL.windows(2).all(|w| w[0] < w[1]));
        assert!(Ranking::ALL.iter().enumerate().all(|(i, r)| r.value() as usize == i));
        assert_eq!(Ranking::FullHouse.to_string(), "full house");
    }

    #[test]
    fn classify_examples() {
        let opts = Options::default();
        [
            ("AS KS JC 7H 5D", Ranking::HighCard, "high card ace high"),
            ("AS AC KD QH JS", Ranking::Pair, "pair of aces"),
            ("KS KH 4D 4C 9S", Ranking::TwoPair, "two pair kings and fours"),
            ("7S 7D 7H KC 2S", Ranking::ThreeOfAKind, "three of a kind sevens"),
            ("9S 8H 7D 6C 5S", Ranking::Straight, "straight nine high"),
            ("AS 2H 3D 4C 5S", Ranking::Straight, "straight five high"),
            ("2S 4S 6S 8S TS", Ranking::Flush, "flush ten high"),
            ("KS KC KD 6H 6D", Ranking::FullHouse, "full house kings full of sixes"),
            ("9S 9C 9D 9H 2D", Ranking::FourOfAKind, "four of a kind nines"),
            ("9H 8H 7H 6H 5H", Ranking::StraightFlush, "straight flush nine high"),
            ("AH 2H 3H 4H 5H", Ranking::StraightFlush, "straight flush five high"),
            ("AH KH QH JH TH", Ranking::RoyalFlush, "royal flush"),
        ]
        .into_iter()
        .for_each(|(cards, ranking, description)| {
            let hand = canonical(cards, &opts);
            assert_eq!(Ranking::classify(&hand, &opts), ranking, "{cards}");
            assert_eq!(ranking.describe(&hand), description);
        });
    }

    #[test]
    fn classify_ignored_straights_and_flushes() {
        let sf = "9H 8H 7H 6H 5H";
        let royal = "AH KH QH JH TH";
        let straight = "9S 8H 7D 6C 5S";
        let flush = "2S 4S 6S 8S TS";

        let opts = Options::default().with_ignore_straights(true);
        assert_eq!(Ranking::classify(&canonical(sf, &opts), &opts), Ranking::Flush);
        assert_eq!(Ranking::classify(&canonical(royal, &opts), &opts), Ranking::Flush);
        assert_eq!(Ranking::classify(&canonical(straight, &opts), &opts), Ranking::HighCard);
        assert_eq!(Ranking::classify(&canonical(flush, &opts), &opts), Ranking::Flush);

        let wheel = canonical("AS 2H 3D 4C 5S", &opts);
        assert_eq!(Ranking::classify(&wheel, &opts), Ranking::HighCard);
        assert_eq!(Ranking::HighCard.describe(&wheel), "high card ace high");

        let opts = Options::default().with_ignore_flushes(true);
        assert_eq!(Ranking::classify(&canonical(sf, &opts), &opts), Ranking::Straight);
        assert_eq!(Ranking::classify(&canonical(royal, &opts), &opts), Ranking::Straight);
        assert_eq!(Ranking::classify(&canonical(straight, &opts), &opts), Ranking::Straight);
        assert_eq!(Ranking::classify(&canonical(flush, &opts), &opts), Ranking::HighCard);

        let opts = opts.with_ignore_straights(true);
        for cards in [sf, royal, straight, flush] {
            let hand = canonical(cards, &opts);
            assert_eq!(Ranking::classify(&hand, &opts), Ranking::HighCard);
        }
    }

    #[test]
    fn classify_ace_low() {
        let opts = Options::default().with_ace_is_low(true);

        let hand = canonical("AH KH QH JH TH", &opts);
        assert_eq!(Ranking::classify(&hand, &opts), Ranking::Flush);
        assert_eq!(Ranking::Flush.describe(&hand), "flush king high");

        let hand = canonical("AS KD QC JH TS", &opts);
        assert_eq!(Ranking::classify(&hand, &opts), Ranking::HighCard);
        assert_eq!(Ranking::HighCard.describe(&hand), "high card king high");

        let hand = canonical("AH 2H 3H 4H 5H", &opts);
        assert_eq!(Ranking::classify(&hand, &opts), Ranking::StraightFlush);
    }

    #[test]
    fn classify_blanks() {
        let opts = Options::default();
        [
            ("AS", Ranking::HighCard, "high card ace high"),
            ("2S 3S 4S 5S", Ranking::HighCard, "high card five high"),
            ("AS AH KD", Ranking::Pair, "pair of aces"),
            ("AS AH KD KC", Ranking::TwoPair, "two pair aces and kings"),
            ("7S 7H 7D", Ranking::ThreeOfAKind, "three of a kind sevens"),
            ("7S 7H 7D 7C", Ranking::FourOfAKind, "four of a kind sevens"),
        ]
        .into_iter()
        .for_each(|(cards, ranking, description)| {
            let hand = canonical(cards, &opts);
            assert_eq!(assert_one_ranking(&hand, &opts), ranking, "{cards}");
            assert_eq!(ranking.describe(&hand), description);
        });
    }

    #[test]
    fn rankings_are_exclusive() {
        let deck = Deck::default();
        let mut rng = StdRng::seed_from_u64(101);

        for k in 1..=5 {
            deck.sample(&mut rng, 2_000, k, |cards| {
                for opts in all_options() {
                    let hand = Canonical::new(cards, &opts);
                    assert_one_ranking(&hand, &opts);
                }
            });
        }

        // Make sure the rare shapes are covered for each options.
        for cards in ["AH KH QH JH TH", "AH 2H 3H 4H 5H", "9H 8H 7H 6H 5H", "AS 2H 3D 4C 5S"] {
            for opts in all_options() {
                assert_one_ranking(&canonical(cards, &opts), &opts);
            }
        }
    }

    // This takes a while to run in debug mode as it goes through 2.6M hands.
    #[test]
    #[ignore]
    fn rankings_all_hands() {
        use crate::combinations::Combinations;

        let cards = Deck::default().into_iter().collect::<Vec<_>>();
        let opts = Options::default();
        let mut counts = [0usize; 10];

        for combo in Combinations::new(cards.len(), 5) {
            let hand = combo.iter().map(|&i| cards[i]).collect::<Vec<_>>();
            let ranking = assert_one_ranking(&Canonical::new(&hand, &opts), &opts);
            counts[ranking as usize] += 1;
        }

        assert_eq!(
            counts,
            [1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 36, 4]
        );
    }
}
