// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand selection and comparison.
use log::{debug, trace};
use pokerhand_cards::{Card, Slot};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::{
    canonical::Canonical,
    combinations::combinations,
    options::{Options, Sorting},
    ranking::Ranking,
};

/// The best five cards poker hand made from one or more cards.
///
/// Hands are compared by value: first by [Ranking] and then by the rank of
/// the cards in canonical order, suits are never compared. Two hands made of
/// different cards with the same ranks are equal.
///
/// Each hand ranks its cards with its own ace ordering. Hands evaluated with
/// different [Options::ace_is_low] values still have a total order, but it
/// only makes sense to compare hands evaluated with the same options.
///
/// ```
/// # use pokerhand_eval::*;
/// let cards = ["KS", "KC", "KD", "2H", "2D"].map(|c| c.parse::<Card>().unwrap());
/// let kings = Hand::new(&cards);
/// assert_eq!(kings.ranking(), Ranking::FullHouse);
/// assert_eq!(kings.description(), "full house kings full of twos");
///
/// let cards = ["QS", "QC", "QD", "AH", "AD"].map(|c| c.parse::<Card>().unwrap());
/// let queens = Hand::new(&cards);
/// assert!(kings > queens);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "HandRecord", try_from = "HandRecord")]
pub struct Hand {
    ranking: Ranking,
    cards: [Slot; 5],
    description: String,
    options: Options,
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Evaluates the best hand using the default options.
    ///
    /// Panics if `cards` is empty.
    pub fn new(cards: &[Card]) -> Self {
        Self::evaluate(cards, Options::default())
    }

    /// Evaluates the best hand with the given options.
    ///
    /// All the five cards combinations are ranked and the strongest is
    /// returned, or the weakest if sorting is [Sorting::Low]. A hand made
    /// from less than five cards is filled with blank slots.
    ///
    /// Panics if `cards` is empty.
    pub fn evaluate(cards: &[Card], options: Options) -> Self {
        assert!(!cards.is_empty(), "Cannot evaluate an empty set of cards");

        let mut hands = combinations(cards)
            .map(|combo| Self::from_combination(&combo, options))
            .collect::<Vec<_>>();
        hands.sort_by(Hand::cmp);

        let idx = match options.sorting {
            Sorting::High => hands.len() - 1,
            Sorting::Low => 0,
        };

        let hand = hands.swap_remove(idx);
        debug!("Selected {hand} from {} cards", cards.len());
        hand
    }

    /// Ranks a single combination of up to five cards.
    fn from_combination(cards: &[Card], options: Options) -> Self {
        let canonical = Canonical::new(cards, &options);
        let ranking = Ranking::classify(&canonical, &options);
        let description = ranking.describe(&canonical);
        trace!("{canonical}: {ranking}");

        Self {
            ranking,
            cards: *canonical.slots(),
            description,
            options,
        }
    }

    /// The hand ranking.
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }

    /// The five cards of this hand, from the most significant to the least
    /// significant.
    pub fn cards(&self) -> &[Slot; 5] {
        &self.cards
    }

    /// A description of the hand such as "full house kings full of sixes".
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The options used to evaluate this hand.
    pub fn options(&self) -> Options {
        self.options
    }

    /// Returns a positive value if this hand beats the other hand, a negative
    /// value if it loses to the other hand, and zero if the hands are equal.
    pub fn compare_to(&self, other: &Hand) -> i32 {
        self.cmp(other) as i32
    }
}

impl Hand {
    /// The comparison key, a blank is lower than any rank.
    fn strength(&self) -> (Ranking, [Option<u8>; 5], bool) {
        let ace_is_low = self.options.ace_is_low;
        let cards = self.cards.map(|s| s.rank().map(|r| r.index(ace_is_low)));
        (self.ranking, cards, ace_is_low)
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength().cmp(&other.strength())
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.description)?;
        for (idx, slot) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{slot}")?;
        }
        write!(f, "]")
    }
}

/// Errors returned when a hand record doesn't describe a valid hand.
#[derive(Debug, thiserror::Error)]
pub enum HandError {
    /// The record has only blank cards.
    #[error("hand has no cards")]
    NoCards,
    /// The record has the same card more than once.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// The record ranking doesn't match the ranking of its cards.
    #[error("hand ranking {recorded} doesn't match cards ranking {computed}")]
    RankingMismatch {
        /// The ranking in the record.
        recorded: Ranking,
        /// The ranking computed from the record cards.
        computed: Ranking,
    },
}

/// The serialized form of a hand.
#[derive(Serialize, Deserialize)]
struct HandRecord {
    ranking: Ranking,
    cards: [Slot; 5],
    description: String,
    #[serde(default)]
    options: Options,
}

impl From<Hand> for HandRecord {
    fn from(hand: Hand) -> Self {
        Self {
            ranking: hand.ranking,
            cards: hand.cards,
            description: hand.description,
            options: hand.options,
        }
    }
}

impl TryFrom<HandRecord> for Hand {
    type Error = HandError;

    /// Evaluates the record cards again, the description is not trusted.
    fn try_from(record: HandRecord) -> Result<Self, Self::Error> {
        let cards = record
            .cards
            .iter()
            .filter_map(Slot::card)
            .collect::<Vec<_>>();
        if cards.is_empty() {
            return Err(HandError::NoCards);
        }

        for (idx, card) in cards.iter().enumerate() {
            if cards[..idx].contains(card) {
                return Err(HandError::DuplicateCard(*card));
            }
        }

        let hand = Hand::evaluate(&cards, record.options);
        if hand.ranking != record.ranking {
            return Err(HandError::RankingMismatch {
                recorded: record.ranking,
                computed: hand.ranking,
            });
        }

        Ok(hand)
    }
}
