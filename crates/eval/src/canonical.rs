// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Canonical five cards hands and the pairs, flush, and straight predicates.
use pokerhand_cards::{Card, Rank, Slot};
use std::{cmp::Reverse, fmt};

use crate::{hand::Hand, options::Options};

/// The ranks of a wheel straight sorted with the ace high.
const ACE_HIGH_WHEEL: [Rank; 5] = [Rank::Ace, Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce];

/// The ranks of a wheel straight after moving the ace to the bottom.
const WHEEL: [Rank; 5] = [Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce, Rank::Ace];

/// A five cards hand in canonical order.
///
/// Cards are grouped by rank, with larger groups first and groups of the same
/// size ordered by rank, missing cards are filled with blanks at the end. An
/// ace-high wheel `A 5 4 3 2` is stored as `5 4 3 2 A` so that its top card
/// is the five, unless straights are ignored and the ace stays on top.
///
/// Classifiers and comparisons only look at fixed positions of this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canonical {
    slots: [Slot; Hand::SIZE],
    ace_is_low: bool,
}

impl Canonical {
    /// Creates a canonical hand from up to five cards.
    ///
    /// Panics if there are more than five cards.
    pub fn new(cards: &[Card], options: &Options) -> Self {
        let ace_is_low = options.ace_is_low;
        assert!(
            cards.len() <= Hand::SIZE,
            "a canonical hand has at most {} cards, got {}",
            Hand::SIZE,
            cards.len()
        );

        let mut sorted = cards.to_vec();
        sorted.sort_by_key(|c| Reverse(c.rank().index(ace_is_low)));

        let mut counts = [0u8; 13];
        for c in &sorted {
            counts[c.rank() as usize] += 1;
        }

        // The sort is stable so groups of the same size keep their rank order.
        sorted.sort_by_key(|c| Reverse(counts[c.rank() as usize]));

        let mut slots = [Slot::Blank; Hand::SIZE];
        for (slot, card) in slots.iter_mut().zip(sorted) {
            *slot = Slot::Card(card);
        }

        if !options.ignore_straights && slots.map(|s| s.rank()) == ACE_HIGH_WHEEL.map(Some) {
            slots.rotate_left(1);
        }

        Self { slots, ace_is_low }
    }

    /// The hand slots in canonical order.
    pub fn slots(&self) -> &[Slot; Hand::SIZE] {
        &self.slots
    }

    /// Checks if the ace is the lowest rank for this hand.
    pub fn ace_is_low(&self) -> bool {
        self.ace_is_low
    }

    /// The rank at the given position, `None` for a blank.
    pub fn rank_at(&self, pos: usize) -> Option<Rank> {
        self.slots[pos].rank()
    }

    /// Checks if any slot is blank.
    pub fn has_blanks(&self) -> bool {
        self.slots.iter().any(Slot::is_blank)
    }

    /// Checks that the number of cards sharing the rank of each position is
    /// equal to the expected count for that position.
    ///
    /// A blank slot always counts as one.
    pub fn has_pairs(&self, expected: [u8; Hand::SIZE]) -> bool {
        self.slots
            .iter()
            .zip(expected)
            .all(|(slot, count)| self.rank_count(slot) == count)
    }

    /// Checks if all cards have the same suit.
    pub fn has_flush(&self) -> bool {
        if self.has_blanks() {
            return false;
        }

        let suit = self.slots[0].suit();
        self.slots.iter().all(|s| s.suit() == suit)
    }

    /// Checks if the cards have consecutive ranks or make a wheel.
    pub fn has_straight(&self) -> bool {
        if self.has_blanks() {
            return false;
        }

        let indices = self.slots.map(|s| s.rank().map(|r| r.index(self.ace_is_low)));
        let consecutive = indices.windows(2).all(|w| match (w[0], w[1]) {
            (Some(hi), Some(lo)) => hi == lo + 1,
            _ => false,
        });

        consecutive || self.is_wheel()
    }

    fn is_wheel(&self) -> bool {
        self.slots.map(|s| s.rank()) == WHEEL.map(Some)
    }

    fn rank_count(&self, slot: &Slot) -> u8 {
        match slot.rank() {
            Some(rank) => self.slots.iter().filter(|s| s.rank() == Some(rank)).count() as u8,
            None => 1,
        }
    }
}

impl fmt::Display for Canonical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, slot) in self.slots.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{slot}")?;
        }
        Ok(())
    }
}
