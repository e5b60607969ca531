// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerhand evaluator.
//!
//! Finds the best five cards poker hand that can be made from one or more
//! cards. Every five cards combination is put in a canonical order, grouped
//! by rank, and classified into one of ten [Ranking]s, the selected hand is
//! the strongest combination, or the weakest when selecting a low hand.
//!
//! To use the evaluator call [evaluate] with some [Options]:
//!
//! ```
//! # use pokerhand_eval::*;
//! let cards = ["AS", "2H", "3D", "4C", "5S", "KD", "9C"]
//!     .map(|c| c.parse::<Card>().unwrap());
//!
//! let hand = evaluate(&cards, Options::default());
//! assert_eq!(hand.ranking(), Ranking::Straight);
//! assert_eq!(hand.description(), "straight five high");
//! assert_eq!(hand.to_string(), "straight five high [5S 4C 3D 2H AS]");
//!
//! let opts = Options::default().with_ignore_straights(true);
//! let hand = evaluate(&cards, opts);
//! assert_eq!(hand.description(), "high card ace high");
//! ```
//!
//! Hands made from less than five cards are filled with [Slot::Blank]s, so
//! that they can still be compared:
//!
//! ```
//! # use pokerhand_eval::*;
//! let pair = Hand::new(&["AS".parse::<Card>().unwrap(), "AD".parse::<Card>().unwrap()]);
//! assert_eq!(pair.description(), "pair of aces");
//! assert!(pair.cards()[2].is_blank());
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod canonical;
pub mod combinations;
pub mod hand;
pub mod options;
pub mod ranking;

pub use combinations::{Combinations, combinations};
pub use hand::{Hand, HandError};
pub use options::{Options, Sorting};
pub use ranking::Ranking;

// Reexport cards types.
pub use pokerhand_cards::{Card, CardParseError, Deck, Rank, Slot, Suit};

/// Evaluates the best hand that can be made from the given cards.
///
/// Panics if `cards` is empty.
pub fn evaluate(cards: &[Card], options: Options) -> Hand {
    Hand::evaluate(cards, options)
}
