// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerhand cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use pokerhand_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert_eq!(kd, Card::new(Rank::King, Suit::Diamonds));
//! ```
//!
//! a [Slot] type for the positions of a five cards hand that may hold a blank
//! filler when a hand is made from less than five cards, and a [Deck] type for
//! dealing and sampling cards.
//!
//! For example to sample 10 random 5-cards hands:
//!
//! ```
//! # use pokerhand_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(&mut rand::rng(), 10, 5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, CardParseError, Rank, Slot, Suit};

mod deck;
pub use deck::Deck;
