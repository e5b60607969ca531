// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// Cards are compared by rank and suit, the text form is the rank character
/// followed by the suit character, for example `AS` for the ace of spades.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        if !(2..=3).contains(&len) {
            return Err(CardParseError::InvalidLength(len));
        }

        // The suit is always the last character, a ten may use two characters.
        let mut chars = s.chars();
        let suit = chars
            .next_back()
            .ok_or(CardParseError::InvalidLength(len))?;
        let rank = chars.as_str().parse::<Rank>()?;
        let suit = suit.to_string().parse::<Suit>()?;

        Ok(Card::new(rank, suit))
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = CardParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Errors returned when parsing cards from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardParseError {
    /// The card text has the wrong number of characters.
    #[error("invalid card length {0}, expected a rank and a suit (e.g. 'AS')")]
    InvalidLength(usize),
    /// The rank is not one of 2-9, T, J, Q, K, A.
    #[error("unknown rank '{0}'")]
    InvalidRank(String),
    /// The suit is not one of C, D, H, S.
    #[error("unknown suit '{0}'")]
    InvalidSuit(String),
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks, from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank position when the ace is the highest rank (deuce=0, ace=12).
    pub fn ace_high_index(&self) -> u8 {
        *self as u8
    }

    /// The rank position when the ace is the lowest rank (ace=0, deuce=1, king=12).
    pub fn ace_low_index(&self) -> u8 {
        match self {
            Rank::Ace => 0,
            r => *r as u8 + 1,
        }
    }

    /// The rank position for the given ace ordering.
    pub fn index(&self, ace_is_low: bool) -> u8 {
        if ace_is_low {
            self.ace_low_index()
        } else {
            self.ace_high_index()
        }
    }

    /// The rank name used for a single card, e.g. "six".
    pub fn singular_name(&self) -> &'static str {
        match self {
            Rank::Deuce => "two",
            Rank::Trey => "three",
            Rank::Four => "four",
            Rank::Five => "five",
            Rank::Six => "six",
            Rank::Seven => "seven",
            Rank::Eight => "eight",
            Rank::Nine => "nine",
            Rank::Ten => "ten",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
            Rank::Ace => "ace",
        }
    }

    /// The rank name used for many cards, e.g. "sixes".
    pub fn plural_name(&self) -> &'static str {
        match self {
            Rank::Deuce => "twos",
            Rank::Trey => "threes",
            Rank::Four => "fours",
            Rank::Five => "fives",
            Rank::Six => "sixes",
            Rank::Seven => "sevens",
            Rank::Eight => "eights",
            Rank::Nine => "nines",
            Rank::Ten => "tens",
            Rank::Jack => "jacks",
            Rank::Queen => "queens",
            Rank::King => "kings",
            Rank::Ace => "aces",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

impl FromStr for Rank {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "2" => Ok(Rank::Deuce),
            "3" => Ok(Rank::Trey),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "T" | "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            _ => Err(CardParseError::InvalidRank(s.to_string())),
        }
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 8,
    /// Diamonds suit.
    Diamonds = 4,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 1,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl FromStr for Suit {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" | "c" | "♣" => Ok(Suit::Clubs),
            "D" | "d" | "♦" => Ok(Suit::Diamonds),
            "H" | "h" | "♥" => Ok(Suit::Hearts),
            "S" | "s" | "♠" => Ok(Suit::Spades),
            _ => Err(CardParseError::InvalidSuit(s.to_string())),
        }
    }
}

/// A position in a five cards hand.
///
/// Hands made from less than five cards are filled with blanks, a blank never
/// pairs with another slot, never makes a flush or a straight, and ranks below
/// any card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Slot {
    /// A real card.
    Card(Card),
    /// A blank filler.
    Blank,
}

impl Slot {
    /// The text used for a blank slot.
    pub const BLANK_TEXT: &'static str = "??";

    /// Checks if this slot is a blank filler.
    pub fn is_blank(&self) -> bool {
        matches!(self, Slot::Blank)
    }

    /// The card in this slot.
    pub fn card(&self) -> Option<Card> {
        match self {
            Slot::Card(card) => Some(*card),
            Slot::Blank => None,
        }
    }

    /// The rank of the card in this slot.
    pub fn rank(&self) -> Option<Rank> {
        self.card().map(|c| c.rank())
    }

    /// The suit of the card in this slot.
    pub fn suit(&self) -> Option<Suit> {
        self.card().map(|c| c.suit())
    }
}

impl From<Card> for Slot {
    fn from(card: Card) -> Self {
        Slot::Card(card)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Card(card) => write!(f, "{card}"),
            Slot::Blank => write!(f, "{}", Self::BLANK_TEXT),
        }
    }
}

impl FromStr for Slot {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == Self::BLANK_TEXT {
            Ok(Slot::Blank)
        } else {
            s.parse().map(Slot::Card)
        }
    }
}

impl From<Slot> for String {
    fn from(slot: Slot) -> Self {
        slot.to_string()
    }
}

impl TryFrom<String> for Slot {
    type Error = CardParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
