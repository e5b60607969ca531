// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand selection options.
use serde::{Deserialize, Serialize};

/// Which hand is selected when evaluating more than five cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sorting {
    /// Select the strongest hand.
    #[default]
    High,
    /// Select the weakest hand.
    Low,
}

/// Rules used to evaluate a hand.
///
/// The default options select the high hand with straights and flushes and
/// the ace as the highest rank. Missing fields are set to their default when
/// deserializing:
///
/// ```
/// # use pokerhand_eval::{Options, Sorting};
/// let opts: Options = serde_json::from_str(r#"{"sorting":"low"}"#).unwrap();
/// assert_eq!(opts, Options::default().with_sorting(Sorting::Low));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// The hand selection.
    pub sorting: Sorting,
    /// Straights do not count as a hand.
    pub ignore_straights: bool,
    /// Flushes do not count as a hand.
    pub ignore_flushes: bool,
    /// The ace ranks below the deuce.
    pub ace_is_low: bool,
}

impl Options {
    /// Returns these options with the given sorting.
    pub fn with_sorting(self, sorting: Sorting) -> Self {
        Self { sorting, ..self }
    }

    /// Returns these options with straights ignored or not.
    pub fn with_ignore_straights(self, ignore_straights: bool) -> Self {
        Self {
            ignore_straights,
            ..self
        }
    }

    /// Returns these options with flushes ignored or not.
    pub fn with_ignore_flushes(self, ignore_flushes: bool) -> Self {
        Self {
            ignore_flushes,
            ..self
        }
    }

    /// Returns these options with the ace low or high.
    pub fn with_ace_is_low(self, ace_is_low: bool) -> Self {
        Self { ace_is_low, ..self }
    }
}
