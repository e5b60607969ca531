// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards combinations.
use pokerhand_cards::Card;

use crate::hand::Hand;

/// Iterator over the k-subsets of the indices `0..n` in lexicographic order.
///
/// ```
/// # use pokerhand_eval::Combinations;
/// let combos = Combinations::new(4, 3).collect::<Vec<_>>();
/// assert_eq!(combos, [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    /// Creates an iterator for all the `k` indices subsets of `0..n`.
    ///
    /// There are no subsets if `k > n` and a single empty subset if `k == 0`.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let combo = self.indices.clone();

        // Find the rightmost index that can move forward, then reset all the
        // indices after it to the smallest increasing sequence.
        let k = self.indices.len();
        match (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) {
            Some(i) => {
                self.indices[i] += 1;
                for j in (i + 1)..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(combo)
    }
}

/// Returns all the hands of `min(cards.len(), 5)` cards that can be made
/// from the given cards, in lexicographic order of the card positions.
pub fn combinations(cards: &[Card]) -> impl Iterator<Item = Vec<Card>> + '_ {
    let k = cards.len().min(Hand::SIZE);
    Combinations::new(cards.len(), k).map(move |combo| combo.iter().map(|&i| cards[i]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use pokerhand_cards::Deck;

    #[test]
    fn combinations_counts() {
        [(7, 5, 21), (6, 5, 6), (5, 5, 1), (52, 2, 1326), (23, 3, 1771), (3, 5, 0)]
            .into_iter()
            .for_each(|(n, k, count)| assert_eq!(Combinations::new(n, k).count(), count));

        assert_eq!(Combinations::new(0, 0).collect::<Vec<_>>(), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn combinations_order() {
        let combos = Combinations::new(7, 5).collect::<Vec<_>>();
        assert_eq!(combos.first(), Some(&vec![0, 1, 2, 3, 4]));
        assert_eq!(combos.last(), Some(&vec![2, 3, 4, 5, 6]));

        // Strictly increasing lexicographic order without duplicates.
        assert!(combos.windows(2).all(|w| w[0] < w[1]));
        assert!(combos.iter().all(|c| c.windows(2).all(|w| w[0] < w[1])));
    }

    #[test]
    fn cards_combinations() {
        let cards = Deck::default().into_iter().take(7).collect::<Vec<_>>();

        let hands = combinations(&cards).collect::<Vec<_>>();
        assert_eq!(hands.len(), 21);
        assert!(hands.iter().all(|h| h.len() == 5));

        let unique = hands.iter().cloned().collect::<HashSet<_>>();
        assert_eq!(unique.len(), 21);

        // Less than five cards is a single combination with all the cards.
        let hands = combinations(&cards[..3]).collect::<Vec<_>>();
        assert_eq!(hands, vec![cards[..3].to_vec()]);
    }
}
