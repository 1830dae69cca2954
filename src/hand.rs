//! Ordered card collections.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, CardId};
use crate::error::HandError;

/// How a hand keeps its cards ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOrdering {
    /// Cards stay in the order they were added.
    Insertion,
    /// Cards are re-sorted ascending by rank after every addition.
    Ranked,
}

/// The cards currently held by one participant.
///
/// Card identity is unique within a hand. A `Ranked` hand is kept
/// non-decreasing by rank after every mutation; an `Insertion` hand
/// preserves the order cards arrived in.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in hand order.
    cards: Vec<Card>,
    /// Ordering policy.
    ordering: HandOrdering,
}

impl Hand {
    /// Creates a new empty hand with the given ordering policy.
    #[must_use]
    pub const fn new(ordering: HandOrdering) -> Self {
        Self {
            cards: Vec::new(),
            ordering,
        }
    }

    /// Adds a card to the hand.
    ///
    /// A `Ranked` hand is re-sorted by rank afterwards (stable, rank alone).
    ///
    /// # Errors
    ///
    /// Returns [`HandError::DuplicateCard`] if a card with the same identity
    /// is already held; the hand is left unchanged.
    pub fn add(&mut self, card: Card) -> Result<(), HandError> {
        if self.contains(card.id) {
            return Err(HandError::DuplicateCard);
        }

        self.cards.push(card);
        if self.ordering == HandOrdering::Ranked {
            self.cards.sort_by_key(|c| c.rank);
        }

        Ok(())
    }

    /// Removes the card with the given identity and returns it.
    ///
    /// The relative order of the remaining cards is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CardNotFound`] if no held card has that identity;
    /// the hand is left unchanged.
    pub fn remove(&mut self, id: CardId) -> Result<Card, HandError> {
        let index = self
            .cards
            .iter()
            .position(|c| c.id == id)
            .ok_or(HandError::CardNotFound)?;

        Ok(self.cards.remove(index))
    }

    /// Returns whether a card with the given identity is held.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    /// Returns the cards in hand order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates the cards in hand order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the ordering policy of this hand.
    #[must_use]
    pub const fn ordering(&self) -> HandOrdering {
        self.ordering
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::card::Suit;

    use super::*;

    const fn card(id: u32, rank: u8) -> Card {
        Card::new(CardId(id), Suit::Clubs, rank)
    }

    #[test]
    fn insertion_hand_preserves_arrival_order() {
        let mut hand = Hand::new(HandOrdering::Insertion);
        hand.add(card(0, 5)).unwrap();
        hand.add(card(1, 2)).unwrap();
        hand.add(card(2, 9)).unwrap();

        let ranks: Vec<u8> = hand.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, [5, 2, 9]);
    }

    #[test]
    fn ranked_hand_sorts_after_every_add() {
        let mut hand = Hand::new(HandOrdering::Ranked);
        hand.add(card(0, 5)).unwrap();
        hand.add(card(1, 2)).unwrap();
        hand.add(card(2, 9)).unwrap();

        let ranks: Vec<u8> = hand.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, [2, 5, 9]);
    }

    #[test]
    fn ranked_hand_sorted_after_arbitrary_adds() {
        let mut hand = Hand::new(HandOrdering::Ranked);
        for (id, rank) in [(0, 7), (1, 1), (2, 13), (3, 4), (4, 4), (5, 11)] {
            hand.add(card(id, rank)).unwrap();
            let ranks: Vec<u8> = hand.iter().map(|c| c.rank).collect();
            let mut sorted = ranks.clone();
            sorted.sort_unstable();
            assert_eq!(ranks, sorted);
        }
    }

    #[test]
    fn duplicate_identity_is_rejected() {
        let mut hand = Hand::new(HandOrdering::Insertion);
        hand.add(card(0, 5)).unwrap();

        // Same identity, different rank: still a duplicate.
        assert_eq!(
            hand.add(Card::new(CardId(0), Suit::Hearts, 9)),
            Err(HandError::DuplicateCard)
        );
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn remove_missing_card_leaves_hand_untouched() {
        let mut hand = Hand::new(HandOrdering::Insertion);
        hand.add(card(0, 5)).unwrap();
        hand.add(card(1, 2)).unwrap();
        let before: Vec<Card> = hand.cards().to_vec();

        assert_eq!(hand.remove(CardId(42)), Err(HandError::CardNotFound));
        assert_eq!(hand.cards(), before);
    }

    #[test]
    fn remove_twice_fails_the_second_time() {
        let mut hand = Hand::new(HandOrdering::Insertion);
        hand.add(card(0, 5)).unwrap();

        assert_eq!(hand.remove(CardId(0)), Ok(card(0, 5)));
        assert_eq!(hand.remove(CardId(0)), Err(HandError::CardNotFound));
    }

    #[test]
    fn add_remove_round_trip_restores_contents() {
        let mut hand = Hand::new(HandOrdering::Insertion);
        hand.add(card(0, 5)).unwrap();
        hand.add(card(1, 2)).unwrap();
        let before: Vec<Card> = hand.cards().to_vec();

        hand.add(card(2, 9)).unwrap();
        hand.remove(CardId(2)).unwrap();
        assert_eq!(hand.cards(), before);
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut hand = Hand::new(HandOrdering::Insertion);
        for (id, rank) in [(0, 5), (1, 2), (2, 9), (3, 7)] {
            hand.add(card(id, rank)).unwrap();
        }

        hand.remove(CardId(1)).unwrap();
        let ranks: Vec<u8> = hand.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, [5, 9, 7]);
    }
}
