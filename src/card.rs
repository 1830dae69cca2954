//! Card types shared with the external card manager.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

/// Opaque card identity.
///
/// Hand membership and duplicate detection key on identity, never on
/// rank/suit equality, so two printed copies of the same card stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(pub u32);

/// A playing card handle.
///
/// Cards are created and destroyed by the external card manager; this crate
/// only moves them between a hand and the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The identity of this card.
    pub id: CardId,
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card handle.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may confuse collaborators that expect a standard deck.
    #[must_use]
    pub const fn new(id: CardId, suit: Suit, rank: u8) -> Self {
        Self { id, suit, rank }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
