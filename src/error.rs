//! Error types for hand and turn operations.

use thiserror::Error;

/// Errors that can occur when mutating a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// A card with the same identity is already in the hand.
    #[error("card is already in the hand")]
    DuplicateCard,
    /// No card with that identity is in the hand.
    #[error("card is not in the hand")]
    CardNotFound,
}

/// Errors that can occur when completing a submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The participant has no outstanding submitted card. Resolving the same
    /// move twice ends up here.
    #[error("no move is pending for this participant")]
    NoPendingMove,
    /// The token's card does not match the outstanding submitted card.
    #[error("token does not match the pending card")]
    WrongCard,
    /// The token was issued by a different participant.
    #[error("token belongs to a different participant")]
    WrongParticipant,
}
