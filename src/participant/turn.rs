//! The automated turn procedure and move-completion tokens.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::IndexedRandom;

use crate::card::{Card, CardId};
use crate::error::{HandError, TurnError};
use crate::table::{CardStage, TurnAuthority, TurnPhase};

use super::{Participant, ParticipantKind};

/// What a call to [`Participant::take_turn`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// Human participant; turns are driven through the UI instead.
    Skipped,
    /// No legal play existed, so one card was drawn into the hand.
    Drew(Card),
    /// A legal play was chosen, removed from the hand, and submitted.
    Played(Card),
}

/// Proof that one submitted card is still in transit.
///
/// A token is minted when a card is submitted for play or draw, handed to
/// the stage, and surrendered back exactly once when the movement finishes.
/// It cannot be cloned, so a move cannot be completed twice with it; a
/// leftover token from a superseded turn is rejected by
/// [`Participant::complete_move`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "the stage must hand this token back through complete_move"]
pub struct MoveToken {
    /// Seat index of the participant that minted the token.
    participant: u8,
    /// The card in transit.
    card: CardId,
}

impl MoveToken {
    /// Returns the card this token tracks.
    #[must_use]
    pub const fn card(&self) -> CardId {
        self.card
    }

    /// Returns the seat index of the participant that minted this token.
    #[must_use]
    pub const fn participant(&self) -> u8 {
        self.participant
    }
}

impl Participant {
    /// Takes one turn for an automated participant.
    ///
    /// A human participant returns [`TurnAction::Skipped`] without touching
    /// anything. An automated participant marks the shared phase as
    /// [`TurnPhase::Waiting`], re-queries the legality of every held card,
    /// and then does exactly one of two things: with no legal play it draws
    /// one card into its hand, otherwise it removes a uniformly random legal
    /// card and submits it for play. Either way the card in transit gets a
    /// [`MoveToken`] registered with the stage; the turn is passed only once
    /// that token comes back through [`Participant::complete_move`].
    ///
    /// The caller must not invoke this again while a previous token is still
    /// out; that contract belongs to the turn authority.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::DuplicateCard`] if the draw pile hands out a
    /// card this hand already holds, which is a breach of the card
    /// manager's ownership contract.
    #[expect(
        clippy::missing_panics_doc,
        reason = "the chosen card was just observed in the hand"
    )]
    pub fn take_turn<A, S>(
        &mut self,
        authority: &mut A,
        stage: &mut S,
    ) -> Result<TurnAction, HandError>
    where
        A: TurnAuthority,
        S: CardStage,
    {
        if self.kind == ParticipantKind::Human {
            return Ok(TurnAction::Skipped);
        }

        authority.set_phase(TurnPhase::Waiting);

        // Legality depends on the current table state, so the valid set is
        // rebuilt from scratch on every turn.
        let valid: Vec<Card> = self
            .hand
            .iter()
            .filter(|card| authority.is_valid_play(card))
            .copied()
            .collect();

        match valid.choose(&mut self.rng).copied() {
            None => {
                let card = authority.draw();
                self.add_card(card, stage, authority.phase())?;
                let token = self.begin_move(card.id);
                stage.watch_arrival(card.id, token);
                Ok(TurnAction::Drew(card))
            }
            Some(card) => {
                self.remove_card(card.id, stage, authority.phase())
                    .expect("chosen card was observed in the hand above");
                authority.submit_play(card);
                let token = self.begin_move(card.id);
                stage.watch_arrival(card.id, token);
                Ok(TurnAction::Played(card))
            }
        }
    }

    /// Completes the move a token was minted for and passes the turn.
    ///
    /// Called by the external driver once the stage reports the card's
    /// movement finished and surrenders the token. Consuming the token here
    /// is what keeps turn passing exactly-once: the token type is not
    /// cloneable, and the pending slot is cleared before the turn is passed.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::WrongParticipant`] for a token minted by another
    /// seat, [`TurnError::NoPendingMove`] if no card is in transit (for
    /// example a move that was already completed), and
    /// [`TurnError::WrongCard`] for a stale token from a superseded turn.
    /// The pending move is left in place on every error.
    pub fn complete_move<A: TurnAuthority>(
        &mut self,
        token: MoveToken,
        authority: &mut A,
    ) -> Result<(), TurnError> {
        if token.participant != self.index {
            return Err(TurnError::WrongParticipant);
        }

        match self.pending {
            None => Err(TurnError::NoPendingMove),
            Some(card) if card != token.card => Err(TurnError::WrongCard),
            Some(_) => {
                self.pending = None;
                authority.pass_turn();
                Ok(())
            }
        }
    }

    /// Records the card in transit and mints the token that tracks it.
    fn begin_move(&mut self, card: CardId) -> MoveToken {
        self.pending = Some(card);
        MoveToken {
            participant: self.index,
            card,
        }
    }
}
