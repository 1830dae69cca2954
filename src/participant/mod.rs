//! Participants and their turn-taking behaviour.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, CardId};
use crate::error::HandError;
use crate::hand::{Hand, HandOrdering};
use crate::layout::{DRAW_ORDER_STRIDE, Layer, LayoutSlot, fan_pose};
use crate::table::{CardStage, MoveTiming, TurnPhase};

mod turn;

pub use turn::{MoveToken, TurnAction};

/// Whether a participant is driven by a person or by the built-in decision
/// procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticipantKind {
    /// Driven externally through the UI.
    Human,
    /// Plays its own turns.
    Automated,
}

/// One seat at the table: a hand, its layout slot, and the decision logic
/// for automated play.
///
/// A participant is created once at session setup and owns its hand
/// exclusively; collaborators reach the hand only through this type.
///
/// # Example
///
/// ```
/// use bartok::{Layer, LayoutSlot, Participant, ParticipantKind, Vec3};
///
/// let slot = LayoutSlot::new(Vec3::new(0.0, -4.0, 0.0), 0.0, Layer(2));
/// let participant = Participant::new(ParticipantKind::Automated, 1, slot, 42);
/// assert!(participant.hand().is_empty());
/// ```
#[derive(Debug)]
pub struct Participant {
    /// Human or automated.
    kind: ParticipantKind,
    /// Seat index at the table.
    index: u8,
    /// Where this participant's hand sits.
    slot: LayoutSlot,
    /// The cards currently held.
    hand: Hand,
    /// The card submitted for play or draw whose movement has not finished.
    pending: Option<CardId>,
    /// Random number generator for play selection.
    rng: ChaCha8Rng,
}

impl Participant {
    /// Creates a participant for the given seat.
    ///
    /// A human participant keeps its hand sorted by rank; an automated one
    /// keeps insertion order, since nobody reads its fan.
    #[must_use]
    pub fn new(kind: ParticipantKind, index: u8, slot: LayoutSlot, seed: u64) -> Self {
        let ordering = match kind {
            ParticipantKind::Human => HandOrdering::Ranked,
            ParticipantKind::Automated => HandOrdering::Insertion,
        };

        Self {
            kind,
            index,
            slot,
            hand: Hand::new(ordering),
            pending: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Adds a card to the hand and re-fans it.
    ///
    /// The card is promoted to the top rendering layer while it travels and
    /// will settle into this hand's layer on arrival.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::DuplicateCard`] if the card is already held; the
    /// hand and the stage are left untouched.
    pub fn add_card<S: CardStage>(
        &mut self,
        card: Card,
        stage: &mut S,
        phase: TurnPhase,
    ) -> Result<Card, HandError> {
        self.hand.add(card)?;

        stage.set_layer(card.id, Layer::TOP);
        stage.set_settled_layer(card.id, self.slot.layer);
        self.fan(stage, phase);

        Ok(card)
    }

    /// Removes a card from the hand and re-fans the remainder.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CardNotFound`] if the card is not held; the hand
    /// and the stage are left untouched.
    pub fn remove_card<S: CardStage>(
        &mut self,
        id: CardId,
        stage: &mut S,
        phase: TurnPhase,
    ) -> Result<Card, HandError> {
        let card = self.hand.remove(id)?;
        self.fan(stage, phase);
        Ok(card)
    }

    /// Recomputes the fan and sends every card toward its new pose.
    ///
    /// Cards of a human participant render face up, automated hands stay
    /// face down. Outside the initial deal the movement starts immediately
    /// instead of waiting in the animation queue.
    pub fn fan<S: CardStage>(&self, stage: &mut S, phase: TurnPhase) {
        let timing = if phase == TurnPhase::Idle {
            MoveTiming::Queued
        } else {
            MoveTiming::Immediate
        };
        let face_up = self.kind == ParticipantKind::Human;

        for (i, card) in self.hand.iter().enumerate() {
            stage.animate(card.id, fan_pose(&self.slot, i), timing);
            stage.set_face_up(card.id, face_up);
            stage.set_draw_order(card.id, DRAW_ORDER_STRIDE * i as u32);
        }
    }

    /// Returns whether this participant is human or automated.
    #[must_use]
    pub const fn kind(&self) -> ParticipantKind {
        self.kind
    }

    /// Returns the seat index.
    #[must_use]
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Returns the layout slot of this participant's hand.
    #[must_use]
    pub const fn slot(&self) -> LayoutSlot {
        self.slot
    }

    /// Returns the hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the card whose movement this participant is waiting on, if
    /// any.
    #[must_use]
    pub const fn pending_card(&self) -> Option<CardId> {
        self.pending
    }
}
