//! Contracts of the external collaborators a participant talks to.

use crate::card::{Card, CardId};
use crate::layout::{Layer, Pose};
use crate::participant::MoveToken;

/// Phase of the shared turn state machine.
///
/// The phase flag is owned by the turn authority; a participant only writes
/// [`TurnPhase::Waiting`] at the start of its turn and reads whether the game
/// is still in the initial [`TurnPhase::Idle`] deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    /// The initial deal; nothing has been played yet.
    Idle,
    /// A turn is about to start.
    Pre,
    /// A participant has committed to a move and its card is in transit.
    Waiting,
    /// A turn has just finished.
    Post,
    /// The game is over.
    GameOver,
}

/// Urgency of a requested card movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveTiming {
    /// The movement may wait its turn in the animation queue.
    Queued,
    /// The movement starts on the current frame, with zero elapsed time.
    Immediate,
}

/// The external authority owning global turn order, phase, and play legality.
///
/// All operations are infallible from this crate's point of view; an
/// exhausted draw pile or a rejected submission is the authority's own
/// failure to surface, not one this crate models.
pub trait TurnAuthority {
    /// Returns the current phase.
    fn phase(&self) -> TurnPhase;

    /// Sets the current phase.
    fn set_phase(&mut self, phase: TurnPhase);

    /// Returns whether the card is a legal play right now.
    ///
    /// Legality depends on table state outside this crate, so callers must
    /// re-query on every turn rather than cache the answer.
    fn is_valid_play(&self, card: &Card) -> bool;

    /// Draws the next card from the draw pile.
    fn draw(&mut self) -> Card;

    /// Submits a card to be moved to the discard target and played.
    fn submit_play(&mut self, card: Card);

    /// Advances the turn to the next participant.
    fn pass_turn(&mut self);
}

/// The external card/animation collaborator.
///
/// A participant never renders or interpolates anything itself; it issues
/// per-card requests through this trait and the stage carries them out over
/// the following frames.
pub trait CardStage {
    /// Starts animating a card toward a target pose.
    fn animate(&mut self, card: CardId, pose: Pose, timing: MoveTiming);

    /// Sets whether a card renders face up.
    fn set_face_up(&mut self, card: CardId, face_up: bool);

    /// Moves a card to a rendering layer immediately.
    fn set_layer(&mut self, card: CardId, layer: Layer);

    /// Sets the rendering layer a card drops to once its movement completes.
    fn set_settled_layer(&mut self, card: CardId, layer: Layer);

    /// Sets the draw order of a card within its layer, applied on arrival.
    fn set_draw_order(&mut self, card: CardId, order: u32);

    /// Registers a token to hand back when the card's movement completes.
    ///
    /// The stage must surrender each token exactly once, and only after the
    /// card has actually arrived; the token's owner passes the turn when it
    /// gets the token back.
    fn watch_arrival(&mut self, card: CardId, token: MoveToken);
}
