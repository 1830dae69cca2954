//! A Bartok-style card game participant engine with optional `no_std` support.
//!
//! The crate provides a [`Participant`] type that owns one seat's hand,
//! computes the fan layout of the cards in it, and plays automated turns
//! against external collaborators: a [`TurnAuthority`] that owns phase,
//! legality, and turn order, and a [`CardStage`] that owns card rendering
//! and movement.
//!
//! # Example
//!
//! ```
//! use bartok::{Layer, LayoutSlot, Participant, ParticipantKind, Vec3};
//!
//! let slot = LayoutSlot::new(Vec3::new(0.0, -4.0, 0.0), 0.0, Layer(2));
//! let participant = Participant::new(ParticipantKind::Human, 0, slot, 42);
//! assert!(participant.hand().is_empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod layout;
pub mod participant;
pub mod table;

// Re-export main types
pub use card::{Card, CardId, DECK_SIZE, Suit};
pub use error::{HandError, TurnError};
pub use hand::{Hand, HandOrdering};
pub use layout::{
    CARD_HEIGHT, DRAW_ORDER_STRIDE, HAND_STAGGER, Layer, LayoutSlot, Pose, Vec3, fan_pose,
    fan_poses,
};
pub use participant::{MoveToken, Participant, ParticipantKind, TurnAction};
pub use table::{CardStage, MoveTiming, TurnAuthority, TurnPhase};
