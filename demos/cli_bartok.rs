//! CLI Bartok example: four automated seats play a full game.

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use bartok::{
    Card, CardId, CardStage, DECK_SIZE, Layer, LayoutSlot, MoveTiming, MoveToken, Participant,
    ParticipantKind, Pose, Suit, TurnAction, TurnAuthority, TurnPhase, Vec3,
};

const SEATS: usize = 4;
const OPENING_HAND: usize = 7;

/// The table: draw pile, discard target, and Bartok legality
/// (play matches the target by rank or by suit).
struct Table {
    phase: TurnPhase,
    draw_pile: Vec<Card>,
    discards: Vec<Card>,
    target: Card,
    turns_passed: usize,
    rng: ChaCha8Rng,
}

impl Table {
    fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut draw_pile = deck();
        draw_pile.shuffle(&mut rng);
        let target = draw_pile.pop().expect("a fresh deck is not empty");

        Self {
            phase: TurnPhase::Idle,
            draw_pile,
            discards: Vec::new(),
            target,
            turns_passed: 0,
            rng,
        }
    }

    /// Restocks the draw pile from the discards, keeping the current target.
    fn restock(&mut self) {
        self.draw_pile.append(&mut self.discards);
        self.draw_pile.shuffle(&mut self.rng);
    }
}

impl TurnAuthority for Table {
    fn phase(&self) -> TurnPhase {
        self.phase
    }

    fn set_phase(&mut self, phase: TurnPhase) {
        self.phase = phase;
    }

    fn is_valid_play(&self, card: &Card) -> bool {
        card.rank == self.target.rank || card.suit == self.target.suit
    }

    fn draw(&mut self) -> Card {
        if self.draw_pile.is_empty() {
            println!("  (draw pile empty, restocking from discards)");
            self.restock();
        }
        self.draw_pile.pop().expect("restocked draw pile is not empty")
    }

    fn submit_play(&mut self, card: Card) {
        self.discards.push(self.target);
        self.target = card;
    }

    fn pass_turn(&mut self) {
        self.turns_passed += 1;
        self.phase = TurnPhase::Pre;
    }
}

/// A stage whose animations finish instantly: every watched card "arrives"
/// on the next frame and its token is surrendered to the driver.
#[derive(Default)]
struct InstantStage {
    arrivals: Vec<MoveToken>,
}

impl CardStage for InstantStage {
    fn animate(&mut self, _card: CardId, _pose: Pose, _timing: MoveTiming) {}

    fn set_face_up(&mut self, _card: CardId, _face_up: bool) {}

    fn set_layer(&mut self, _card: CardId, _layer: Layer) {}

    fn set_settled_layer(&mut self, _card: CardId, _layer: Layer) {}

    fn set_draw_order(&mut self, _card: CardId, _order: u32) {}

    fn watch_arrival(&mut self, _card: CardId, token: MoveToken) {
        self.arrivals.push(token);
    }
}

fn deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    let mut id = 0;
    for suit in [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades] {
        for rank in 1..=13 {
            cards.push(Card::new(CardId(id), suit, rank));
            id += 1;
        }
    }
    cards
}

fn card_name(card: Card) -> String {
    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        n => n.to_string(),
    };
    let suit = match card.suit {
        Suit::Hearts => "♥",
        Suit::Diamonds => "♦",
        Suit::Clubs => "♣",
        Suit::Spades => "♠",
    };
    format!("{rank}{suit}")
}

fn seat_slot(seat: usize) -> LayoutSlot {
    // Four hands around the table edge, one rendering layer each.
    let positions = [
        Vec3::new(0.0, -4.0, 0.0),
        Vec3::new(-6.0, 0.0, 0.0),
        Vec3::new(0.0, 4.0, 0.0),
        Vec3::new(6.0, 0.0, 0.0),
    ];
    let rotations = [0.0, 90.0, 180.0, 270.0];
    LayoutSlot::new(positions[seat], rotations[seat], Layer(seat as u8 + 1))
}

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    println!("Bartok CLI example (seed {seed})");

    let mut table = Table::new(seed);
    let mut stage = InstantStage::default();

    let mut participants: Vec<Participant> = (0..SEATS)
        .map(|seat| {
            Participant::new(
                ParticipantKind::Automated,
                seat as u8,
                seat_slot(seat),
                seed.wrapping_add(seat as u64),
            )
        })
        .collect();

    // Initial deal, during the Idle phase.
    for _ in 0..OPENING_HAND {
        for participant in &mut participants {
            let card = table.draw();
            participant
                .add_card(card, &mut stage, TurnPhase::Idle)
                .expect("fresh deck cards are unique");
        }
    }
    println!("Dealt {OPENING_HAND} cards each; target is {}", card_name(table.target));

    table.set_phase(TurnPhase::Pre);

    let mut seat = 0;
    for round in 1..=1000 {
        let action = participants[seat]
            .take_turn(&mut table, &mut stage)
            .expect("table never deals a duplicate card");

        match action {
            TurnAction::Skipped => unreachable!("all seats are automated"),
            TurnAction::Drew(card) => {
                println!(
                    "{round:3}. seat {seat} draws {} ({} in hand)",
                    card_name(card),
                    participants[seat].hand().len()
                );
            }
            TurnAction::Played(card) => {
                println!(
                    "{round:3}. seat {seat} plays {} ({} left)",
                    card_name(card),
                    participants[seat].hand().len()
                );
            }
        }

        // Next frame: the instant stage reports every movement finished and
        // the driver hands each token back to its owner.
        for token in stage.arrivals.drain(..) {
            let owner = token.participant() as usize;
            participants[owner]
                .complete_move(token, &mut table)
                .expect("the stage surrenders each token once");
        }

        if participants[seat].hand().is_empty() {
            println!("Seat {seat} wins after {round} turns.");
            table.set_phase(TurnPhase::GameOver);
            break;
        }

        seat = (seat + 1) % SEATS;
    }
}
