//! Action representation: play a card, or pass.
//!
//! `Pass` is the "no card" sentinel. An attacker passing means they have
//! nothing more to add; the defender passing means they take the table.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ring::SeatId;
use crate::cards::Card;

/// A complete game action.
///
/// ## Example
///
/// ```
/// use durak_engine::core::Action;
/// use durak_engine::cards::{Card, Rank, Suit};
///
/// let play = Action::Play(Card::new(Rank::Seven, Suit::Spades));
/// assert_eq!(play.card(), Some(Card::new(Rank::Seven, Suit::Spades)));
/// assert!(Action::Pass.is_pass());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    /// Put a card on the table.
    Play(Card),
    /// No card.
    Pass,
}

impl Action {
    /// The card played, if any.
    #[must_use]
    pub const fn card(self) -> Option<Card> {
        match self {
            Action::Play(card) => Some(card),
            Action::Pass => None,
        }
    }

    /// Is this the "no card" action?
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Action::Pass)
    }
}

impl From<Card> for Action {
    fn from(card: Card) -> Self {
        Action::Play(card)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Play(card) => write!(f, "{card}"),
            Action::Pass => f.write_str("pass"),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay logging and training data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that took this action.
    pub seat: SeatId,

    /// The action taken.
    pub action: Action,

    /// Round number when the action was taken (starts at 1).
    pub round: u32,

    /// Sequence number within the round.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(seat: SeatId, action: Action, round: u32, sequence: u32) -> Self {
        Self {
            seat,
            action,
            round,
            sequence,
        }
    }
}
