//! Plain player state with no decision logic.

use serde::{Deserialize, Serialize};

use super::handle::PlayerHandle;
use crate::cards::{Card, Suit};
use crate::core::Table;

/// Outcome of the last round a seat was told about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundNotice {
    pub defender: String,
    pub table: Table,
    pub successful: bool,
}

/// A named hand. Implements `PlayerHandle` and nothing else.
///
/// Strategies embed a `Seat` and delegate the handle methods to it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    name: String,
    hand: Vec<Card>,
    trump: Option<Suit>,
    last_round: Option<RoundNotice>,
}

impl Seat {
    /// Create an empty-handed seat.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The last round notification received this game.
    #[must_use]
    pub fn last_round(&self) -> Option<&RoundNotice> {
        self.last_round.as_ref()
    }
}

impl PlayerHandle for Seat {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &[Card] {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Vec<Card> {
        &mut self.hand
    }

    fn trump_suit(&self) -> Option<Suit> {
        self.trump
    }

    fn set_trump_suit(&mut self, suit: Suit) {
        self.trump = Some(suit);
    }

    fn initialize_for_game(&mut self) {
        self.last_round = None;
    }

    fn update_end_round(&mut self, defender_name: &str, table: &Table, successful: bool) {
        self.last_round = Some(RoundNotice {
            defender: defender_name.to_string(),
            table: table.clone(),
            successful,
        });
    }
}
