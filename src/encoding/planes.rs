//! One-hot card planes.
//!
//! Every plane is a 37-slot vector in codec order (36 cards, then pass).
//! `CardPlaneEncoder` stacks five of them: hand, attacking row, defending
//! row, discard memory, and the available actions.

use serde::{Deserialize, Serialize};

use super::tensor::EncodedState;
use crate::cards::{ActionSet, Card, ACTION_SPACE};
use crate::core::{GameState, Table};

/// Cards known to have left the game through successful defenses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardMemory {
    discarded: ActionSet,
}

impl DiscardMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the table of a finished round. Taken tables are not
    /// discarded and are ignored.
    pub fn observe_round(&mut self, table: &Table, successful: bool) {
        if successful {
            self.discarded = self.discarded.union(table.card_set());
        }
    }

    pub fn clear(&mut self) {
        self.discarded = ActionSet::empty();
    }

    #[must_use]
    pub fn discarded(&self) -> ActionSet {
        self.discarded
    }
}

/// What one seat knows when it is asked to act.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Observation {
    pub hand: ActionSet,
    pub attacking: ActionSet,
    pub defending: ActionSet,
    pub discarded: ActionSet,
    pub available: ActionSet,
}

impl Observation {
    pub fn new(
        hand: &[Card],
        state: &GameState,
        memory: &DiscardMemory,
        available: ActionSet,
    ) -> Self {
        Self {
            hand: ActionSet::from_cards(hand),
            attacking: ActionSet::from_cards(state.attacking()),
            defending: ActionSet::from_cards(state.defending()),
            discarded: memory.discarded(),
            available,
        }
    }
}

/// Turns observations into network input.
pub trait StateEncoder {
    fn encode(&self, observation: &Observation) -> EncodedState;

    fn output_shape(&self) -> Vec<usize>;

    /// Width of the policy output.
    fn action_space_size(&self) -> usize {
        ACTION_SPACE
    }
}

/// Five stacked one-hot planes, 185 features in total.
#[derive(Clone, Copy, Debug, Default)]
pub struct CardPlaneEncoder;

impl CardPlaneEncoder {
    pub const PLANES: usize = 5;
}

impl StateEncoder for CardPlaneEncoder {
    fn encode(&self, observation: &Observation) -> EncodedState {
        let mut encoded = EncodedState::zeros(self.output_shape());
        let planes = [
            observation.hand,
            observation.attacking,
            observation.defending,
            observation.discarded,
            observation.available,
        ];
        for (plane, set) in planes.into_iter().enumerate() {
            encoded.set_plane(plane, set);
        }
        encoded
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![Self::PLANES, ACTION_SPACE]
    }
}
