//! The 36-card deck and the card <-> index codec.
//!
//! ## Codec
//!
//! Every real card has a stable index in `0..36` (suit-major: hearts,
//! diamonds, spades, clubs; ranks ascending within a suit). Index 36 is
//! reserved for `Action::Pass`. The codec is what external encoders
//! (policy networks, action masks) rely on, so the ordering never changes.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::{Action, GameRng};

/// Number of real cards in the deck.
pub const DECK_SIZE: usize = 36;

/// Number of codec slots: every card plus the pass sentinel.
pub const ACTION_SPACE: usize = DECK_SIZE + 1;

/// Codec index reserved for `Action::Pass`.
pub const PASS_INDEX: usize = DECK_SIZE;

/// Ordered stack of remaining cards. Draws come off the front.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDeck {
    cards: Vec<Card>,
}

impl Default for CardDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl CardDeck {
    /// A full deck in canonical order (unshuffled).
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Self::full_universe(),
        }
    }

    /// A deck holding exactly `cards`, front first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Restore all 36 cards and apply a uniform random permutation.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        self.cards = Self::full_universe();
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return up to `n` cards from the front.
    ///
    /// Returns fewer than `n` when the deck runs out; never fails.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).collect()
    }

    /// Number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The last card to be drawn, if any.
    #[must_use]
    pub fn bottom_card(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Remaining cards, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Every card in canonical codec order.
    #[must_use]
    pub fn full_universe() -> Vec<Card> {
        (0..DECK_SIZE).map(Self::card_at).collect()
    }

    /// Codec index of an action. `Pass` maps to `PASS_INDEX`.
    #[must_use]
    pub const fn index_of(action: Action) -> usize {
        match action {
            Action::Play(card) => Self::card_index(card),
            Action::Pass => PASS_INDEX,
        }
    }

    /// Codec index of a real card.
    #[must_use]
    pub const fn card_index(card: Card) -> usize {
        card.suit.index() * Rank::ALL.len() + card.rank.index()
    }

    /// Inverse of `index_of`. Returns `None` outside `0..ACTION_SPACE`.
    #[must_use]
    pub fn action_at(index: usize) -> Option<Action> {
        match index {
            PASS_INDEX => Some(Action::Pass),
            i if i < DECK_SIZE => Some(Action::Play(Self::card_at(i))),
            _ => None,
        }
    }

    fn card_at(index: usize) -> Card {
        let per_suit = Rank::ALL.len();
        Card::new(Rank::ALL[index % per_suit], Suit::ALL[index / per_suit])
    }
}
