//! Fixed-width set of actions backed by a bitmask over the deck codec.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::deck::{CardDeck, ACTION_SPACE, DECK_SIZE, PASS_INDEX};
use crate::core::Action;

/// A set of actions (cards and/or `Pass`).
///
/// Bit `i` is set when the action with codec index `i` is a member.
/// Iteration follows codec order, so output is deterministic.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionSet(u64);

impl ActionSet {
    const CARD_MASK: u64 = (1u64 << DECK_SIZE) - 1;

    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every real card, no pass.
    #[must_use]
    pub const fn all_cards() -> Self {
        Self(Self::CARD_MASK)
    }

    /// Only `Pass`.
    #[must_use]
    pub const fn pass_only() -> Self {
        Self(1u64 << PASS_INDEX)
    }

    /// Build a set from cards.
    pub fn from_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Self {
        let mut set = Self::empty();
        for &card in cards {
            set.insert(Action::Play(card));
        }
        set
    }

    /// Add an action.
    pub fn insert(&mut self, action: Action) {
        self.0 |= 1u64 << CardDeck::index_of(action);
    }

    /// Remove an action. Returns whether it was present.
    pub fn remove(&mut self, action: Action) -> bool {
        let bit = 1u64 << CardDeck::index_of(action);
        let present = self.0 & bit != 0;
        self.0 &= !bit;
        present
    }

    /// Membership test.
    #[must_use]
    pub const fn contains(self, action: Action) -> bool {
        self.0 & (1u64 << CardDeck::index_of(action)) != 0
    }

    /// Is `Pass` a member?
    #[must_use]
    pub const fn contains_pass(self) -> bool {
        self.contains(Action::Pass)
    }

    /// Set intersection.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Set union.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// The same set without `Pass`.
    #[must_use]
    pub const fn cards_only(self) -> Self {
        Self(self.0 & Self::CARD_MASK)
    }

    /// Number of members.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Is the set empty?
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw bitmask (bit i = codec index i).
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Iterate members in codec order.
    pub fn iter(self) -> impl Iterator<Item = Action> {
        (0..ACTION_SPACE)
            .filter(move |&i| self.0 & (1u64 << i) != 0)
            .filter_map(CardDeck::action_at)
    }

    /// Iterate the real cards in the set, in codec order.
    pub fn cards(self) -> impl Iterator<Item = Card> {
        self.iter().filter_map(Action::card)
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut set = Self::empty();
        for action in iter {
            set.insert(action);
        }
        set
    }
}

impl fmt::Debug for ActionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|a| a.to_string())).finish()
    }
}
