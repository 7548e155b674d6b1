//! Table contents and the externally observed game state.
//!
//! ## Table
//!
//! Two parallel rows: attacking cards and the defending cards answering
//! them. Defense `i` answers attack `i`, so `defending.len() <= attacking.len()`.
//!
//! ## GameState
//!
//! The observation handed out after every transition: the table plus the
//! legal moves for both sides. It is a value snapshot; mutating it never
//! touches the engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{ActionSet, Card};
use crate::rules::LegalMoves;

/// Inline row storage. A round never holds more attacks than a full hand.
pub type TableRow = SmallVec<[Card; 6]>;

/// Cards on the table for the current round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Table {
    attacking: TableRow,
    defending: TableRow,
}

impl Table {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from rows. Intended for analysis and tests.
    ///
    /// # Panics
    ///
    /// Panics if there are more defending cards than attacking cards.
    #[must_use]
    pub fn from_rows(attacking: &[Card], defending: &[Card]) -> Self {
        assert!(
            defending.len() <= attacking.len(),
            "More defending cards than attacking cards"
        );
        Self {
            attacking: SmallVec::from_slice(attacking),
            defending: SmallVec::from_slice(defending),
        }
    }

    /// Attacking cards in play order.
    #[must_use]
    pub fn attacking(&self) -> &[Card] {
        &self.attacking
    }

    /// Defending cards in play order.
    #[must_use]
    pub fn defending(&self) -> &[Card] {
        &self.defending
    }

    /// The most recent attack, if any.
    #[must_use]
    pub fn last_attack(&self) -> Option<Card> {
        self.attacking.last().copied()
    }

    /// Is there an attack the defender has not answered yet?
    #[must_use]
    pub fn has_unanswered_attack(&self) -> bool {
        self.attacking.len() > self.defending.len()
    }

    /// Is no card on the table?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attacking.is_empty()
    }

    /// Total cards on the table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.attacking.len() + self.defending.len()
    }

    /// Is `card` anywhere on the table?
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.attacking.contains(&card) || self.defending.contains(&card)
    }

    /// Every card on the table, attacking row first.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.attacking.iter().chain(self.defending.iter()).copied()
    }

    /// Table cards as a set.
    #[must_use]
    pub fn card_set(&self) -> ActionSet {
        ActionSet::from_cards(self.attacking.iter().chain(self.defending.iter()))
    }

    pub(crate) fn push_attack(&mut self, card: Card) {
        self.attacking.push(card);
    }

    pub(crate) fn push_defense(&mut self, card: Card) {
        debug_assert!(self.has_unanswered_attack(), "Defense without an attack");
        self.defending.push(card);
    }

    pub(crate) fn clear(&mut self) {
        self.attacking.clear();
        self.defending.clear();
    }
}

/// Observed game state, recomputed after every transition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Cards on the table.
    pub table: Table,

    /// Legal moves for both sides given the table.
    pub legal: LegalMoves,
}

impl GameState {
    /// Create a snapshot.
    #[must_use]
    pub fn new(table: Table, legal: LegalMoves) -> Self {
        Self { table, legal }
    }

    /// Attacking row.
    #[must_use]
    pub fn attacking(&self) -> &[Card] {
        self.table.attacking()
    }

    /// Defending row.
    #[must_use]
    pub fn defending(&self) -> &[Card] {
        self.table.defending()
    }

    /// Legal attacking actions.
    #[must_use]
    pub fn legal_attacking(&self) -> ActionSet {
        self.legal.attacking
    }

    /// Legal defending actions.
    #[must_use]
    pub fn legal_defending(&self) -> ActionSet {
        self.legal.defending
    }
}
