//! The capability surface the engine needs from a player.

use crate::cards::{Card, Rank, Suit};
use crate::core::Table;
use crate::rules::{is_starting_hand_legal, lowest_trump};

/// What the engine needs from any player implementation.
///
/// Implementors provide hand storage, a name, and trump bookkeeping; every
/// other method has a default built on those. Move selection is not part of
/// this trait: the engine never asks a player what to play.
///
/// ## Implementation Notes
///
/// - `take_cards` is the only way the engine adds cards to a hand
/// - Removing a played card is the player's (or its policy's) job, done
///   before the action reaches `DurakEngine::step`
/// - `update_end_round` is called once per round on every active player,
///   before hands are refilled
pub trait PlayerHandle {
    /// Stable player name, unique at a table.
    fn name(&self) -> &str;

    /// Cards currently held.
    fn hand(&self) -> &[Card];

    /// Mutable hand storage.
    fn hand_mut(&mut self) -> &mut Vec<Card>;

    /// Trump suit for the current game, once known.
    fn trump_suit(&self) -> Option<Suit>;

    /// Record the trump suit for the current game.
    fn set_trump_suit(&mut self, suit: Suit);

    // === Convenience Methods ===

    /// Add cards to the hand.
    fn take_cards(&mut self, cards: &[Card]) {
        self.hand_mut().extend_from_slice(cards);
    }

    /// Discard the whole hand.
    fn empty_hand(&mut self) {
        self.hand_mut().clear();
    }

    /// Number of cards held.
    fn hand_size(&self) -> usize {
        self.hand().len()
    }

    /// Remove a card from the hand. Returns false if it was not held.
    fn remove_card(&mut self, card: Card) -> bool {
        let hand = self.hand_mut();
        match hand.iter().position(|&c| c == card) {
            Some(pos) => {
                hand.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Would the current hand be accepted as a starting hand?
    fn is_starting_hand_legal(&self, hand_size: usize) -> bool {
        is_starting_hand_legal(self.hand(), hand_size)
    }

    /// Lowest trump rank held, or `None` without trumps or a trump suit.
    fn lowest_trump_value(&self) -> Option<Rank> {
        self.trump_suit().and_then(|trump| lowest_trump(self.hand(), trump))
    }

    /// Called on every seat at the start of each game, before dealing.
    fn initialize_for_game(&mut self) {}

    /// Round outcome notification.
    ///
    /// `table` holds the cards as they were when the round ended.
    fn update_end_round(&mut self, defender_name: &str, table: &Table, successful: bool) {
        let _ = (defender_name, table, successful);
    }
}

impl<P: PlayerHandle + ?Sized> PlayerHandle for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn hand(&self) -> &[Card] {
        (**self).hand()
    }

    fn hand_mut(&mut self) -> &mut Vec<Card> {
        (**self).hand_mut()
    }

    fn trump_suit(&self) -> Option<Suit> {
        (**self).trump_suit()
    }

    fn set_trump_suit(&mut self, suit: Suit) {
        (**self).set_trump_suit(suit);
    }

    fn take_cards(&mut self, cards: &[Card]) {
        (**self).take_cards(cards);
    }

    fn empty_hand(&mut self) {
        (**self).empty_hand();
    }

    fn is_starting_hand_legal(&self, hand_size: usize) -> bool {
        (**self).is_starting_hand_legal(hand_size)
    }

    fn lowest_trump_value(&self) -> Option<Rank> {
        (**self).lowest_trump_value()
    }

    fn initialize_for_game(&mut self) {
        (**self).initialize_for_game();
    }

    fn update_end_round(&mut self, defender_name: &str, table: &Table, successful: bool) {
        (**self).update_end_round(defender_name, table, successful);
    }
}
