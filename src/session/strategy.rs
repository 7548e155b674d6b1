//! Move selection.

use crate::cards::ActionSet;
use crate::core::{Action, GameState};
use crate::players::PlayerHandle;

/// A player that can choose moves.
///
/// `available` is what `DurakEngine::available_actions` reports for the
/// acting seat: hand cards legal for its role, plus `Pass` when allowed.
///
/// ## Implementation Notes
///
/// - A strategy that plays a card must remove it from its own hand before
///   returning; the engine only adds cards to hands
/// - The returned action should be a member of `available`. Anything else,
///   including a card the strategy does not hold, is rejected with
///   `EngineError::IllegalAction`; `run_episode` then puts a removed card
///   back in the hand
pub trait Strategy: PlayerHandle {
    /// Play a card on the table or pass.
    fn attack(&mut self, state: &GameState, available: ActionSet) -> Action;

    /// Beat the last attack or take the table.
    fn defend(&mut self, state: &GameState, available: ActionSet) -> Action;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn attack(&mut self, state: &GameState, available: ActionSet) -> Action {
        (**self).attack(state, available)
    }

    fn defend(&mut self, state: &GameState, available: ActionSet) -> Action {
        (**self).defend(state, available)
    }
}
