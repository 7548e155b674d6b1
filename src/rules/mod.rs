//! Durak rules as pure functions.
//!
//! - `legal_moves`: what each side may play given the table and trump
//! - `is_starting_hand_legal`: deal acceptance
//! - `lowest_trump`: first-attacker selection
//!
//! The engine calls into these but never re-derives the rules itself.

pub mod hand;
pub mod legal;

pub use hand::{is_starting_hand_legal, lowest_trump};
pub use legal::{legal_moves, LegalMoves};
