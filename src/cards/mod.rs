//! Card system: ranks and suits, the deck, and action sets.
//!
//! ## Key Types
//!
//! - `Card`: a `(rank, suit)` pair
//! - `CardDeck`: remaining cards plus the stable card <-> index codec
//! - `ActionSet`: bitmask set over the codec (legal moves, hands)

pub mod card;
pub mod deck;
pub mod set;

pub use card::{Card, ParseCardError, Rank, Suit};
pub use deck::{CardDeck, ACTION_SPACE, DECK_SIZE, PASS_INDEX};
pub use set::ActionSet;
