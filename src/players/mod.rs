//! Player capability contract.
//!
//! The engine talks to players only through `PlayerHandle`. Decision making
//! (attack/defend) lives in `session::Strategy` implementations outside the
//! engine.

pub mod handle;
pub mod seat;

pub use handle::PlayerHandle;
pub use seat::{RoundNotice, Seat};
