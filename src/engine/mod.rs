//! The Durak game engine.
//!
//! `DurakEngine` owns the deck, the table, and the active-player ring, and
//! drives the attack/defense state machine one action at a time:
//!
//! ```text
//! reset() -> Attacking --card--> Defending --card--> Attacking ...
//!                 |                   |
//!               pass               pass / full defense
//!                 v                   v
//!            (round ends) ----> RoundResolving ----> Attacking | GameOver
//! ```
//!
//! Players are reached only through `PlayerHandle`; the engine never
//! chooses moves.

mod game;
mod render;

pub use game::{DurakEngine, Phase, RoundSummary, Transition, MIN_ACTIVE_PLAYERS};
pub use render::{RenderView, Renderer, SeatView};
