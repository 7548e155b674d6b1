//! # durak-engine
//!
//! A headless engine for the card game Durak, built for self-play and
//! reinforcement learning.
//!
//! ## Design Principles
//!
//! 1. **Engine, Not Player**: The engine validates and applies actions. It
//!    never chooses them; decisions come from outside through `step`.
//!
//! 2. **N-Player**: 2 to 6 seats, in a rotating attacker/defender ring.
//!
//! 3. **Deterministic**: Seeded ChaCha8 streams. Same seed and same actions
//!    give the same game.
//!
//! ## Architecture
//!
//! - **Fixed Codec**: 36 cards plus `Pass` map to 37 stable indices, so legal
//!   sets are `u64` bitmasks and policy heads have a fixed width.
//!
//! - **Value Snapshots**: `GameState` is an owned copy; callers can keep it
//!   across steps.
//!
//! - **Persistent History**: Accepted actions are kept in an `im::Vector`.
//!
//! ## Modules
//!
//! - `cards`: Cards, the deck, the index codec, action sets
//! - `core`: Seats, actions, table state, RNG, configuration, errors
//! - `rules`: Legal move calculation and deal acceptance
//! - `players`: `PlayerHandle` capability trait and the plain `Seat`
//! - `engine`: `DurakEngine` state machine and the render hook
//! - `session`: `Strategy` trait and the reference driving loop
//! - `encoding`: One-hot planes and action masks for learned policies

pub mod cards;
pub mod core;
pub mod encoding;
pub mod engine;
pub mod players;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::cards::{
    ActionSet, Card, CardDeck, ParseCardError, Rank, Suit,
    ACTION_SPACE, DECK_SIZE, PASS_INDEX,
};

pub use crate::core::{
    Action, ActionRecord,
    DurakConfig, Rewards, TrumpRule,
    ConfigError, EngineError, EngineResult,
    SeatId, SeatRing,
    GameRng,
    GameState, Table, TableRow,
};

pub use crate::rules::{is_starting_hand_legal, legal_moves, lowest_trump, LegalMoves};

pub use crate::players::{PlayerHandle, RoundNotice, Seat};

pub use crate::engine::{
    DurakEngine, Phase, RoundSummary, Transition,
    RenderView, Renderer, SeatView,
};

pub use crate::session::{run_episode, Episode, EpisodeStep, SessionConfig, SessionError, Strategy};

pub use crate::encoding::{
    action_mask, CardPlaneEncoder, DiscardMemory, EncodedState, Observation, StateEncoder,
};
