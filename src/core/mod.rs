//! Core engine types: seats, actions, table state, RNG, configuration, errors.
//!
//! These are the building blocks the rules and the engine are written in.

pub mod action;
pub mod config;
pub mod error;
pub mod ring;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{DurakConfig, Rewards, TrumpRule};
pub use error::{ConfigError, EngineError, EngineResult};
pub use ring::{SeatId, SeatRing};
pub use rng::GameRng;
pub use state::{GameState, Table, TableRow};
