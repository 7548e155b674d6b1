//! Driving loop outside the engine.
//!
//! ## Overview
//!
//! - **Strategy**: `PlayerHandle` plus `attack`/`defend` move selection
//! - **run_episode**: reset, then ask-and-step until the game is over
//! - **Episode**: the accepted actions, per-step rewards and the loser
//!
//! ## Usage
//!
//! ```rust,ignore
//! use durak_engine::{DurakConfig, DurakEngine};
//! use durak_engine::session::{run_episode, SessionConfig};
//!
//! let mut engine = DurakEngine::new(my_strategies, DurakConfig::default())?;
//! let episode = run_episode(&mut engine, &SessionConfig::default())?;
//! println!("{} steps, loser {:?}", episode.len(), episode.loser);
//! ```

pub mod episode;
pub mod strategy;

pub use episode::{run_episode, Episode, EpisodeStep, SessionConfig, SessionError};
pub use strategy::Strategy;
