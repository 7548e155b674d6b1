//! Engine configuration.
//!
//! `DurakConfig` fixes the table rules (hand size, supported player counts,
//! trump selection) and the reward signal reported by `step`. Values can be
//! set with the `with_*` builder methods or loaded from TOML:
//!
//! ```
//! use durak_engine::core::{DurakConfig, TrumpRule};
//! use durak_engine::cards::Suit;
//!
//! let config = DurakConfig::from_toml_str(r#"
//!     seed = 7
//!     trump = { fixed = "Spades" }
//!
//!     [rewards]
//!     win = 10.0
//! "#).unwrap();
//!
//! assert_eq!(config.seed, 7);
//! assert_eq!(config.trump, TrumpRule::Fixed(Suit::Spades));
//! assert_eq!(config.rewards.win, 10.0);
//! assert_eq!(config.hand_size, 6);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::{Suit, DECK_SIZE};

/// How the trump suit is chosen for a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrumpRule {
    /// The same suit every game.
    Fixed(Suit),
    /// The suit of the bottom card of the shuffled deck.
    BottomCard,
}

impl Default for TrumpRule {
    fn default() -> Self {
        TrumpRule::Fixed(Suit::Hearts)
    }
}

/// Reward values reported by `step`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rewards {
    /// Turn player has no cards and the deck is empty.
    pub win: f32,
    /// The step ended the round with a successful defense.
    pub round_won: f32,
    /// The step ended the round with the defender taking the table.
    pub round_lost: f32,
}

impl Default for Rewards {
    fn default() -> Self {
        Self {
            win: 30.0,
            round_won: 1.0,
            round_lost: -1.0,
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurakConfig {
    /// Cards per hand after every refill.
    pub hand_size: usize,

    /// Fewest seats a game can start with.
    pub min_players: usize,

    /// Most seats a game can start with.
    pub max_players: usize,

    /// Redeal budget when starting hands are illegal.
    pub max_deal_attempts: u32,

    /// Trump selection rule.
    pub trump: TrumpRule,

    /// Shuffle the seating order on every `reset`.
    pub shuffle_seating: bool,

    /// RNG seed. Same seed and same actions give the same game.
    pub seed: u64,

    /// Reward signal.
    pub rewards: Rewards,
}

impl Default for DurakConfig {
    fn default() -> Self {
        Self {
            hand_size: 6,
            min_players: 2,
            max_players: 6,
            max_deal_attempts: 1000,
            trump: TrumpRule::default(),
            shuffle_seating: true,
            seed: 0,
            rewards: Rewards::default(),
        }
    }
}

impl DurakConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML. Missing keys take default values.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the supported player range.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set the redeal budget.
    #[must_use]
    pub fn with_max_deal_attempts(mut self, attempts: u32) -> Self {
        self.max_deal_attempts = attempts;
        self
    }

    /// Set the trump rule.
    #[must_use]
    pub fn with_trump(mut self, trump: TrumpRule) -> Self {
        self.trump = trump;
        self
    }

    /// Enable or disable seat shuffling on reset.
    #[must_use]
    pub fn with_shuffle_seating(mut self, shuffle: bool) -> Self {
        self.shuffle_seating = shuffle;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the reward values.
    #[must_use]
    pub fn with_rewards(mut self, rewards: Rewards) -> Self {
        self.rewards = rewards;
        self
    }

    /// Check that the values describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Below 3 cards every hand trips the single-suit rule.
        if self.hand_size < 3 {
            return Err(ConfigError::Invalid {
                field: "hand_size",
                message: format!("must be at least 3, got {}", self.hand_size),
            });
        }
        if self.min_players < 2 {
            return Err(ConfigError::Invalid {
                field: "min_players",
                message: format!("must be at least 2, got {}", self.min_players),
            });
        }
        if self.max_players < self.min_players {
            return Err(ConfigError::Invalid {
                field: "max_players",
                message: format!(
                    "must be at least min_players ({}), got {}",
                    self.min_players, self.max_players
                ),
            });
        }
        if self.max_players > u8::MAX as usize {
            return Err(ConfigError::Invalid {
                field: "max_players",
                message: format!("at most {} seats supported", u8::MAX),
            });
        }
        if self.max_players * self.hand_size > DECK_SIZE {
            return Err(ConfigError::Invalid {
                field: "max_players",
                message: format!(
                    "{} hands of {} cards need more than {} cards",
                    self.max_players, self.hand_size, DECK_SIZE
                ),
            });
        }
        if self.max_deal_attempts == 0 {
            return Err(ConfigError::Invalid {
                field: "max_deal_attempts",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_standard_rules() {
        let config = DurakConfig::default();
        assert_eq!(config.hand_size, 6);
        assert_eq!(config.min_players, 2);
        assert_eq!(config.max_players, 6);
        assert_eq!(config.trump, TrumpRule::Fixed(Suit::Hearts));
        assert_eq!(config.rewards, Rewards { win: 30.0, round_won: 1.0, round_lost: -1.0 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = DurakConfig::new()
            .with_seed(99)
            .with_player_range(2, 4)
            .with_trump(TrumpRule::BottomCard)
            .with_shuffle_seating(false)
            .with_max_deal_attempts(5);

        assert_eq!(config.seed, 99);
        assert_eq!(config.max_players, 4);
        assert_eq!(config.trump, TrumpRule::BottomCard);
        assert!(!config.shuffle_seating);
        assert_eq!(config.max_deal_attempts, 5);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(DurakConfig::new().with_hand_size(2).validate().is_err());
        assert!(DurakConfig::new().with_player_range(1, 4).validate().is_err());
        assert!(DurakConfig::new().with_player_range(4, 3).validate().is_err());
        assert!(DurakConfig::new().with_player_range(2, 7).validate().is_err());
        assert!(DurakConfig::new().with_max_deal_attempts(0).validate().is_err());

        let err = DurakConfig::new().with_hand_size(8).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "max_players", .. }));
    }

    #[test]
    fn test_from_toml() {
        let config = DurakConfig::from_toml_str(
            r#"
            hand_size = 5
            max_players = 4
            shuffle_seating = false
            trump = "bottom_card"
            "#,
        )
        .unwrap();

        assert_eq!(config.hand_size, 5);
        assert_eq!(config.max_players, 4);
        assert!(!config.shuffle_seating);
        assert_eq!(config.trump, TrumpRule::BottomCard);
        assert_eq!(config.rewards, Rewards::default());
    }

    #[test]
    fn test_from_toml_rejects_invalid() {
        assert!(matches!(
            DurakConfig::from_toml_str("hand_size = \"six\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            DurakConfig::from_toml_str("hand_size = 1"),
            Err(ConfigError::Invalid { field: "hand_size", .. })
        ));
    }
}
