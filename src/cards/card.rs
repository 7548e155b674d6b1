//! Card values: ranks, suits, and the `Card` pair.
//!
//! Durak is played with the 36-card deck: ranks Six through Ace in each of
//! the four suits. Ranks carry their numeric value (6..=14), which is what
//! the beat rules compare.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    /// Position of this suit in `Suit::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Hearts and diamonds are red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    /// Single-letter code used by the text format (`H`, `D`, `S`, `C`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'S' => Some(Suit::Spades),
            'C' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
        };
        write!(f, "{symbol}")
    }
}

/// Card rank. Ordering follows the numeric value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 9] = [
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value (6..=14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Position of this rank in `Rank::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        (self as u8 - Rank::Six as u8) as usize
    }

    /// Look up a rank by its numeric value.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Rank::ALL.iter().copied().find(|r| r.value() == value)
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    fn from_label(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            "A" => Some(Rank::Ace),
            "T" => Some(Rank::Ten),
            digits => digits.parse::<u8>().ok().and_then(Rank::from_value),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A real playing card.
///
/// The "no card" sentinel is not a `Card`; it is `Action::Pass`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Numeric rank value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    /// Does this card beat `attack` given the trump suit?
    ///
    /// Same suit and strictly higher rank, or trump against a non-trump.
    #[must_use]
    pub fn beats(self, attack: Card, trump: Suit) -> bool {
        if self.suit == attack.suit {
            self.rank > attack.rank
        } else {
            self.suit == trump
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Error parsing a card from text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid card {input:?}: expected rank 6-10/J/Q/K/A followed by suit H/D/S/C")]
pub struct ParseCardError {
    pub input: String,
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parse compact text such as `"7S"`, `"10H"`, `"qd"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError { input: s.to_string() };
        let trimmed = s.trim();
        let suit_char = trimmed.chars().last().ok_or_else(err)?;
        let suit = Suit::from_letter(suit_char).ok_or_else(err)?;
        let rank_text = &trimmed[..trimmed.len() - suit_char.len_utf8()];
        let rank = Rank::from_label(rank_text).ok_or_else(err)?;
        Ok(Card::new(rank, suit))
    }
}
