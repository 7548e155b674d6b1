//! Legal move calculation.
//!
//! A pure function of the table and the trump suit. Which player is asking
//! does not matter here; intersecting with a hand is the engine's job.

use serde::{Deserialize, Serialize};

use crate::cards::{ActionSet, CardDeck, Rank, Suit};
use crate::core::{Action, Table};

/// Legal actions for both sides of the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegalMoves {
    /// Actions an attacker-side player may take.
    pub attacking: ActionSet,
    /// Actions the defender may take.
    pub defending: ActionSet,
}

/// Compute the legal moves for a table.
///
/// - Empty table: any card may open; the defender can only pass.
/// - Otherwise attackers may pass or add any off-table card whose rank is
///   already on the table (either row).
/// - The defender may always pass (take the table). While an attack is
///   unanswered they may also play any off-table card that beats it.
///
/// ```
/// use durak_engine::cards::{Card, Rank, Suit};
/// use durak_engine::core::{Action, Table};
/// use durak_engine::rules::legal_moves;
///
/// let table = Table::from_rows(&[Card::new(Rank::Seven, Suit::Spades)], &[]);
/// let legal = legal_moves(&table, Suit::Hearts);
///
/// assert!(legal.defending.contains(Action::Play(Card::new(Rank::Eight, Suit::Spades))));
/// assert!(legal.defending.contains(Action::Play(Card::new(Rank::Six, Suit::Hearts))));
/// assert!(!legal.defending.contains(Action::Play(Card::new(Rank::Six, Suit::Spades))));
/// assert!(legal.attacking.contains(Action::Play(Card::new(Rank::Seven, Suit::Clubs))));
/// ```
#[must_use]
pub fn legal_moves(table: &Table, trump: Suit) -> LegalMoves {
    if table.is_empty() {
        return LegalMoves {
            attacking: ActionSet::all_cards(),
            defending: ActionSet::pass_only(),
        };
    }

    let on_table = table.card_set();
    let mut ranks_in_play = [false; Rank::ALL.len()];
    for card in table.cards() {
        ranks_in_play[card.rank.index()] = true;
    }

    let mut attacking = ActionSet::pass_only();
    let mut defending = ActionSet::pass_only();
    let open_attack = table
        .has_unanswered_attack()
        .then(|| table.last_attack())
        .flatten();

    for card in CardDeck::full_universe() {
        let action = Action::Play(card);
        if on_table.contains(action) {
            continue;
        }
        if ranks_in_play[card.rank.index()] {
            attacking.insert(action);
        }
        if open_attack.is_some_and(|attack| card.beats(attack, trump)) {
            defending.insert(action);
        }
    }

    LegalMoves {
        attacking,
        defending,
    }
}
