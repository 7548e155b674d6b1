//! Starting-hand rules and trump lookups.

use crate::cards::{Card, Rank, Suit};

/// Is `hand` an acceptable starting hand for a game dealt `hand_size` cards?
///
/// A hand is rejected when a single suit holds `hand_size - 1` or more of
/// its cards, or when every card is red, or every card is black.
///
/// ```
/// use durak_engine::cards::Card;
/// use durak_engine::rules::is_starting_hand_legal;
///
/// let parse = |s: &str| s.split(' ').map(|c| c.parse::<Card>().unwrap()).collect::<Vec<_>>();
///
/// assert!(!is_starting_hand_legal(&parse("6H 7H 8H 6D 7D 8D"), 6));
/// assert!(is_starting_hand_legal(&parse("6H 7H 6S 7S 6C 7C"), 6));
/// ```
#[must_use]
pub fn is_starting_hand_legal(hand: &[Card], hand_size: usize) -> bool {
    let mut per_suit = [0usize; Suit::ALL.len()];
    for card in hand {
        per_suit[card.suit.index()] += 1;
    }

    let lopsided = per_suit.iter().any(|&n| n + 1 >= hand_size);
    let red = per_suit[Suit::Hearts.index()] + per_suit[Suit::Diamonds.index()];
    let black = per_suit[Suit::Spades.index()] + per_suit[Suit::Clubs.index()];

    !(lopsided || red == hand_size || black == hand_size)
}

/// Lowest trump rank in `hand`, if it holds any trump.
#[must_use]
pub fn lowest_trump(hand: &[Card], trump: Suit) -> Option<Rank> {
    hand.iter()
        .filter(|c| c.suit == trump)
        .map(|c| c.rank)
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(text: &str) -> Vec<Card> {
        text.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn test_all_red_rejected() {
        assert!(!is_starting_hand_legal(&hand("6H 7H 8H 6D 7D 8D"), 6));
    }

    #[test]
    fn test_all_black_rejected() {
        assert!(!is_starting_hand_legal(&hand("6S 7S 8S 6C 7C 8C"), 6));
    }

    #[test]
    fn test_mixed_hand_accepted() {
        assert!(is_starting_hand_legal(&hand("6H 7H 6S 7S 6C 7C"), 6));
        assert!(is_starting_hand_legal(&hand("6H 7H 8H AH 6S 7C"), 6));
    }

    #[test]
    fn test_single_suit_dominance_rejected() {
        // Five spades out of six
        assert!(!is_starting_hand_legal(&hand("6S 7S 8S 9S 10S 6H"), 6));
        // All six of one suit
        assert!(!is_starting_hand_legal(&hand("6D 7D 8D 9D 10D JD"), 6));
    }

    #[test]
    fn test_threshold_scales_with_hand_size() {
        // Three of one suit is fine in a hand of five...
        assert!(is_starting_hand_legal(&hand("6S 7S 8S 6H 6D"), 5));
        // ...but four is not.
        assert!(!is_starting_hand_legal(&hand("6S 7S 8S 9S 6H"), 5));
    }

    #[test]
    fn test_lowest_trump() {
        let cards = hand("KH 7S 9H 6C");
        assert_eq!(lowest_trump(&cards, Suit::Hearts), Some(Rank::Nine));
        assert_eq!(lowest_trump(&cards, Suit::Clubs), Some(Rank::Six));
        assert_eq!(lowest_trump(&cards, Suit::Diamonds), None);
    }
}
