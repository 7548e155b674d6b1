//! Engine behaviour through the public API.

mod common;

use common::{bot_engine, card, cards, drive_one, Policy};
use durak_engine::{
    is_starting_hand_legal, legal_moves, Action, ActionSet, DurakConfig, DurakEngine, EngineError,
    Phase, PlayerHandle, Seat, Suit, Table, Transition,
};

// =============================================================================
// Legal Moves
// =============================================================================

#[test]
fn test_empty_table_legal_sets() {
    let legal = legal_moves(&Table::new(), Suit::Hearts);

    assert_eq!(legal.attacking, ActionSet::all_cards());
    assert_eq!(legal.attacking.len(), 36);
    assert!(!legal.attacking.contains_pass());
    assert_eq!(legal.defending, ActionSet::pass_only());
}

#[test]
fn test_defending_against_seven_of_spades() {
    let table = Table::from_rows(&cards("7S"), &[]);
    let legal = legal_moves(&table, Suit::Hearts);

    let mut expected = ActionSet::from_cards(&cards("8S 9S 10S JS QS KS AS"));
    expected = expected.union(ActionSet::from_cards(&cards("6H 7H 8H 9H 10H JH QH KH AH")));
    expected.insert(Action::Pass);
    assert_eq!(legal.defending, expected);

    let mut attacking = ActionSet::from_cards(&cards("7H 7D 7C"));
    attacking.insert(Action::Pass);
    assert_eq!(legal.attacking, attacking);
}

#[test]
fn test_table_cards_never_legal() {
    let table = Table::from_rows(&cards("7S 7D 9C"), &cards("8S JD"));
    let legal = legal_moves(&table, Suit::Diamonds);

    for c in table.cards() {
        assert!(!legal.attacking.contains(Action::Play(c)));
        assert!(!legal.defending.contains(Action::Play(c)));
    }
    // 9C is unanswered: higher clubs and every non-table diamond.
    assert!(legal.defending.contains(Action::Play(card("10C"))));
    assert!(legal.defending.contains(Action::Play(card("6D"))));
    assert!(!legal.defending.contains(Action::Play(card("8C"))));
}

// =============================================================================
// Starting Hands
// =============================================================================

#[test]
fn test_starting_hand_acceptance() {
    // All red is redealt; an even spread of suits is kept.
    assert!(!is_starting_hand_legal(&cards("6H 7H 8H 6D 7D 8D"), 6));
    assert!(is_starting_hand_legal(&cards("6H 7H 6S 7S 6C 7C"), 6));
    assert!(!is_starting_hand_legal(&cards("6S 7S 8S 9S 10S AD"), 6));
    assert!(!is_starting_hand_legal(&cards("6S 7C 8S 9C 10S AC"), 6));
    assert!(is_starting_hand_legal(&cards("6S 7C 8S 9H 10D AC"), 6));
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_reset_for_every_table_size() {
    for players in 2..=6 {
        let mut engine = bot_engine(players, Policy::FirstLegal, 42);
        let state = engine.reset().unwrap();

        assert!(state.attacking().is_empty());
        assert_eq!(engine.active_seats().len(), players);
        assert_eq!(engine.deck_remaining(), 36 - 6 * players);
        assert!(engine.players().iter().all(|p| p.hand_size() == 6));
        assert_eq!(engine.phase(), Phase::Attacking);
        assert!(engine.to_attack());
    }
}

#[test]
fn test_reset_starts_fresh_game() {
    let mut engine = bot_engine(3, Policy::Random, 9);
    let mut state = engine.reset().unwrap();
    for _ in 0..10 {
        state = drive_one(&mut engine, &state).state;
    }
    assert!(!engine.history().is_empty());

    engine.reset().unwrap();
    assert!(engine.history().is_empty());
    assert!(engine.table().is_empty());
    assert_eq!(engine.round_number(), 1);
    assert_eq!(engine.active_seats().len(), 3);
}

#[test]
fn test_seating_without_shuffle_keeps_order_until_opener() {
    let players = vec![Seat::new("a"), Seat::new("b"), Seat::new("c")];
    let config = DurakConfig::default().with_shuffle_seating(false).with_seed(4);
    let mut engine = DurakEngine::new(players, config).unwrap();
    engine.reset().unwrap();

    // The ring is 0, 1, 2 rotated to the opener.
    let ring = engine.active_seats();
    let start = ring[0].index();
    for (offset, seat) in ring.iter().enumerate() {
        assert_eq!(seat.index(), (start + offset) % 3);
    }
}

#[test]
fn test_config_rejected_at_construction() {
    let config = DurakConfig::default().with_hand_size(0);
    let result = DurakEngine::new(vec![Seat::new("a"), Seat::new("b")], config);
    assert!(result.is_err());
}

// =============================================================================
// Step Validation
// =============================================================================

#[test]
fn test_illegal_actions_rejected_without_change() {
    let mut engine = bot_engine(2, Policy::FirstLegal, 1);
    let state = engine.reset().unwrap();
    let turn = engine.turn_seat();

    assert_eq!(
        engine.step(Action::Pass),
        Err(EngineError::IllegalAction {
            action: Action::Pass,
            phase: Phase::Attacking
        })
    );
    assert_eq!(engine.state(), state);
    assert_eq!(engine.turn_seat(), turn);

    let t = drive_one(&mut engine, &state);
    let on_table = t.state.attacking()[0];
    assert!(matches!(
        engine.step(Action::Play(on_table)),
        Err(EngineError::IllegalAction { phase: Phase::Defending, .. })
    ));
    assert_eq!(engine.state(), t.state);
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn test_attacker_cannot_play_defenders_card() {
    let mut engine = bot_engine(3, Policy::FirstLegal, 6);
    let state = engine.reset().unwrap();
    let defender = engine.defender().unwrap();
    let stolen = engine.player(defender).unwrap().hand()[0];

    assert!(matches!(
        engine.step(Action::Play(stolen)),
        Err(EngineError::IllegalAction { phase: Phase::Attacking, .. })
    ));
    assert_eq!(engine.state(), state);
    assert!(engine.history().is_empty());
    assert!(engine.player(defender).unwrap().hand().contains(&stolen));
    assert_eq!(engine.placed_cards().len(), 36);
}

#[test]
fn test_available_actions_within_hand() {
    let mut engine = bot_engine(4, Policy::Random, 77);
    let mut state = engine.reset().unwrap();

    while !engine.is_game_over() {
        for seat in engine.active_seats() {
            let available = engine.available_actions(seat);
            let hand = ActionSet::from_cards(engine.player(seat).unwrap().hand());
            assert_eq!(available.cards_only(), available.cards_only().intersection(hand));
        }
        let defender = engine.defender().unwrap();
        assert!(engine.available_actions(defender).contains_pass());
        state = drive_one(&mut engine, &state).state;
    }
}

// =============================================================================
// Round Resolution
// =============================================================================

#[test]
fn test_failed_defense_rotates_past_defender() {
    let mut observed = 0;

    for seed in 0..40 {
        let mut engine = bot_engine(4, Policy::Random, seed);
        let mut state = engine.reset().unwrap();

        while !engine.is_game_over() {
            let ring = engine.active_seats();
            let deck_before = engine.deck_remaining();
            let defender = engine.defender().unwrap();
            let defender_cards = engine.player(defender).unwrap().hand_size();
            let table_cards = engine.table().card_count();

            let t = drive_one(&mut engine, &state);
            if let Some(summary) = &t.round {
                if !summary.successful && summary.went_out.is_empty() && ring.len() >= 3 && !t.done {
                    observed += 1;
                    assert_eq!(summary.defender, defender);
                    assert!(engine.table().is_empty());
                    assert_eq!(engine.attacker(), Some(ring[2]));

                    let after = engine.player(defender).unwrap().hand_size();
                    assert!(after >= defender_cards + table_cards);
                    if deck_before == 0 {
                        assert_eq!(after, defender_cards + table_cards);
                    }
                }
            }
            state = t.state;
        }
    }

    assert!(observed > 0);
}

#[test]
fn test_game_ends_with_one_loser_or_draw() {
    for seed in 0..30 {
        for players in [2, 3, 5] {
            let mut engine = bot_engine(players, Policy::Random, seed);
            let mut state = engine.reset().unwrap();
            let mut last: Option<Transition> = None;

            while !engine.is_game_over() {
                let t = drive_one(&mut engine, &state);
                state = t.state.clone();
                last = Some(t);
            }

            let last = last.unwrap();
            assert!(last.done);
            assert!(last.round.is_some());
            assert_eq!(engine.deck_remaining(), 0);
            assert!(engine.turn_player().is_none());
            assert_eq!(engine.step(Action::Pass), Err(EngineError::GameOver));

            match engine.loser_seat() {
                Some(seat) => {
                    assert_eq!(engine.active_seats(), vec![seat]);
                    assert!(engine.loser().unwrap().hand_size() > 0);
                    let others = engine.players().iter().filter(|p| p.hand_size() > 0).count();
                    assert_eq!(others, 1);
                }
                None => assert!(engine.active_seats().is_empty()),
            }
        }
    }
}

#[test]
fn test_round_rewards() {
    let mut engine = bot_engine(3, Policy::Random, 5);
    let mut state = engine.reset().unwrap();

    while !engine.is_game_over() {
        let t = drive_one(&mut engine, &state);
        match &t.round {
            None => assert!(t.reward == 0.0 || t.reward == 30.0),
            Some(summary) if summary.successful => assert!(t.reward == 1.0 || t.reward == 30.0),
            Some(_) => assert_eq!(t.reward, -1.0),
        }
        state = t.state;
    }
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_same_transitions() {
    let play = |seed| {
        let mut engine = bot_engine(4, Policy::Random, seed);
        let mut state = engine.reset().unwrap();
        let mut transitions = vec![];
        while !engine.is_game_over() {
            let t = drive_one(&mut engine, &state);
            state = t.state.clone();
            transitions.push(t);
        }
        (transitions, engine.history().clone())
    };

    assert_eq!(play(12), play(12));
    assert_ne!(play(12).1, play(13).1);
}

#[test]
fn test_history_records_every_step() {
    let mut engine = bot_engine(2, Policy::FirstLegal, 3);
    let mut state = engine.reset().unwrap();
    let mut steps = 0;

    while !engine.is_game_over() {
        state = drive_one(&mut engine, &state).state;
        steps += 1;
    }

    let history = engine.history();
    assert_eq!(history.len(), steps);
    assert_eq!(history[0].round, 1);
    assert_eq!(history[0].sequence, 0);
    for pair in history.iter().collect::<Vec<_>>().windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let same_round = b.round == a.round && b.sequence == a.sequence + 1;
        let next_round = b.round == a.round + 1 && b.sequence == 0;
        assert!(same_round || next_round);
    }
}
