//! Shared test players.

#![allow(dead_code)]

use durak_engine::{
    Action, ActionSet, Card, DurakConfig, DurakEngine, GameRng, GameState, PlayerHandle, Seat,
    Strategy, Suit,
};

/// How a `Bot` picks among its available actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Lowest card in codec order, pass only when forced.
    FirstLegal,
    /// Uniform over every available action, pass included.
    Random,
}

/// Test strategy wrapping a plain `Seat`.
pub struct Bot {
    seat: Seat,
    policy: Policy,
    rng: GameRng,
}

impl Bot {
    pub fn new(name: impl Into<String>, policy: Policy, seed: u64) -> Self {
        Self {
            seat: Seat::new(name),
            policy,
            rng: GameRng::new(seed),
        }
    }

    fn choose(&mut self, available: ActionSet) -> Action {
        let action = match self.policy {
            Policy::FirstLegal => available.cards().next().map_or(Action::Pass, Action::Play),
            Policy::Random => {
                let options: Vec<Action> = available.iter().collect();
                self.rng.choose(&options).copied().unwrap_or(Action::Pass)
            }
        };
        if let Action::Play(card) = action {
            self.seat.remove_card(card);
        }
        action
    }
}

impl PlayerHandle for Bot {
    fn name(&self) -> &str {
        self.seat.name()
    }

    fn hand(&self) -> &[Card] {
        self.seat.hand()
    }

    fn hand_mut(&mut self) -> &mut Vec<Card> {
        self.seat.hand_mut()
    }

    fn trump_suit(&self) -> Option<Suit> {
        self.seat.trump_suit()
    }

    fn set_trump_suit(&mut self, suit: Suit) {
        self.seat.set_trump_suit(suit);
    }
}

impl Strategy for Bot {
    fn attack(&mut self, _state: &GameState, available: ActionSet) -> Action {
        self.choose(available)
    }

    fn defend(&mut self, _state: &GameState, available: ActionSet) -> Action {
        self.choose(available)
    }
}

/// Engine with `players` bots, all using `policy`.
pub fn bot_engine(players: usize, policy: Policy, seed: u64) -> DurakEngine<Bot> {
    let bots = (0..players)
        .map(|i| Bot::new(format!("bot{i}"), policy, seed.wrapping_mul(31).wrapping_add(i as u64)))
        .collect();
    DurakEngine::new(bots, DurakConfig::default().with_seed(seed)).unwrap()
}

/// Parse whitespace separated cards.
pub fn cards(text: &str) -> Vec<Card> {
    text.split_whitespace().map(|c| c.parse().unwrap()).collect()
}

pub fn card(text: &str) -> Card {
    text.parse().unwrap()
}

/// Ask the turn player for a move and apply it.
pub fn drive_one(engine: &mut DurakEngine<Bot>, state: &GameState) -> durak_engine::Transition {
    let seat = engine.turn_seat().unwrap();
    let available = engine.available_actions(seat);
    let attacking = engine.to_attack();
    let bot = engine.player_mut(seat).unwrap();
    let action = if attacking {
        bot.attack(state, available)
    } else {
        bot.defend(state, available)
    };
    engine.step(action).unwrap()
}
