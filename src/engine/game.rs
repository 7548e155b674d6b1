//! Round and phase state machine.
//!
//! ## Turn Order
//!
//! The active seats form a `SeatRing`: position 0 attacks, position 1
//! defends, everyone else may pile on in ring order. A round ends when all
//! attackers pass, when the defender answers `limit` attacks, or when the
//! defender passes and takes the table.
//!
//! ## Determinism
//!
//! Seating and deck shuffles draw from independent `GameRng` context
//! streams derived from `DurakConfig::seed`. The same seed and the same
//! action sequence always produce the same states.

use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::render::{RenderView, Renderer, SeatView};
use crate::cards::{ActionSet, CardDeck, Suit};
use crate::core::{
    Action, ActionRecord, ConfigError, DurakConfig, EngineError, EngineResult, GameRng, GameState,
    SeatId, SeatRing, Table, TrumpRule,
};
use crate::players::PlayerHandle;
use crate::rules::{legal_moves, LegalMoves};

/// A game ends once fewer seats than this are still holding cards.
pub const MIN_ACTIVE_PLAYERS: usize = 2;

/// Where the engine is inside a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for an attacker to play or pass.
    Attacking,
    /// Waiting for the defender to beat the last attack or take.
    Defending,
    /// End-of-round bookkeeping. Only observed inside `step`.
    RoundResolving,
    /// Fewer than two seats remain.
    GameOver,
}

/// What happened in a round that just ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Round number, starting at 1.
    pub round: u32,
    /// Seat that opened the round.
    pub attacker: SeatId,
    pub defender: SeatId,
    /// Table as it was when the round ended.
    pub table: Table,
    /// True if the defender did not take the table.
    pub successful: bool,
    /// Seats that emptied their hands and left the game.
    pub went_out: Vec<SeatId>,
}

/// Result of one `step`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub state: GameState,
    pub reward: f32,
    pub done: bool,
    /// Present when this step ended a round.
    pub round: Option<RoundSummary>,
}

/// The Durak engine.
///
/// Owns the deck, the table and the seat ring. Players are owned too, but
/// only touched through `PlayerHandle`.
///
/// ## Example
///
/// ```
/// use durak_engine::{DurakConfig, DurakEngine, Seat};
///
/// let players = vec![Seat::new("north"), Seat::new("south")];
/// let mut engine = DurakEngine::new(players, DurakConfig::default()).unwrap();
/// let state = engine.reset().unwrap();
///
/// assert!(state.attacking().is_empty());
/// assert_eq!(engine.deck_remaining(), 24);
/// ```
pub struct DurakEngine<P: PlayerHandle> {
    config: DurakConfig,
    players: Vec<P>,
    deck_rng: GameRng,
    seat_rng: GameRng,
    deck: CardDeck,
    trump: Suit,
    ring: SeatRing,
    table: Table,
    legal: LegalMoves,
    phase: Phase,
    started: bool,

    turn: Option<SeatId>,
    round_attacker: Option<SeatId>,
    limit: usize,
    round_live: bool,
    successful: bool,
    reset_attacker: bool,
    round: u32,
    sequence: u32,

    loser: Option<SeatId>,
    discarded: ActionSet,
    history: Vector<ActionRecord>,
    renderer: Option<Box<dyn Renderer>>,
}

impl<P: PlayerHandle> DurakEngine<P> {
    /// Create an engine for `players`. Call `reset` before stepping.
    ///
    /// The player count is checked by `reset`, not here.
    pub fn new(players: Vec<P>, config: DurakConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = GameRng::new(config.seed);
        let trump = match config.trump {
            TrumpRule::Fixed(suit) => suit,
            TrumpRule::BottomCard => Suit::Hearts,
        };

        Ok(Self {
            deck_rng: rng.for_context("deck"),
            seat_rng: rng.for_context("seating"),
            config,
            players,
            deck: CardDeck::new(),
            trump,
            ring: SeatRing::default(),
            table: Table::new(),
            legal: LegalMoves::default(),
            phase: Phase::Attacking,
            started: false,
            turn: None,
            round_attacker: None,
            limit: 0,
            round_live: false,
            successful: false,
            reset_attacker: true,
            round: 0,
            sequence: 0,
            loser: None,
            discarded: ActionSet::empty(),
            history: Vector::new(),
            renderer: None,
        })
    }

    /// Attach a renderer.
    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    // === Lifecycle ===

    /// Start a new game: seat, deal, pick the opener, open round 1.
    pub fn reset(&mut self) -> EngineResult<GameState> {
        let count = self.players.len();
        if count < self.config.min_players || count > self.config.max_players {
            return Err(EngineError::InvalidPlayerCount {
                count,
                min: self.config.min_players,
                max: self.config.max_players,
            });
        }
        let mut order: Vec<SeatId> = SeatId::all(count).collect();
        if self.config.shuffle_seating {
            self.seat_rng.shuffle(&mut order);
        }
        self.ring = SeatRing::new(order);

        self.started = false;
        self.table.clear();
        self.history = Vector::new();
        self.loser = None;
        self.discarded = ActionSet::empty();
        self.round = 0;
        for player in &mut self.players {
            player.initialize_for_game();
        }

        self.deal()?;
        self.seat_opener();

        self.started = true;
        self.reset_round();
        self.refresh_legal();

        info!(
            seed = self.config.seed,
            players = count,
            trump = %self.trump,
            "game started"
        );
        Ok(self.state())
    }

    /// Apply one action for the turn player.
    ///
    /// The action must be in the legal set of the current phase, and a played
    /// card must be one the turn player has already taken out of its own hand:
    /// a card still in the deck, on the table, in the discard pile or in any
    /// hand is rejected. On error the engine is left untouched.
    pub fn step(&mut self, action: Action) -> EngineResult<Transition> {
        if !self.started {
            return Err(EngineError::NotStarted);
        }
        let allowed = match self.phase {
            Phase::Attacking => self.legal.attacking,
            Phase::Defending => self.legal.defending,
            Phase::RoundResolving | Phase::GameOver => return Err(EngineError::GameOver),
        };
        let Some(actor) = self.turn else {
            return Err(EngineError::GameOver);
        };
        if !allowed.contains(action) || self.placed_cards().contains(action) {
            warn!(seat = %actor, %action, phase = ?self.phase, "rejected illegal action");
            return Err(EngineError::IllegalAction {
                action,
                phase: self.phase,
            });
        }

        self.history
            .push_back(ActionRecord::new(actor, action, self.round, self.sequence));
        self.sequence += 1;

        match self.phase {
            Phase::Attacking => self.attack(actor, action),
            _ => self.defend(action),
        }

        let reward = self.reward();
        let round = if self.round_live {
            self.advance_turn();
            None
        } else {
            Some(self.resolve_round())
        };
        self.refresh_legal();

        Ok(Transition {
            state: self.state(),
            reward,
            done: self.is_game_over(),
            round,
        })
    }

    /// Hand the current view to the attached renderer, if any.
    pub fn render(&mut self) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        let seats = self
            .players
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let seat = SeatId::new(i as u8);
                SeatView {
                    seat,
                    name: p.name(),
                    hand_size: p.hand_size(),
                    active: self.ring.contains(seat),
                }
            })
            .collect();
        let view = RenderView {
            seats,
            table: &self.table,
            attacker: self.ring.attacker(),
            defender: self.ring.defender(),
            deck_remaining: self.deck.remaining(),
            trump: self.trump,
        };
        renderer.render(&view);
    }

    // === Queries ===

    /// Snapshot of the observable state.
    #[must_use]
    pub fn state(&self) -> GameState {
        GameState::new(self.table.clone(), self.legal)
    }

    /// What `seat` may play right now given its hand and its role.
    ///
    /// Empty for seats that are out, before `reset`, and after the game.
    #[must_use]
    pub fn available_actions(&self, seat: SeatId) -> ActionSet {
        let Some(player) = self.players.get(seat.index()) else {
            return ActionSet::empty();
        };
        if !self.started || self.phase == Phase::GameOver || !self.ring.contains(seat) {
            return ActionSet::empty();
        }

        let legal = if self.ring.defender() == Some(seat) {
            self.legal.defending
        } else {
            self.legal.attacking
        };
        ActionSet::from_cards(player.hand())
            .union(ActionSet::pass_only())
            .intersection(legal)
    }

    /// Cards the engine can locate: deck, table, discard pile and hands.
    ///
    /// A card a policy has taken out of its hand but not yet played is the
    /// only kind missing from this set.
    #[must_use]
    pub fn placed_cards(&self) -> ActionSet {
        self.players
            .iter()
            .map(|p| ActionSet::from_cards(p.hand()))
            .fold(self.table.card_set(), ActionSet::union)
            .union(ActionSet::from_cards(self.deck.cards()))
            .union(self.discarded)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// True while an attacker is expected to act.
    #[must_use]
    pub fn to_attack(&self) -> bool {
        self.started && self.phase == Phase::Attacking
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seat whose action `step` expects.
    #[must_use]
    pub fn turn_seat(&self) -> Option<SeatId> {
        self.turn
    }

    #[must_use]
    pub fn turn_player(&self) -> Option<&P> {
        self.turn.and_then(|seat| self.players.get(seat.index()))
    }

    /// Mutable turn player, for drivers whose policy edits its own hand.
    pub fn turn_player_mut(&mut self) -> Option<&mut P> {
        self.turn.and_then(|seat| self.players.get_mut(seat.index()))
    }

    /// The remaining player once the game is over. `None` on a draw.
    #[must_use]
    pub fn loser(&self) -> Option<&P> {
        self.loser.and_then(|seat| self.players.get(seat.index()))
    }

    #[must_use]
    pub fn loser_seat(&self) -> Option<SeatId> {
        self.loser
    }

    #[must_use]
    pub fn attacker(&self) -> Option<SeatId> {
        self.ring.attacker()
    }

    #[must_use]
    pub fn defender(&self) -> Option<SeatId> {
        self.ring.defender()
    }

    /// Seats still in the game, in ring order.
    #[must_use]
    pub fn active_seats(&self) -> Vec<SeatId> {
        self.ring.iter().collect()
    }

    #[must_use]
    pub fn ring(&self) -> &SeatRing {
        &self.ring
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Maximum attacks this round.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[must_use]
    pub fn trump_suit(&self) -> Suit {
        self.trump
    }

    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Current round number. Zero before `reset`.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round
    }

    /// Every accepted action this game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &DurakConfig {
        &self.config
    }

    #[must_use]
    pub fn player(&self, seat: SeatId) -> Option<&P> {
        self.players.get(seat.index())
    }

    pub fn player_mut(&mut self, seat: SeatId) -> Option<&mut P> {
        self.players.get_mut(seat.index())
    }

    /// All players indexed by `SeatId`, active or not.
    #[must_use]
    pub fn players(&self) -> &[P] {
        &self.players
    }

    /// Consume the engine, returning its players.
    pub fn into_players(self) -> Vec<P> {
        self.players
    }

    // === Setup ===

    /// Deal until every starting hand is legal.
    fn deal(&mut self) -> EngineResult<()> {
        let hand_size = self.config.hand_size;
        let attempts = self.config.max_deal_attempts;

        for attempt in 1..=attempts {
            self.deck.shuffle(&mut self.deck_rng);
            if let TrumpRule::BottomCard = self.config.trump {
                if let Some(card) = self.deck.bottom_card() {
                    self.trump = card.suit;
                }
            }

            for player in &mut self.players {
                player.empty_hand();
                player.set_trump_suit(self.trump);
            }

            let mut legal = true;
            for seat in self.ring.iter() {
                let player = &mut self.players[seat.index()];
                player.take_cards(&self.deck.draw(hand_size));
                if !player.is_starting_hand_legal(hand_size) {
                    legal = false;
                    break;
                }
            }

            if legal {
                debug!(attempt, remaining = self.deck.remaining(), "dealt starting hands");
                return Ok(());
            }
            debug!(attempt, "illegal starting hand, redealing");
        }

        Err(EngineError::DeckExhausted { attempts })
    }

    /// Rotate the lowest trump holder to the front. No trumps, no change.
    fn seat_opener(&mut self) {
        let opener = self
            .ring
            .iter()
            .filter_map(|seat| {
                self.players[seat.index()]
                    .lowest_trump_value()
                    .map(|rank| (rank, seat))
            })
            .min();

        if let Some((rank, seat)) = opener {
            debug!(%seat, ?rank, "lowest trump opens");
            self.ring.rotate_until_attacker(seat);
        }
    }

    // === Round Flow ===

    fn reset_round(&mut self) {
        self.table.clear();
        self.turn = self.ring.attacker();
        self.round_attacker = self.ring.attacker();
        let defender_cards = self
            .ring
            .defender()
            .map_or(0, |seat| self.players[seat.index()].hand_size());
        self.limit = self.config.hand_size.min(defender_cards);
        self.phase = Phase::Attacking;
        self.round_live = true;
        self.successful = false;
        self.reset_attacker = true;
        self.round += 1;
        self.sequence = 0;
    }

    fn attack(&mut self, actor: SeatId, action: Action) {
        match action {
            Action::Play(card) => {
                self.table.push_attack(card);
                self.phase = Phase::Defending;
            }
            Action::Pass => {
                if self.ring.is_last(actor) {
                    self.end_round(true);
                    self.reset_attacker = true;
                    return;
                }

                self.reset_attacker = false;
                let next = self.ring.next_after(actor);
                self.turn = next;
                if next.is_some() && next == self.ring.defender() {
                    if next.is_some_and(|seat| self.ring.is_last(seat)) {
                        self.turn = next.and_then(|seat| self.ring.previous_before(seat));
                        self.end_round(true);
                        self.reset_attacker = true;
                    } else {
                        self.turn = next.and_then(|seat| self.ring.next_after(seat));
                    }
                }
            }
        }
    }

    fn defend(&mut self, action: Action) {
        match action {
            Action::Play(card) => {
                self.table.push_defense(card);
                self.phase = Phase::Attacking;
                if self.table.defending().len() == self.limit {
                    self.end_round(true);
                }
                self.reset_attacker = true;
            }
            Action::Pass => {
                self.end_round(false);
                if let Some(defender) = self.ring.defender() {
                    let taken: Vec<_> = self.table.cards().collect();
                    self.players[defender.index()].take_cards(&taken);
                }
            }
        }
    }

    fn end_round(&mut self, successful: bool) {
        self.round_live = false;
        self.successful = successful;
    }

    /// Turn pointer for a round that keeps going.
    fn advance_turn(&mut self) {
        match self.phase {
            Phase::Attacking if self.reset_attacker => self.turn = self.ring.attacker(),
            Phase::Defending => self.turn = self.ring.defender(),
            _ => {}
        }
    }

    fn reward(&self) -> f32 {
        let rewards = &self.config.rewards;
        let turn_empty = self
            .turn_player()
            .is_some_and(|player| player.hand_size() == 0);

        if turn_empty && self.deck.is_empty() {
            rewards.win
        } else if self.round_live {
            0.0
        } else if self.successful {
            rewards.round_won
        } else {
            rewards.round_lost
        }
    }

    // === Round Resolution ===

    fn resolve_round(&mut self) -> RoundSummary {
        self.phase = Phase::RoundResolving;

        // Resolution only runs with at least two seats in the ring.
        let defender = self.ring.defender().unwrap_or_default();
        let attacker = self.round_attacker.unwrap_or_default();
        let defender_name = self.players[defender.index()].name().to_string();

        for seat in self.ring.iter() {
            self.players[seat.index()].update_end_round(&defender_name, &self.table, self.successful);
        }

        if self.successful {
            self.discarded = self.discarded.union(self.table.card_set());
        }
        self.refill_hands(defender);

        let went_out: Vec<SeatId> = self
            .ring
            .iter()
            .filter(|seat| self.players[seat.index()].hand_size() == 0)
            .collect();
        for seat in &went_out {
            self.ring.remove(*seat);
        }

        let summary = RoundSummary {
            round: self.round,
            attacker,
            defender,
            table: self.table.clone(),
            successful: self.successful,
            went_out,
        };
        debug!(
            round = summary.round,
            %defender,
            successful = summary.successful,
            out = summary.went_out.len(),
            "round resolved"
        );

        self.reorder_ring();

        if self.ring.len() < MIN_ACTIVE_PLAYERS {
            self.phase = Phase::GameOver;
            self.turn = None;
            match self.loser {
                Some(seat) => info!(loser = %seat, rounds = self.round, "game over"),
                None => info!(rounds = self.round, "game over without a loser"),
            }
        } else {
            self.reset_round();
        }
        summary
    }

    /// Top every hand back up, defender last.
    fn refill_hands(&mut self, defender: SeatId) {
        let hand_size = self.config.hand_size;
        let order = self
            .ring
            .iter()
            .filter(|&seat| seat != defender)
            .chain(std::iter::once(defender));

        for seat in order {
            let player = &mut self.players[seat.index()];
            let missing = hand_size.saturating_sub(player.hand_size());
            if missing > 0 {
                player.take_cards(&self.deck.draw(missing));
            }
        }
    }

    fn reorder_ring(&mut self) {
        match self.ring.len() {
            0 => self.loser = None,
            1 => self.loser = self.ring.attacker(),
            _ => {
                if self.ring.attacker() == self.round_attacker {
                    self.ring.rotate_to_back();
                }
                if !self.successful {
                    self.ring.rotate_to_back();
                }
                debug!(attacker = ?self.ring.attacker(), defender = ?self.ring.defender(), "ring rotated");
            }
        }
    }

    fn refresh_legal(&mut self) {
        self.legal = legal_moves(&self.table, self.trump);
    }
}

impl<P: PlayerHandle> fmt::Debug for DurakEngine<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DurakEngine")
            .field("phase", &self.phase)
            .field("round", &self.round)
            .field("ring", &self.ring)
            .field("turn", &self.turn)
            .field("table", &self.table)
            .field("deck_remaining", &self.deck.remaining())
            .field("trump", &self.trump)
            .finish_non_exhaustive()
    }
}
