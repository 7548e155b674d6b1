//! Optional visualization hook.
//!
//! The engine never draws anything. A `Renderer` attached with
//! `DurakEngine::with_renderer` receives a read-only view on every
//! `DurakEngine::render` call; headless engines skip it entirely.

use crate::cards::Suit;
use crate::core::{SeatId, Table};

/// Public information about one seat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatView<'a> {
    pub seat: SeatId,
    pub name: &'a str,
    pub hand_size: usize,
    pub active: bool,
}

/// Everything a renderer may show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderView<'a> {
    pub seats: Vec<SeatView<'a>>,
    pub table: &'a Table,
    pub attacker: Option<SeatId>,
    pub defender: Option<SeatId>,
    pub deck_remaining: usize,
    pub trump: Suit,
}

/// External renderer collaborator.
pub trait Renderer {
    fn render(&mut self, view: &RenderView<'_>);
}
