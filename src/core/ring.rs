//! Seat identification and the active-player ring.
//!
//! ## SeatId
//!
//! Type-safe seat identifier. Seats index the engine's player list and stay
//! fixed for the engine's lifetime; only the ring order changes.
//!
//! ## SeatRing
//!
//! Rotating order of the seats still in the game. Position 0 is the
//! attacker, position 1 the defender. The ring is reordered only by
//! `rotate_to_back` and shrunk only by `remove`.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Seat identifier supporting up to 255 seats.
///
/// Seat indices are 0-based: the first player is `SeatId(0)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seat IDs for a table with `seat_count` seats.
    ///
    /// ```
    /// use durak_engine::core::SeatId;
    ///
    /// let seats: Vec<_> = SeatId::all(3).collect();
    /// assert_eq!(seats, vec![SeatId::new(0), SeatId::new(1), SeatId::new(2)]);
    /// ```
    pub fn all(seat_count: usize) -> impl Iterator<Item = SeatId> {
        (0..seat_count as u8).map(SeatId)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Ring position of the attacker.
const ATTACKER: usize = 0;
/// Ring position of the defender.
const DEFENDER: usize = 1;

/// Ordered, rotating sequence of the seats still in the game.
///
/// ## Example
///
/// ```
/// use durak_engine::core::{SeatId, SeatRing};
///
/// let mut ring = SeatRing::new(SeatId::all(3));
/// assert_eq!(ring.attacker(), Some(SeatId::new(0)));
/// assert_eq!(ring.defender(), Some(SeatId::new(1)));
///
/// ring.rotate_to_back();
/// assert_eq!(ring.attacker(), Some(SeatId::new(1)));
/// assert_eq!(ring.defender(), Some(SeatId::new(2)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatRing {
    seats: VecDeque<SeatId>,
}

impl SeatRing {
    /// Create a ring from seats in order.
    pub fn new(seats: impl IntoIterator<Item = SeatId>) -> Self {
        Self {
            seats: seats.into_iter().collect(),
        }
    }

    /// Number of seats in the ring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Is the ring empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Seat at position 0.
    #[must_use]
    pub fn attacker(&self) -> Option<SeatId> {
        self.seats.get(ATTACKER).copied()
    }

    /// Seat at position 1.
    #[must_use]
    pub fn defender(&self) -> Option<SeatId> {
        self.seats.get(DEFENDER).copied()
    }

    /// Last seat in ring order.
    #[must_use]
    pub fn last(&self) -> Option<SeatId> {
        self.seats.back().copied()
    }

    /// Is `seat` the last member of the ring?
    #[must_use]
    pub fn is_last(&self, seat: SeatId) -> bool {
        self.last() == Some(seat)
    }

    /// Is `seat` in the ring?
    #[must_use]
    pub fn contains(&self, seat: SeatId) -> bool {
        self.seats.contains(&seat)
    }

    /// Ring position of `seat`.
    #[must_use]
    pub fn position(&self, seat: SeatId) -> Option<usize> {
        self.seats.iter().position(|&s| s == seat)
    }

    /// The seat after `seat` in ring order, without wrapping.
    #[must_use]
    pub fn next_after(&self, seat: SeatId) -> Option<SeatId> {
        let pos = self.position(seat)?;
        self.seats.get(pos + 1).copied()
    }

    /// The seat before `seat` in ring order, without wrapping.
    #[must_use]
    pub fn previous_before(&self, seat: SeatId) -> Option<SeatId> {
        let pos = self.position(seat)?;
        pos.checked_sub(1).and_then(|p| self.seats.get(p)).copied()
    }

    /// Move the attacker to the back of the ring.
    pub fn rotate_to_back(&mut self) {
        if let Some(front) = self.seats.pop_front() {
            self.seats.push_back(front);
        }
    }

    /// Rotate until `seat` is the attacker. No-op if `seat` is absent.
    pub fn rotate_until_attacker(&mut self, seat: SeatId) {
        if let Some(pos) = self.position(seat) {
            self.seats.rotate_left(pos);
        }
    }

    /// Remove `seat`, keeping the order of the rest.
    ///
    /// Returns true if the seat was present.
    pub fn remove(&mut self, seat: SeatId) -> bool {
        match self.position(seat) {
            Some(pos) => {
                self.seats.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Iterate seats in ring order.
    pub fn iter(&self) -> impl Iterator<Item = SeatId> + '_ {
        self.seats.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(n: u8) -> SeatRing {
        SeatRing::new(SeatId::all(n as usize))
    }

    #[test]
    fn test_seat_id_basics() {
        let s2 = SeatId::new(2);
        assert_eq!(s2.index(), 2);
        assert_eq!(format!("{}", s2), "Seat 2");
    }

    #[test]
    fn test_roles() {
        let r = ring(4);
        assert_eq!(r.attacker(), Some(SeatId::new(0)));
        assert_eq!(r.defender(), Some(SeatId::new(1)));
        assert_eq!(r.last(), Some(SeatId::new(3)));
        assert!(r.is_last(SeatId::new(3)));
        assert!(!r.is_last(SeatId::new(0)));
    }

    #[test]
    fn test_roles_on_small_rings() {
        let single = ring(1);
        assert_eq!(single.attacker(), Some(SeatId::new(0)));
        assert_eq!(single.defender(), None);

        let empty = SeatRing::default();
        assert!(empty.is_empty());
        assert_eq!(empty.attacker(), None);
    }

    #[test]
    fn test_rotate_to_back() {
        let mut r = ring(3);
        r.rotate_to_back();
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![SeatId(1), SeatId(2), SeatId(0)]);
        r.rotate_to_back();
        r.rotate_to_back();
        assert_eq!(r, ring(3));
    }

    #[test]
    fn test_rotate_until_attacker() {
        let mut r = ring(5);
        r.rotate_until_attacker(SeatId::new(3));
        assert_eq!(
            r.iter().collect::<Vec<_>>(),
            vec![SeatId(3), SeatId(4), SeatId(0), SeatId(1), SeatId(2)]
        );

        let before = r.clone();
        r.rotate_until_attacker(SeatId::new(9));
        assert_eq!(r, before);
    }

    #[test]
    fn test_neighbours_do_not_wrap() {
        let r = ring(3);
        assert_eq!(r.next_after(SeatId::new(0)), Some(SeatId::new(1)));
        assert_eq!(r.next_after(SeatId::new(2)), None);
        assert_eq!(r.previous_before(SeatId::new(2)), Some(SeatId::new(1)));
        assert_eq!(r.previous_before(SeatId::new(0)), None);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut r = ring(4);
        assert!(r.remove(SeatId::new(1)));
        assert!(!r.remove(SeatId::new(1)));
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![SeatId(0), SeatId(2), SeatId(3)]);
        assert_eq!(r.defender(), Some(SeatId::new(2)));
    }

    #[test]
    fn test_ring_serialization() {
        let r = ring(3);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: SeatRing = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }
}
