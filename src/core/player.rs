//! Seats and the player roster.
//!
//! ## Seat
//!
//! Type-safe identifier for the two seats. Submissions strictly alternate
//! between them, starting at seat 0.
//!
//! ## Roster
//!
//! Ordered names of the joined players: at most two, order fixed at join
//! time, never reordered. Names identify players across sessions, so
//! duplicates are rejected.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::error::JoinError;

/// Number of seats in a game.
pub const SEAT_COUNT: usize = 2;

/// Seat identifier (0 or 1). The first player to join sits at seat 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat(u8);

impl Seat {
    /// Seat of the first player to join.
    pub const FIRST: Seat = Seat(0);

    /// Create a seat from a raw index, if it is in range.
    #[must_use]
    pub const fn new(index: u8) -> Option<Seat> {
        if (index as usize) < SEAT_COUNT {
            Some(Seat(index))
        } else {
            None
        }
    }

    /// Raw 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposite seat.
    #[must_use]
    pub const fn other(self) -> Seat {
        Seat(1 - self.0)
    }

    /// Both seats, in join order.
    #[must_use]
    pub const fn both() -> [Seat; SEAT_COUNT] {
        [Seat(0), Seat(1)]
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat {}", self.0)
    }
}

/// Ordered roster of joined player names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    names: SmallVec<[String; SEAT_COUNT]>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player, returning their seat.
    pub fn join(&mut self, name: impl Into<String>) -> Result<Seat, JoinError> {
        let name = name.into();
        if self.names.len() >= SEAT_COUNT {
            return Err(JoinError::GameFull);
        }
        if self.names.iter().any(|n| *n == name) {
            return Err(JoinError::NameTaken(name));
        }
        self.names.push(name);
        Ok(Seat((self.names.len() - 1) as u8))
    }

    /// Number of joined players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nobody has joined yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether both seats are taken.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.names.len() == SEAT_COUNT
    }

    /// Name seated at `seat`, if anyone has joined it yet.
    #[must_use]
    pub fn name(&self, seat: Seat) -> Option<&str> {
        self.names.get(seat.index()).map(String::as_str)
    }

    /// Seat of the player with this name.
    #[must_use]
    pub fn seat_of(&self, name: &str) -> Option<Seat> {
        self.names.iter().position(|n| n == name).map(|i| Seat(i as u8))
    }

    /// Names in join order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
