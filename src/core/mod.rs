//! Core engine types: colors, seats, roster, deterministic RNG.
//!
//! These are the fundamental building blocks the component modules share.

pub mod color;
pub mod player;
pub mod rng;

pub use color::Color;
pub use player::{Roster, Seat, SEAT_COUNT};
pub use rng::{DrawRng, DrawRngState};
