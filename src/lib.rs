//! # bagdraw
//!
//! A two-player bag-draw probability game engine.
//!
//! Each round both players secretly pick a color, one ball is drawn from a
//! shared bag without replacement, and every player whose pick matches the
//! drawn color scores that round's value for it. Ten rounds, ten balls;
//! rare colors pay more early and the values converge as the bag empties.
//!
//! ## Design Principles
//!
//! 1. **Pure state transducer**: no I/O, no threads, no globals. The
//!    engine is a value the caller constructs and threads through calls.
//!
//! 2. **Errors are values**: every expected failure is an enum the caller
//!    branches on; nothing on a reachable path panics.
//!
//! 3. **Deterministic by injection**: the draw RNG is seeded and its
//!    position is part of the snapshot, so a reloaded engine replays
//!    identically, mid-round included.
//!
//! ## Example
//!
//! ```
//! use bagdraw::{Bag, Color, GameBuilder, Submission};
//!
//! // A single-color bag forces the draw, which makes the example exact.
//! let mut game = GameBuilder::new().bag(Bag::with_counts(0, 10, 0)).build(7);
//! game.add_player("ada").unwrap();
//! game.add_player("grace").unwrap();
//!
//! assert_eq!(game.submit_choice("ada", Color::Blue).unwrap(), Submission::Pending);
//! match game.submit_choice("grace", Color::Red).unwrap() {
//!     Submission::Resolved(result) => {
//!         assert_eq!(result.drawn, Color::Blue);
//!         assert_eq!(result.scores["ada"], 3); // round 1: blue pays 3
//!         assert_eq!(result.scores["grace"], 0);
//!     }
//!     Submission::Pending => unreachable!(),
//! }
//! ```
//!
//! ## Modules
//!
//! - `core`: colors, seats, roster, deterministic RNG
//! - `bag`: remaining ball counts and the draw
//! - `scoring`: the round-tiered value table
//! - `round`: alternating-turn state machine and round results
//! - `lifecycle`: termination and winner derivation
//! - `engine`: composition root, builder, snapshots
//! - `error`: the error taxonomy

pub mod core;
pub mod bag;
pub mod scoring;
pub mod round;
pub mod lifecycle;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use crate::core::{Color, DrawRng, DrawRngState, Roster, Seat, SEAT_COUNT};

pub use crate::bag::Bag;

pub use crate::scoring::{ball_values, value_for, BallValues, FINAL_ROUND};

pub use crate::round::{RoundCoordinator, TurnResult};

pub use crate::lifecycle::Outcome;

pub use crate::engine::{GameBuilder, GameEngine, Snapshot, Submission, WinnerView};

pub use crate::error::{
    BagExhausted, ChoiceError, JoinError, ParseColorError, SnapshotError,
};
