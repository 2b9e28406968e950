//! The composition root: engine, builder, snapshots.

pub mod game;
pub mod snapshot;

pub use game::{GameBuilder, GameEngine, Submission};
pub use snapshot::{Snapshot, WinnerView};
