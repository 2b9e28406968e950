//! Turn alternation and round resolution results.

pub mod coordinator;

pub use coordinator::{RoundCoordinator, TurnResult};
