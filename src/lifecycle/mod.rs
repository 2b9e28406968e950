//! Termination and winner derivation.
//!
//! Stateless over engine fields: the outcome is derived, never stored.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::core::Seat;
use crate::scoring::FINAL_ROUND;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Single winner by strict score comparison.
    Winner(Seat),
    /// Equal final scores.
    Tie,
}

impl Outcome {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, Outcome::Winner(winner) if *winner == seat)
    }
}

/// Whether the game has ended.
#[must_use]
pub const fn is_over(current_round: u32) -> bool {
    current_round > FINAL_ROUND
}

/// Derive the outcome from per-seat scores.
///
/// Returns `None` while the game continues.
#[must_use]
pub fn outcome(current_round: u32, scores: [i64; 2]) -> Option<Outcome> {
    if !is_over(current_round) {
        return None;
    }
    Some(match scores[0].cmp(&scores[1]) {
        Ordering::Greater => Outcome::Winner(Seat::FIRST),
        Ordering::Less => Outcome::Winner(Seat::FIRST.other()),
        Ordering::Equal => Outcome::Tie,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_over_boundary() {
        assert!(!is_over(1));
        assert!(!is_over(10));
        assert!(is_over(11));
        assert!(is_over(u32::MAX));
    }

    #[test]
    fn test_no_outcome_while_running() {
        assert_eq!(outcome(10, [99, 0]), None);
    }

    #[test]
    fn test_strict_comparison() {
        assert_eq!(outcome(11, [5, 3]), Some(Outcome::Winner(Seat::FIRST)));
        assert_eq!(outcome(11, [3, 5]), Some(Outcome::Winner(Seat::FIRST.other())));
        assert_eq!(outcome(11, [4, 4]), Some(Outcome::Tie));
    }

    #[test]
    fn test_is_winner() {
        let result = Outcome::Winner(Seat::FIRST);
        assert!(result.is_winner(Seat::FIRST));
        assert!(!result.is_winner(Seat::FIRST.other()));
        assert!(!Outcome::Tie.is_winner(Seat::FIRST));
    }
}
