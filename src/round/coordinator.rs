//! The alternating-turn state machine.
//!
//! The expected-seat pointer toggles on every accepted submission,
//! independent of whether a round resolves, so each round opens with
//! seat 0. At most two picks are buffered; the second completes the pair
//! and the engine resolves the round.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::bag::Bag;
use crate::core::{Color, Seat, SEAT_COUNT};
use crate::error::ChoiceError;
use crate::scoring::BallValues;

/// Buffered picks and the expected-seat pointer for the current round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundCoordinator {
    expected: Seat,
    pending: [Option<Color>; SEAT_COUNT],
}

impl RoundCoordinator {
    /// Create a coordinator expecting seat 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expected: Seat::FIRST,
            pending: [None, None],
        }
    }

    /// Restore a coordinator from persisted mid-round state.
    pub(crate) fn with_expected(expected: Seat) -> Self {
        Self {
            expected,
            pending: [None, None],
        }
    }

    /// Seat whose submission is expected next.
    #[must_use]
    pub const fn expected(&self) -> Seat {
        self.expected
    }

    /// Pick recorded for `seat` this round, if any.
    #[must_use]
    pub fn pending(&self, seat: Seat) -> Option<Color> {
        self.pending[seat.index()]
    }

    /// Number of buffered picks.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.iter().filter(|pick| pick.is_some()).count()
    }

    /// Record a pick for the expected seat and toggle the pointer.
    ///
    /// Returns the completed pair (indexed by seat) once both picks are in.
    /// The pair stays buffered until [`Self::clear_round`], so a failed
    /// resolution leaves it observable.
    pub fn submit(
        &mut self,
        seat: Seat,
        color: Color,
    ) -> Result<Option<[Color; SEAT_COUNT]>, ChoiceError> {
        if seat != self.expected {
            return Err(ChoiceError::OutOfTurn);
        }
        self.pending[seat.index()] = Some(color);
        self.expected = self.expected.other();

        match (self.pending[0], self.pending[1]) {
            (Some(first), Some(second)) => Ok(Some([first, second])),
            _ => Ok(None),
        }
    }

    /// Drop the buffered pair at the end of a resolved round.
    pub fn clear_round(&mut self) {
        self.pending = [None, None];
    }

    pub(crate) fn restore_pending(&mut self, seat: Seat, color: Color) {
        self.pending[seat.index()] = Some(color);
    }
}

impl Default for RoundCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    /// Round that was just resolved (1-based).
    pub round: u32,
    /// Ball drawn from the bag.
    pub drawn: Color,
    /// Value table that applied to this round.
    pub values: BallValues,
    /// Scores after the round, keyed by player name.
    pub scores: FxHashMap<String, i64>,
    /// Balls remaining after the draw.
    pub remaining: Bag,
}
