//! The game engine: the only mutation entry points.

use rustc_hash::FxHashMap;

use crate::bag::Bag;
use crate::core::{Color, DrawRng, Roster, Seat};
use crate::error::{ChoiceError, JoinError};
use crate::lifecycle::{self, Outcome};
use crate::round::{RoundCoordinator, TurnResult};
use crate::scoring;

/// Result of an accepted choice submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// First pick of the round recorded; waiting on the other seat.
    Pending,
    /// Second pick completed the pair and the round resolved.
    Resolved(TurnResult),
}

/// The complete engine state for one game.
///
/// A plain value: construct it, thread it through calls, snapshot it.
/// There is no ambient global instance, and every operation completes
/// before the next call.
#[derive(Clone, Debug)]
pub struct GameEngine {
    pub(crate) roster: Roster,
    pub(crate) scores: [i64; 2],
    pub(crate) current_round: u32,
    pub(crate) bag: Bag,
    pub(crate) coordinator: RoundCoordinator,
    pub(crate) rng: DrawRng,
}

/// Builder for creating a [`GameEngine`].
#[derive(Clone, Debug)]
pub struct GameBuilder {
    bag: Bag,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            bag: Bag::standard(),
        }
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the starting bag.
    ///
    /// A bag with fewer balls than rounds makes
    /// [`ChoiceError::BagExhausted`] reachable; a single-color bag forces
    /// every draw, which is how tests pin the drawn color.
    #[must_use]
    pub fn bag(mut self, bag: Bag) -> Self {
        self.bag = bag;
        self
    }

    /// Build an empty game with a deterministic seed.
    #[must_use]
    pub fn build(self, seed: u64) -> GameEngine {
        GameEngine {
            roster: Roster::new(),
            scores: [0; 2],
            current_round: 1,
            bag: self.bag,
            coordinator: RoundCoordinator::new(),
            rng: DrawRng::new(seed),
        }
    }
}

impl GameEngine {
    /// Create an empty game with the standard bag.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        GameBuilder::new().build(seed)
    }

    // === Joining ===

    /// Add a player. Seat order is join order and never changes.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<Seat, JoinError> {
        let seat = self.roster.join(name)?;
        self.scores[seat.index()] = 0;
        Ok(seat)
    }

    // === Choices ===

    /// Submit a color pick for the named player.
    ///
    /// The engine only ever expects one specific player per call; anyone
    /// else is rejected without mutation. The second accepted pick of a
    /// round resolves it as one unit: draw, score every matching player
    /// (zero, one, or both), clear the pair, advance the round.
    pub fn submit_choice(
        &mut self,
        player: &str,
        color: Color,
    ) -> Result<Submission, ChoiceError> {
        if self.is_over() {
            return Err(ChoiceError::GameOver);
        }
        if !self.roster.is_full() {
            return Err(ChoiceError::NotStarted);
        }
        let seat = self
            .roster
            .seat_of(player)
            .ok_or_else(|| ChoiceError::UnknownPlayer(player.to_string()))?;

        match self.coordinator.submit(seat, color)? {
            None => Ok(Submission::Pending),
            Some(picks) => Ok(Submission::Resolved(self.resolve_round(picks)?)),
        }
    }

    fn resolve_round(&mut self, picks: [Color; 2]) -> Result<TurnResult, ChoiceError> {
        debug_assert_eq!(self.coordinator.pending_count(), 2);

        let values = scoring::ball_values(self.current_round);
        let drawn = self.bag.draw(&mut self.rng)?;

        for seat in Seat::both() {
            if picks[seat.index()] == drawn {
                self.scores[seat.index()] += values.get(drawn);
            }
        }

        let result = TurnResult {
            round: self.current_round,
            drawn,
            values,
            scores: self.scores_by_name(),
            remaining: self.bag,
        };

        self.coordinator.clear_round();
        self.current_round += 1;
        Ok(result)
    }

    // === Projections ===

    /// Joined players, in seat order.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Score of one seat.
    #[must_use]
    pub fn score(&self, seat: Seat) -> i64 {
        self.scores[seat.index()]
    }

    /// Current round (1-based).
    #[must_use]
    pub const fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Remaining balls.
    #[must_use]
    pub const fn bag(&self) -> &Bag {
        &self.bag
    }

    /// Name expected to submit next, once that seat is taken.
    #[must_use]
    pub fn current_player(&self) -> Option<&str> {
        self.roster.name(self.coordinator.expected())
    }

    /// Whether the final round has been resolved.
    #[must_use]
    pub fn is_over(&self) -> bool {
        lifecycle::is_over(self.current_round)
    }

    /// Winner by strict score comparison; `None` while the game runs.
    #[must_use]
    pub fn winner(&self) -> Option<Outcome> {
        lifecycle::outcome(self.current_round, self.scores)
    }

    pub(crate) fn scores_by_name(&self) -> FxHashMap<String, i64> {
        self.roster
            .names()
            .enumerate()
            .map(|(index, name)| (name.to_string(), self.scores[index]))
            .collect()
    }
}
