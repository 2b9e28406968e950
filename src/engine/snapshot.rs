//! Serializable snapshots and engine reconstruction.
//!
//! The snapshot is plain data: everything the external UI/persistence layer
//! reads, plus the mid-round fields a faithful reload needs (pending picks,
//! turn pointer, RNG position). [`GameEngine::from_snapshot`] validates the
//! data instead of guessing; a successful reload behaves indistinguishably
//! from the captured engine.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::game::GameEngine;
use crate::bag::Bag;
use crate::core::{Color, DrawRng, DrawRngState, Roster, Seat};
use crate::error::SnapshotError;
use crate::lifecycle::Outcome;
use crate::round::RoundCoordinator;
use crate::scoring::{self, BallValues};

/// Winner as the projection exposes it: a player name or a tie.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinnerView {
    Player(String),
    Tie,
}

/// Read-only projection of the full engine state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Joined players, in seat order.
    pub players: Vec<String>,
    /// Current round (1-based); over when greater than the final round.
    pub current_round: u32,
    /// Balls remaining.
    pub bag: Bag,
    /// Scores keyed by player name.
    pub scores: FxHashMap<String, i64>,
    /// Name expected to submit next, once that seat is taken.
    pub current_player: Option<String>,
    /// Whether the final round has been resolved.
    pub is_game_over: bool,
    /// Winner, present only once the game is over.
    pub winner: Option<WinnerView>,
    /// Value table for the current round.
    pub ball_values: BallValues,
    /// Seat index expected to submit next.
    pub current_player_index: u8,
    /// Mid-round picks, keyed by player name.
    pub pending_choices: FxHashMap<String, Color>,
    /// Draw RNG position, so a reload draws the same sequence.
    pub rng: DrawRngState,
}

impl Snapshot {
    /// Encode to compact bytes.
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`Self::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl GameEngine {
    /// Capture the full state as plain serializable data.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let expected = self.coordinator.expected();
        let pending_choices = Seat::both()
            .into_iter()
            .filter_map(|seat| {
                let color = self.coordinator.pending(seat)?;
                let name = self.roster.name(seat)?;
                Some((name.to_string(), color))
            })
            .collect();

        Snapshot {
            players: self.roster.names().map(str::to_owned).collect(),
            current_round: self.current_round,
            bag: self.bag,
            scores: self.scores_by_name(),
            current_player: self.roster.name(expected).map(str::to_owned),
            is_game_over: self.is_over(),
            winner: self.winner_view(),
            ball_values: scoring::ball_values(self.current_round),
            current_player_index: expected.index() as u8,
            pending_choices,
            rng: self.rng.state(),
        }
    }

    fn winner_view(&self) -> Option<WinnerView> {
        match self.winner()? {
            Outcome::Tie => Some(WinnerView::Tie),
            Outcome::Winner(seat) => self
                .roster
                .name(seat)
                .map(|name| WinnerView::Player(name.to_string())),
        }
    }

    /// Rebuild an engine from a snapshot.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, SnapshotError> {
        let mut roster = Roster::new();
        for name in &snapshot.players {
            roster.join(name.clone())?;
        }

        let mut scores = [0i64; 2];
        for (index, name) in snapshot.players.iter().enumerate() {
            scores[index] = *snapshot
                .scores
                .get(name)
                .ok_or_else(|| SnapshotError::MissingScore(name.clone()))?;
        }

        let expected = Seat::new(snapshot.current_player_index)
            .ok_or(SnapshotError::InvalidSeat(snapshot.current_player_index))?;

        let mut coordinator = RoundCoordinator::with_expected(expected);
        for (name, &color) in &snapshot.pending_choices {
            let seat = roster
                .seat_of(name)
                .ok_or_else(|| SnapshotError::UnknownPendingPlayer(name.clone()))?;
            coordinator.restore_pending(seat, color);
        }

        Ok(Self {
            roster,
            scores,
            current_round: snapshot.current_round,
            bag: snapshot.bag,
            coordinator,
            rng: DrawRng::from_state(&snapshot.rng),
        })
    }
}
