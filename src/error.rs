//! Error taxonomy.
//!
//! Every expected failure is a value the caller branches on. Rejected
//! operations leave the engine untouched; the only mid-operation failure is
//! [`BagExhausted`], which aborts resolution with the buffered picks still
//! in place.

use thiserror::Error;

/// A color string outside the known set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown ball color: {0:?}")]
pub struct ParseColorError(pub String);

/// The bag has no balls left to draw.
///
/// Unreachable with the standard ten-ball bag over ten rounds; a custom bag
/// smaller than the round count can hit it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("the bag has no balls left to draw")]
pub struct BagExhausted;

/// Rejected join attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JoinError {
    /// Both seats are already taken.
    #[error("the game already has two players")]
    GameFull,
    /// Names identify players across sessions, so they must be unique.
    #[error("player name {0:?} is already taken")]
    NameTaken(String),
}

/// Rejected choice submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChoiceError {
    /// The final round has been resolved; the game is read-only.
    #[error("the game is over; no further choices are accepted")]
    GameOver,
    /// Fewer than two players have joined.
    #[error("both players must join before choices are accepted")]
    NotStarted,
    /// The name has not joined this game.
    #[error("no player named {0:?} has joined this game")]
    UnknownPlayer(String),
    /// The submission came from the wrong seat.
    #[error("it is not this player's turn")]
    OutOfTurn,
    /// Resolution found an empty bag.
    #[error("the bag has no balls left to draw")]
    BagExhausted,
}

impl From<BagExhausted> for ChoiceError {
    fn from(_: BagExhausted) -> Self {
        ChoiceError::BagExhausted
    }
}

/// Snapshot reload or codec failure.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The snapshot's player list could not be re-seated.
    #[error(transparent)]
    Join(#[from] JoinError),
    /// A joined player has no score entry.
    #[error("snapshot has no score entry for player {0:?}")]
    MissingScore(String),
    /// A pending choice is keyed by a name that never joined.
    #[error("snapshot records a pending choice for unknown player {0:?}")]
    UnknownPendingPlayer(String),
    /// The turn pointer is outside the two seats.
    #[error("current player index {0} is not a valid seat")]
    InvalidSeat(u8),
    /// Byte-level encode/decode failure.
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_error_from_bag_exhausted() {
        let err: ChoiceError = BagExhausted.into();
        assert_eq!(err, ChoiceError::BagExhausted);
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ParseColorError("purple".to_string()).to_string(),
            "unknown ball color: \"purple\""
        );
        assert_eq!(JoinError::GameFull.to_string(), "the game already has two players");
        assert_eq!(
            ChoiceError::UnknownPlayer("Z".to_string()).to_string(),
            "no player named \"Z\" has joined this game"
        );
    }
}
