// --- File: quoridor-room-server/quoridor-server/src/error.rs ---

//! Aggregate error codes for the Action API (§6, §7): authorization and
//! concurrency failures from the store plus the rules engine's own
//! validator codes, flattened into one enum so callers see a single type.

use thiserror::Error;

use quoridor_core::{BarrierError, MoveError};
use quoridor_store::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("no room with this code")]
    NotFound,
    #[error("caller is not seated in this room")]
    NotInRoom,
    #[error("it is not the caller's turn")]
    NotYourTurn,
    #[error("the game has not started")]
    GameNotStarted,
    #[error("the game has already finished")]
    GameFinished,
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error(transparent)]
    Barrier(#[from] BarrierError),
    #[error("concurrent modification, retry with a fresh room state")]
    Stale,
    #[error("nothing to undo")]
    NotUndoable,
    #[error("room is already full")]
    Full,
    #[error("room has already started")]
    AlreadyStarted,
    #[error("this identity already occupies a seat in the room")]
    AlreadyJoined,
    #[error("caller is not the room host")]
    NotHost,
    #[error("room is not in the expected status for this operation")]
    WrongStatus,
    #[error("room has fewer than the minimum seated players")]
    BelowMin,
    #[error("room already has the maximum seated players")]
    AboveMax,
    #[error("unsupported game mode")]
    InvalidMode,
}

impl From<StoreError> for ActionError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ActionError::NotFound,
            StoreError::Full => ActionError::Full,
            StoreError::AlreadyStarted => ActionError::AlreadyStarted,
            StoreError::AlreadyJoined => ActionError::AlreadyJoined,
            StoreError::NotHost => ActionError::NotHost,
            StoreError::WrongStatus => ActionError::WrongStatus,
            StoreError::BelowMin => ActionError::BelowMin,
            StoreError::AboveMax => ActionError::AboveMax,
            StoreError::Stale => ActionError::Stale,
            StoreError::NoSuchPlayer(_) => ActionError::NotInRoom,
            StoreError::NotUndoable => ActionError::NotUndoable,
            StoreError::GameFinished => ActionError::GameFinished,
            StoreError::InvalidMode => ActionError::InvalidMode,
            StoreError::JobNotFound => ActionError::NotFound,
        }
    }
}
