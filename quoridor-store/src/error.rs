// --- File: quoridor-room-server/quoridor-store/src/error.rs ---

//! Store-level failures (§4.6). Distinct from the rules engine's
//! `MoveError`/`BarrierError`, which are wrapped into `StoreError::Rejected`
//! by the caller once a validator has run.

use thiserror::Error;

use quoridor_core::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no room with this code")]
    NotFound,
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
    #[error("commit was rejected: room's turn number no longer matches the expected turn")]
    Stale,
    #[error("no player {0} seated in this room")]
    NoSuchPlayer(PlayerId),
    #[error("nothing to undo")]
    NotUndoable,
    #[error("the game has already finished")]
    GameFinished,
    #[error("unsupported game mode")]
    InvalidMode,
    #[error("no job with this id")]
    JobNotFound,
}
