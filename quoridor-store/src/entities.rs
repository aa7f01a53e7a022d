// --- File: quoridor-room-server/quoridor-store/src/entities.rs ---

//! The persisted entities of §3: rooms, move history and bot jobs. Player
//! and barrier state reuse `quoridor_core::PlayerState`/`PlacedBarrier`
//! directly rather than duplicating them, since the store's job is to make
//! the core types durable, not to redefine them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quoridor_core::{GameMode, GameSnapshot, Orientation, PlacedBarrier, PlayerId, PlayerState};

pub type RoomCode = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    Waiting,
    Playing,
    Finished,
}

/// An append-only move record (§3). Deleted only by `undo_last`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRecord {
    pub room_code: RoomCode,
    pub player_id: PlayerId,
    pub from: (usize, usize),
    pub to: (usize, usize),
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Pending,
    Running,
    Completed,
    Failed,
    Stale,
}

impl JobStatus {
    /// Jobs in these states hold the `(room, player, expectedTurn)` uniqueness
    /// slot; a job that has reached `Completed`/`Failed`/`Stale` no longer
    /// blocks a fresh upsert for the same key (§9 open question 4 — chosen
    /// so a bot whose job failed gets retried by the next scheduler tick
    /// rather than being permanently stuck).
    pub fn holds_uniqueness_slot(self) -> bool {
        matches!(self, JobStatus::Pending | JobStatus::Running)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotMoveJob {
    pub id: Uuid,
    pub room_code: RoomCode,
    pub player_id: PlayerId,
    pub expected_turn: u64,
    pub status: JobStatus,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

/// Aggregate counters for an identified user, keyed by session binding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserStats {
    pub session_binding: String,
    pub games_played: u64,
    pub games_won: u64,
}

/// The full persisted state of one room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub code: RoomCode,
    pub status: RoomStatus,
    pub game_mode: GameMode,
    pub current_turn: PlayerId,
    pub turn_number: u64,
    pub winner: Option<PlayerId>,
    pub bot_seed: String,
    pub host_binding: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub players: Vec<PlayerState>,
    pub barriers: Vec<PlacedBarrier>,
    pub moves: Vec<MoveRecord>,
    pub last_action: Option<LastAction>,
}

impl Room {
    /// The read-only view the rules engine and bot strategies consume.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            game_mode: self.game_mode,
            players: self.players.clone(),
            barriers: self.barriers.clone(),
            current_turn: self.current_turn,
            turn_number: self.turn_number,
        }
    }
}

/// What a single accepted action changes, beyond the common turn/number
/// bookkeeping `commit_action` always applies.
#[derive(Debug, Clone)]
pub enum ActionOp {
    Move { player_id: PlayerId, to: (usize, usize) },
    Barrier { player_id: PlayerId, row: usize, col: usize, orientation: Orientation },
}

/// Enough information to reverse the single most recent committed action.
/// Undo is restricted to one level (§4.7): once applied, this is cleared.
#[derive(Debug, Clone)]
pub enum LastAction {
    Move { player_id: PlayerId, from: (usize, usize), to: (usize, usize) },
    Barrier { player_id: PlayerId, row: usize, col: usize, orientation: Orientation },
}

impl LastAction {
    pub fn actor(&self) -> PlayerId {
        match self {
            LastAction::Move { player_id, .. } => *player_id,
            LastAction::Barrier { player_id, .. } => *player_id,
        }
    }
}
