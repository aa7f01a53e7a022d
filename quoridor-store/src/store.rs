// --- File: quoridor-room-server/quoridor-store/src/store.rs ---

//! Room Store (C6): the transactional persistence interface of §4.6 and an
//! in-process implementation behind `tokio::sync::RwLock` per room, grounded
//! on the `DashMap<Uuid, Arc<RwLock<Session>>>` shape seen across the
//! multiplayer-server examples (game table keyed by id, one lock per game).
//!
//! `(roomCode, playerId, expectedTurn)` uniqueness on bot jobs is the sole
//! concurrency gate preventing double-scheduled bots (§4.6); it is tracked
//! here as a side index rather than a SQL unique constraint, since this
//! implementation is in-memory.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use rand::Rng;
use tokio::sync::RwLock;
use uuid::Uuid;

use quoridor_core::types::starting_layout;
use quoridor_core::{GameMode, Orientation, PlayerId, PlayerState, PlayerType};

use crate::entities::{ActionOp, BotMoveJob, JobStatus, LastAction, MoveRecord, Room, RoomCode, RoomStatus, UserStats};
use crate::error::StoreError;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CODE_LEN: usize = 6;

/// The persistence operations the Turn Controller and Bot Worker need.
/// Implementations must serialize all writes to a single room through one
/// transaction boundary (§4.6 Integrity).
#[async_trait]
pub trait RoomStore: Send + Sync {
    async fn create_room(&self, game_mode: GameMode, host_binding: &str) -> Result<(RoomCode, PlayerId), StoreError>;
    async fn join_room(&self, code: &str, identity: &str) -> Result<PlayerId, StoreError>;
    async fn start_room(&self, code: &str, host_binding: &str) -> Result<(), StoreError>;
    async fn load_room(&self, code: &str) -> Result<Room, StoreError>;
    async fn commit_action(&self, code: &str, expected_turn: u64, op: ActionOp, next_turn: PlayerId, winner: Option<PlayerId>) -> Result<(), StoreError>;
    async fn undo_last(&self, code: &str, actor: PlayerId) -> Result<(), StoreError>;
    async fn upsert_job(&self, code: &str, player_id: PlayerId, expected_turn: u64) -> Result<(), StoreError>;
    async fn claim_next_pending(&self, limit: usize) -> Vec<BotMoveJob>;
    async fn mark_job(&self, id: Uuid, status: JobStatus, error: Option<String>) -> Result<(), StoreError>;
    async fn list_rooms(&self) -> Vec<RoomCode>;
    async fn remove_room(&self, code: &str) -> Result<(), StoreError>;
    async fn user_stats(&self, session_binding: &str) -> Option<UserStats>;
}

/// Uniqueness key for bot jobs: one active (pending/running) job per seat per turn.
type JobKey = (RoomCode, PlayerId, u64);

pub struct InMemoryRoomStore {
    rooms: DashMap<RoomCode, Arc<RwLock<Room>>>,
    jobs: DashMap<Uuid, BotMoveJob>,
    active_job_keys: DashMap<JobKey, Uuid>,
    user_stats: DashMap<String, UserStats>,
}

impl Default for InMemoryRoomStore {
    fn default() -> Self {
        InMemoryRoomStore {
            rooms: DashMap::new(),
            jobs: DashMap::new(),
            active_job_keys: DashMap::new(),
            user_stats: DashMap::new(),
        }
    }
}

impl InMemoryRoomStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn generate_code(&self) -> RoomCode {
        let mut rng = rand::thread_rng();
        loop {
            let code: String = (0..CODE_LEN).map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char).collect();
            if !self.rooms.contains_key(&code) {
                return code;
            }
        }
    }

    /// Seeds a room with every seat already occupied by a bot and already
    /// `Playing`, skipping the waiting-room/join dance entirely. Used by
    /// `quoridor-cli` to drive bot-vs-bot simulations; real human-joined
    /// rooms always go through `create_room`/`join_room`/`start_room`.
    pub async fn create_bot_room(&self, game_mode: GameMode, bot_types: &[PlayerType], seed: Option<String>) -> Result<RoomCode, StoreError> {
        let seats = game_mode.seats();
        if bot_types.len() != seats.len() {
            return Err(StoreError::InvalidMode);
        }
        let code = self.generate_code();
        let now = Utc::now();
        let players = seats
            .iter()
            .zip(bot_types)
            .map(|(&seat, &player_type)| {
                let (pos, goal_side) = starting_layout(seat);
                PlayerState::new(seat, pos, goal_side, game_mode.starting_walls(), player_type, format!("bot-seat-{seat}"))
            })
            .collect();

        let room = Room {
            code: code.clone(),
            status: RoomStatus::Playing,
            game_mode,
            current_turn: seats[0],
            turn_number: 0,
            winner: None,
            bot_seed: seed.unwrap_or_else(|| Uuid::new_v4().to_string()),
            host_binding: format!("bot-seat-{}", seats[0]),
            created_at: now,
            updated_at: now,
            players,
            barriers: Vec::new(),
            moves: Vec::new(),
            last_action: None,
        };
        self.rooms.insert(code.clone(), Arc::new(RwLock::new(room)));
        Ok(code)
    }

    fn bump_user_stats(&self, session_binding: &str, won: bool) {
        let mut entry = self.user_stats.entry(session_binding.to_string()).or_insert_with(|| UserStats {
            session_binding: session_binding.to_string(),
            games_played: 0,
            games_won: 0,
        });
        entry.games_played += 1;
        if won {
            entry.games_won += 1;
        }
    }
}

#[async_trait]
impl RoomStore for InMemoryRoomStore {
    async fn create_room(&self, game_mode: GameMode, host_binding: &str) -> Result<(RoomCode, PlayerId), StoreError> {
        let code = self.generate_code();
        let now = Utc::now();
        let host_seat = game_mode.seats()[0];
        let (pos, goal_side) = starting_layout(host_seat);
        let host = PlayerState::new(host_seat, pos, goal_side, game_mode.starting_walls(), PlayerType::Human, host_binding.to_string());

        let room = Room {
            code: code.clone(),
            status: RoomStatus::Waiting,
            game_mode,
            current_turn: host_seat,
            turn_number: 0,
            winner: None,
            bot_seed: Uuid::new_v4().to_string(),
            host_binding: host_binding.to_string(),
            created_at: now,
            updated_at: now,
            players: vec![host],
            barriers: Vec::new(),
            moves: Vec::new(),
            last_action: None,
        };
        self.rooms.insert(code.clone(), Arc::new(RwLock::new(room)));
        Ok((code, host_seat))
    }

    async fn join_room(&self, code: &str, identity: &str) -> Result<PlayerId, StoreError> {
        let room_lock = self.rooms.get(code).ok_or(StoreError::NotFound)?.clone();
        let mut room = room_lock.write().await;
        if room.status != RoomStatus::Waiting {
            return Err(StoreError::AlreadyStarted);
        }
        if room.players.iter().any(|p| p.session_binding == identity) {
            return Err(StoreError::AlreadyJoined);
        }
        let seat = room
            .game_mode
            .seats()
            .iter()
            .copied()
            .find(|s| !room.players.iter().any(|p| p.player_id == *s))
            .ok_or(StoreError::Full)?;
        let (pos, goal_side) = starting_layout(seat);
        room.players.push(PlayerState::new(seat, pos, goal_side, room.game_mode.starting_walls(), PlayerType::Human, identity.to_string()));
        room.updated_at = Utc::now();
        Ok(seat)
    }

    async fn start_room(&self, code: &str, host_binding: &str) -> Result<(), StoreError> {
        let room_lock = self.rooms.get(code).ok_or(StoreError::NotFound)?.clone();
        let mut room = room_lock.write().await;
        if room.host_binding != host_binding {
            return Err(StoreError::NotHost);
        }
        if room.status != RoomStatus::Waiting {
            return Err(StoreError::WrongStatus);
        }
        if room.players.len() < room.game_mode.min_players() {
            return Err(StoreError::BelowMin);
        }
        if room.players.len() > room.game_mode.max_players() {
            return Err(StoreError::AboveMax);
        }
        room.status = RoomStatus::Playing;
        room.updated_at = Utc::now();
        Ok(())
    }

    async fn load_room(&self, code: &str) -> Result<Room, StoreError> {
        let room_lock = self.rooms.get(code).ok_or(StoreError::NotFound)?.clone();
        let room = room_lock.read().await;
        Ok(room.clone())
    }

    async fn commit_action(&self, code: &str, expected_turn: u64, op: ActionOp, next_turn: PlayerId, winner: Option<PlayerId>) -> Result<(), StoreError> {
        let room_lock = self.rooms.get(code).ok_or(StoreError::NotFound)?.clone();
        let mut room = room_lock.write().await;
        if room.turn_number != expected_turn {
            return Err(StoreError::Stale);
        }

        match op {
            ActionOp::Move { player_id, to } => {
                let player = room.players.iter_mut().find(|p| p.player_id == player_id).ok_or(StoreError::NoSuchPlayer(player_id))?;
                let from = player.pos;
                player.pos = to;
                room.moves.push(MoveRecord { room_code: code.to_string(), player_id, from, to, created_at: Utc::now() });
                room.last_action = Some(LastAction::Move { player_id, from, to });
            }
            ActionOp::Barrier { player_id, row, col, orientation } => {
                let player = room.players.iter_mut().find(|p| p.player_id == player_id).ok_or(StoreError::NoSuchPlayer(player_id))?;
                player.walls_left = player.walls_left.saturating_sub(1);
                room.barriers.push(quoridor_core::PlacedBarrier { row, col, orientation, placed_by: player_id });
                room.last_action = Some(LastAction::Barrier { player_id, row, col, orientation });
            }
        }

        room.current_turn = next_turn;
        room.winner = winner;
        room.turn_number += 1;
        room.updated_at = Utc::now();
        if let Some(winner_id) = winner {
            room.status = RoomStatus::Finished;
            for p in &room.players {
                self.bump_user_stats(&p.session_binding, p.player_id == winner_id);
            }
        }
        Ok(())
    }

    async fn undo_last(&self, code: &str, actor: PlayerId) -> Result<(), StoreError> {
        let room_lock = self.rooms.get(code).ok_or(StoreError::NotFound)?.clone();
        let mut room = room_lock.write().await;
        if room.status != RoomStatus::Playing || room.winner.is_some() {
            return Err(StoreError::GameFinished);
        }
        let last = room.last_action.clone().ok_or(StoreError::NotUndoable)?;
        if last.actor() != actor {
            return Err(StoreError::NotUndoable);
        }
        match last {
            LastAction::Move { player_id, from, .. } => {
                if let Some(p) = room.players.iter_mut().find(|p| p.player_id == player_id) {
                    p.pos = from;
                }
                room.moves.pop();
            }
            LastAction::Barrier { player_id, .. } => {
                room.barriers.pop();
                if let Some(p) = room.players.iter_mut().find(|p| p.player_id == player_id) {
                    p.walls_left += 1;
                }
            }
        }
        room.current_turn = actor;
        room.last_action = None;
        room.updated_at = Utc::now();
        Ok(())
    }

    async fn upsert_job(&self, code: &str, player_id: PlayerId, expected_turn: u64) -> Result<(), StoreError> {
        if !self.rooms.contains_key(code) {
            return Err(StoreError::NotFound);
        }
        let key: JobKey = (code.to_string(), player_id, expected_turn);
        if self.active_job_keys.contains_key(&key) {
            return Ok(()); // already scheduled — the uniqueness constraint makes this a no-op
        }
        let job = BotMoveJob {
            id: Uuid::new_v4(),
            room_code: code.to_string(),
            player_id,
            expected_turn,
            status: JobStatus::Pending,
            started_at: None,
            completed_at: None,
            error: None,
        };
        self.active_job_keys.insert(key, job.id);
        self.jobs.insert(job.id, job);
        Ok(())
    }

    async fn claim_next_pending(&self, limit: usize) -> Vec<BotMoveJob> {
        let pending_ids: Vec<Uuid> = self
            .jobs
            .iter()
            .filter(|entry| entry.status == JobStatus::Pending)
            .map(|entry| *entry.key())
            .take(limit)
            .collect();

        let mut claimed = Vec::with_capacity(pending_ids.len());
        for id in pending_ids {
            if let Some(mut job) = self.jobs.get_mut(&id) {
                job.status = JobStatus::Running;
                job.started_at = Some(Utc::now());
                claimed.push(job.clone());
            }
        }
        claimed
    }

    async fn mark_job(&self, id: Uuid, status: JobStatus, error: Option<String>) -> Result<(), StoreError> {
        let mut job = self.jobs.get_mut(&id).ok_or(StoreError::JobNotFound)?;
        job.status = status;
        job.error = error;
        if !status.holds_uniqueness_slot() {
            job.completed_at = Some(Utc::now());
            let key: JobKey = (job.room_code.clone(), job.player_id, job.expected_turn);
            self.active_job_keys.remove(&key);
        }
        Ok(())
    }

    async fn list_rooms(&self) -> Vec<RoomCode> {
        self.rooms.iter().map(|e| e.key().clone()).collect()
    }

    async fn remove_room(&self, code: &str) -> Result<(), StoreError> {
        self.rooms.remove(code).ok_or(StoreError::NotFound)?;
        let stale_job_ids: Vec<Uuid> = self.jobs.iter().filter(|e| e.room_code == code).map(|e| *e.key()).collect();
        for id in stale_job_ids {
            if let Some((_, job)) = self.jobs.remove(&id) {
                let key: JobKey = (job.room_code, job.player_id, job.expected_turn);
                self.active_job_keys.remove(&key);
            }
        }
        Ok(())
    }

    async fn user_stats(&self, session_binding: &str) -> Option<UserStats> {
        self.user_stats.get(session_binding).map(|e| e.clone())
    }
}
