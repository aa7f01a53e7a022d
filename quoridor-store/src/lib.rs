// --- File: quoridor-room-server/quoridor-store/src/lib.rs ---

//! # Quoridor Store
//!
//! Transactional persistence for the room server (§3, §4.6): rooms, seated
//! players, barriers, move history and the bot job queue. Depends on
//! `quoridor-core` for the entity types it makes durable, and knows nothing
//! about rules validation or turn sequencing — that's `quoridor-server`.

pub mod entities;
pub mod error;
pub mod store;

pub use entities::{ActionOp, BotMoveJob, JobStatus, LastAction, MoveRecord, Room, RoomCode, RoomStatus, UserStats};
pub use error::StoreError;
pub use store::{InMemoryRoomStore, RoomStore};
