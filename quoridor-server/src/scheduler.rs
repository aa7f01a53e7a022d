// --- File: quoridor-room-server/quoridor-server/src/scheduler.rs ---

//! Bot Scheduler (C8): a hook, not a process (§4.8). Called after every
//! successful commit and after `start_room`; it only enqueues, it never runs
//! a strategy itself — that's the Bot Worker.

use quoridor_store::{RoomStatus, RoomStore, StoreError};

/// Enqueues a bot job for the room's current seat if it needs one.
/// Idempotent: the store's `(room, player, turn)` uniqueness makes a
/// redundant call a no-op.
pub async fn on_commit(store: &dyn RoomStore, code: &str) -> Result<(), StoreError> {
    let room = store.load_room(code).await?;
    if room.status != RoomStatus::Playing || room.winner.is_some() {
        return Ok(());
    }
    let Some(player) = room.players.iter().find(|p| p.player_id == room.current_turn) else {
        return Ok(());
    };
    if player.player_type.is_bot() {
        store.upsert_job(code, room.current_turn, room.turn_number).await?;
    }
    Ok(())
}
