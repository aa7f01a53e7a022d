// --- File: quoridor-room-server/quoridor-server/src/action_api.rs ---

//! Action API (§6): transport-agnostic operations a frontend calls directly
//! or behind HTTP/RPC. Thin wrappers over the store and turn controller —
//! no transport concerns live here, per §1's scope boundary.

use quoridor_core::{GameMode, Orientation, PlayerId};
use quoridor_store::RoomStore;

use crate::error::ActionError;
use crate::scheduler;
use crate::turn_controller::{self, ActionOutcome, ActionRequest};

pub struct CreatedRoom {
    pub code: String,
    pub player_id: PlayerId,
}

pub async fn create_room(store: &dyn RoomStore, game_mode: GameMode, host_binding: &str) -> Result<CreatedRoom, ActionError> {
    let (code, player_id) = store.create_room(game_mode, host_binding).await?;
    Ok(CreatedRoom { code, player_id })
}

pub async fn join_room(store: &dyn RoomStore, code: &str, identity: &str) -> Result<PlayerId, ActionError> {
    Ok(store.join_room(code, identity).await?)
}

pub async fn start_room(store: &dyn RoomStore, code: &str, host_binding: &str) -> Result<(), ActionError> {
    store.start_room(code, host_binding).await?;
    scheduler::on_commit(store, code).await?;
    Ok(())
}

pub struct RoomStateView {
    pub room: quoridor_store::Room,
    pub caller_player_id: Option<PlayerId>,
    pub is_my_turn: bool,
}

pub async fn get_room_state(store: &dyn RoomStore, code: &str, caller_binding: Option<&str>) -> Result<RoomStateView, ActionError> {
    let room = store.load_room(code).await?;
    let caller_player_id = caller_binding.and_then(|identity| room.players.iter().find(|p| p.session_binding == identity)).map(|p| p.player_id);
    let is_my_turn = caller_player_id == Some(room.current_turn);
    Ok(RoomStateView { room, caller_player_id, is_my_turn })
}

pub async fn make_move(store: &dyn RoomStore, code: &str, actor_binding: &str, to_row: usize, to_col: usize) -> Result<ActionOutcome, ActionError> {
    turn_controller::apply_action(store, code, actor_binding, ActionRequest::Move { to: (to_row, to_col) }).await
}

pub async fn place_barrier(store: &dyn RoomStore, code: &str, actor_binding: &str, row: usize, col: usize, orientation: Orientation) -> Result<ActionOutcome, ActionError> {
    turn_controller::apply_action(store, code, actor_binding, ActionRequest::Barrier { row, col, orientation }).await
}

pub async fn undo_last(store: &dyn RoomStore, code: &str, actor_binding: &str) -> Result<(), ActionError> {
    turn_controller::undo_last(store, code, actor_binding).await
}
