// --- File: quoridor-room-server/quoridor-server/src/turn_controller.rs ---

//! Turn Controller (C7): the room's authoritative state machine (§4.7).
//! Pure orchestration — every rule is decided by `quoridor_core::rules`,
//! every durable mutation goes through `RoomStore::commit_action`.

use quoridor_core::{rules, GoalSide, Orientation, PlayerId};
use quoridor_store::{ActionOp, Room, RoomStatus, RoomStore};

use crate::error::ActionError;
use crate::scheduler;

/// One action a seated player may request.
#[derive(Debug, Clone, Copy)]
pub enum ActionRequest {
    Move { to: (usize, usize) },
    Barrier { row: usize, col: usize, orientation: Orientation },
}

/// Result of a successfully committed action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub turn_number: u64,
    pub winner: Option<PlayerId>,
}

/// Applies `action` on behalf of `actor_binding` (§4.7 steps 1-6).
pub async fn apply_action(store: &dyn RoomStore, code: &str, actor_binding: &str, action: ActionRequest) -> Result<ActionOutcome, ActionError> {
    let room = store.load_room(code).await?;
    let player_id = seat_for(&room, actor_binding)?;
    check_turn(&room, player_id)?;
    commit_validated_action(store, code, &room, player_id, action).await
}

/// Reverses the most recent action of the player whose turn it was (§4.7 Undo).
pub async fn undo_last(store: &dyn RoomStore, code: &str, actor_binding: &str) -> Result<(), ActionError> {
    let room = store.load_room(code).await?;
    let player_id = seat_for(&room, actor_binding)?;
    store.undo_last(code, player_id).await?;
    Ok(())
}

fn seat_for(room: &Room, identity: &str) -> Result<PlayerId, ActionError> {
    room.players.iter().find(|p| p.session_binding == identity).map(|p| p.player_id).ok_or(ActionError::NotInRoom)
}

fn check_turn(room: &Room, player_id: PlayerId) -> Result<(), ActionError> {
    match room.status {
        RoomStatus::Waiting => return Err(ActionError::GameNotStarted),
        RoomStatus::Finished => return Err(ActionError::GameFinished),
        RoomStatus::Playing => {}
    }
    if room.current_turn != player_id {
        return Err(ActionError::NotYourTurn);
    }
    Ok(())
}

/// Validates and commits `action` for `player_id` against the already-loaded
/// `room`, then runs the Bot Scheduler hook. Shared by human requests
/// (`apply_action`) and the Bot Worker, which has already re-verified turn
/// ownership and freshness itself (§4.9 steps 2-3) before calling this.
pub(crate) async fn commit_validated_action(store: &dyn RoomStore, code: &str, room: &Room, player_id: PlayerId, action: ActionRequest) -> Result<ActionOutcome, ActionError> {
    let snapshot = room.snapshot();

    let (op, winning) = match action {
        ActionRequest::Move { to } => {
            rules::validate_move(&snapshot, player_id, to)?;
            let player = snapshot.player(player_id).expect("seat_for already confirmed this player is seated");
            let winning = rules::detect_win(player, to);
            (ActionOp::Move { player_id, to }, winning)
        }
        ActionRequest::Barrier { row, col, orientation } => {
            rules::validate_barrier(&snapshot, player_id, row, col, orientation)?;
            (ActionOp::Barrier { player_id, row, col, orientation }, false)
        }
    };

    let next_turn = if winning { room.current_turn } else { snapshot.next_seat(room.current_turn) };
    let winner = if winning { Some(player_id) } else { None };

    store.commit_action(code, room.turn_number, op, next_turn, winner).await?;
    scheduler::on_commit(store, code).await?;

    Ok(ActionOutcome { turn_number: room.turn_number + 1, winner })
}

/// Convenience used by bot strategies/tests that need a goal side without
/// threading a whole snapshot through.
pub fn goal_side_of(room: &Room, player_id: PlayerId) -> Option<GoalSide> {
    room.players.iter().find(|p| p.player_id == player_id).map(|p| p.goal_side)
}
