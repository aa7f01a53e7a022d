// --- File: quoridor-room-server/quoridor-core/src/rules.rs ---

//! Rules Engine (C3): stateless validators. Grounded on the teacher's
//! `game.rs` (`get_legal_moves`, `is_wall_placement_valid`), generalized from
//! two players to seated 2-or-4 player rooms and from petgraph edges to the
//! flat `EdgeKey` set.

use thiserror::Error;

use crate::board::{self, anchor_in_range, barrier_edges, canonical_edge, is_interior, Barrier};
use crate::reachability::has_path_to_goal;
use crate::snapshot::GameSnapshot;
use crate::types::{Coord, Orientation, PlayerId};

/// Failure codes for `validate_move`, per §4.3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("target cell is out of bounds or not reachable by any legal move shape")]
    OutOfBounds,
    #[error("target cell is occupied by another pawn")]
    Occupied,
    #[error("the move is blocked by a barrier")]
    BlockedByBarrier,
    #[error("a jump requires an adjacent pawn to jump over")]
    NoPawnToJump,
    #[error("move distance is not a legal step or jump")]
    IllegalDistance,
}

/// Failure codes for `validate_barrier`, per §4.3. `WouldTrap` carries the id
/// of the first seated player left without a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BarrierError {
    #[error("actor has no walls left")]
    NoWalls,
    #[error("barrier anchor is outside the valid range")]
    InvalidAnchor,
    #[error("a barrier already occupies this anchor and orientation")]
    Duplicate,
    #[error("a perpendicular barrier already occupies this anchor")]
    Crossing,
    #[error("one of the new edges is already blocked by an existing barrier")]
    Overlap,
    #[error("placement would strand player {0} without a path to their goal")]
    WouldTrap(PlayerId),
}

/// Validates a pawn move for `player_id` against the ordered preconditions of §4.3.
pub fn validate_move(state: &GameSnapshot, player_id: PlayerId, to: Coord) -> Result<(), MoveError> {
    let player = state.player(player_id).ok_or(MoveError::OutOfBounds)?;
    let from = player.pos;

    if to.0 >= 11 || to.1 >= 11 || to == from {
        return Err(MoveError::OutOfBounds);
    }
    if !is_interior(to.0, to.1) && !board::is_goal_cell(to.0, to.1, player.goal_side) {
        return Err(MoveError::OutOfBounds);
    }
    if state.occupied(to).is_some() {
        return Err(MoveError::Occupied);
    }

    let dr = to.0 as i64 - from.0 as i64;
    let dc = to.1 as i64 - from.1 as i64;
    let manhattan = dr.unsigned_abs() + dc.unsigned_abs();
    if manhattan != 1 && manhattan != 2 {
        return Err(MoveError::IllegalDistance);
    }

    let blocked = state.blocked_edges();

    if manhattan == 1 {
        let edge = canonical_edge(from, to);
        return if blocked.contains(&edge) {
            Err(MoveError::BlockedByBarrier)
        } else {
            Ok(())
        };
    }

    // distance 2: straight jump (collinear) or side-step jump (diagonal).
    if dr.unsigned_abs() == 2 || dc.unsigned_abs() == 2 {
        // Straight jump: intermediate is the midpoint.
        let mid = ((from.0 as i64 + dr / 2) as usize, (from.1 as i64 + dc / 2) as usize);
        let Some(occupant) = state.occupied(mid) else {
            return Err(MoveError::NoPawnToJump);
        };
        let _ = occupant;
        let first_edge = canonical_edge(from, mid);
        let second_edge = canonical_edge(mid, to);
        if blocked.contains(&first_edge) || blocked.contains(&second_edge) {
            return Err(MoveError::BlockedByBarrier);
        }
        return Ok(());
    }

    // dr.abs() == 1 && dc.abs() == 1: side-step jump.
    debug_assert!(dr.unsigned_abs() == 1 && dc.unsigned_abs() == 1);
    for &n in &[(from.0 as i64 + dr, from.1 as i64) , (from.0 as i64, from.1 as i64 + dc)] {
        if n.0 < 0 || n.1 < 0 {
            continue;
        }
        let n = (n.0 as usize, n.1 as usize);
        if state.occupied(n).is_none() {
            continue;
        }
        let actor_to_n = canonical_edge(from, n);
        if blocked.contains(&actor_to_n) {
            continue;
        }
        // Straight landing beyond n, in the same direction as actor->n.
        let beyond = (n.0 as i64 + (n.0 as i64 - from.0 as i64), n.1 as i64 + (n.1 as i64 - from.1 as i64));
        let straight_blocked_or_invalid = if beyond.0 < 0 || beyond.1 < 0 || beyond.0 >= 11 || beyond.1 >= 11 {
            true
        } else {
            let beyond = (beyond.0 as usize, beyond.1 as usize);
            !is_interior(beyond.0, beyond.1) && !board::is_goal_cell(beyond.0, beyond.1, state.player(player_id).unwrap().goal_side)
                || blocked.contains(&canonical_edge(n, beyond))
                || state.occupied(beyond).is_some()
        };
        if !straight_blocked_or_invalid {
            continue;
        }
        let n_to_target = canonical_edge(n, to);
        if blocked.contains(&n_to_target) {
            continue;
        }
        // destination must be orthogonally adjacent to n.
        let adj_to_n = (to.0 as i64 - n.0 as i64).unsigned_abs() + (to.1 as i64 - n.1 as i64).unsigned_abs() == 1;
        if adj_to_n {
            return Ok(());
        }
    }
    Err(MoveError::NoPawnToJump)
}

/// Validates a barrier placement for `player_id` against the ordered
/// preconditions of §4.3. The reachability check (the only query-heavy step)
/// runs last, after every cheap geometric check has passed.
pub fn validate_barrier(
    state: &GameSnapshot,
    player_id: PlayerId,
    row: usize,
    col: usize,
    orientation: Orientation,
) -> Result<(), BarrierError> {
    let player = state.player(player_id).ok_or(BarrierError::NoWalls)?;
    if player.walls_left == 0 {
        return Err(BarrierError::NoWalls);
    }

    let candidate = Barrier { row, col, orientation };
    if !anchor_in_range(candidate) {
        return Err(BarrierError::InvalidAnchor);
    }

    for existing in &state.barriers {
        if existing.row == row && existing.col == col {
            if existing.orientation == orientation {
                return Err(BarrierError::Duplicate);
            }
            return Err(BarrierError::Crossing);
        }
    }

    let (e1, e2) = barrier_edges(candidate);
    let blocked = state.blocked_edges();
    if blocked.contains(&e1) || blocked.contains(&e2) {
        return Err(BarrierError::Overlap);
    }

    let hypothetical = state.blocked_edges_with((e1, e2));
    for &seat in state.seats() {
        if let Some(p) = state.player(seat) {
            if !has_path_to_goal(p.pos, p.goal_side, &hypothetical) {
                return Err(BarrierError::WouldTrap(seat));
            }
        }
    }
    Ok(())
}

/// Pure mapping of goal side to target cell equality, per §4.3.
pub fn detect_win(player: &crate::player::PlayerState, to: Coord) -> bool {
    board::is_goal_cell(to.0, to.1, player.goal_side)
}
