// --- File: quoridor-room-server/quoridor-core/src/strategy/mod.rs ---

//! Bot Strategies (C5): decision functions over a read-only game snapshot.
//!
//! Grounded on the teacher's `strategy::Strategy` trait (`choose_move(&mut
//! self, &Quoridor) -> Option<String>`); generalized from algebraic-notation
//! moves to typed `BotDecision`s and from `&mut self` internal counters
//! (opening books) to a pure function of `(snapshot, player_id, rng)`, since
//! bot decisions here must be replayable byte-for-byte from the seed alone
//! rather than from strategy-local state.
//!
//! Per the design notes on dispatch: strategies are a small closed set keyed
//! by `PlayerType`, not a plugin registry — `select_strategy` below is a
//! plain match, not a dynamic lookup table.

mod easy;
mod hard;
mod medium;

pub use easy::EasyStrategy;
pub use hard::HardStrategy;
pub use medium::MediumStrategy;

use crate::reachability::shortest_path;
use crate::rng::SeededRng;
use crate::snapshot::GameSnapshot;
use crate::types::{Coord, Orientation, PlayerId, PlayerType};

/// Whether a decision places a pawn or a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    Move,
    Wall,
}

/// A strategy's chosen action, with the bookkeeping the worker logs (§4.9
/// observability) and the turn controller needs to apply it.
#[derive(Debug, Clone)]
pub struct BotDecision {
    pub kind: DecisionKind,
    pub row: usize,
    pub col: usize,
    pub orientation: Option<Orientation>,
    pub reasoning: String,
    pub candidates_evaluated: usize,
}

impl BotDecision {
    fn mv(to: Coord, reasoning: impl Into<String>, candidates_evaluated: usize) -> Self {
        BotDecision {
            kind: DecisionKind::Move,
            row: to.0,
            col: to.1,
            orientation: None,
            reasoning: reasoning.into(),
            candidates_evaluated,
        }
    }

    fn wall(row: usize, col: usize, orientation: Orientation, reasoning: impl Into<String>, candidates_evaluated: usize) -> Self {
        BotDecision {
            kind: DecisionKind::Wall,
            row,
            col,
            orientation: Some(orientation),
            reasoning: reasoning.into(),
            candidates_evaluated,
        }
    }
}

/// Decides the next action for `player_id` given `snapshot` and `rng`.
pub trait Strategy: Send + Sync {
    fn decide(&self, snapshot: &GameSnapshot, player_id: PlayerId, rng: &mut SeededRng) -> BotDecision;
}

/// Selects the strategy for a seat's `PlayerType`. A plain match over a
/// closed enum, per the design notes — no plugin registry.
pub fn select_strategy(player_type: PlayerType) -> Box<dyn Strategy> {
    match player_type {
        PlayerType::BotEasy => Box::new(EasyStrategy),
        PlayerType::BotMedium => Box::new(MediumStrategy),
        PlayerType::BotHard => Box::new(HardStrategy),
        PlayerType::Human => unreachable!("select_strategy called for a human seat"),
    }
}

/// Every cell the actor could possibly move to (distance 1 or 2, within grid
/// bounds), filtered down to the ones `validate_move` actually accepts.
pub(crate) fn legal_moves(snapshot: &GameSnapshot, player_id: PlayerId) -> Vec<Coord> {
    let Some(player) = snapshot.player(player_id) else {
        return Vec::new();
    };
    let (r, c) = player.pos;
    let mut candidates = Vec::new();
    for dr in -2i64..=2 {
        for dc in -2i64..=2 {
            let manhattan = dr.unsigned_abs() + dc.unsigned_abs();
            if manhattan != 1 && manhattan != 2 {
                continue;
            }
            let (nr, nc) = (r as i64 + dr, c as i64 + dc);
            if nr < 0 || nc < 0 {
                continue;
            }
            candidates.push((nr as usize, nc as usize));
        }
    }
    candidates
        .into_iter()
        .filter(|&to| crate::rules::validate_move(snapshot, player_id, to).is_ok())
        .collect()
}

/// Number of steps on the shortest path to goal, or `usize::MAX` if none.
pub(crate) fn distance_to_goal(snapshot: &GameSnapshot, player_id: PlayerId) -> usize {
    let Some(player) = snapshot.player(player_id) else {
        return usize::MAX;
    };
    match shortest_path(player.pos, player.goal_side, &snapshot.blocked_edges()) {
        Some(path) => path.len() - 1,
        None => usize::MAX,
    }
}

/// The seated opponent closest to their own goal (smallest manhattan
/// distance), ties broken by lowest `playerId` (§9 open question 3).
pub(crate) fn closest_opponent(snapshot: &GameSnapshot, player_id: PlayerId) -> Option<PlayerId> {
    snapshot
        .seats()
        .iter()
        .filter(|&&seat| seat != player_id)
        .filter_map(|&seat| snapshot.player(seat))
        .min_by_key(|p| (manhattan_to_goal(p.pos, p.player_id, snapshot), p.player_id))
        .map(|p| p.player_id)
}

fn manhattan_to_goal(pos: Coord, player_id: PlayerId, snapshot: &GameSnapshot) -> usize {
    let Some(player) = snapshot.player(player_id) else {
        return usize::MAX;
    };
    match player.goal_side {
        crate::types::GoalSide::Top => pos.0,
        crate::types::GoalSide::Bottom => 10 - pos.0,
        crate::types::GoalSide::Left => pos.1,
        crate::types::GoalSide::Right => 10 - pos.1,
    }
}

/// A copy of `snapshot` with `player_id` moved to `to`, win-checked and
/// advanced so `distance_to_goal` can be evaluated against the result.
pub(crate) fn after_move(snapshot: &GameSnapshot, player_id: PlayerId, to: Coord) -> GameSnapshot {
    let mut next = snapshot.clone();
    if let Some(p) = next.players.iter_mut().find(|p| p.player_id == player_id) {
        p.pos = to;
    }
    next
}

/// A copy of `snapshot` with an extra barrier placed, for scoring a
/// candidate wall against the post-placement reachability of an opponent.
pub(crate) fn after_barrier(snapshot: &GameSnapshot, row: usize, col: usize, orientation: Orientation, placed_by: PlayerId) -> GameSnapshot {
    let mut next = snapshot.clone();
    next.barriers.push(crate::snapshot::PlacedBarrier { row, col, orientation, placed_by });
    next
}

/// The four anchors whose 2x2 intersection touches `cell`, each tried with
/// both orientations by the defensive-barrier search in Medium/Hard. Anchor
/// coordinates that would underflow `usize` are simply absent from the grid
/// and skipped.
pub(crate) fn anchors_touching(cell: Coord) -> Vec<(usize, usize)> {
    let (r, c) = cell;
    let mut out = Vec::with_capacity(4);
    for dr in [0i64, -1] {
        for dc in [0i64, -1] {
            let (ar, ac) = (r as i64 + dr, c as i64 + dc);
            if ar >= 0 && ac >= 0 {
                out.push((ar as usize, ac as usize));
            }
        }
    }
    out
}

