// --- File: quoridor-room-server/quoridor-core/src/snapshot.rs ---

//! A read-only view of room state (§3), the common input to the rules
//! engine and to bot strategies. Owned independently of the store so the
//! pure validators never depend on `quoridor-store`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::board::{barrier_edges, Barrier as BoardBarrier, EdgeKey};
use crate::player::PlayerState;
use crate::types::{Coord, GameMode, Orientation, PlayerId};

/// A placed barrier, as recorded in room state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedBarrier {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub placed_by: PlayerId,
}

/// Read-only snapshot of one room's game state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_mode: GameMode,
    pub players: Vec<PlayerState>,
    pub barriers: Vec<PlacedBarrier>,
    pub current_turn: PlayerId,
    pub turn_number: u64,
}

impl GameSnapshot {
    pub fn player(&self, id: PlayerId) -> Option<&PlayerState> {
        self.players.iter().find(|p| p.player_id == id)
    }

    pub fn occupied(&self, coord: Coord) -> Option<PlayerId> {
        self.players.iter().find(|p| p.pos == coord).map(|p| p.player_id)
    }

    /// The set of edges blocked by every barrier currently on the board.
    pub fn blocked_edges(&self) -> HashSet<EdgeKey> {
        let mut set = HashSet::with_capacity(self.barriers.len() * 2);
        for b in &self.barriers {
            let (e1, e2) = barrier_edges(BoardBarrier { row: b.row, col: b.col, orientation: b.orientation });
            set.insert(e1);
            set.insert(e2);
        }
        set
    }

    /// The blocked-edge set with two additional hypothetical edges added, used
    /// by `validate_barrier`'s reachability check without mutating state.
    pub fn blocked_edges_with(&self, extra: (EdgeKey, EdgeKey)) -> HashSet<EdgeKey> {
        let mut set = self.blocked_edges();
        set.insert(extra.0);
        set.insert(extra.1);
        set
    }

    pub fn seats(&self) -> &'static [PlayerId] {
        self.game_mode.seats()
    }

    /// The next occupied seat after `from` in rotation order, skipping empty
    /// seats (§4.7 step 4) — `FourPlayer` rooms may start with as few as
    /// `min_players`, so rotation can't assume every seat in `seats()` is
    /// filled.
    pub fn next_seat(&self, from: PlayerId) -> PlayerId {
        let seats = self.seats();
        let idx = seats.iter().position(|&s| s == from).expect("current_turn must be a seated player");
        let n = seats.len();
        (1..=n)
            .map(|step| seats[(idx + step) % n])
            .find(|&candidate| self.player(candidate).is_some())
            .unwrap_or(from)
    }

    /// The seat immediately before `to` in rotation order, skipping empty
    /// seats — the actor who must have just moved for `to` to be the current
    /// turn (used by undo).
    pub fn previous_seat(&self, to: PlayerId) -> PlayerId {
        let seats = self.seats();
        let idx = seats.iter().position(|&s| s == to).expect("seat must be seated");
        let n = seats.len();
        (1..=n)
            .map(|step| seats[(idx + n - step) % n])
            .find(|&candidate| self.player(candidate).is_some())
            .unwrap_or(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GoalSide, PlayerType};

    fn snapshot_with_seats(seats: &[PlayerId]) -> GameSnapshot {
        let players = seats
            .iter()
            .map(|&id| PlayerState::new(id, (0, 0), GoalSide::Top, 6, PlayerType::Human, format!("p{id}")))
            .collect();
        GameSnapshot { game_mode: GameMode::FourPlayer, players, barriers: vec![], current_turn: seats[0], turn_number: 0 }
    }

    #[test]
    fn next_seat_skips_unoccupied_seats_in_a_four_player_room_started_below_capacity() {
        let snapshot = snapshot_with_seats(&[0, 1]);
        assert_eq!(snapshot.next_seat(0), 1);
        assert_eq!(snapshot.next_seat(1), 0);
    }

    #[test]
    fn previous_seat_skips_unoccupied_seats_symmetrically() {
        let snapshot = snapshot_with_seats(&[0, 1]);
        assert_eq!(snapshot.previous_seat(1), 0);
        assert_eq!(snapshot.previous_seat(0), 1);
    }

    #[test]
    fn full_four_player_rotation_still_visits_every_seat_in_order() {
        let snapshot = snapshot_with_seats(&[0, 1, 2, 3]);
        assert_eq!(snapshot.next_seat(0), 1);
        assert_eq!(snapshot.next_seat(1), 2);
        assert_eq!(snapshot.next_seat(2), 3);
        assert_eq!(snapshot.next_seat(3), 0);
    }
}
