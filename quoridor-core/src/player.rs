// --- File: quoridor-room-server/quoridor-core/src/player.rs ---

//! Defines the seated-player entity (§3 "Player") and its invariants.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Coord, GoalSide, PlayerId, PlayerType};

/// A seated player: position, remaining walls, and identity binding.
///
/// Invariants (enforced by the rules engine and turn controller, not by this
/// struct itself): no two players share a cell; `walls_left` never goes
/// negative; `pos` is an interior cell except for the single winning move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub player_id: PlayerId,
    pub pos: Coord,
    pub goal_side: GoalSide,
    pub walls_left: u8,
    pub player_type: PlayerType,
    /// Opaque session/user identity binding (§3 "Ownership" — by value, never by pointer).
    pub session_binding: String,
}

impl PlayerState {
    pub fn new(player_id: PlayerId, pos: Coord, goal_side: GoalSide, walls_left: u8, player_type: PlayerType, session_binding: String) -> Self {
        PlayerState {
            player_id,
            pos,
            goal_side,
            walls_left,
            player_type,
            session_binding,
        }
    }

    pub fn is_bot(&self) -> bool {
        self.player_type.is_bot()
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player{}", self.player_id)
    }
}
