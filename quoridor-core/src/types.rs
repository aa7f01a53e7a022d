// --- File: quoridor-room-server/quoridor-core/src/types.rs ---

//! Core type aliases and small enums shared across the rules engine.

use serde::{Deserialize, Serialize};

/// A board coordinate, (row, col), 0-indexed from the top-left corner.
pub type Coord = (usize, usize);

/// The 11x11 grid side length (§6 `GRID_SIZE`). Rows/cols 0 and 10 are border cells.
pub const GRID_SIZE: usize = 11;

/// The 9x9 interior region side length (§6 `INNER_SIZE`).
pub const INNER_SIZE: usize = 9;

/// Seat identifier, 0..=3. Which seats are occupied depends on `GameMode`.
pub type PlayerId = u8;

/// The border a player must reach to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl GoalSide {
    /// The row/col one step inside the goal border, where BFS success is declared.
    pub fn frontier(self) -> usize {
        match self {
            GoalSide::Top => 1,
            GoalSide::Bottom => INNER_SIZE,
            GoalSide::Left => 1,
            GoalSide::Right => INNER_SIZE,
        }
    }
}

/// Wall orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// What occupies a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerType {
    Human,
    BotEasy,
    BotMedium,
    BotHard,
}

impl PlayerType {
    pub fn is_bot(self) -> bool {
        !matches!(self, PlayerType::Human)
    }
}

/// Number of seats and which ones are occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    TwoPlayer,
    FourPlayer,
}

impl GameMode {
    /// The seat list in turn-rotation order.
    pub fn seats(self) -> &'static [PlayerId] {
        match self {
            GameMode::TwoPlayer => &[0, 2],
            GameMode::FourPlayer => &[0, 1, 2, 3],
        }
    }

    pub fn starting_walls(self) -> u8 {
        match self {
            GameMode::TwoPlayer => 12,
            GameMode::FourPlayer => 6,
        }
    }

    pub fn min_players(self) -> usize {
        match self {
            GameMode::TwoPlayer => 2,
            GameMode::FourPlayer => 2,
        }
    }

    pub fn max_players(self) -> usize {
        self.seats().len()
    }
}

/// Starting cell and goal side for a seat, per §6.
pub fn starting_layout(seat: PlayerId) -> (Coord, GoalSide) {
    match seat {
        0 => ((1, 5), GoalSide::Bottom),
        1 => ((5, 9), GoalSide::Left),
        2 => ((9, 5), GoalSide::Top),
        3 => ((5, 1), GoalSide::Right),
        _ => unreachable!("seat out of range: {seat}"),
    }
}
