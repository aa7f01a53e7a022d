// --- File: quoridor-room-server/quoridor-core/src/lib.rs ---

//! # Quoridor Core Library
//!
//! Pure game logic for the room server: board geometry, reachability,
//! rules validation, seeded randomness, and bot strategies. Has no
//! knowledge of persistence, concurrency, or transport — `quoridor-store`
//! and `quoridor-server` build on top of the types here.

pub mod board;
pub mod player;
pub mod reachability;
pub mod rng;
pub mod rules;
pub mod snapshot;
pub mod strategy;
pub mod types;

pub use player::PlayerState;
pub use rng::SeededRng;
pub use rules::{validate_barrier, validate_move, BarrierError, MoveError};
pub use snapshot::{GameSnapshot, PlacedBarrier};
pub use strategy::{select_strategy, BotDecision, DecisionKind, Strategy};
pub use types::{Coord, GameMode, GoalSide, Orientation, PlayerId, PlayerType};