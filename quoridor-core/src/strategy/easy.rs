// --- File: quoridor-room-server/quoridor-core/src/strategy/easy.rs ---

//! Easy bot (§4.5): mostly random, occasionally greedy.

use crate::reachability::shortest_path;
use crate::rng::SeededRng;
use crate::snapshot::GameSnapshot;
use crate::types::PlayerId;

use super::{legal_moves, BotDecision, Strategy};

pub struct EasyStrategy;

impl Strategy for EasyStrategy {
    fn decide(&self, snapshot: &GameSnapshot, player_id: PlayerId, rng: &mut SeededRng) -> BotDecision {
        let moves = legal_moves(snapshot, player_id);
        let candidates_evaluated = moves.len();
        let player = snapshot.player(player_id).expect("decide called for a seated player");

        if rng.next_unit() < 0.6 {
            let pick = rng.pick(&moves).copied().expect("reachability invariant guarantees at least one legal move");
            return BotDecision::mv(pick, "random legal move", candidates_evaluated);
        }

        let path = shortest_path(player.pos, player.goal_side, &snapshot.blocked_edges());
        match path.as_deref() {
            Some([_, first_step, ..]) if moves.contains(first_step) => {
                BotDecision::mv(*first_step, "first step of shortest path", candidates_evaluated)
            }
            _ => {
                let pick = rng.pick(&moves).copied().expect("reachability invariant guarantees at least one legal move");
                BotDecision::mv(pick, "no path available, fell back to random", candidates_evaluated)
            }
        }
    }
}
