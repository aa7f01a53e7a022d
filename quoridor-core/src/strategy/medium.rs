// --- File: quoridor-room-server/quoridor-core/src/strategy/medium.rs ---

//! Medium bot (§4.5): occasional defensive barrier, otherwise greedy-with-noise.

use crate::reachability::shortest_path;
use crate::rng::SeededRng;
use crate::rules::validate_barrier;
use crate::snapshot::GameSnapshot;
use crate::types::{Orientation, PlayerId};

use super::{after_barrier, after_move, anchors_touching, closest_opponent, distance_to_goal, legal_moves, BotDecision, Strategy};

/// A defensive-barrier candidate: the placement and how much it increases
/// the opponent's shortest-path distance.
struct WallCandidate {
    row: usize,
    col: usize,
    orientation: Orientation,
    opponent_delta: i64,
}

/// Searches barrier anchors near steps `lo..=hi` of `opponent`'s shortest
/// path, keeping only placements that pass `validate_barrier` and increase
/// the opponent's distance to goal. Shared by Medium and Hard.
pub(super) fn defensive_candidates(snapshot: &GameSnapshot, actor: PlayerId, opponent: PlayerId, lo: usize, hi: usize) -> Vec<WallCandidate> {
    let Some(opp) = snapshot.player(opponent) else {
        return Vec::new();
    };
    let Some(path) = shortest_path(opp.pos, opp.goal_side, &snapshot.blocked_edges()) else {
        return Vec::new();
    };
    let before = path.len() - 1;

    let mut out = Vec::new();
    for idx in lo..=hi {
        let Some(&cell) = path.get(idx) else { continue };
        for (ar, ac) in anchors_touching(cell) {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                if validate_barrier(snapshot, actor, ar, ac, orientation).is_err() {
                    continue;
                }
                let hypothetical = after_barrier(snapshot, ar, ac, orientation, actor);
                let after = distance_to_goal(&hypothetical, opponent);
                if after == usize::MAX {
                    continue; // would-trap is already rejected by validate_barrier; be defensive anyway
                }
                let delta = after as i64 - before as i64;
                if delta > 0 {
                    out.push(WallCandidate { row: ar, col: ac, orientation, opponent_delta: delta });
                }
            }
        }
    }
    out
}

pub struct MediumStrategy;

impl Strategy for MediumStrategy {
    fn decide(&self, snapshot: &GameSnapshot, player_id: PlayerId, rng: &mut SeededRng) -> BotDecision {
        let player = snapshot.player(player_id).expect("decide called for a seated player");
        let opponent = closest_opponent(snapshot, player_id);

        if player.walls_left > 0 && opponent.is_some() && rng.next_unit() < 0.3 {
            let opponent = opponent.unwrap();
            let candidates = defensive_candidates(snapshot, player_id, opponent, 2, 4);
            if let Some(best) = candidates.iter().max_by_key(|c| c.opponent_delta) {
                return BotDecision::wall(
                    best.row,
                    best.col,
                    best.orientation,
                    format!("defensive barrier against player {opponent}, +{} to their path", best.opponent_delta),
                    candidates.len(),
                );
            }
        }

        let moves = legal_moves(snapshot, player_id);
        let current_distance = distance_to_goal(snapshot, player_id) as f64;
        let mut scored: Vec<(f64, crate::types::Coord)> = moves
            .iter()
            .map(|&to| {
                let after = distance_to_goal(&after_move(snapshot, player_id, to), player_id) as f64;
                let noise = rng.next_unit() * 0.01;
                (current_distance - after + noise, to)
            })
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).expect("scores are never NaN"));
        let top = &scored[..scored.len().min(3)];
        let pick = rng.pick(top).expect("reachability invariant guarantees at least one legal move").1;
        BotDecision::mv(pick, "greedy move toward goal with noise", moves.len())
    }
}
