// --- File: quoridor-room-server/quoridor-core/src/reachability.rs ---

//! Reachability (C2): BFS over an edge-blocked grid graph.
//!
//! Grounded on the teacher's `graph.rs::check_wall_path_blocking`/
//! `get_shortest_path_len` (there built on `petgraph::dijkstra`); here the
//! graph is implicit (grid adjacency) and edges live in a flat `HashSet`, so
//! a hand-rolled BFS replaces the graph-library call, per the spec's Design
//! Notes on representation (§9) — unit edge weights make BFS equivalent to
//! Dijkstra and cheaper to reason about at this board size.

use std::collections::{HashSet, VecDeque};

use crate::board::{canonical_edge, grid_neighbours, is_interior, EdgeKey};
use crate::types::{Coord, GoalSide};

/// Whether `start` can still reach `goal_side`'s border, given `blocked`.
///
/// BFS succeeds the instant the frontier reaches any interior cell one step
/// from the goal border (`GoalSide::frontier`); the final step onto the
/// border cell itself is always unobstructed by construction (see
/// `board::anchor_in_range`), so BFS never needs to expand onto border cells.
pub fn has_path_to_goal(start: Coord, goal_side: GoalSide, blocked: &HashSet<EdgeKey>) -> bool {
    bfs(start, goal_side, blocked).0
}

/// The shortest path from `start` to a cell on `goal_side`'s border, inclusive
/// of the final border cell, or `None` if unreachable.
pub fn shortest_path(start: Coord, goal_side: GoalSide, blocked: &HashSet<EdgeKey>) -> Option<Vec<Coord>> {
    let (reached, came_from, frontier_cell) = bfs(start, goal_side, blocked);
    if !reached {
        return None;
    }
    let frontier_cell = frontier_cell?;
    let mut path = vec![frontier_cell];
    let mut cur = frontier_cell;
    while cur != start {
        let prev = *came_from.get(&cur)?;
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path.push(border_cell(frontier_cell, goal_side));
    Some(path)
}

/// The BFS core: returns whether the goal frontier was reached, the
/// predecessor map for path reconstruction, and the frontier cell that was
/// reached (the interior cell immediately before the winning step).
fn bfs(
    start: Coord,
    goal_side: GoalSide,
    blocked: &HashSet<EdgeKey>,
) -> (bool, std::collections::HashMap<Coord, Coord>, Option<Coord>) {
    let mut visited = HashSet::new();
    let mut came_from = std::collections::HashMap::new();
    let mut queue = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    if at_frontier(start, goal_side) {
        return (true, came_from, Some(start));
    }

    while let Some((r, c)) = queue.pop_front() {
        for (nr, nc) in grid_neighbours(r, c) {
            if !is_interior(nr, nc) {
                continue; // BFS never expands through border cells
            }
            if visited.contains(&(nr, nc)) {
                continue;
            }
            let edge = canonical_edge((r, c), (nr, nc));
            if blocked.contains(&edge) {
                continue;
            }
            visited.insert((nr, nc));
            came_from.insert((nr, nc), (r, c));
            if at_frontier((nr, nc), goal_side) {
                return (true, came_from, Some((nr, nc)));
            }
            queue.push_back((nr, nc));
        }
    }
    (false, came_from, None)
}

fn at_frontier(coord: Coord, goal_side: GoalSide) -> bool {
    match goal_side {
        GoalSide::Top | GoalSide::Bottom => coord.0 == goal_side.frontier(),
        GoalSide::Left | GoalSide::Right => coord.1 == goal_side.frontier(),
    }
}

fn border_cell(frontier_cell: Coord, goal_side: GoalSide) -> Coord {
    match goal_side {
        GoalSide::Top => (0, frontier_cell.1),
        GoalSide::Bottom => (10, frontier_cell.1),
        GoalSide::Left => (frontier_cell.0, 0),
        GoalSide::Right => (frontier_cell.0, 10),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_board_has_a_path_for_every_goal_side() {
        let blocked = HashSet::new();
        assert!(has_path_to_goal((1, 5), GoalSide::Bottom, &blocked));
        assert!(has_path_to_goal((5, 9), GoalSide::Left, &blocked));
        assert!(has_path_to_goal((9, 5), GoalSide::Top, &blocked));
        assert!(has_path_to_goal((5, 1), GoalSide::Right, &blocked));
    }

    #[test]
    fn shortest_path_ends_on_the_goal_border() {
        let blocked = HashSet::new();
        let path = shortest_path((1, 5), GoalSide::Bottom, &blocked).unwrap();
        assert_eq!(path.first(), Some(&(1, 5)));
        assert_eq!(path.last(), Some(&(10, 5)));
        assert_eq!(path.len(), 10); // rows 1..=10
    }

    #[test]
    fn a_complete_wall_of_blocked_edges_cuts_off_the_path() {
        let mut blocked = HashSet::new();
        // Seal row 1 from row 2 across every interior column.
        for c in 1..=9 {
            blocked.insert(canonical_edge((1, c), (2, c)));
        }
        assert!(has_path_to_goal((1, 5), GoalSide::Top, &blocked));
        assert!(!has_path_to_goal((1, 5), GoalSide::Bottom, &blocked));
    }
}
