// --- File: quoridor-room-server/quoridor-core/src/board.rs ---

//! Board model (C1): cells, edges, edge-key normalization, barrier->edge
//! expansion. Pure, no mutable state.
//!
//! Departs from the teacher's `petgraph::UnGraph` board representation: at
//! 11x11 an explicit graph structure is unneeded weight. Edges are packed
//! into a single `u32` key and BFS (see `reachability`) walks the blocked-set
//! directly, per the spec's own design notes on graph representation.

use crate::types::{Coord, GoalSide, Orientation, GRID_SIZE};

/// Canonical key for an undirected edge between two orthogonally adjacent cells.
pub type EdgeKey = u32;

fn pack(coord: Coord) -> u32 {
    (coord.0 as u32) * (GRID_SIZE as u32) + (coord.1 as u32)
}

/// Canonicalizes an edge so both endpoint orderings map to the same key.
pub fn canonical_edge(a: Coord, b: Coord) -> EdgeKey {
    let (pa, pb) = (pack(a), pack(b));
    let (lo, hi) = if pa <= pb { (pa, pb) } else { (pb, pa) };
    lo * (GRID_SIZE as u32 * GRID_SIZE as u32) + hi
}

/// A wall placement, anchored at the top-left of a 2x2 intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Barrier {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

/// Returns the two edges an anchored barrier blocks, per §3's H/V geometry.
/// Does not validate the anchor range; callers check that separately.
pub fn barrier_edges(barrier: Barrier) -> (EdgeKey, EdgeKey) {
    let (r, c) = (barrier.row, barrier.col);
    match barrier.orientation {
        // H at (r,c) blocks (r,c)-(r+1,c) and (r,c+1)-(r+1,c+1)
        Orientation::Horizontal => (
            canonical_edge((r, c), (r + 1, c)),
            canonical_edge((r, c + 1), (r + 1, c + 1)),
        ),
        // V at (r,c) blocks (r,c)-(r,c+1) and (r+1,c)-(r+1,c+1)
        Orientation::Vertical => (
            canonical_edge((r, c), (r, c + 1)),
            canonical_edge((r + 1, c), (r + 1, c + 1)),
        ),
    }
}

/// Valid anchor range for a barrier orientation.
///
/// §3 gives `r in 0..9, c in 0..8` for H and `r in 0..8, c in 0..9` for V, but
/// taken literally that admits an anchor whose edges touch a border cell
/// directly — exactly the case §8's boundary invariant says must never
/// happen ("no valid anchor produces that edge"). Both the anchor's own axis
/// and its perpendicular axis must stay off the border, so each is excluded
/// on both ends, giving the symmetric 8x8 anchor grid per orientation
/// standard Quoridor boards have (interior is 9x9, so there are 8 internal
/// wall-row gaps and 8 internal wall-col gaps). See DESIGN.md.
pub fn anchor_in_range(barrier: Barrier) -> bool {
    match barrier.orientation {
        Orientation::Horizontal => (1..=8).contains(&barrier.row) && (1..=8).contains(&barrier.col),
        Orientation::Vertical => (1..=8).contains(&barrier.row) && (1..=8).contains(&barrier.col),
    }
}

/// Interior cells are the 9x9 playable region (rows/cols 1..=9).
pub fn is_interior(r: usize, c: usize) -> bool {
    (1..=9).contains(&r) && (1..=9).contains(&c)
}

/// Whether (r, c) is the outer border cell matching `goal_side`.
pub fn is_goal_cell(r: usize, c: usize, goal_side: GoalSide) -> bool {
    match goal_side {
        GoalSide::Top => r == 0 && (1..=9).contains(&c),
        GoalSide::Bottom => r == 10 && (1..=9).contains(&c),
        GoalSide::Left => c == 0 && (1..=9).contains(&r),
        GoalSide::Right => c == 10 && (1..=9).contains(&r),
    }
}

/// Orthogonal neighbours of (r, c) that lie on the 11x11 grid.
pub fn grid_neighbours(r: usize, c: usize) -> impl Iterator<Item = Coord> {
    let mut out = Vec::with_capacity(4);
    if r > 0 {
        out.push((r - 1, c));
    }
    if r + 1 < GRID_SIZE {
        out.push((r + 1, c));
    }
    if c > 0 {
        out.push((r, c - 1));
    }
    if c + 1 < GRID_SIZE {
        out.push((r, c + 1));
    }
    out.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_edge_is_order_independent() {
        assert_eq!(canonical_edge((3, 4), (3, 5)), canonical_edge((3, 5), (3, 4)));
        assert_eq!(canonical_edge((0, 0), (1, 0)), canonical_edge((1, 0), (0, 0)));
    }

    #[test]
    fn horizontal_barrier_blocks_the_two_vertical_edges() {
        let b = Barrier { row: 3, col: 4, orientation: Orientation::Horizontal };
        let (e1, e2) = barrier_edges(b);
        assert_eq!(e1, canonical_edge((3, 4), (4, 4)));
        assert_eq!(e2, canonical_edge((3, 5), (4, 5)));
    }

    #[test]
    fn vertical_barrier_blocks_the_two_horizontal_edges() {
        let b = Barrier { row: 3, col: 4, orientation: Orientation::Vertical };
        let (e1, e2) = barrier_edges(b);
        assert_eq!(e1, canonical_edge((3, 4), (3, 5)));
        assert_eq!(e2, canonical_edge((4, 4), (4, 5)));
    }

    #[test]
    fn anchor_ranges_give_the_symmetric_8x8_grid() {
        assert!(anchor_in_range(Barrier { row: 8, col: 7, orientation: Orientation::Horizontal }));
        assert!(!anchor_in_range(Barrier { row: 9, col: 7, orientation: Orientation::Horizontal }));
        assert!(!anchor_in_range(Barrier { row: 0, col: 7, orientation: Orientation::Horizontal }));
        assert!(anchor_in_range(Barrier { row: 3, col: 8, orientation: Orientation::Horizontal }));
        assert!(!anchor_in_range(Barrier { row: 3, col: 0, orientation: Orientation::Horizontal }));
        assert!(!anchor_in_range(Barrier { row: 3, col: 9, orientation: Orientation::Horizontal }));

        assert!(anchor_in_range(Barrier { row: 7, col: 8, orientation: Orientation::Vertical }));
        assert!(!anchor_in_range(Barrier { row: 7, col: 0, orientation: Orientation::Vertical }));
        assert!(!anchor_in_range(Barrier { row: 7, col: 9, orientation: Orientation::Vertical }));
        assert!(anchor_in_range(Barrier { row: 8, col: 3, orientation: Orientation::Vertical }));
        assert!(!anchor_in_range(Barrier { row: 0, col: 3, orientation: Orientation::Vertical }));
        assert!(!anchor_in_range(Barrier { row: 9, col: 3, orientation: Orientation::Vertical }));

        let h_count = (0..=9usize)
            .flat_map(|r| (0..=8usize).map(move |c| (r, c)))
            .filter(|&(row, col)| anchor_in_range(Barrier { row, col, orientation: Orientation::Horizontal }))
            .count();
        let v_count = (0..=8usize)
            .flat_map(|r| (0..=9usize).map(move |c| (r, c)))
            .filter(|&(row, col)| anchor_in_range(Barrier { row, col, orientation: Orientation::Vertical }))
            .count();
        assert_eq!(h_count, 64);
        assert_eq!(v_count, 64);
    }

    #[test]
    fn no_anchor_produces_an_edge_crossing_any_border() {
        // Exhaustive enumeration per §8: a valid anchor never blocks an edge
        // that touches an outer border cell, on any of the four sides.
        let forbidden: Vec<EdgeKey> = (1..=9)
            .flat_map(|i| {
                [
                    canonical_edge((0, i), (1, i)),
                    canonical_edge((9, i), (10, i)),
                    canonical_edge((i, 0), (i, 1)),
                    canonical_edge((i, 9), (i, 10)),
                ]
            })
            .collect();
        for row in 0..=9usize {
            for col in 0..=8usize {
                let b = Barrier { row, col, orientation: Orientation::Horizontal };
                if anchor_in_range(b) {
                    let (e1, e2) = barrier_edges(b);
                    assert!(!forbidden.contains(&e1) && !forbidden.contains(&e2));
                }
            }
        }
        for row in 0..=8usize {
            for col in 0..=9usize {
                let b = Barrier { row, col, orientation: Orientation::Vertical };
                if anchor_in_range(b) {
                    let (e1, e2) = barrier_edges(b);
                    assert!(!forbidden.contains(&e1) && !forbidden.contains(&e2));
                }
            }
        }
    }

    #[test]
    fn interior_and_goal_cells() {
        assert!(is_interior(1, 1));
        assert!(!is_interior(0, 1));
        assert!(is_goal_cell(0, 5, GoalSide::Top));
        assert!(!is_goal_cell(0, 0, GoalSide::Top));
        assert!(is_goal_cell(10, 5, GoalSide::Bottom));
        assert!(is_goal_cell(5, 0, GoalSide::Left));
        assert!(is_goal_cell(5, 10, GoalSide::Right));
    }
}
