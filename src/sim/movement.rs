//! Collision gate: the only rules that decide whether the viewer may take
//! a step.
//!
//! All predicates work on whole cells.  The viewer is a point; the grid
//! cell under a position is its collision footprint.

use glam::{Vec2, vec2};

use crate::world::Grid;

/// Cell index under a position.
#[inline]
fn cell_of(pos: Vec2) -> (i32, i32) {
    (pos.x.floor() as i32, pos.y.floor() as i32)
}

/// True iff `(x, y)` is inside the grid and not solid.
#[inline]
pub fn can_enter(grid: &Grid, x: i32, y: i32) -> bool {
    grid.in_bounds(x, y) && !grid.is_solid(x as usize, y as usize)
}

/// May an actor standing in `from` step into `to`?
///
/// A diagonal step additionally requires **both** orthogonal neighbours of
/// the move to be open; otherwise the step would cut through the corner
/// where two walls meet.
pub fn can_move(grid: &Grid, from: (i32, i32), to: (i32, i32)) -> bool {
    if !can_enter(grid, to.0, to.1) {
        return false;
    }
    if to.0 != from.0 && to.1 != from.1 {
        return can_enter(grid, to.0, from.1) && can_enter(grid, from.0, to.1);
    }
    true
}

/// Resolve a proposed move against the grid.
///
/// The full candidate is taken when the gate allows it; otherwise each
/// axis is gated independently, so the viewer glides along a wall instead
/// of sticking to it.
pub fn resolve(grid: &Grid, pos: Vec2, candidate: Vec2) -> Vec2 {
    let from = cell_of(pos);
    if can_move(grid, from, cell_of(candidate)) {
        return candidate;
    }

    let mut out = pos;
    if can_move(grid, from, cell_of(vec2(candidate.x, pos.y))) {
        out.x = candidate.x;
    }
    if can_move(grid, cell_of(out), cell_of(vec2(out.x, candidate.y))) {
        out.y = candidate.y;
    }
    out
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    /// 4×4 box with an "L" corner in the open quadrant:
    /// walls at (2, 1) and (1, 2), open at (1, 1) and (2, 2).
    fn l_corner() -> Grid {
        Grid::new(&[[1, 1, 1, 1], [1, 0, 1, 1], [1, 1, 0, 1], [1, 1, 1, 1]]).unwrap()
    }

    #[test]
    fn walls_block_straight_steps() {
        let g = l_corner();
        assert!(!can_move(&g, (1, 1), (2, 1)));
        assert!(!can_move(&g, (1, 1), (1, 2)));
        assert!(can_move(&g, (1, 1), (1, 1)));
    }

    #[test]
    fn diagonal_through_corner_rejected() {
        let g = l_corner();
        // destination itself is open, but both orthogonal neighbours are
        // walls: the step would squeeze through the corner
        assert!(!can_move(&g, (1, 1), (2, 2)));
        assert!(!can_move(&g, (2, 2), (1, 1)));
    }

    #[test]
    fn diagonal_with_open_neighbours_allowed() {
        let g = Grid::new(&[[1, 1, 1, 1], [1, 0, 0, 1], [1, 0, 0, 1], [1, 1, 1, 1]]).unwrap();
        assert!(can_move(&g, (1, 1), (2, 2)));
    }

    #[test]
    fn out_of_bounds_rejected() {
        let g = l_corner();
        assert!(!can_enter(&g, -1, 1));
        assert!(!can_enter(&g, 1, 4));
    }

    #[test]
    fn resolve_slides_along_a_wall() {
        let g = Grid::new(&[[1, 1, 1, 1], [1, 0, 0, 1], [1, 1, 1, 1], [1, 1, 1, 1]]).unwrap();
        // pushing north-east into the top wall: x advances, y stays
        let pos = vec2(1.5, 1.5);
        let next = resolve(&g, pos, vec2(2.5, 0.5));
        assert_eq!(next, vec2(2.5, 1.5));
    }

    #[test]
    fn resolve_rejects_corner_cut_completely() {
        let g = l_corner();
        let pos = vec2(1.5, 1.5);
        let next = resolve(&g, pos, vec2(2.5, 2.5));
        assert_eq!(next, pos);
    }

    #[test]
    fn resolve_accepts_free_moves() {
        let g = Grid::new(&[[1, 1, 1, 1], [1, 0, 0, 1], [1, 0, 0, 1], [1, 1, 1, 1]]).unwrap();
        let next = resolve(&g, vec2(1.5, 1.5), vec2(2.25, 2.25));
        assert_eq!(next, vec2(2.25, 2.25));
    }

    #[test]
    fn sub_cell_moves_always_pass() {
        let g = l_corner();
        let next = resolve(&g, vec2(1.2, 1.2), vec2(1.8, 1.8));
        assert_eq!(next, vec2(1.8, 1.8));
    }
}
