//! Immutable 2-D occupancy grid.
//!
//! Coordinate convention, fixed here and nowhere else: row 0 is the north
//! edge, `y` grows southward, `x` grows eastward.  Cell `(x, y)` covers the
//! world square `[x, x+1) × [y, y+1)`, so a position in fractional cell
//! units floors to its cell index.  No consumer flips rows.

use glam::{Vec2, vec2};
use thiserror::Error;

use crate::defs::SPAWN_MARKER;

/// Errors that can be encountered while building a grid.
///
/// All of these are fatal configuration errors: the ray caster's
/// termination guarantee rests on the checks below, so there is no recovery
/// path past construction.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Anything smaller than 3×3 has no interior to stand in.
    #[error("grid must be at least 3x3 cells, got {cols}x{rows}")]
    TooSmall { cols: usize, rows: usize },

    /// Rows of unequal length.
    #[error("grid row {row} has {len} cells, expected {expected}")]
    Ragged {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A passable cell on the border would let rays escape.
    #[error("grid perimeter must be solid, cell ({x}, {y}) is open")]
    OpenPerimeter { x: usize, y: usize },

    /// More than one spawn marker.
    #[error("grid has multiple spawn markers, at ({x0}, {y0}) and ({x1}, {y1})")]
    DuplicateSpawn {
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
    },
}

/// Row-major occupancy grid, read-only after construction.
///
/// Cell values: `0` passable, [`SPAWN_MARKER`] passable (initial viewer
/// placement), anything else a wall variant keyed to [`crate::defs`].
#[derive(Debug)]
pub struct Grid {
    cells: Vec<u8>,
    w: usize,
    h: usize,
    spawn: Option<(usize, usize)>,
}

impl Grid {
    /// Build and validate a grid from row slices (row 0 = north edge).
    pub fn new(rows: &[impl AsRef<[u8]>]) -> Result<Self, GridError> {
        let h = rows.len();
        let w = rows.first().map_or(0, |r| r.as_ref().len());
        if w < 3 || h < 3 {
            return Err(GridError::TooSmall { cols: w, rows: h });
        }

        let mut cells = Vec::with_capacity(w * h);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != w {
                return Err(GridError::Ragged {
                    row: y,
                    len: row.len(),
                    expected: w,
                });
            }
            cells.extend_from_slice(row);
        }

        let grid = Self {
            cells,
            w,
            h,
            spawn: None,
        };

        /* perimeter must be solid so every ray terminates */
        for x in 0..w {
            for y in [0, h - 1] {
                if !grid.is_solid(x, y) {
                    return Err(GridError::OpenPerimeter { x, y });
                }
            }
        }
        for y in 0..h {
            for x in [0, w - 1] {
                if !grid.is_solid(x, y) {
                    return Err(GridError::OpenPerimeter { x, y });
                }
            }
        }

        /* at most one spawn marker */
        let mut spawn = None;
        for y in 0..h {
            for x in 0..w {
                if grid.value_at(x, y) == SPAWN_MARKER {
                    match spawn {
                        None => spawn = Some((x, y)),
                        Some((x0, y0)) => {
                            return Err(GridError::DuplicateSpawn { x0, y0, x1: x, y1: y });
                        }
                    }
                }
            }
        }

        Ok(Self { spawn, ..grid })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        (0..self.w as i32).contains(&x) && (0..self.h as i32).contains(&y)
    }

    /// Raw cell tag at `(x, y)`.  Panics out of bounds, like slice indexing.
    #[inline]
    pub fn value_at(&self, x: usize, y: usize) -> u8 {
        self.cells[y * self.w + x]
    }

    /// True iff the cell blocks rays and movement.
    ///
    /// The spawn marker stays in the grid for its whole lifetime and counts
    /// as open here.
    #[inline]
    pub fn is_solid(&self, x: usize, y: usize) -> bool {
        let v = self.value_at(x, y);
        v != 0 && v != SPAWN_MARKER
    }

    /// Centre of the spawn-marked cell, if the map has one.
    pub fn spawn_point(&self) -> Option<Vec2> {
        self.spawn
            .map(|(x, y)| vec2(x as f32 + 0.5, y as f32 + 0.5))
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_box_grid() {
        let g = Grid::new(&[[1, 1, 1], [1, 0, 1], [1, 1, 1]]).unwrap();
        assert_eq!((g.width(), g.height()), (3, 3));
        assert!(g.is_solid(0, 0));
        assert!(!g.is_solid(1, 1));
        assert!(g.spawn_point().is_none());
    }

    #[test]
    fn open_perimeter_rejected() {
        let err = Grid::new(&[[1, 1, 1], [1, 0, 0], [1, 1, 1]]).unwrap_err();
        assert_eq!(err, GridError::OpenPerimeter { x: 2, y: 1 });
    }

    #[test]
    fn spawn_marker_on_perimeter_is_open() {
        // A marker is passable, so it cannot seal the border either.
        let err = Grid::new(&[[1, 9, 1], [1, 0, 1], [1, 1, 1]]).unwrap_err();
        assert_eq!(err, GridError::OpenPerimeter { x: 1, y: 0 });
    }

    #[test]
    fn too_small_rejected() {
        let err = Grid::new(&[[1, 1], [1, 1]]).unwrap_err();
        assert_eq!(err, GridError::TooSmall { cols: 2, rows: 2 });
    }

    #[test]
    fn ragged_rows_rejected() {
        let rows: Vec<Vec<u8>> = vec![vec![1, 1, 1], vec![1, 0], vec![1, 1, 1]];
        let err = Grid::new(&rows).unwrap_err();
        assert_eq!(
            err,
            GridError::Ragged {
                row: 1,
                len: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn spawn_point_is_cell_centre() {
        let g = Grid::new(&[[1, 1, 1, 1], [1, 0, 9, 1], [1, 1, 1, 1]]).unwrap();
        assert_eq!(g.spawn_point(), Some(vec2(2.5, 1.5)));
        // the marker itself stays passable
        assert!(!g.is_solid(2, 1));
    }

    #[test]
    fn duplicate_spawn_rejected() {
        let err = Grid::new(&[[1, 1, 1, 1], [1, 9, 9, 1], [1, 1, 1, 1]]).unwrap_err();
        assert_eq!(
            err,
            GridError::DuplicateSpawn {
                x0: 1,
                y0: 1,
                x1: 2,
                y1: 1
            }
        );
    }
}
