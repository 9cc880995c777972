//! Built-in map layouts.
//!
//! Plain static data — there is no map file format.  Each layout goes
//! through [`Grid::new`], so a typo that opens the perimeter fails loudly
//! at start-up instead of hanging a ray mid-frame.

use super::{Grid, GridError};

/// 24×24 demo level: an open hall with pillar pairs, a vault of brick
/// columns and a broken gallery wall to the south.  Spawn marker in the
/// middle.
pub fn demo() -> Result<Grid, GridError> {
    #[rustfmt::skip]
    const DEMO: [[u8; 24]; 24] = [
        [1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1],
        [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
        [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,4,0,0,1],
        [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,2,0,2,0,1],
        [1,0,0,0,0,0,0,0,3,0,0,0,0,0,0,3,0,0,0,0,4,0,0,1],
        [1,0,0,0,0,0,0,0,0,2,0,0,0,0,2,0,0,0,0,0,0,0,0,1],
        [1,0,0,0,0,0,0,0,0,0,1,0,0,1,0,0,0,0,0,0,0,0,0,1],
        [1,0,0,0,0,0,0,0,0,0,0,1,1,0,0,0,0,0,0,0,0,0,0,1],
        [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
        [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
        [1,0,0,0,0,0,2,0,0,0,0,0,0,0,0,0,0,2,0,0,0,0,0,1],
        [1,0,0,0,0,0,2,0,0,0,0,0,0,0,0,0,0,2,0,0,0,0,0,1],
        [1,0,0,0,0,0,0,0,0,0,0,0,9,0,0,0,0,0,0,0,0,0,0,1],
        [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
        [1,0,0,0,0,0,0,0,0,2,4,4,4,4,2,0,0,0,0,0,0,0,0,1],
        [1,0,0,0,0,3,0,0,0,4,0,0,0,0,4,0,0,0,3,0,0,0,0,1],
        [1,0,0,0,0,0,3,0,0,4,0,0,0,0,4,0,0,3,0,0,0,0,0,1],
        [1,0,0,0,0,0,0,3,3,0,0,0,0,0,0,3,3,0,0,0,0,0,0,1],
        [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
        [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
        [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
        [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
        [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
        [1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1],
    ];
    Grid::new(&DEMO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    #[test]
    fn demo_map_is_valid() {
        let g = demo().unwrap();
        assert_eq!((g.width(), g.height()), (24, 24));
        assert_eq!(g.spawn_point(), Some(vec2(12.5, 12.5)));
    }
}
