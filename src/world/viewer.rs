//! Viewer (player) state: position, facing and camera plane.

use glam::Vec2;

/// View-point in fractional grid-cell units.
///
/// * `dir` is kept at unit length; rotation is a pure 2-D rotation, so the
///   magnitude can never drift to zero.
/// * `plane` is perpendicular to `dir`; `|plane| = tan(hfov/2)` controls
///   the horizontal field of view swept across screen columns.
#[derive(Clone, Copy, Debug)]
pub struct Viewer {
    pos: Vec2,
    dir: Vec2,
    plane: Vec2,
}

impl Viewer {
    /// Create a viewer at `pos` facing `dir` with horizontal FoV `hfov`
    /// (radians, typical 60–90°).
    pub fn new(pos: Vec2, dir: Vec2, hfov: f32) -> Self {
        debug_assert!(dir != Vec2::ZERO, "view direction must be nonzero");
        let dir = dir.normalize();
        Self {
            pos,
            dir,
            plane: dir.perp() * (hfov * 0.5).tan(),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn dir(&self) -> Vec2 {
        self.dir
    }

    #[inline]
    pub fn plane(&self) -> Vec2 {
        self.plane
    }

    /// Rotate the view by `delta` radians (positive = counter-clockwise in
    /// grid space).
    ///
    /// `dir` and `plane` rotate together from their *original* values —
    /// rotating only one desyncs the FoV sweep from the facing, and
    /// re-deriving a component from an already-updated one corrupts the
    /// rotation.  `Vec2::rotate` computes both output components from the
    /// unmutated input.
    pub fn rotate(&mut self, delta: f32) {
        let rot = Vec2::from_angle(delta);
        self.dir = rot.rotate(self.dir);
        self.plane = rot.rotate(self.plane);
    }

    /// Candidate position after moving by `delta`.  Pure; the collision
    /// gate decides whether [`apply_move`](Self::apply_move) follows.
    #[inline]
    pub fn propose_move(&self, delta: Vec2) -> Vec2 {
        self.pos + delta
    }

    /// Unconditional position update, called only with a gate-accepted
    /// candidate.
    #[inline]
    pub fn apply_move(&mut self, pos: Vec2) {
        self.pos = pos;
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
