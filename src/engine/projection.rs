//! Column projector: sweep a ray per screen column and turn each hit into
//! a vertical wall slice.

use glam::Vec2;

use crate::engine::raycast::{HitAxis, cast};
use crate::world::{Grid, Viewer};

/// Constants that depend on the *frame-buffer*, not on the map.
#[derive(Clone, Copy)]
pub struct Screen {
    pub w: usize,
    pub h: usize,
    pub half_w: f32, // pre-derived for speed
    pub half_h: f32, // pre-derived for speed
}

impl Screen {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            half_w: w as f32 * 0.5,
            half_h: h as f32 * 0.5,
        }
    }
}

/// One screen column's worth of wall, ready for a renderer.
#[derive(Clone, Copy, Debug)]
pub struct WallSlice {
    pub x: usize,
    /// First and last pixel row of the wall span, clamped to the screen.
    pub top: usize,
    pub bottom: usize,
    /// Unclamped apparent wall height in pixels (`screen.h / dist`); the
    /// textured draw needs it when the span is clipped.
    pub line_h: f32,
    /// Distance used for the projection (fisheye-corrected or not).
    pub dist: f32,
    pub value: u8,
    pub axis: HitAxis,
    pub wall_u: f32,
}

/// Cast one ray per screen column and collect the resulting slices.
///
/// `camera_x` runs over `[-1, 1]` across the screen; each column's ray is
/// `dir + plane * camera_x`.  With `correct_fisheye` the hit's
/// perpendicular parameter distance is used as-is; without it the distance
/// is stretched to the Euclidean length along the ray, which restores the
/// classic bulge.
///
/// `out` is reused between frames to keep the render loop allocation-free.
pub fn sweep(
    grid: &Grid,
    viewer: &Viewer,
    screen: Screen,
    correct_fisheye: bool,
    out: &mut Vec<WallSlice>,
) {
    out.clear();
    out.reserve(screen.w);
    let denom = (screen.w - 1).max(1) as f32;

    for x in 0..screen.w {
        let camera_x = 2.0 * x as f32 / denom - 1.0;
        let ray_dir = viewer.dir() + viewer.plane() * camera_x;
        let hit = cast(grid, viewer.pos(), ray_dir);

        let dist = if correct_fisheye {
            hit.distance
        } else {
            hit.distance * ray_dir.length()
        };
        // a wall face flush with the eye would project to infinity
        let dist = dist.max(1e-4);

        let line_h = screen.h as f32 / dist;
        let top = (screen.half_h - line_h * 0.5).max(0.0) as usize;
        let bottom = ((screen.half_h + line_h * 0.5) as usize).min(screen.h - 1);

        out.push(WallSlice {
            x,
            top,
            bottom,
            line_h,
            dist,
            value: hit.value,
            axis: hit.axis,
            wall_u: hit.wall_u,
        });
    }
}

/// Ray direction for one column, shared by the sweep and the minimap fan.
#[inline]
pub fn column_ray(viewer: &Viewer, camera_x: f32) -> Vec2 {
    viewer.dir() + viewer.plane() * camera_x
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;
    use std::f32::consts::FRAC_PI_2;

    /// Wide box so edge columns still hit the flat north wall.
    fn hall() -> Grid {
        let mut rows = vec![vec![1u8; 32]];
        for _ in 0..6 {
            let mut r = vec![0u8; 32];
            (r[0], r[31]) = (1, 1);
            rows.push(r);
        }
        rows.push(vec![1u8; 32]);
        Grid::new(&rows).unwrap()
    }

    fn north_facing(pos: Vec2) -> Viewer {
        Viewer::new(pos, vec2(0.0, -1.0), FRAC_PI_2)
    }

    #[test]
    fn corrected_distances_are_flat_across_a_flat_wall() {
        let grid = hall();
        let viewer = north_facing(vec2(16.0, 4.5));
        let screen = Screen::new(64, 48);
        let mut slices = Vec::new();

        sweep(&grid, &viewer, screen, true, &mut slices);
        let centre = slices[screen.w / 2].dist;
        for s in &slices {
            assert!(
                (s.dist - centre).abs() < 1e-4,
                "column {} corrected dist {} != {}",
                s.x,
                s.dist,
                centre
            );
        }
    }

    #[test]
    fn uncorrected_distances_bulge_at_the_edges() {
        let grid = hall();
        let viewer = north_facing(vec2(16.0, 4.5));
        let screen = Screen::new(64, 48);
        let mut slices = Vec::new();

        sweep(&grid, &viewer, screen, false, &mut slices);
        let centre = slices[screen.w / 2].dist;
        let edge = slices[0].dist;
        // 90° FoV: the corner ray is √2 times longer than the centre ray
        assert!(edge > centre * 1.3, "no fisheye bulge: {edge} vs {centre}");
    }

    #[test]
    fn apparent_height_is_inverse_to_distance() {
        let grid = hall();
        let screen = Screen::new(16, 200);
        let mut near = Vec::new();
        let mut far = Vec::new();

        // doubling the wall distance must exactly halve the line height
        sweep(&grid, &north_facing(vec2(16.0, 2.5)), screen, true, &mut near);
        sweep(&grid, &north_facing(vec2(16.0, 4.0)), screen, true, &mut far);
        let (hn, hf) = (near[8].line_h, far[8].line_h);
        assert!((hn / hf - 2.0).abs() < 1e-3, "heights {hn} vs {hf}");
    }

    #[test]
    fn spans_are_clamped_to_the_screen() {
        let grid = hall();
        // nose against the wall: line_h far exceeds the screen
        let viewer = north_facing(vec2(16.0, 1.05));
        let screen = Screen::new(8, 32);
        let mut slices = Vec::new();
        sweep(&grid, &viewer, screen, true, &mut slices);

        for s in &slices {
            assert!(s.bottom < screen.h);
            assert!(s.top <= s.bottom);
            assert!(s.line_h > screen.h as f32);
        }
    }

    #[test]
    fn camera_x_spans_the_full_plane() {
        let viewer = north_facing(vec2(2.0, 2.0));
        let left = column_ray(&viewer, -1.0);
        let right = column_ray(&viewer, 1.0);
        assert!((left - (viewer.dir() - viewer.plane())).length() < 1e-6);
        assert!((right - (viewer.dir() + viewer.plane())).length() < 1e-6);
    }
}
