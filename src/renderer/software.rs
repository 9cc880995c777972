//! ---------------------------------------------------------------------------
//! Classic software (CPU) column renderer
//!
//! * Fills an internal `Vec<u32>` scratch buffer in **0xAARRGGBB** format.
//! * One [`WallSlice`] per screen column; columns never overlap, so there
//!   is no depth test of any kind.
//! * Also hosts the minimap overlay, which is a plain *consumer* of the
//!   ray caster's output rather than its own traversal loop.
//! ---------------------------------------------------------------------------

use glam::Vec2;

use crate::{
    defs,
    engine::{HitAxis, WallSlice, cast, column_ray},
    renderer::{Renderer, Rgba, darken},
    world::{Grid, NO_TEXTURE, TextureBank, Viewer},
};

const CEILING: Rgba = 0xFF_303030;
const FLOOR: Rgba = 0xFF_606060;
const MAP_OPEN: Rgba = 0xFF_101010;
const MAP_RAY: Rgba = 0xFF_F2CF55;
const MAP_VIEWER: Rgba = 0xFF_64B4FF;
/// Wall tags missing from the defs table show up loudly.
const UNKNOWN_WALL: Rgba = 0xFF_FF00FF;

/// Number of rays in the minimap fan.  Enough to read the FoV shape
/// without redrawing one line per screen column.
const MAP_FAN: usize = 48;

/// Wolfenstein-style column renderer.
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Default for Software {
    fn default() -> Self {
        Self {
            scratch: Vec::new(),
            width: 0,
            height: 0,
        }
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }

        /* two-tone clear: ceiling above the horizon, floor below */
        let horizon = h / 2 * w;
        self.scratch[..horizon].fill(CEILING);
        self.scratch[horizon..].fill(FLOOR);
    }

    fn draw_slice(&mut self, slice: &WallSlice, bank: Option<&TextureBank>) {
        match bank {
            Some(bank) => self.draw_textured(slice, bank),
            None => self.draw_solid(slice),
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

/*──────────────────────── column rendering ───────────────────────────*/

impl Software {
    fn draw_solid(&mut self, slice: &WallSlice) {
        let base = defs::by_value(slice.value)
            .map(|w| w.color)
            .unwrap_or(UNKNOWN_WALL);
        let color = match slice.axis {
            HitAxis::X => base,
            HitAxis::Y => darken(base),
        };
        for y in slice.top..=slice.bottom {
            self.scratch[y * self.width + slice.x] = color;
        }
    }

    fn draw_textured(&mut self, slice: &WallSlice, bank: &TextureBank) {
        let tex = bank
            .texture(bank.id_or_missing(slice.value))
            .unwrap_or_else(|_| bank.texture(NO_TEXTURE).unwrap());

        let tex_x = ((slice.wall_u * tex.w as f32) as usize).min(tex.w - 1);

        /* linear scan-line stepping: screen rows map to texture rows at a
        fixed increment, offset for the part clipped off the top */
        let step = tex.h as f32 / slice.line_h;
        let mut tex_pos =
            (slice.top as f32 - self.height as f32 * 0.5 + slice.line_h * 0.5) * step;

        for y in slice.top..=slice.bottom {
            let tex_y = (tex_pos as usize).min(tex.h - 1);
            tex_pos += step;

            let mut c = tex.pixels[tex_y * tex.w + tex_x];
            if slice.axis == HitAxis::Y {
                c = darken(c);
            }
            self.scratch[y * self.width + slice.x] = c;
        }
    }
}

/*──────────────────────── minimap overlay ────────────────────────────*/

impl Software {
    /// Draw the top-down overlay into the current frame: occupancy cells at
    /// `cell_px` pixels each, a fan of [`MAP_FAN`] rays clipped at their
    /// hit points and the viewer marker.
    pub fn draw_minimap(&mut self, grid: &Grid, viewer: &Viewer, cell_px: usize) {
        let cell_px = cell_px.max(1);

        /* cells, with a 1-px seam so the grid reads as a grid */
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let color = if grid.is_solid(x, y) {
                    defs::by_value(grid.value_at(x, y))
                        .map(|w| w.color)
                        .unwrap_or(UNKNOWN_WALL)
                } else {
                    MAP_OPEN
                };
                self.fill_rect(x * cell_px, y * cell_px, cell_px - 1, cell_px - 1, color);
            }
        }

        /* ray fan: one cast per fan ray, line from viewer to hit point */
        let scale = cell_px as f32;
        let origin = viewer.pos();
        for i in 0..MAP_FAN {
            let camera_x = 2.0 * i as f32 / (MAP_FAN - 1) as f32 - 1.0;
            let ray = column_ray(viewer, camera_x);
            let hit = cast(grid, origin, ray);
            let end = origin + ray * hit.distance;
            self.draw_line(
                (origin.x * scale) as i32,
                (origin.y * scale) as i32,
                (end.x * scale) as i32,
                (end.y * scale) as i32,
                MAP_RAY,
            );
        }

        /* viewer marker */
        let m = marker_px(origin, scale);
        self.fill_rect(m.0, m.1, 3, 3, MAP_VIEWER);
    }

    fn fill_rect(&mut self, x0: usize, y0: usize, w: usize, h: usize, color: Rgba) {
        let x0 = x0.min(self.width);
        let x1 = (x0 + w).min(self.width);
        let y1 = (y0 + h).min(self.height);
        for y in y0.min(self.height)..y1 {
            self.scratch[y * self.width + x0..y * self.width + x1].fill(color);
        }
    }

    /// Integer Bresenham line-drawing algorithm.
    fn draw_line(&mut self, mut x0: i32, mut y0: i32, x1: i32, y1: i32, color: Rgba) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            if (0..self.width as i32).contains(&x0) && (0..self.height as i32).contains(&y0) {
                self.scratch[y0 as usize * self.width + x0 as usize] = color;
            }
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                if x0 == x1 {
                    break;
                }
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                if y0 == y1 {
                    break;
                }
                err += dx;
                y0 += sy;
            }
        }
    }
}

/// Top-left pixel of the 3×3 viewer marker, clamped into the map area.
fn marker_px(pos: Vec2, scale: f32) -> (usize, usize) {
    let x = (pos.x * scale) as i32 - 1;
    let y = (pos.y * scale) as i32 - 1;
    (x.max(0) as usize, y.max(0) as usize)
}

/*──────────────────────────────── Tests ───────────────────────────────*/
