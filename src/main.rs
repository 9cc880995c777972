//! Minimal top-down map viewer.
//!
//! ```bash
//! cargo run --bin yawolf_rs
//! ```
//!
//! Drives the same grid, viewer and ray caster as the 3-D view, but draws
//! only the overhead picture: occupancy cells, the ray fan and the viewer
//! marker.  Handy for eyeballing map edits and collision behaviour.

use minifb::{Key, Window, WindowOptions};
use std::time::Instant;

use yawolf_rs::renderer::{Renderer, Software};
use yawolf_rs::sim::{self, InputCmd};
use yawolf_rs::world::{Viewer, maps};

const WIDTH: usize = 768;
const HEIGHT: usize = 768;

fn main() -> anyhow::Result<()> {
    let grid = maps::demo()?;
    let spawn = grid
        .spawn_point()
        .ok_or_else(|| anyhow::anyhow!("map has no spawn marker"))?;
    let mut viewer = Viewer::new(spawn, glam::vec2(0.0, -1.0), 66_f32.to_radians());

    let cell_px = (WIDTH / grid.width()).min(HEIGHT / grid.height());

    let mut renderer = Software::default();
    let mut window = Window::new("yawolf map view", WIDTH, HEIGHT, WindowOptions::default())?;
    window.set_target_fps(60);

    let mut last = Instant::now();
    while window.is_open() && !window.is_key_down(Key::Escape) {
        let dt = last.elapsed().as_secs_f32().min(0.1);
        last = Instant::now();

        let mut cmd = InputCmd::default();
        if window.is_key_down(Key::W) || window.is_key_down(Key::Up) {
            cmd.forward += 1.0;
        }
        if window.is_key_down(Key::S) || window.is_key_down(Key::Down) {
            cmd.forward -= 1.0;
        }
        if window.is_key_down(Key::A) {
            cmd.strafe -= 1.0;
        }
        if window.is_key_down(Key::D) {
            cmd.strafe += 1.0;
        }
        if window.is_key_down(Key::Left) {
            cmd.turn -= 1.0;
        }
        if window.is_key_down(Key::Right) {
            cmd.turn += 1.0;
        }
        sim::update(&mut viewer, &grid, &cmd, dt);

        renderer.begin_frame(WIDTH, HEIGHT);
        renderer.draw_minimap(&grid, &viewer, cell_px);
        let mut result = Ok(());
        renderer.end_frame(|fb, w, h| result = window.update_with_buffer(fb, w, h));
        result?;
    }
    Ok(())
}
