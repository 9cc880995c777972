//! Pseudo-3D grid raycaster viewer.
//!
//! ```bash
//! cargo run --release -- --width 1280 --height 800
//! ```
//!
//! W/S move, A/D strafe, ←/→ turn, Shift runs.  Tab toggles the minimap
//! overlay, F toggles fisheye correction off and on (off reproduces the
//! classic bulge), T switches between textured and flat-shaded walls.

use clap::Parser;
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use std::time::{Duration, Instant};

use yawolf_rs::{
    engine::{Screen, WallSlice, sweep},
    renderer::{Renderer, Software},
    sim::{self, InputCmd},
    world::{TextureBank, Viewer, maps},
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Window width in pixels
    #[arg(long, default_value_t = 1280)]
    width: usize,

    /// Window height in pixels
    #[arg(long, default_value_t = 800)]
    height: usize,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 66.0)]
    fov: f32,

    /// Start with flat-shaded walls instead of textures
    #[arg(long)]
    flat: bool,

    /// Start with fisheye correction disabled
    #[arg(long)]
    fisheye: bool,

    /// Minimap overlay cell size in pixels
    #[arg(long, default_value_t = 6)]
    map_scale: usize,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let grid = maps::demo()?;
    let spawn = grid
        .spawn_point()
        .ok_or_else(|| anyhow::anyhow!("map has no spawn marker"))?;
    let mut viewer = Viewer::new(spawn, glam::vec2(0.0, -1.0), opts.fov.to_radians());

    let bank = TextureBank::procedural();
    let screen = Screen::new(opts.width, opts.height);
    let mut renderer = Software::default();
    let mut slices: Vec<WallSlice> = Vec::with_capacity(screen.w);

    let mut textured = !opts.flat;
    let mut correct_fisheye = !opts.fisheye;
    let mut show_map = false;

    let mut window = Window::new(
        "Yet Another Wolfenstein",
        screen.w,
        screen.h,
        WindowOptions::default(),
    )?;
    window.set_target_fps(60);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated render time
    let mut acc_frames = 0usize; // frames in the current window
    let mut last_print = Instant::now(); // when we printed last

    let mut last = Instant::now();
    while window.is_open() && !window.is_key_down(Key::Escape) {
        let t0 = Instant::now(); // ┌─ frame timer start
        let dt = last.elapsed().as_secs_f32().min(0.1);
        last = Instant::now();

        /* --------------- build one InputCmd per frame -------------------- */
        let mut cmd = InputCmd::default();

        if window.is_key_down(Key::Up) || window.is_key_down(Key::W) {
            cmd.forward += 1.0;
        }
        if window.is_key_down(Key::Down) || window.is_key_down(Key::S) {
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
        cmd.run = window.is_key_down(Key::LeftShift) || window.is_key_down(Key::RightShift);
        cmd.toggle_map = window.is_key_pressed(Key::Tab, KeyRepeat::No); // edge-trigger
        cmd.toggle_fisheye = window.is_key_pressed(Key::F, KeyRepeat::No);

        /* render settings are owned here, not by the sim */
        if cmd.toggle_map {
            show_map = !show_map;
        }
        if cmd.toggle_fisheye {
            correct_fisheye = !correct_fisheye;
        }
        if window.is_key_pressed(Key::T, KeyRepeat::No) {
            textured = !textured;
        }

        sim::update(&mut viewer, &grid, &cmd, dt);

        /* draw */
        sweep(&grid, &viewer, screen, correct_fisheye, &mut slices);

        renderer.begin_frame(screen.w, screen.h);
        let bank_ref = textured.then_some(&bank);
        for s in &slices {
            renderer.draw_slice(s, bank_ref);
        }
        if show_map {
            renderer.draw_minimap(&grid, &viewer, opts.map_scale);
        }
        let mut result = Ok(());
        renderer.end_frame(|fb, w, h| {
            // ─────────── accumulate & report every ~3 s ────────────────────
            acc_time += t0.elapsed();
            acc_frames += 1;
            result = window.update_with_buffer(fb, w, h);
        });
        result?;

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            let fps = 1000.0 / avg_ms;
            println!("avg render: {:.2} ms  ({:.1} FPS)", avg_ms, fps);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
