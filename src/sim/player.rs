//! Per-frame viewer update from a polled input command.

use crate::sim::{InputCmd, movement};
use crate::world::{Grid, Viewer};

pub const MOVE_SPEED: f32 = 3.0; // cells / second
pub const TURN_RATE: f32 = std::f32::consts::PI; // rad / second (180°/s)
pub const RUN_FACTOR: f32 = 1.6; // Shift held

/// Advance the viewer by one frame.
///
/// Rotation first, then translation through the collision gate; both are
/// scaled by `dt` so movement speed is frame-rate independent.  The
/// fisheye/map toggles are *not* handled here — they flip render settings,
/// which the window loop owns.
pub fn update(viewer: &mut Viewer, grid: &Grid, cmd: &InputCmd, dt: f32) {
    if cmd.turn != 0.0 {
        viewer.rotate(cmd.turn * TURN_RATE * dt);
    }

    if cmd.forward != 0.0 || cmd.strafe != 0.0 {
        let speed = if cmd.run {
            MOVE_SPEED * RUN_FACTOR
        } else {
            MOVE_SPEED
        };

        let fwd = viewer.dir();
        let right = fwd.perp();
        let wish = (fwd * cmd.forward - right * cmd.strafe).normalize_or_zero();

        let candidate = viewer.propose_move(wish * speed * dt);
        let next = movement::resolve(grid, viewer.pos(), candidate);
        viewer.apply_move(next);
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
