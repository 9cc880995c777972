/// One frame's worth of polled controls.
///
/// The window layer fills this once per frame; nothing in the crate reads
/// the keyboard directly.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputCmd {
    pub forward: f32,         // –1 … +1
    pub strafe: f32,          // –1 … +1  (left / right)
    pub turn: f32,            // –1 … +1  (right / left)
    pub run: bool,            // Shift
    pub toggle_fisheye: bool, // edge-trigger
    pub toggle_map: bool,     // edge-trigger
}
