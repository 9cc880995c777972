mod input;
mod player;

pub mod movement;

pub use input::InputCmd;
pub use player::{MOVE_SPEED, RUN_FACTOR, TURN_RATE, update};
