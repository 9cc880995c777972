mod projection;
mod raycast;

pub use projection::{Screen, WallSlice, column_ray, sweep};
pub use raycast::{Hit, HitAxis, cast};
