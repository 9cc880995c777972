//! Yet Another Wolfenstein in Rust.
//!
//! A 2-D grid raycaster: the world is a flat occupancy grid, the view is a
//! fan of rays swept across a camera plane, and every screen column is one
//! vertical wall slice.
//!
//! The crate is split the same way a frame is:
//! * [`world`] – the immutable map, the viewer and the texture bank;
//! * [`engine`] – ray casting and column projection (pure functions);
//! * [`sim`] – per-frame viewer update gated by the collision rules;
//! * [`renderer`] – turns column slices into pixels.

pub mod defs;
pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;
