//! Static wall-variant definitions.
//!
//! Every nonzero cell tag in a grid (spawn marker aside) indexes into this
//! table; the renderer pulls the base colour from here and the texture bank
//! keys its procedural patterns off the same values.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::renderer::Rgba;

/// Grid value reserved for the viewer spawn cell.
///
/// Logically passable: consulted once at start-up to place the viewer, then
/// treated exactly like an empty cell by collision and ray casting.
pub const SPAWN_MARKER: u8 = 9;

/// One wall variant: the tag stored in grid cells plus its render data.
#[derive(Debug, Clone, Copy)]
pub struct WallInfo {
    pub value: u8,
    pub id: &'static str,
    /// Base colour for faces hit on a vertical grid line; horizontal-line
    /// faces get the darkened version.
    pub color: Rgba,
}

pub static WALLS: &[WallInfo] = &[
    WallInfo {
        value: 1,
        id: "STONE",
        color: 0xFF_C8C8C8,
    },
    WallInfo {
        value: 2,
        id: "BRICK",
        color: 0xFF_C83232,
    },
    WallInfo {
        value: 3,
        id: "MOSS",
        color: 0xFF_3CA05A,
    },
    WallInfo {
        value: 4,
        id: "WOOD",
        color: 0xFF_8C5A2D,
    },
];

static BY_VALUE: Lazy<HashMap<u8, &'static WallInfo>> =
    Lazy::new(|| WALLS.iter().map(|info| (info.value, info)).collect());

/// Look up a wall variant by its grid tag.
pub fn by_value(value: u8) -> Option<&'static WallInfo> {
    BY_VALUE.get(&value).copied()
}
