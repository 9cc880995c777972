// Repository of wall textures, keyed by grid cell tag.
// The renderer interacts through `TextureId` only.

use std::collections::HashMap;

use crate::defs;
use crate::renderer::Rgba;

/// Runtime handle for a texture in this bank.
///
/// *Guaranteed* to remain stable for the lifetime of the bank.
pub type TextureId = u16;

/// `TextureId` whose pixels are the checkerboard fallback.
/// Always = 0 because `TextureBank::new()` inserts it first.
pub const NO_TEXTURE: TextureId = 0;

/// CPU-side storage: 32-bit **ARGB** (0xAARRGGBB) in row-major order,
/// indexed `pixels[v * w + u]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub name: String,
    pub w: usize,
    pub h: usize,
    pub pixels: Vec<Rgba>,
}

/// Convenience checkerboard 8×8 (dark/light grey).
impl Default for Texture {
    fn default() -> Self {
        const LIGHT: Rgba = 0xFF_A0A0A0;
        const DARK: Rgba = 0xFF_404040;
        let mut pix = vec![0; 8 * 8];
        for y in 0..8 {
            for x in 0..8 {
                pix[y * 8 + x] = if (x ^ y) & 1 == 0 { LIGHT } else { DARK };
            }
        }
        Texture {
            name: "CHECKER".to_string(),
            w: 8,
            h: 8,
            pixels: pix,
        }
    }
}

/// Things that can go wrong when using the bank.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextureError {
    /// Attempted to insert a second texture for an existing wall tag.
    #[error("wall value {0} already has a texture in this bank")]
    Duplicate(u8),

    /// Requested ID is outside `0 .. bank.len()`.
    #[error("texture id {0} out of range")]
    BadId(TextureId),
}

/// A cache of wall textures.
///
/// * Does **not** know about image files or the window system.
/// * Stores exactly one texture per wall tag.
/// * ID **0** is always the "missing" checkerboard.
pub struct TextureBank {
    by_value: HashMap<u8, TextureId>,
    data: Vec<Texture>,
}

impl TextureBank {
    // ---------------------------------------------------------------------
    // Constructors
    // ---------------------------------------------------------------------

    /// Create an empty bank whose id 0 is the *missing* fallback texture.
    pub fn new(missing_tex: Texture) -> Self {
        Self {
            by_value: HashMap::new(),
            data: vec![missing_tex],
        }
    }

    pub fn default_with_checker() -> Self {
        Self::new(Texture::default())
    }

    /// Bank with a generated 64×64 pattern for every wall variant in
    /// [`crate::defs::WALLS`].
    pub fn procedural() -> Self {
        let mut bank = Self::default_with_checker();
        for info in defs::WALLS {
            let tex = generate(info, 64, 64);
            // the defs table has unique values, so this cannot collide
            bank.insert(info.value, tex).unwrap();
        }
        bank
    }

    // ---------------------------------------------------------------------
    // Query helpers
    // ---------------------------------------------------------------------

    /// Number of textures stored (including the "missing" one).
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.len() == 1
    } // only checker

    /// Obtain the id for a wall tag.  Returns `None` if the tag is unknown.
    pub fn id(&self, value: u8) -> Option<TextureId> {
        self.by_value.get(&value).copied()
    }

    /// Fallback-safe query: unknown tags resolve to the checkerboard id.
    pub fn id_or_missing(&self, value: u8) -> TextureId {
        self.id(value).unwrap_or(NO_TEXTURE)
    }

    /// Borrow a texture by id, with bounds-checking.
    pub fn texture(&self, id: TextureId) -> Result<&Texture, TextureError> {
        self.data.get(id as usize).ok_or(TextureError::BadId(id))
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    /// Insert a texture for wall tag `value`.
    ///
    /// * Returns the newly assigned `TextureId`.
    /// * Fails if the tag already has one (`Duplicate`).
    pub fn insert(&mut self, value: u8, tex: Texture) -> Result<TextureId, TextureError> {
        if self.by_value.contains_key(&value) {
            return Err(TextureError::Duplicate(value));
        }
        let id = self.data.len() as TextureId;
        self.data.push(tex);
        self.by_value.insert(value, id);
        Ok(id)
    }
}

/*======================================================================*/
/*                     Procedural wall patterns                         */
/*======================================================================*/

/// Mix a colour towards black; `t = 0` black, `t = 1` the colour itself.
fn shade(c: Rgba, t: f32) -> Rgba {
    let r = ((c >> 16 & 0xFF) as f32 * t) as u32;
    let g = ((c >> 8 & 0xFF) as f32 * t) as u32;
    let b = ((c & 0xFF) as f32 * t) as u32;
    (c & 0xFF00_0000) | (r << 16) | (g << 8) | b
}

fn generate(info: &defs::WallInfo, w: usize, h: usize) -> Texture {
    let base = info.color;
    let mut pixels = vec![0; w * h];
    for v in 0..h {
        for u in 0..w {
            pixels[v * w + u] = match info.id {
                // running-bond brick courses with dark mortar lines
                "BRICK" => {
                    let course = v / 8;
                    let off = if course & 1 == 0 { 0 } else { 8 };
                    if v % 8 == 0 || (u + off) % 16 == 0 {
                        shade(base, 0.35)
                    } else {
                        base
                    }
                }
                // large blocks, bevelled at the seams
                "STONE" => {
                    if v % 16 == 0 || u % 16 == 0 {
                        shade(base, 0.5)
                    } else if v % 16 == 1 || u % 16 == 1 {
                        shade(base, 1.0)
                    } else {
                        shade(base, 0.85)
                    }
                }
                // vertical planks
                "WOOD" => {
                    if u % 11 == 0 {
                        shade(base, 0.4)
                    } else {
                        shade(base, 0.75 + 0.25 * ((u % 11) as f32 / 11.0))
                    }
                }
                // xor blotches
                _ => shade(base, 0.55 + 0.45 * ((u ^ v) & 31) as f32 / 31.0),
            };
        }
    }
    Texture {
        name: info.id.to_string(),
        w,
        h,
        pixels,
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
