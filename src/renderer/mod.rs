//! Rendering abstraction layer.
//!
//! *The rest of the engine never touches a pixel buffer directly.*
//! The projector produces one [`WallSlice`] per screen column and hands the
//! list to a type that implements [`Renderer`].
//!
//! * You can plug multiple back-ends without changing game logic.
//! * A helper blanket-impl [`RendererExt`] adds `draw_frame` so call-sites
//!   stay short.

use crate::engine::WallSlice;
use crate::world::TextureBank;

/// Pixel format of the software frame-buffer (0xAARRGGBB).
pub type Rgba = u32;

/// Halve every colour channel, keeping alpha.
///
/// Walls hit on a horizontal grid line are drawn through this so the two
/// wall orientations read as differently lit.
#[inline]
pub fn darken(c: Rgba) -> Rgba {
    ((c >> 1) & 0x007F_7F7F) | (c & 0xFF00_0000)
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
/// Software callers typically forward it to their window-manager.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear
    /// it to the ceiling/floor colours.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Rasterise one vertical wall slice into the internal buffer.
    ///
    /// With `bank = Some(..)` the slice is textured; with `None` it is a
    /// solid span in the wall variant's base colour.
    fn draw_slice(&mut self, slice: &WallSlice, bank: Option<&TextureBank>);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    /// * Software caller passes `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F>(
        &mut self,
        width: usize,
        height: usize,
        slices: &[WallSlice],
        bank: Option<&TextureBank>,
        submit: F,
    ) where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height);
        for s in slices {
            self.draw_slice(s, bank);
        }
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

mod software;

pub use software::Software;
