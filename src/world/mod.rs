mod grid;
mod texture;
mod viewer;

pub mod maps;

pub use grid::{Grid, GridError};

pub use texture::{NO_TEXTURE, Texture, TextureBank, TextureError, TextureId};

pub use viewer::Viewer;
