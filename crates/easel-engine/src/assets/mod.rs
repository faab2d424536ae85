//! Asset directory layout and file loaders.
//!
//! Assets live under a single root (default `Assets/`, relative to the
//! working directory) with fixed sub-directories per kind:
//! - `Images/` for textures and the window icon
//! - `Fonts/` for TrueType/OpenType fonts
//! - `SFX/` for sound clips and music

mod load;
mod paths;

pub use load::{load_font, load_surface, read_bytes};
pub use paths::{AssetKind, AssetPaths, ASSETS_ENV};
