//! Text rasterization.
//!
//! Lays a single line out with fontdue and paints the glyph coverage into a
//! `Surface`. No glyph atlas or cache is kept between calls.

mod raster;

pub use raster::{render_line, TextStyle, FONT_PX};
