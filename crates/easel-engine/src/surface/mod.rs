//! CPU pixel buffers.
//!
//! Every image, rendered text line and the window contents are `Surface`s.
//! Drawing is a blit of one surface onto another at a `Rect`'s top-left
//! corner; presenting hands the display surface to the window backend.

mod buffer;

pub use buffer::{Surface, MAX_SURFACE_PIXELS};
