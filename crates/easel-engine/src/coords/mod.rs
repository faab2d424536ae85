//! Coordinate and geometry types shared by surfaces and game objects.
//!
//! Pixel space:
//! - Origin top-left
//! - +X right, +Y down
//!
//! `Vec2` carries float positions/scales; `Rect` is the integer box a
//! surface is blitted at.

mod color;
mod rect;
mod vec2;

pub use color::Color;
pub use rect::Rect;
pub use vec2::Vec2;
