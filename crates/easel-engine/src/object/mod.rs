//! Drawable objects.
//!
//! A `GameObject` owns a transform, a surface and the rect that surface is
//! placed at. `draw` always recomputes both from the current transform and
//! content before blitting, so a moved or rescaled object is never drawn
//! from stale pixels. The price is a reload from disk on every draw unless
//! `SourcePolicy::KeepDecoded` is chosen.

mod text;
mod texture;

pub use text::Text;
pub use texture::Texture;

use crate::coords::Rect;
use crate::error::EngineError;
use crate::surface::Surface;
use crate::transform::Transform;

/// Whether an object re-reads its source file on every `reset_rect`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SourcePolicy {
    /// Reload and decode from disk each time. Picks up file changes.
    #[default]
    Reload,
    /// Decode once and keep the result; only scaling is redone.
    KeepDecoded,
}

/// Something that can be drawn onto a surface.
pub trait GameObject {
    /// Recomputes `surface()` and `rect()` from the current transform/content.
    fn reset_rect(&mut self) -> Result<(), EngineError>;

    fn surface(&self) -> &Surface;

    fn rect(&self) -> Rect;

    fn transform(&self) -> &Transform;

    fn transform_mut(&mut self) -> &mut Transform;

    /// Refreshes the object, then blits it onto `target` at `rect()`.
    fn draw(&mut self, target: &mut Surface) -> Result<(), EngineError> {
        self.reset_rect()?;
        target.blit(self.surface(), self.rect());
        Ok(())
    }
}
