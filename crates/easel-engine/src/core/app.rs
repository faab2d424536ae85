use anyhow::Result;

use super::ctx::FrameCtx;

/// Control directive returned by game callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// A game driven by [`Runtime`](crate::window::Runtime).
pub trait Game {
    /// Called once after the window and application exist.
    ///
    /// Load textures, text and sounds here.
    fn start(&mut self, ctx: &mut FrameCtx<'_>) -> Result<()>;

    /// Called once per redraw. Draw onto `ctx.app.screen_mut()`; the runtime
    /// presents it afterwards.
    fn frame(&mut self, ctx: &mut FrameCtx<'_>) -> Result<AppControl>;
}
