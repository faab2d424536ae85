//! Contract between the runtime loop and the game built on top of it.

mod app;
mod ctx;

pub use app::{AppControl, Game};
pub use ctx::FrameCtx;
