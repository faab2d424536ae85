//! Window + runtime loop.
//!
//! Owns the `winit` event loop and window, presents the application's
//! display surface through the GPU layer, and drives a [`Game`](crate::core::Game).

mod display;
mod runtime;

pub use display::WindowDisplay;
pub use runtime::{Runtime, RuntimeConfig};
