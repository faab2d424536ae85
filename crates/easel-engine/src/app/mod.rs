//! Application window: size, flags, title, icon and the display surface.
//!
//! `Application` is backend-agnostic. The on-screen backend lives in
//! `window`; `HeadlessDisplay` keeps everything in memory.

mod application;
mod config;
mod display;

pub use application::Application;
pub use config::{DisplayFlags, WindowConfig};
pub use display::{DisplayBackend, HeadlessDisplay};
