//! easel engine crate.
//!
//! Small building blocks for 2D games: a window whose contents are a CPU
//! pixel surface, images and text lines that redraw themselves from their
//! transform each frame, and sound effects/music on a channel mixer.

pub mod app;
pub mod assets;
pub mod audio;
pub mod coords;
pub mod core;
pub mod device;
pub mod error;
pub mod logging;
pub mod object;
pub mod subsystems;
pub mod surface;
pub mod text;
pub mod time;
pub mod transform;
pub mod window;

pub use app::{Application, DisplayBackend, DisplayFlags, HeadlessDisplay, WindowConfig};
pub use assets::AssetPaths;
pub use audio::{Channel, Loops, Mixer, MixerConfig, Sfx, Sound};
pub use coords::{Color, Rect, Vec2};
pub use error::EngineError;
pub use object::{GameObject, SourcePolicy, Text, Texture};
pub use subsystems::{init_subsystems, Subsystems};
pub use surface::Surface;
pub use text::TextStyle;
pub use transform::{Scale, Transform};
