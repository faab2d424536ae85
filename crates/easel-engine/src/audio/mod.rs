//! Sound effects and music.
//!
//! # Architecture
//!
//! - [`Mixer`] - owns the output backend, a fixed set of channels and the
//!   music stream
//! - [`Sound`] - a clip loaded into memory once, with its own volume
//! - [`Sfx`] - a named clip from the SFX directory with play helpers
//! - [`AudioBackend`] - output seam; [`NullBackend`] is silent,
//!   [`RecordingBackend`] logs calls for tests, `RodioBackend` (feature
//!   `rodio_backend`) plays through the default output device
//!
//! # Example
//!
//! ```ignore
//! let mut mixer = Mixer::open(&MixerConfig::default());
//! let mut jump = Sfx::new(&mixer, &assets, "jump.wav")?;
//! jump.play(&mut mixer, Loops::ONCE, 0.8)?;
//! ```

mod backend;
mod config;
mod mixer;
mod recording;
#[cfg(feature = "rodio_backend")]
mod rodio_backend;
mod sfx;
mod sound;

pub use backend::{AudioBackend, NullBackend};
pub use config::MixerConfig;
pub use mixer::Mixer;
pub use recording::{AudioEvent, AudioLog, RecordingBackend};
#[cfg(feature = "rodio_backend")]
pub use rodio_backend::RodioBackend;
pub use sfx::Sfx;
pub use sound::{Channel, Loops, Sound};
