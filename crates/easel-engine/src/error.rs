use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading assets or setting up engine subsystems.
#[derive(Debug, Error)]
pub enum EngineError {
    /// An asset file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An image file exists but could not be decoded.
    #[error("failed to decode image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A font file could not be parsed.
    #[error("failed to parse font {}: {message}", path.display())]
    Font { path: PathBuf, message: String },

    /// The audio backend rejected a clip or failed to play it.
    #[error("audio error: {0}")]
    Audio(String),

    /// A surface was scaled by a negative or non-finite factor.
    #[error("invalid scale factor ({x}, {y})")]
    InvalidScale { x: f32, y: f32 },

    /// Scaling would produce a surface too large to allocate.
    #[error("scaled surface {width}x{height} exceeds the pixel budget")]
    SurfaceTooLarge { width: u64, height: u64 },

    /// The display could not be set to the requested mode.
    #[error("invalid display mode {width}x{height}")]
    InvalidDisplayMode { width: u32, height: u32 },

    /// `init_subsystems` was called more than once in this process.
    #[error("engine subsystems are already initialized")]
    AlreadyInitialized,

    /// The platform event loop could not be created.
    #[error("failed to create the event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

impl EngineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
