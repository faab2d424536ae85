use std::path::Path;
use std::sync::Arc;

use crate::assets::read_bytes;
use crate::error::EngineError;

/// Handle to one mixer channel.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Channel(pub(crate) usize);

impl Channel {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// How many times a clip repeats after its first play.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Loops {
    Forever,
    Extra(u32),
}

impl Loops {
    /// Play once, no repeats.
    pub const ONCE: Loops = Loops::Extra(0);

    /// Total number of plays, `None` when looping forever.
    #[inline]
    pub fn total_plays(self) -> Option<u32> {
        match self {
            Loops::Forever => None,
            Loops::Extra(n) => Some(n.saturating_add(1)),
        }
    }
}

impl Default for Loops {
    fn default() -> Self {
        Loops::ONCE
    }
}

/// Negative counts loop forever.
impl From<i32> for Loops {
    fn from(n: i32) -> Self {
        if n < 0 { Loops::Forever } else { Loops::Extra(n as u32) }
    }
}

/// Encoded audio clip held in memory with its playback volume.
#[derive(Debug, Clone)]
pub struct Sound {
    clip: Arc<[u8]>,
    volume: f32,
}

impl Sound {
    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self { clip: bytes.into(), volume: 1.0 }
    }

    pub fn load(path: &Path) -> Result<Self, EngineError> {
        Ok(Self::from_bytes(read_bytes(path)?))
    }

    pub fn clip(&self) -> &Arc<[u8]> {
        &self.clip
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Sets the volume used by later plays, clamped to `0.0..=1.0`.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = clamp_volume(volume);
    }
}

pub(crate) fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) }
}
