use std::sync::Arc;

use crate::error::EngineError;

use super::sound::{Channel, Loops, Sound};

/// Audio output used by [`Mixer`](super::Mixer).
///
/// Channel bookkeeping (which channel a sound lands on) lives in the mixer;
/// backends only play what they are told to.
pub trait AudioBackend {
    /// Number of channels this backend exposes.
    fn channel_count(&self) -> usize;

    /// Whether `channel` is still playing something.
    fn is_busy(&self, channel: Channel) -> bool;

    /// Rejects clips the backend cannot decode.
    fn check_clip(&self, sound: &Sound) -> Result<(), EngineError> {
        let _ = sound;
        Ok(())
    }

    /// Plays `sound` on `channel`, replacing whatever was playing there.
    fn play(&mut self, channel: Channel, sound: &Sound, loops: Loops) -> Result<(), EngineError>;

    /// Replaces the music stream with `clip`.
    fn play_music(&mut self, clip: Arc<[u8]>, loops: Loops, volume: f32) -> Result<(), EngineError>;

    fn set_music_volume(&mut self, volume: f32);
}

/// Silent backend. Accepts everything, never busy.
#[derive(Debug, Clone)]
pub struct NullBackend {
    channels: usize,
}

impl NullBackend {
    pub fn new(channels: usize) -> Self {
        Self { channels }
    }
}

impl AudioBackend for NullBackend {
    fn channel_count(&self) -> usize {
        self.channels
    }

    fn is_busy(&self, _channel: Channel) -> bool {
        false
    }

    fn play(&mut self, _channel: Channel, _sound: &Sound, _loops: Loops) -> Result<(), EngineError> {
        Ok(())
    }

    fn play_music(&mut self, _clip: Arc<[u8]>, _loops: Loops, _volume: f32) -> Result<(), EngineError> {
        Ok(())
    }

    fn set_music_volume(&mut self, _volume: f32) {}
}
