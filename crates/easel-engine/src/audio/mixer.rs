use std::path::Path;

use log::{debug, warn};

use crate::assets::read_bytes;
use crate::error::EngineError;

use super::backend::{AudioBackend, NullBackend};
use super::config::MixerConfig;
use super::sound::{clamp_volume, Channel, Loops, Sound};

/// Audio mixer: a fixed set of channels plus one music stream.
pub struct Mixer {
    backend: Box<dyn AudioBackend>,
    config: MixerConfig,
    music_volume: f32,
}

impl Mixer {
    /// Opens the default output device.
    ///
    /// Falls back to a silent backend when real output is unavailable
    /// (feature `rodio_backend` off, or the device failed to open).
    pub fn open(config: &MixerConfig) -> Self {
        #[cfg(feature = "rodio_backend")]
        {
            match super::RodioBackend::new(config) {
                Ok(backend) => {
                    debug!(
                        "audio mixer opened ({} Hz, {}-bit, {} ch, {} voices)",
                        config.frequency, config.bits, config.channels, config.voices
                    );
                    return Self::with_backend(config.clone(), backend);
                }
                Err(e) => warn!("failed to open audio output: {e}. Using silent mixer."),
            }
        }

        #[cfg(not(feature = "rodio_backend"))]
        debug!("audio backend: silent (rodio_backend feature disabled)");

        Self::with_backend(config.clone(), NullBackend::new(config.voices))
    }

    pub fn with_backend(config: MixerConfig, backend: impl AudioBackend + 'static) -> Self {
        if backend.channel_count() == 0 {
            warn!("audio backend exposes no channels; sounds will never play");
        }
        Self {
            backend: Box::new(backend),
            config,
            music_volume: 1.0,
        }
    }

    pub fn config(&self) -> &MixerConfig {
        &self.config
    }

    pub fn channel_count(&self) -> usize {
        self.backend.channel_count()
    }

    /// Handle to channel `index`, if it exists.
    pub fn channel(&self, index: usize) -> Option<Channel> {
        (index < self.channel_count()).then_some(Channel(index))
    }

    pub fn is_busy(&self, channel: Channel) -> bool {
        self.backend.is_busy(channel)
    }

    /// First channel with nothing playing.
    pub fn find_idle_channel(&self) -> Option<Channel> {
        (0..self.channel_count())
            .map(Channel)
            .find(|&c| !self.backend.is_busy(c))
    }

    /// Loads a clip and checks the backend can decode it.
    pub fn load_sound(&self, path: &Path) -> Result<Sound, EngineError> {
        let sound = Sound::load(path)?;
        self.backend.check_clip(&sound)?;
        debug!("loaded sound {} ({} bytes)", path.display(), sound.clip().len());
        Ok(sound)
    }

    /// Plays `sound` on the first idle channel.
    ///
    /// Returns the channel used, or `None` if every channel is busy (the
    /// sound is then dropped).
    pub fn play(&mut self, sound: &Sound, loops: Loops) -> Result<Option<Channel>, EngineError> {
        let Some(channel) = self.find_idle_channel() else {
            debug!("all {} channels busy; sound skipped", self.channel_count());
            return Ok(None);
        };
        self.backend.play(channel, sound, loops)?;
        Ok(Some(channel))
    }

    /// Plays `sound` on `channel`, cutting off whatever it was playing.
    pub fn play_on(&mut self, channel: Channel, sound: &Sound, loops: Loops) -> Result<(), EngineError> {
        if channel.index() >= self.channel_count() {
            return Err(EngineError::Audio(format!(
                "channel {} out of range ({} channels)",
                channel.index(),
                self.channel_count()
            )));
        }
        self.backend.play(channel, sound, loops)
    }

    /// Loads `path` into the music stream and starts it.
    pub fn play_music(&mut self, path: &Path, loops: Loops) -> Result<(), EngineError> {
        let clip = read_bytes(path)?;
        debug!("music {} ({loops:?})", path.display());
        self.backend.play_music(clip.into(), loops, self.music_volume)
    }

    /// Music stream volume; independent of per-sound volumes.
    pub fn music_volume(&self) -> f32 {
        self.music_volume
    }

    pub fn set_music_volume(&mut self, volume: f32) {
        self.music_volume = clamp_volume(volume);
        self.backend.set_music_volume(self.music_volume);
    }
}
