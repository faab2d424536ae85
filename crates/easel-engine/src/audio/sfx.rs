use std::path::{Path, PathBuf};

use crate::assets::AssetPaths;
use crate::error::EngineError;

use super::mixer::Mixer;
use super::sound::{Channel, Loops, Sound};

/// Sound clip from the SFX directory.
///
/// The clip is read once at construction; every play reuses it.
pub struct Sfx {
    path: PathBuf,
    sound: Sound,
}

impl Sfx {
    pub fn new(mixer: &Mixer, assets: &AssetPaths, name: impl AsRef<Path>) -> Result<Self, EngineError> {
        Self::from_path(mixer, assets.sound(name))
    }

    pub fn from_path(mixer: &Mixer, path: impl Into<PathBuf>) -> Result<Self, EngineError> {
        let path = path.into();
        let sound = mixer.load_sound(&path)?;
        Ok(Self { path, sound })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sound(&self) -> &Sound {
        &self.sound
    }

    /// Streams this file as background music. Use `Loops::Forever` for the
    /// usual endless loop.
    pub fn load_music(&self, mixer: &mut Mixer, loops: Loops) -> Result<(), EngineError> {
        mixer.play_music(&self.path, loops)
    }

    /// Sets the clip volume, then plays it on the first idle channel.
    pub fn play(&mut self, mixer: &mut Mixer, loops: Loops, volume: f32) -> Result<Option<Channel>, EngineError> {
        self.sound.set_volume(volume);
        mixer.play(&self.sound, loops)
    }

    /// Sets the clip volume, then plays it on `channel`.
    pub fn play_through_channel(
        &mut self,
        mixer: &mut Mixer,
        channel: Channel,
        loops: Loops,
        volume: f32,
    ) -> Result<(), EngineError> {
        self.sound.set_volume(volume);
        mixer.play_on(channel, &self.sound, loops)
    }

    pub fn set_music_volume(&self, mixer: &mut Mixer, volume: f32) {
        mixer.set_music_volume(volume);
    }
}
