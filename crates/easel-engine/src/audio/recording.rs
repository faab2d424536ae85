use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::EngineError;

use super::backend::AudioBackend;
use super::sound::{Channel, Loops, Sound};

/// One call observed by a [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum AudioEvent {
    Play { channel: Channel, volume: f32, loops: Loops, clip_len: usize },
    Music { loops: Loops, volume: f32, clip_len: usize },
    MusicVolume(f32),
}

/// Shared event log of a [`RecordingBackend`].
pub type AudioLog = Rc<RefCell<Vec<AudioEvent>>>;

/// Backend that plays nothing and records every call.
///
/// A channel stays busy from `play` until [`finish_all`](Self::finish_all)
/// is called on the shared state.
#[derive(Debug, Clone)]
pub struct RecordingBackend {
    log: AudioLog,
    busy: Rc<RefCell<Vec<bool>>>,
}

impl RecordingBackend {
    pub fn new(channels: usize) -> Self {
        Self {
            log: Rc::default(),
            busy: Rc::new(RefCell::new(vec![false; channels])),
        }
    }

    /// Handle to the event log; stays valid after the backend is boxed.
    pub fn log(&self) -> AudioLog {
        Rc::clone(&self.log)
    }

    /// Marks every channel idle, as if all clips had ended.
    pub fn finish_all(&self) {
        self.busy.borrow_mut().iter_mut().for_each(|b| *b = false);
    }

    /// Number of times clips were started on channels, counting repeats.
    ///
    /// `None` if any of them loops forever.
    pub fn total_plays(&self) -> Option<u32> {
        self.log
            .borrow()
            .iter()
            .filter_map(|e| match e {
                AudioEvent::Play { loops, .. } => Some(loops.total_plays()),
                _ => None,
            })
            .sum()
    }
}

impl AudioBackend for RecordingBackend {
    fn channel_count(&self) -> usize {
        self.busy.borrow().len()
    }

    fn is_busy(&self, channel: Channel) -> bool {
        self.busy.borrow().get(channel.index()).copied().unwrap_or(false)
    }

    fn play(&mut self, channel: Channel, sound: &Sound, loops: Loops) -> Result<(), EngineError> {
        if let Some(b) = self.busy.borrow_mut().get_mut(channel.index()) {
            *b = true;
        }
        self.log.borrow_mut().push(AudioEvent::Play {
            channel,
            volume: sound.volume(),
            loops,
            clip_len: sound.clip().len(),
        });
        Ok(())
    }

    fn play_music(&mut self, clip: Arc<[u8]>, loops: Loops, volume: f32) -> Result<(), EngineError> {
        self.log.borrow_mut().push(AudioEvent::Music { loops, volume, clip_len: clip.len() });
        Ok(())
    }

    fn set_music_volume(&mut self, volume: f32) {
        self.log.borrow_mut().push(AudioEvent::MusicVolume(volume));
    }
}
