use std::io::Cursor;
use std::iter::{self, Repeat, Take};
use std::sync::Arc;

use log::{debug, warn};
use rodio::cpal::traits::HostTrait;
use rodio::cpal::{SampleFormat, SampleRate, SupportedBufferSize, SupportedStreamConfig};
use rodio::source::FromIter;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sample, Sink, Source};

use crate::error::EngineError;

use super::backend::AudioBackend;
use super::config::MixerConfig;
use super::sound::{Channel, Loops, Sound};

/// Plays through the default output device.
///
/// Each mixer channel is one `Sink`; starting a sound on a channel drops
/// (and so stops) the sink that was there.
pub struct RodioBackend {
    /// Output stream (must be kept alive)
    _stream: OutputStream,
    handle: OutputStreamHandle,
    channels: Vec<Option<Sink>>,
    music: Option<Sink>,
}

impl RodioBackend {
    pub fn new(config: &MixerConfig) -> Result<Self, EngineError> {
        let (stream, handle) = open_stream(config)?;
        Ok(Self {
            _stream: stream,
            handle,
            channels: (0..config.voices).map(|_| None).collect(),
            music: None,
        })
    }

    fn sink(&self) -> Result<Sink, EngineError> {
        Sink::try_new(&self.handle).map_err(|e| EngineError::Audio(format!("failed to create sink: {e}")))
    }
}

/// Tries the requested sample rate/channel layout first, then the device default.
///
/// The buffer size in `MixerConfig` is informational; cpal picks its own.
fn open_stream(config: &MixerConfig) -> Result<(OutputStream, OutputStreamHandle), EngineError> {
    let requested = rodio::cpal::default_host().default_output_device().and_then(|device| {
        let format = if config.bits <= 16 { SampleFormat::I16 } else { SampleFormat::F32 };
        let stream_config = SupportedStreamConfig::new(
            config.channels,
            SampleRate(config.frequency),
            SupportedBufferSize::Unknown,
            format,
        );
        match OutputStream::try_from_device_config(&device, stream_config) {
            Ok(pair) => Some(pair),
            Err(e) => {
                warn!("requested audio format unavailable ({e}); using device default");
                None
            }
        }
    });

    match requested {
        Some(pair) => Ok(pair),
        None => OutputStream::try_default()
            .map_err(|e| EngineError::Audio(format!("failed to open output stream: {e}"))),
    }
}

fn decode(clip: &Arc<[u8]>) -> Result<Decoder<Cursor<Arc<[u8]>>>, EngineError> {
    Decoder::new(Cursor::new(Arc::clone(clip))).map_err(|e| EngineError::Audio(format!("failed to decode audio: {e}")))
}

/// Chains `plays` copies of `source` lazily; nothing is queued up front.
fn repeat_plays<S>(source: S, plays: u32) -> FromIter<Take<Repeat<S>>>
where
    S: Source + Clone,
    S::Item: Sample,
{
    rodio::source::from_iter(iter::repeat(source).take(plays as usize))
}

fn queue_clip(sink: &Sink, clip: &Arc<[u8]>, loops: Loops) -> Result<(), EngineError> {
    let source = decode(clip)?.buffered();
    match loops.total_plays() {
        None => sink.append(source.repeat_infinite()),
        Some(n) => sink.append(repeat_plays(source, n)),
    }
    Ok(())
}

impl AudioBackend for RodioBackend {
    fn channel_count(&self) -> usize {
        self.channels.len()
    }

    fn is_busy(&self, channel: Channel) -> bool {
        self.channels
            .get(channel.index())
            .and_then(Option::as_ref)
            .is_some_and(|s| !s.empty())
    }

    fn check_clip(&self, sound: &Sound) -> Result<(), EngineError> {
        decode(sound.clip()).map(|_| ())
    }

    fn play(&mut self, channel: Channel, sound: &Sound, loops: Loops) -> Result<(), EngineError> {
        let sink = self.sink()?;
        sink.set_volume(sound.volume());
        queue_clip(&sink, sound.clip(), loops)?;

        if let Some(slot) = self.channels.get_mut(channel.index()) {
            *slot = Some(sink);
        }
        Ok(())
    }

    fn play_music(&mut self, clip: Arc<[u8]>, loops: Loops, volume: f32) -> Result<(), EngineError> {
        let sink = self.sink()?;
        sink.set_volume(volume);
        queue_clip(&sink, &clip, loops)?;

        if let Some(old) = self.music.replace(sink) {
            old.stop();
        }
        debug!("music stream started ({loops:?})");
        Ok(())
    }

    fn set_music_volume(&mut self, volume: f32) {
        if let Some(sink) = &self.music {
            sink.set_volume(volume);
        }
    }
}
