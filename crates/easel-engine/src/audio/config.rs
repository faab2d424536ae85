/// Output format requested when the mixer is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixerConfig {
    /// Sample rate in Hz.
    pub frequency: u32,
    /// Bits per sample.
    pub bits: u16,
    /// Output channels (2 = stereo).
    pub channels: u16,
    /// Buffer size in samples.
    pub buffer: u32,
    /// Number of mixer channels sounds can play on at once.
    pub voices: usize,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            frequency: 44_100,
            bits: 16,
            channels: 2,
            buffer: 4096,
            voices: 8,
        }
    }
}
