//! One-time process setup: the platform event loop and the audio mixer.

use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;
use winit::event_loop::EventLoop;

use crate::audio::{Mixer, MixerConfig};
use crate::error::EngineError;

/// Process-wide subsystems created by [`init_subsystems`].
pub struct Subsystems {
    pub event_loop: EventLoop<()>,
    pub mixer: Mixer,
}

/// Set once the first caller has claimed initialization.
pub(crate) struct InitGuard {
    claimed: AtomicBool,
}

impl InitGuard {
    pub(crate) const fn new() -> Self {
        Self { claimed: AtomicBool::new(false) }
    }

    /// Succeeds for exactly one caller over the guard's lifetime.
    pub(crate) fn claim(&self) -> Result<(), EngineError> {
        self.claimed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(|_| EngineError::AlreadyInitialized)
    }
}

static SUBSYSTEMS: InitGuard = InitGuard::new();

/// Creates the event loop and opens the mixer.
///
/// May be called once per process; later calls return
/// [`EngineError::AlreadyInitialized`]. Must run on the main thread.
pub fn init_subsystems(mixer: &MixerConfig) -> Result<Subsystems, EngineError> {
    SUBSYSTEMS.claim()?;

    let event_loop = EventLoop::new()?;
    let mixer = Mixer::open(mixer);
    debug!("subsystems initialized");

    Ok(Subsystems { event_loop, mixer })
}
