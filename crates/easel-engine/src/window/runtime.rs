use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::WindowId;

use crate::app::{Application, WindowConfig};
use crate::assets::AssetPaths;
use crate::audio::{Mixer, MixerConfig};
use crate::core::{AppControl, FrameCtx, Game};
use crate::device::GpuInit;
use crate::subsystems::{init_subsystems, Subsystems};
use crate::time::FrameClock;

use super::display::{window_attributes, WindowDisplay};

/// Everything needed to start a game.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub window: WindowConfig,
    pub mixer: MixerConfig,
    pub assets: AssetPaths,
    pub gpu: GpuInit,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            mixer: MixerConfig::default(),
            assets: AssetPaths::from_env(),
            gpu: GpuInit::default(),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Initializes subsystems, opens the window and runs `game` until the
    /// window closes or the game asks to exit.
    ///
    /// Errors from `Game::start`/`Game::frame` stop the loop and are
    /// returned here.
    pub fn run<G>(config: RuntimeConfig, game: G) -> Result<()>
    where
        G: Game + 'static,
    {
        let Subsystems { event_loop, mixer } =
            init_subsystems(&config.mixer).context("failed to initialize subsystems")?;

        let mut state = RuntimeState::new(config, mixer, game);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct RuntimeState<G> {
    config: RuntimeConfig,
    mixer: Mixer,
    game: G,

    app: Option<Application<WindowDisplay>>,
    clock: FrameClock,

    failure: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<G: Game> RuntimeState<G> {
    fn new(config: RuntimeConfig, mixer: Mixer, game: G) -> Self {
        Self {
            config,
            mixer,
            game,
            app: None,
            clock: FrameClock::new(),
            failure: None,
            exit_requested: false,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        if self.failure.is_none() {
            self.failure = Some(err);
        }
        self.exit(event_loop);
    }

    fn exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = event_loop
            .create_window(window_attributes(&self.config.window))
            .context("failed to create window")?;
        let display = WindowDisplay::create(window, self.config.gpu.clone())
            .context("GPU initialization failed for window")?;
        let mut app = Application::new(display, &self.config.window, &self.config.assets)?;

        self.clock.reset();
        let mut ctx = FrameCtx {
            app: &mut app,
            mixer: &mut self.mixer,
            assets: &self.config.assets,
            time: self.clock.tick(),
        };
        self.game.start(&mut ctx).context("game start failed")?;

        app.display().request_redraw();
        self.app = Some(app);
        Ok(())
    }

    fn redraw(&mut self) -> Result<AppControl> {
        let Some(app) = self.app.as_mut() else {
            return Ok(AppControl::Continue);
        };

        let time = self.clock.tick();
        let control = {
            let mut ctx = FrameCtx {
                app: &mut *app,
                mixer: &mut self.mixer,
                assets: &self.config.assets,
                time,
            };
            self.game.frame(&mut ctx)?
        };

        app.present()?;
        Ok(control)
    }
}

impl<G: Game> ApplicationHandler for RuntimeState<G> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() || self.exit_requested {
            return;
        }

        if let Err(err) = self.open(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw; FIFO presentation paces the loop.
        if let Some(app) = &self.app {
            app.display().request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(app) = self.app.as_mut() else {
            return;
        };
        if app.display().id() != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.exit(event_loop),

            WindowEvent::Resized(size) => app.display_mut().resize_surface(size),

            WindowEvent::ScaleFactorChanged { .. } => app.display_mut().sync_surface_size(),

            WindowEvent::RedrawRequested => match self.redraw() {
                Ok(AppControl::Continue) => {}
                Ok(AppControl::Exit) => self.exit(event_loop),
                Err(err) => self.fail(event_loop, err),
            },

            _ => {}
        }
    }
}
