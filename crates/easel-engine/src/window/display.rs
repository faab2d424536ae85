use anyhow::{anyhow, Context, Result};
use ouroboros::self_referencing;
use winit::dpi::PhysicalSize;
use winit::window::{Fullscreen, Icon, Window, WindowAttributes, WindowId};

use crate::app::{DisplayBackend, DisplayFlags, WindowConfig};
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::error::EngineError;
use crate::surface::Surface;

/// On-screen display: a winit window plus the wgpu surface bound to it.
#[self_referencing]
pub struct WindowDisplay {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl WindowDisplay {
    /// Binds a GPU surface to `window`.
    pub fn create(window: Window, init: GpuInit) -> Result<Self> {
        WindowDisplayTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, init)),
        }
        .try_build()
    }

    pub fn id(&self) -> WindowId {
        self.borrow_window().id()
    }

    pub fn request_redraw(&self) {
        self.borrow_window().request_redraw();
    }

    /// Follows a window resize reported by the platform.
    pub fn resize_surface(&mut self, size: PhysicalSize<u32>) {
        self.with_gpu_mut(|gpu| gpu.resize(size));
    }

    /// Re-reads the window's inner size, e.g. after a scale-factor change.
    pub fn sync_surface_size(&mut self) {
        self.with_mut(|f| f.gpu.resize(f.window.inner_size()));
    }
}

/// Attributes for the initial window of `config`.
pub(crate) fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    let flags = config.flags;
    let attrs = Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(PhysicalSize::new(config.width.max(1), config.height.max(1)))
        .with_resizable(flags.contains(DisplayFlags::RESIZABLE))
        .with_decorations(!flags.contains(DisplayFlags::NOFRAME))
        .with_visible(!flags.contains(DisplayFlags::HIDDEN));

    if flags.contains(DisplayFlags::FULLSCREEN) {
        attrs.with_fullscreen(Some(Fullscreen::Borderless(None)))
    } else {
        attrs
    }
}

impl DisplayBackend for WindowDisplay {
    fn set_mode(&mut self, width: u32, height: u32, flags: DisplayFlags) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDisplayMode { width, height }.into());
        }

        self.with_mut(|f| {
            let window = f.window;
            window.set_resizable(flags.contains(DisplayFlags::RESIZABLE));
            window.set_decorations(!flags.contains(DisplayFlags::NOFRAME));

            if flags.contains(DisplayFlags::FULLSCREEN) {
                window.set_fullscreen(Some(Fullscreen::Borderless(None)));
            } else {
                window.set_fullscreen(None);
                // `None` means the size arrives later as a Resized event.
                if let Some(size) = window.request_inner_size(PhysicalSize::new(width, height)) {
                    f.gpu.resize(size);
                }
            }

            window.set_visible(!flags.contains(DisplayFlags::HIDDEN));
        });

        Ok(())
    }

    fn set_icon(&mut self, icon: &Surface) -> Result<()> {
        let (w, h) = icon.size();
        let icon = Icon::from_rgba(icon.as_bytes().to_vec(), w, h).context("invalid window icon")?;
        self.borrow_window().set_window_icon(Some(icon));
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.borrow_window().set_cursor_visible(visible);
    }

    fn set_title(&mut self, title: &str) {
        self.borrow_window().set_title(title);
    }

    fn present(&mut self, frame: &Surface) -> Result<()> {
        self.with_mut(|f| {
            f.window.pre_present_notify();
            let Err(err) = f.gpu.present(frame) else {
                return Ok(());
            };

            let message = err.to_string();
            match f.gpu.handle_surface_error(err) {
                SurfaceErrorAction::Fatal => Err(anyhow!("fatal surface error: {message}")),
                action => {
                    log::debug!("frame skipped ({action:?}): {message}");
                    Ok(())
                }
            }
        })
    }
}
