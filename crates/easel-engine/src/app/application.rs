use anyhow::{Context, Result};
use log::debug;

use crate::assets::{load_surface, AssetPaths};
use crate::surface::Surface;

use super::config::{DisplayFlags, WindowConfig};
use super::display::DisplayBackend;

/// The application window and the surface drawn into it each frame.
///
/// `width`, `height` and `flags` may be changed freely; they take effect on
/// the next [`refresh`](Self::refresh).
pub struct Application<D: DisplayBackend> {
    pub width: u32,
    pub height: u32,
    pub flags: DisplayFlags,

    title: String,
    cursor_visible: bool,
    icon: Surface,

    screen: Surface,
    display: D,
}

impl<D: DisplayBackend> Application<D> {
    /// Loads the icon, sets the display mode, then applies icon, cursor
    /// visibility and title.
    pub fn new(display: D, config: &WindowConfig, assets: &AssetPaths) -> Result<Self> {
        let icon_path = assets.image(&config.icon);
        let icon = load_surface(&icon_path, true)
            .with_context(|| format!("failed to load window icon {}", icon_path.display()))?;

        let mut app = Self {
            width: config.width,
            height: config.height,
            flags: config.flags,
            title: config.title.clone(),
            cursor_visible: config.show_cursor,
            icon,
            screen: Surface::new(0, 0),
            display,
        };

        app.refresh().context("failed to create display surface")?;
        app.display.set_icon(&app.icon)?;
        app.display.set_cursor_visible(app.cursor_visible);
        app.display.set_title(&app.title);

        Ok(app)
    }

    /// Recreates the display surface from the current `width`, `height`
    /// and `flags`.
    pub fn refresh(&mut self) -> Result<()> {
        self.display.set_mode(self.width, self.height, self.flags)?;
        self.screen = Surface::new(self.width, self.height);
        debug!("display mode {}x{} {:?}", self.width, self.height, self.flags);
        Ok(())
    }

    /// Surface shown by the next [`present`](Self::present).
    pub fn screen(&self) -> &Surface {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Surface {
        &mut self.screen
    }

    pub fn present(&mut self) -> Result<()> {
        self.display.present(&self.screen)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.display.set_title(&self.title);
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
        self.display.set_cursor_visible(visible);
    }

    pub fn icon(&self) -> &Surface {
        &self.icon
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}
