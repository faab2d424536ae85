use anyhow::Result;

use crate::error::EngineError;
use crate::surface::Surface;

use super::config::DisplayFlags;

/// Window-system side of an [`Application`](super::Application).
pub trait DisplayBackend {
    /// Applies a new size/flags combination.
    fn set_mode(&mut self, width: u32, height: u32, flags: DisplayFlags) -> Result<()>;

    fn set_icon(&mut self, icon: &Surface) -> Result<()>;

    fn set_cursor_visible(&mut self, visible: bool);

    fn set_title(&mut self, title: &str);

    /// Shows `frame` on screen.
    fn present(&mut self, frame: &Surface) -> Result<()>;
}

/// Display with no window; remembers what it was asked to do.
#[derive(Debug, Clone, Default)]
pub struct HeadlessDisplay {
    pub mode: Option<(u32, u32, DisplayFlags)>,
    pub mode_changes: usize,
    pub title: String,
    pub icon_size: Option<(u32, u32)>,
    pub cursor_visible: bool,
    pub presented: usize,
    last_frame: Option<Surface>,
}

impl HeadlessDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the most recently presented frame.
    pub fn last_frame(&self) -> Option<&Surface> {
        self.last_frame.as_ref()
    }
}

impl DisplayBackend for HeadlessDisplay {
    fn set_mode(&mut self, width: u32, height: u32, flags: DisplayFlags) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDisplayMode { width, height }.into());
        }
        self.mode = Some((width, height, flags));
        self.mode_changes += 1;
        Ok(())
    }

    fn set_icon(&mut self, icon: &Surface) -> Result<()> {
        self.icon_size = Some(icon.size());
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn present(&mut self, frame: &Surface) -> Result<()> {
        self.presented += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
