bitflags::bitflags! {
    /// Display mode bits.
    #[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
    pub struct DisplayFlags: u32 {
        /// Borderless fullscreen on the current monitor.
        const FULLSCREEN = 0b0001;
        /// User may resize the window.
        const RESIZABLE  = 0b0010;
        /// No title bar or border.
        const NOFRAME    = 0b0100;
        /// Window starts hidden.
        const HIDDEN     = 0b1000;
    }
}

/// Parameters used to open the application window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    /// Icon image name, resolved in the images directory.
    pub icon: String,
    pub width: u32,
    pub height: u32,
    pub flags: DisplayFlags,
    pub title: String,
    pub show_cursor: bool,
}

impl WindowConfig {
    pub fn new(icon: impl Into<String>, width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            width,
            height,
            flags: DisplayFlags::empty(),
            title: title.into(),
            show_cursor: true,
        }
    }

    pub fn with_flags(mut self, flags: DisplayFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_cursor(mut self, show_cursor: bool) -> Self {
        self.show_cursor = show_cursor;
        self
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new("icon.png", 1280, 720, "easel")
    }
}
