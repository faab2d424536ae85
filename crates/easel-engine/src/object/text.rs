use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::assets::{load_font, AssetPaths};
use crate::coords::{Color, Rect};
use crate::error::EngineError;
use crate::surface::Surface;
use crate::text::{render_line, TextStyle, FONT_PX};
use crate::transform::{Scale, Transform};

use super::{GameObject, SourcePolicy};

/// Single line of text rendered with a font from the fonts directory.
///
/// The font is rasterized at 64 px and the result scaled by
/// `transform.local_scale`.
pub struct Text {
    value: String,
    font_path: PathBuf,
    policy: SourcePolicy,
    font: Option<fontdue::Font>,

    pub style: TextStyle,
    pub transform: Transform,

    surface: Surface,
    rect: Rect,
}

impl Text {
    /// Renders `value` with font `font_name` from the fonts directory.
    pub fn new(
        value: impl Display,
        assets: &AssetPaths,
        font_name: impl AsRef<Path>,
        scale: impl Into<Scale>,
        style: TextStyle,
    ) -> Result<Self, EngineError> {
        Self::from_path(value, assets.font(font_name), scale, style, SourcePolicy::Reload)
    }

    pub fn from_path(
        value: impl Display,
        font_path: impl Into<PathBuf>,
        scale: impl Into<Scale>,
        style: TextStyle,
        policy: SourcePolicy,
    ) -> Result<Self, EngineError> {
        let mut text = Self {
            value: value.to_string(),
            font_path: font_path.into(),
            policy,
            font: None,
            style,
            transform: scale.into().to_transform(),
            surface: Surface::new(0, 0),
            rect: Rect::default(),
        };
        text.reset_rect()?;
        Ok(text)
    }

    pub fn text(&self) -> &str {
        &self.value
    }

    /// Replaces the displayed value. Takes effect on the next draw.
    pub fn set_text(&mut self, value: impl Display) {
        self.value = value.to_string();
    }

    pub fn set_fill(&mut self, fill: Color) {
        self.style.fill = fill;
    }

    pub fn set_background(&mut self, background: Option<Color>) {
        self.style.background = background;
    }

    pub fn font_path(&self) -> &Path {
        &self.font_path
    }

    fn render(&mut self) -> Result<Surface, EngineError> {
        match self.policy {
            SourcePolicy::Reload => {
                let font = load_font(&self.font_path)?;
                Ok(render_line(&font, &self.value, FONT_PX, &self.style))
            }
            SourcePolicy::KeepDecoded => {
                let font = match self.font.take() {
                    Some(font) => font,
                    None => load_font(&self.font_path)?,
                };
                let line = render_line(&font, &self.value, FONT_PX, &self.style);
                self.font = Some(font);
                Ok(line)
            }
        }
    }
}

impl GameObject for Text {
    fn reset_rect(&mut self) -> Result<(), EngineError> {
        let line = self.render()?;
        self.surface = line.scaled(self.transform.local_scale)?;
        self.rect = self.surface.rect().placed_at(self.transform.position);
        Ok(())
    }

    fn surface(&self) -> &Surface {
        &self.surface
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::text::test_font::system_font;

    fn text(value: &str, scale: impl Into<Scale>) -> Option<Text> {
        let font = system_font()?;
        Some(Text::from_path(value, font, scale, TextStyle::default(), SourcePolicy::Reload).unwrap())
    }

    #[test]
    fn scale_is_proportional() {
        let Some(one) = text("Score", 1.0) else { return };
        let Some(two) = text("Score", Vec2::new(2.0, 0.5)) else { return };

        let (w, h) = one.surface().size();
        assert_eq!(two.surface().size(), ((w as f32 * 2.0) as u32, (h as f32 * 0.5) as u32));
    }

    #[test]
    fn position_change_moves_rect_on_next_draw() {
        let Some(mut t) = text("hi", 1.0) else { return };
        let mut screen = Surface::new(400, 200);
        assert_eq!((t.rect().x, t.rect().y), (0, 0));

        t.transform.position = Vec2::new(40.0, 25.0);
        t.draw(&mut screen).unwrap();

        assert_eq!((t.rect().x, t.rect().y), (40, 25));
    }

    #[test]
    fn value_is_stringified() {
        let Some(font) = system_font() else { return };
        let mut t = Text::from_path(42, font, 1.0, TextStyle::default(), SourcePolicy::KeepDecoded).unwrap();
        assert_eq!(t.text(), "42");

        let narrow = t.surface().width();
        t.set_text(4242.5);
        t.reset_rect().unwrap();
        assert_eq!(t.text(), "4242.5");
        assert!(t.surface().width() > narrow);
    }

    #[test]
    fn missing_font_fails_construction() {
        let dir = tempfile::tempdir().unwrap();
        let err = Text::new("x", &AssetPaths::new(dir.path()), "missing.ttf", 1.0, TextStyle::default());
        assert!(matches!(err, Err(EngineError::Io { .. })));
    }
}
