use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle as GlyphRun};

use crate::coords::Color;
use crate::surface::Surface;

/// Point size every text line is rasterized at before scaling.
pub const FONT_PX: f32 = 64.0;

/// Paint settings for a rendered line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    /// Smooth glyph edges. When off, coverage is thresholded at 50%.
    pub anti_alias: bool,
    /// Glyph color.
    pub fill: Color,
    /// Fills the whole line box behind the glyphs. `None` leaves it
    /// transparent.
    pub background: Option<Color>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            anti_alias: false,
            fill: Color::BLACK,
            background: None,
        }
    }
}

/// Renders `text` as one line at `px` pixels.
///
/// The surface is as wide as the pen advance of the laid-out glyphs and as
/// tall as the font's line height. It carries alpha unless a background
/// is set.
pub fn render_line(font: &fontdue::Font, text: &str, px: f32, style: &TextStyle) -> Surface {
    let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings::default());
    layout.append(&[font], &GlyphRun::new(text, px, 0));

    let glyphs = layout.glyphs();

    let line_height = font
        .horizontal_line_metrics(px)
        .map(|m| m.ascent - m.descent)
        .unwrap_or(px);
    let height = line_height.max(layout.height()).ceil() as u32;

    // Pen position after each glyph, not its bitmap edge, so trailing spaces count.
    let width = glyphs
        .iter()
        .map(|g| {
            let m = font.metrics_indexed(g.key.glyph_index, px);
            (g.x - m.xmin as f32 + m.advance_width).max(0.0)
        })
        .fold(0.0f32, f32::max)
        .ceil() as u32;

    let mut surface = match style.background {
        Some(bg) => {
            let mut s = Surface::new(width, height);
            s.fill(bg);
            s
        }
        None => Surface::new_alpha(width, height),
    };

    for g in glyphs {
        if g.width == 0 || g.height == 0 {
            continue;
        }
        let (metrics, coverage) = font.rasterize_config(g.key);
        let ox = g.x.round() as i32;
        let oy = g.y.round() as i32;

        for row in 0..metrics.height {
            for col in 0..metrics.width {
                let c = coverage[row * metrics.width + col];
                let c = match (style.anti_alias, c) {
                    (true, c) => c,
                    (false, c) if c >= 128 => u8::MAX,
                    _ => 0,
                };
                if c == 0 {
                    continue;
                }
                let a = (style.fill.a as u32 * c as u32 / 255) as u8;
                surface.blend_pixel(
                    ox + col as i32,
                    oy + row as i32,
                    Color { a, ..style.fill },
                );
            }
        }
    }

    surface
}
