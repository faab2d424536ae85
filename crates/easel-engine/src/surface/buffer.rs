use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};

use crate::coords::{Color, Rect, Vec2};
use crate::error::EngineError;

/// Largest surface `scaled` will resize to, in pixels (8192 x 8192).
pub const MAX_SURFACE_PIXELS: u64 = 1 << 26;

fn check_pixel_budget(width: u32, height: u32) -> Result<(), EngineError> {
    match (width as u64).checked_mul(height as u64) {
        Some(n) if n <= MAX_SURFACE_PIXELS => Ok(()),
        _ => Err(EngineError::SurfaceTooLarge { width: width as u64, height: height as u64 }),
    }
}

/// RGBA8 pixel buffer.
///
/// `has_alpha` decides how the surface is composited when blitted:
/// alpha surfaces blend source-over, opaque surfaces overwrite the
/// destination pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pixels: RgbaImage,
    has_alpha: bool,
}

impl Surface {
    /// Opaque surface filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, Rgba(Color::BLACK.to_array())),
            has_alpha: false,
        }
    }

    /// Fully transparent surface with per-pixel alpha.
    pub fn new_alpha(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
            has_alpha: true,
        }
    }

    /// Wraps an existing buffer as-is.
    pub fn from_rgba(pixels: RgbaImage, has_alpha: bool) -> Self {
        Self { pixels, has_alpha }
    }

    /// Converts a decoded image.
    ///
    /// With `keep_alpha == false` every pixel is forced opaque, so the
    /// surface blits as a plain copy.
    pub fn from_image(image: DynamicImage, keep_alpha: bool) -> Self {
        let mut pixels = image.to_rgba8();
        if !keep_alpha {
            for p in pixels.pixels_mut() {
                p.0[3] = u8::MAX;
            }
        }
        Self { pixels, has_alpha: keep_alpha }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// `(width, height)` in pixels.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Bounding rect at the origin.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_size(self.width(), self.height())
    }

    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    /// Raw RGBA bytes, row-major, no padding.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    #[inline]
    pub fn as_image(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        (x < self.width() && y < self.height()).then(|| Color::from_array(self.pixels.get_pixel(x, y).0))
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width() && y < self.height() {
            self.pixels.put_pixel(x, y, Rgba(color.to_array()));
        }
    }

    /// Composites `color` over the pixel at `(x, y)`; out-of-bounds is a no-op.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        let d = self.pixels.get_pixel_mut(x as u32, y as u32);
        d.0 = blend_over(color.to_array(), d.0);
    }

    pub fn fill(&mut self, color: Color) {
        let color = if self.has_alpha { color } else { Color { a: u8::MAX, ..color } };
        for p in self.pixels.pixels_mut() {
            *p = Rgba(color.to_array());
        }
    }

    /// Returns a copy resized by `factor` (nearest-neighbour).
    ///
    /// Target dimensions are `width * factor.x` and `height * factor.y`,
    /// truncated to whole pixels. A factor of zero yields an empty surface;
    /// a resize beyond [`MAX_SURFACE_PIXELS`] is `SurfaceTooLarge`.
    pub fn scaled(&self, factor: Vec2) -> Result<Surface, EngineError> {
        if !factor.is_finite() || factor.x < 0.0 || factor.y < 0.0 {
            return Err(EngineError::InvalidScale { x: factor.x, y: factor.y });
        }

        let w = self.width() as f64 * factor.x as f64;
        let h = self.height() as f64 * factor.y as f64;
        if w > u32::MAX as f64 || h > u32::MAX as f64 {
            return Err(EngineError::SurfaceTooLarge { width: w as u64, height: h as u64 });
        }
        let (w, h) = (w as u32, h as u32);

        let pixels = if (w, h) == self.size() {
            self.pixels.clone()
        } else if w == 0 || h == 0 {
            RgbaImage::new(w, h)
        } else {
            check_pixel_budget(w, h)?;
            imageops::resize(&self.pixels, w, h, FilterType::Nearest)
        };

        Ok(Surface { pixels, has_alpha: self.has_alpha })
    }

    /// Draws `src` with its top-left corner at `(at.x, at.y)`.
    ///
    /// `at`'s size is ignored. Pixels falling outside this surface are
    /// clipped. Returns the area that was touched (empty when fully clipped).
    pub fn blit(&mut self, src: &Surface, at: Rect) -> Rect {
        let placed = src.rect().at(at.x, at.y);
        let Some(area) = placed.intersect(self.rect()) else {
            return Rect::new(at.x, at.y, 0, 0);
        };

        for dy in 0..area.h {
            let ty = (area.y as i64 + dy as i64) as u32;
            let sy = (ty as i64 - placed.y as i64) as u32;
            for dx in 0..area.w {
                let tx = (area.x as i64 + dx as i64) as u32;
                let sx = (tx as i64 - placed.x as i64) as u32;

                let s = src.pixels.get_pixel(sx, sy).0;
                let d = self.pixels.get_pixel_mut(tx, ty);
                d.0 = if src.has_alpha {
                    blend_over(s, d.0)
                } else {
                    [s[0], s[1], s[2], u8::MAX]
                };
            }
        }

        area
    }
}

/// Straight-alpha source-over composite.
fn blend_over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    let sa = src[3] as u32;
    match sa {
        0 => dst,
        255 => src,
        _ => {
            let da = dst[3] as u32;
            let inv = 255 - sa;
            // Output alpha scaled by 255: sa*255 + da*inv.
            let out_a = sa * 255 + da * inv;
            if out_a == 0 {
                return [0, 0, 0, 0];
            }
            let ch = |i: usize| {
                ((src[i] as u32 * sa * 255 + dst[i] as u32 * da * inv + out_a / 2) / out_a) as u8
            };
            [ch(0), ch(1), ch(2), ((out_a + 127) / 255) as u8]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);

    fn solid(w: u32, h: u32, color: Color, alpha: bool) -> Surface {
        let mut s = if alpha { Surface::new_alpha(w, h) } else { Surface::new(w, h) };
        s.fill(color);
        s
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_is_opaque_black() {
        let s = Surface::new(3, 2);
        assert_eq!(s.size(), (3, 2));
        assert!(!s.has_alpha());
        assert_eq!(s.pixel(2, 1), Some(Color::BLACK));
    }

    #[test]
    fn from_image_without_alpha_forces_opaque() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 40]));
        let s = Surface::from_image(DynamicImage::ImageRgba8(img), false);
        assert_eq!(s.pixel(0, 0), Some(Color::rgba(10, 20, 30, 255)));
    }

    #[test]
    fn pixel_out_of_bounds_is_none() {
        assert_eq!(Surface::new(2, 2).pixel(2, 0), None);
    }

    // ── scaling ───────────────────────────────────────────────────────────

    #[test]
    fn scaled_multiplies_dimensions() {
        let s = Surface::new(10, 6);
        assert_eq!(s.scaled(Vec2::new(2.0, 0.5)).unwrap().size(), (20, 3));
        assert_eq!(s.scaled(Vec2::new(1.5, 1.5)).unwrap().size(), (15, 9));
    }

    #[test]
    fn scaled_truncates_fractional_pixels() {
        let s = Surface::new(3, 3);
        assert_eq!(s.scaled(Vec2::new(0.5, 0.5)).unwrap().size(), (1, 1));
    }

    #[test]
    fn scaled_by_zero_is_empty() {
        let s = Surface::new(8, 8).scaled(Vec2::new(0.0, 1.0)).unwrap();
        assert_eq!(s.size(), (0, 8));
        assert!(s.rect().is_empty());
    }

    #[test]
    fn scaled_rejects_negative_or_nan() {
        let s = Surface::new(4, 4);
        assert!(matches!(s.scaled(Vec2::new(-1.0, 1.0)), Err(EngineError::InvalidScale { .. })));
        assert!(s.scaled(Vec2::new(1.0, f32::NAN)).is_err());
    }

    #[test]
    fn scaled_rejects_oversized_targets() {
        let s = Surface::new(10, 10);
        assert!(matches!(s.scaled(Vec2::splat(1.0e9)), Err(EngineError::SurfaceTooLarge { .. })));
        assert!(matches!(s.scaled(Vec2::splat(f32::MAX)), Err(EngineError::SurfaceTooLarge { .. })));
        // Each axis fits in u32 but the area does not fit the budget.
        assert!(matches!(s.scaled(Vec2::new(1.0e8, 1.0e8)), Err(EngineError::SurfaceTooLarge { .. })));
    }

    #[test]
    fn scaled_allows_budget_edge() {
        let s = Surface::new(1, 1);
        let wide = s.scaled(Vec2::new(8192.0, 1.0)).unwrap();
        assert_eq!(wide.size(), (8192, 1));
    }

    #[test]
    fn scaled_keeps_alpha_mode() {
        let s = Surface::new_alpha(2, 2).scaled(Vec2::splat(2.0)).unwrap();
        assert!(s.has_alpha());
    }

    // ── blit ──────────────────────────────────────────────────────────────

    #[test]
    fn blit_opaque_copies_at_offset() {
        let mut dst = Surface::new(5, 5);
        let area = dst.blit(&solid(2, 2, RED, false), Rect::new(1, 2, 0, 0));

        assert_eq!(area, Rect::new(1, 2, 2, 2));
        assert_eq!(dst.pixel(1, 2), Some(RED));
        assert_eq!(dst.pixel(2, 3), Some(RED));
        assert_eq!(dst.pixel(0, 2), Some(Color::BLACK));
        assert_eq!(dst.pixel(3, 2), Some(Color::BLACK));
    }

    #[test]
    fn blit_clips_negative_and_overflowing_positions() {
        let mut dst = Surface::new(4, 4);
        let area = dst.blit(&solid(3, 3, RED, false), Rect::new(-1, 2, 0, 0));

        assert_eq!(area, Rect::new(0, 2, 2, 2));
        assert_eq!(dst.pixel(0, 3), Some(RED));
        assert_eq!(dst.pixel(2, 3), Some(Color::BLACK));
    }

    #[test]
    fn blit_fully_outside_touches_nothing() {
        let mut dst = Surface::new(4, 4);
        let before = dst.clone();
        let area = dst.blit(&solid(2, 2, RED, false), Rect::new(10, 10, 0, 0));
        assert!(area.is_empty());
        assert_eq!(dst, before);
    }

    #[test]
    fn blit_transparent_pixels_leave_destination() {
        let mut dst = solid(2, 1, Color::WHITE, false);
        let mut src = Surface::new_alpha(2, 1);
        src.set_pixel(0, 0, RED);

        dst.blit(&src, Rect::default());

        assert_eq!(dst.pixel(0, 0), Some(RED));
        assert_eq!(dst.pixel(1, 0), Some(Color::WHITE));
    }

    #[test]
    fn blit_half_alpha_blends() {
        let mut dst = solid(1, 1, Color::BLACK, false);
        let src = solid(1, 1, Color::rgba(255, 255, 255, 128), true);

        dst.blit(&src, Rect::default());

        let p = dst.pixel(0, 0).unwrap();
        assert!((127..=129).contains(&p.r), "got {p:?}");
        assert_eq!(p.a, 255);
    }
}
