use std::path::{Path, PathBuf};

use crate::assets::{load_surface, AssetPaths};
use crate::coords::Rect;
use crate::error::EngineError;
use crate::surface::Surface;
use crate::transform::{Scale, Transform};

use super::{GameObject, SourcePolicy};

/// Image loaded from the images directory.
pub struct Texture {
    path: PathBuf,
    policy: SourcePolicy,
    decoded: Option<Surface>,

    pub transform: Transform,

    surface: Surface,
    rect: Rect,
}

impl Texture {
    /// Loads `name` from the images directory of `assets`.
    pub fn new(
        assets: &AssetPaths,
        name: impl AsRef<Path>,
        scale: impl Into<Scale>,
    ) -> Result<Self, EngineError> {
        Self::from_path(assets.image(name), scale, SourcePolicy::Reload)
    }

    /// Loads an image from an explicit path.
    pub fn from_path(
        path: impl Into<PathBuf>,
        scale: impl Into<Scale>,
        policy: SourcePolicy,
    ) -> Result<Self, EngineError> {
        let mut texture = Self {
            path: path.into(),
            policy,
            decoded: None,
            transform: scale.into().to_transform(),
            surface: Surface::new(0, 0),
            rect: Rect::default(),
        };
        texture.reset_rect()?;
        Ok(texture)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> SourcePolicy {
        self.policy
    }

    /// PNG files keep their alpha channel; anything else is decoded opaque.
    fn keeps_alpha(&self) -> bool {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("png"))
    }

    fn source(&mut self) -> Result<Surface, EngineError> {
        let keep_alpha = self.keeps_alpha();
        match self.policy {
            SourcePolicy::Reload => load_surface(&self.path, keep_alpha),
            SourcePolicy::KeepDecoded => {
                if let Some(s) = &self.decoded {
                    return Ok(s.clone());
                }
                let s = load_surface(&self.path, keep_alpha)?;
                self.decoded = Some(s.clone());
                Ok(s)
            }
        }
    }
}

impl GameObject for Texture {
    fn reset_rect(&mut self) -> Result<(), EngineError> {
        let source = self.source()?;
        self.surface = source.scaled(self.transform.local_scale)?;
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
    use crate::coords::{Color, Vec2};
    use image::{Rgba, RgbaImage};

    fn write_png(dir: &Path, name: &str, w: u32, h: u32, px: [u8; 4]) -> PathBuf {
        let images = dir.join("Images");
        std::fs::create_dir_all(&images).unwrap();
        let path = images.join(name);
        RgbaImage::from_pixel(w, h, Rgba(px)).save(&path).unwrap();
        path
    }

    #[test]
    fn default_scale_matches_source_and_sits_at_origin() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "logo.png", 12, 5, [255, 0, 0, 255]);
        let assets = AssetPaths::new(dir.path());

        let tex = Texture::new(&assets, "logo.png", 1.0).unwrap();

        assert_eq!(tex.surface().size(), (12, 5));
        assert_eq!(tex.rect(), Rect::new(0, 0, 12, 5));
    }

    #[test]
    fn scale_multiplies_source_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "tile.png", 8, 4, [0, 0, 0, 255]);
        let assets = AssetPaths::new(dir.path());

        for (scale, expected) in [
            (Vec2::new(2.0, 3.0), (16, 12)),
            (Vec2::new(0.5, 0.5), (4, 2)),
            (Vec2::new(1.25, 1.0), (10, 4)),
        ] {
            let tex = Texture::new(&assets, "tile.png", scale).unwrap();
            assert_eq!(tex.surface().size(), expected, "scale {scale:?}");
        }
    }

    #[test]
    fn transform_changes_show_up_on_next_reset() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "tile.png", 4, 4, [0, 0, 0, 255]);
        let mut tex = Texture::new(&AssetPaths::new(dir.path()), "tile.png", 1.0).unwrap();

        tex.transform.position = Vec2::new(30.0, 7.5);
        tex.transform.local_scale = Vec2::new(2.0, 1.0);
        tex.reset_rect().unwrap();

        assert_eq!(tex.rect(), Rect::new(30, 7, 8, 4));
    }

    #[test]
    fn png_keeps_alpha_other_formats_are_opaque() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "ghost.png", 2, 2, [9, 9, 9, 0]);
        let bmp = dir.path().join("Images").join("ghost.bmp");
        RgbaImage::from_pixel(2, 2, Rgba([9, 9, 9, 0])).save(&bmp).unwrap();
        let assets = AssetPaths::new(dir.path());

        let png = Texture::new(&assets, "ghost.png", 1.0).unwrap();
        let opaque = Texture::new(&assets, "ghost.bmp", 1.0).unwrap();

        assert!(png.surface().has_alpha());
        assert!(!opaque.surface().has_alpha());
        assert_eq!(opaque.surface().pixel(0, 0).unwrap().a, 255);
    }

    #[test]
    fn reload_policy_sees_file_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "swap.png", 2, 2, [0, 0, 0, 255]);
        let mut tex = Texture::from_path(&path, 1.0, SourcePolicy::Reload).unwrap();

        RgbaImage::from_pixel(6, 3, Rgba([0, 0, 0, 255])).save(&path).unwrap();
        tex.reset_rect().unwrap();

        assert_eq!(tex.surface().size(), (6, 3));
    }

    #[test]
    fn keep_decoded_policy_ignores_file_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "swap.png", 2, 2, [0, 0, 0, 255]);
        let mut tex = Texture::from_path(&path, 1.0, SourcePolicy::KeepDecoded).unwrap();

        std::fs::remove_file(&path).unwrap();
        tex.transform.local_scale = Vec2::splat(3.0);
        tex.reset_rect().unwrap();

        assert_eq!(tex.surface().size(), (6, 6));
    }

    #[test]
    fn draw_blits_at_transform_position() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "red.png", 2, 2, [255, 0, 0, 255]);
        let mut tex = Texture::new(&AssetPaths::new(dir.path()), "red.png", 1.0).unwrap();
        let mut screen = Surface::new(6, 6);

        tex.transform.position = Vec2::new(3.0, 1.0);
        tex.draw(&mut screen).unwrap();

        assert_eq!(screen.pixel(3, 1), Some(Color::rgb(255, 0, 0)));
        assert_eq!(screen.pixel(4, 2), Some(Color::rgb(255, 0, 0)));
        assert_eq!(screen.pixel(2, 1), Some(Color::BLACK));
    }

    #[test]
    fn missing_file_fails_construction() {
        let dir = tempfile::tempdir().unwrap();
        let err = Texture::new(&AssetPaths::new(dir.path()), "nope.png", 1.0);
        assert!(matches!(err, Err(EngineError::Io { .. })));
    }

    #[test]
    fn negative_scale_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "tile.png", 2, 2, [0, 0, 0, 255]);
        let err = Texture::new(&AssetPaths::new(dir.path()), "tile.png", -1.0);
        assert!(matches!(err, Err(EngineError::InvalidScale { .. })));
    }

    #[test]
    fn oversized_scale_fails_draw_instead_of_allocating() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "tile.png", 10, 10, [0, 0, 0, 255]);
        let mut tile = Texture::new(&AssetPaths::new(dir.path()), "tile.png", 1.0).unwrap();

        tile.transform.local_scale = Vec2::splat(1.0e9);
        let mut screen = Surface::new(4, 4);

        assert!(matches!(tile.draw(&mut screen), Err(EngineError::SurfaceTooLarge { .. })));
        assert_eq!(screen, Surface::new(4, 4));
    }
}
