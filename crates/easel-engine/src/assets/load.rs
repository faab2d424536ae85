use std::path::Path;

use image::ImageReader;

use crate::error::EngineError;
use crate::surface::Surface;

/// Reads a whole asset file.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>, EngineError> {
    std::fs::read(path).map_err(|e| EngineError::io(path, e))
}

/// Decodes an image file into a surface.
///
/// `keep_alpha` selects alpha-aware decoding; otherwise the surface is
/// opaque regardless of what the file stores.
pub fn load_surface(path: &Path, keep_alpha: bool) -> Result<Surface, EngineError> {
    let image = ImageReader::open(path)
        .map_err(|e| EngineError::io(path, e))?
        .with_guessed_format()
        .map_err(|e| EngineError::io(path, e))?
        .decode()
        .map_err(|source| EngineError::Image { path: path.to_path_buf(), source })?;

    log::debug!(
        "loaded image {} ({}x{}, alpha={keep_alpha})",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(Surface::from_image(image, keep_alpha))
}

/// Parses a TrueType/OpenType font file.
pub fn load_font(path: &Path) -> Result<fontdue::Font, EngineError> {
    let bytes = read_bytes(path)?;
    fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default()).map_err(|message| {
        EngineError::Font { path: path.to_path_buf(), message: message.to_string() }
    })
}
