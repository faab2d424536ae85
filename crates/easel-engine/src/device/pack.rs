use crate::surface::Surface;

/// Byte order of the swap-chain texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum PixelOrder {
    Rgba,
    Bgra,
}

/// Copies `frame` into a tightly packed `width` x `height` buffer.
///
/// The frame is anchored top-left; it is cropped if larger than the target
/// and the remainder is filled with opaque black.
pub(crate) fn pack_frame(frame: &Surface, width: u32, height: u32, order: PixelOrder) -> Vec<u8> {
    let mut out = vec![0u8; width as usize * height as usize * 4];
    for px in out.chunks_exact_mut(4) {
        px[3] = u8::MAX;
    }

    let copy_w = frame.width().min(width) as usize;
    let copy_h = frame.height().min(height) as usize;
    let src = frame.as_bytes();
    let src_stride = frame.width() as usize * 4;
    let dst_stride = width as usize * 4;

    for y in 0..copy_h {
        let src_row = &src[y * src_stride..y * src_stride + copy_w * 4];
        let dst_row = &mut out[y * dst_stride..y * dst_stride + copy_w * 4];
        match order {
            PixelOrder::Rgba => dst_row.copy_from_slice(src_row),
            PixelOrder::Bgra => {
                for (d, s) in dst_row.chunks_exact_mut(4).zip(src_row.chunks_exact(4)) {
                    d.copy_from_slice(&[s[2], s[1], s[0], s[3]]);
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Color;

    #[test]
    fn rgba_same_size_is_identity() {
        let mut s = Surface::new(2, 2);
        s.set_pixel(1, 0, Color::rgb(1, 2, 3));
        assert_eq!(pack_frame(&s, 2, 2, PixelOrder::Rgba), s.as_bytes());
    }

    #[test]
    fn bgra_swaps_red_and_blue() {
        let mut s = Surface::new(1, 1);
        s.set_pixel(0, 0, Color::rgb(10, 20, 30));
        assert_eq!(pack_frame(&s, 1, 1, PixelOrder::Bgra), vec![30, 20, 10, 255]);
    }

    #[test]
    fn larger_target_is_padded_with_black() {
        let mut s = Surface::new(1, 1);
        s.fill(Color::WHITE);
        let out = pack_frame(&s, 2, 2, PixelOrder::Rgba);
        assert_eq!(out.len(), 16);
        assert_eq!(&out[0..4], &[255, 255, 255, 255]);
        assert_eq!(&out[4..8], &[0, 0, 0, 255]);
        assert_eq!(&out[8..12], &[0, 0, 0, 255]);
    }

    #[test]
    fn smaller_target_crops() {
        let mut s = Surface::new(3, 3);
        s.set_pixel(0, 1, Color::rgb(7, 7, 7));
        let out = pack_frame(&s, 1, 2, PixelOrder::Rgba);
        assert_eq!(out, vec![0, 0, 0, 255, 7, 7, 7, 255]);
    }
}
