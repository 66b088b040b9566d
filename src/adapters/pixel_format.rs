//! Pixel format conversion helpers for presentation adapters.
//!
//! Colour-square pixels are RGBA with meaningful alpha. A browser canvas shows
//! them blended over the page background, so presenters flatten them over
//! white before display.

const BACKGROUND: u16 = 255;

fn blend_over_white(channel: u8, alpha: u8) -> u8 {
    let channel = u16::from(channel);
    let alpha = u16::from(alpha);

    ((channel * alpha + BACKGROUND * (255 - alpha) + 127) / 255) as u8
}

/// Blends RGBA pixels over white and writes opaque RGBA.
///
/// # Panics
/// Panics if the buffers differ in length or `src` is not a multiple of 4.
#[cfg_attr(not(feature = "gui"), allow(dead_code))]
pub fn flatten_rgba_over_white(src: &[u8], dst: &mut [u8]) {
    assert!(
        src.len() % 4 == 0,
        "src length {} is not a multiple of 4",
        src.len()
    );
    assert_eq!(
        dst.len(),
        src.len(),
        "dst length {} does not match src length {}",
        dst.len(),
        src.len()
    );

    for (src_pixel, dst_pixel) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        let alpha = src_pixel[3];
        dst_pixel[0] = blend_over_white(src_pixel[0], alpha);
        dst_pixel[1] = blend_over_white(src_pixel[1], alpha);
        dst_pixel[2] = blend_over_white(src_pixel[2], alpha);
        dst_pixel[3] = 255;
    }
}

/// Blends RGBA pixels over white and returns packed RGB.
///
/// # Panics
/// Panics if `src` is not a multiple of 4.
#[must_use]
pub fn flatten_rgba_over_white_to_rgb(src: &[u8]) -> Vec<u8> {
    assert!(
        src.len() % 4 == 0,
        "src length {} is not a multiple of 4",
        src.len()
    );

    src.chunks_exact(4)
        .flat_map(|pixel| {
            let alpha = pixel[3];
            [
                blend_over_white(pixel[0], alpha),
                blend_over_white(pixel[1], alpha),
                blend_over_white(pixel[2], alpha),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_pixels_are_unchanged() {
        let src = vec![
            255, 0, 0, 255, // red
            0, 255, 0, 255, // green
            10, 20, 30, 255,
        ];
        let mut dst = vec![0; src.len()];

        flatten_rgba_over_white(&src, &mut dst);

        assert_eq!(dst, src);
    }

    #[test]
    fn test_transparent_pixels_become_white() {
        let src = vec![12, 34, 56, 0];
        let mut dst = vec![0; 4];

        flatten_rgba_over_white(&src, &mut dst);

        assert_eq!(dst, vec![255, 255, 255, 255]);
    }

    #[test]
    fn test_half_alpha_blends_towards_white() {
        let src = vec![0, 255, 128, 128];
        let mut dst = vec![0; 4];

        flatten_rgba_over_white(&src, &mut dst);

        // 0 * 128/255 + 255 * 127/255 ~= 127
        assert_eq!(dst, vec![127, 255, 191, 255]);
    }

    #[test]
    fn test_empty_buffers() {
        let mut dst: Vec<u8> = vec![];

        flatten_rgba_over_white(&[], &mut dst);

        assert!(dst.is_empty());
        assert!(flatten_rgba_over_white_to_rgb(&[]).is_empty());
    }

    #[test]
    fn test_to_rgb_drops_alpha_channel() {
        let src = vec![10, 20, 30, 255, 0, 0, 0, 0];

        assert_eq!(
            flatten_rgba_over_white_to_rgb(&src),
            vec![10, 20, 30, 255, 255, 255]
        );
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn test_mismatched_lengths_panic() {
        let mut dst = vec![0; 8];

        flatten_rgba_over_white(&[0; 4], &mut dst);
    }
}
