//! BC3 (DXT5) decoding implementation; based on etcpak
//! <https://github.com/wolfpld/etcpak> and MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc3>
//!
//! Uses the 'ideal' rounding/computing method described in the DX9 docs, as opposed to DX10, AMD or Nvidia
//! method.

use super::bc1_decode::read_color_block;
use vtf_decode_common::{color_8888::Color8888, decoded_4x4_block::Decoded4x4Block};

/// Builds the 8 entry alpha palette of a BC3/BC4 alpha block from its two endpoints.
#[inline(always)]
#[allow(clippy::identity_op)]
pub(crate) fn alpha_palette(alpha0: u8, alpha1: u8) -> [u8; 8] {
    let a0 = alpha0 as u16;
    let a1 = alpha1 as u16;
    let mut values = [alpha0, alpha1, 0, 0, 0, 0, 0, 0];

    // alpha0 > alpha1 selects 8 interpolated values.
    // Otherwise 6 interpolated values plus transparent and opaque.
    if alpha0 > alpha1 {
        values[2] = ((6 * a0 + 1 * a1) / 7) as u8;
        values[3] = ((5 * a0 + 2 * a1) / 7) as u8;
        values[4] = ((4 * a0 + 3 * a1) / 7) as u8;
        values[5] = ((3 * a0 + 4 * a1) / 7) as u8;
        values[6] = ((2 * a0 + 5 * a1) / 7) as u8;
        values[7] = ((1 * a0 + 6 * a1) / 7) as u8;
    } else {
        values[2] = ((4 * a0 + 1 * a1) / 5) as u8;
        values[3] = ((3 * a0 + 2 * a1) / 5) as u8;
        values[4] = ((2 * a0 + 3 * a1) / 5) as u8;
        values[5] = ((1 * a0 + 4 * a1) / 5) as u8;
        values[6] = 0;
        values[7] = 255;
    }

    values
}

/// Decodes a BC3 block into a structured representation of pixels
///
/// # Parameters
///
/// - `src`: Pointer to the source BC3 block (must point to at least 16 bytes of valid memory)
///
/// # Returns
///
/// A [`Decoded4x4Block`] containing all 16 decoded pixels with alpha
///
/// # Safety
///
/// The caller must ensure that `src` points to at least 16 bytes of valid memory.
///
/// # Example
///
/// ```
/// use vtf_decode_dxt::util::decode_bc3_block;
///
/// let bc3_block = [0u8; 16]; // Compressed BC3 block
///
/// unsafe {
///     let decoded = decode_bc3_block(bc3_block.as_ptr());
///     let pixel_at_0_0 = decoded.get_pixel_unchecked(0, 0);
/// }
/// ```
#[inline(always)]
pub unsafe fn decode_bc3_block(src: *const u8) -> Decoded4x4Block {
    // Last 8 bytes contain the color data, always in four colour mode.
    let (dict, indices) = read_color_block(src.add(8), false);
    let alpha_values = alpha_palette(*src, *src.add(1));

    // 16 alpha indices of 3 bits each, packed into the following 6 bytes.
    let alpha_indices = u64::from_le_bytes([
        *src.add(2),
        *src.add(3),
        *src.add(4),
        *src.add(5),
        *src.add(6),
        *src.add(7),
        0,
        0,
    ]);

    let mut result = Decoded4x4Block::new(Color8888::default());
    let mut index_pos = 0;
    let mut alpha_pos = 0;
    for y in 0..4 {
        for x in 0..4 {
            let pixel_idx = (indices >> index_pos) & 0x3;
            let mut pixel = *dict.get_unchecked(pixel_idx as usize);

            let alpha_idx = (alpha_indices >> alpha_pos) & 0b111;
            pixel.a = *alpha_values.get_unchecked(alpha_idx as usize);

            result.set_pixel_unchecked(x, y, pixel);
            index_pos += 2;
            alpha_pos += 3;
        }
    }

    result
}

/// Safely wraps the unsafe [`decode_bc3_block`] function for use with slices
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is too short.
#[inline(always)]
pub fn decode_bc3_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    if src.len() < 16 {
        return None;
    }
    unsafe { Some(decode_bc3_block(src.as_ptr())) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    // There is also a fuzz test against rgbcx-sys, so this is minimal/very basic.

    #[test]
    fn can_decode_bc3_block() {
        let bc3_block = [
            // Alpha data (BC4 compression)
            0, 0, 0, 255, 255, 255, 255, 255, // Color data (BC1-style format)
            255, 255, // c0 = white
            18, 0, // c1 = R:0 G:0 B:18
            0, 0, 0, 250, // Indices: mostly index 0, some index 2 and 3
        ];

        let decoded = decode_bc3_block_from_slice(&bc3_block).unwrap();

        let white = |a| Color8888::new(255, 255, 255, a);
        let expected = Decoded4x4Block {
            pixels: [
                // Row 0
                white(0),
                white(0),
                white(0),
                white(255),
                // Row 1
                white(255),
                white(255),
                white(255),
                white(255),
                // Row 2
                white(255),
                white(255),
                white(255),
                white(255),
                // Row 3
                Color8888::new(170, 170, 219, 255),
                Color8888::new(170, 170, 219, 255),
                Color8888::new(85, 85, 183, 255),
                Color8888::new(85, 85, 183, 255),
            ],
        };

        assert_eq!(decoded, expected, "Decoded block doesn't match expected");
    }

    #[test]
    fn can_decode_bc3_block_with_fixed_alpha() {
        let bc3_block = [
            // Alpha data: every index selects alpha0
            221, 0, 0, 0, 0, 0, 0, 0, // Color data
            10, 0, 0, 0, 0, 0, 212, 0, // Blue with some variation in index
        ];

        let decoded = decode_bc3_block_from_slice(&bc3_block).unwrap();

        assert!(decoded.pixels.iter().all(|p| p.a == 221));
        assert_eq!(decoded.get_pixel(0, 0), Some(Color8888::new(0, 0, 82, 221)));
        assert_eq!(decoded.get_pixel(1, 2), Some(Color8888::new(0, 0, 0, 221)));
        assert_eq!(decoded.get_pixel(3, 2), Some(Color8888::new(0, 0, 27, 221)));
    }

    #[rstest]
    #[case(255, 0, [255, 0, 218, 182, 145, 109, 72, 36])]
    #[case(0, 255, [0, 255, 51, 102, 153, 204, 0, 255])]
    #[case(100, 100, [100, 100, 100, 100, 100, 100, 0, 255])]
    fn alpha_palette_matches_mode(#[case] a0: u8, #[case] a1: u8, #[case] expected: [u8; 8]) {
        assert_eq!(alpha_palette(a0, a1), expected);
    }

    #[test]
    fn test_slice_too_small() {
        let too_small = [0u8; 15];
        assert!(decode_bc3_block_from_slice(&too_small).is_none());
    }
}
