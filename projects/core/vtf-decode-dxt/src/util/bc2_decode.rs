//! BC2 (DXT3) decoding implementation; based on etcpak
//! <https://github.com/wolfpld/etcpak> and MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc2>
//!
//! Uses the 'ideal' rounding/computing method described in the DX9 docs, as opposed to DX10, AMD or Nvidia
//! method.

use super::bc1_decode::read_color_block;
use vtf_decode_common::{color_8888::Color8888, decoded_4x4_block::Decoded4x4Block};

/// Decodes a BC2 block into a structured representation of pixels
///
/// # Parameters
///
/// - `src`: Pointer to the source BC2 block (must point to at least 16 bytes of valid memory)
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
/// use vtf_decode_dxt::util::decode_bc2_block;
///
/// let bc2_block = [0u8; 16]; // Compressed BC2 block
///
/// unsafe {
///     let decoded = decode_bc2_block(bc2_block.as_ptr());
///     let pixel_at_0_0 = decoded.get_pixel_unchecked(0, 0);
/// }
/// ```
#[inline(always)]
pub unsafe fn decode_bc2_block(src: *const u8) -> Decoded4x4Block {
    // Last 8 bytes contain the color data, always in four colour mode.
    let (dict, indices) = read_color_block(src.add(8), false);

    let mut result = Decoded4x4Block::new(Color8888::default());

    // First 8 bytes contain the explicit alpha values (4 bits per pixel), low nibble first.
    let alpha = u64::from_le_bytes([
        *src,
        *src.add(1),
        *src.add(2),
        *src.add(3),
        *src.add(4),
        *src.add(5),
        *src.add(6),
        *src.add(7),
    ]);

    let mut index_pos = 0;
    let mut alpha_pos = 0;
    for y in 0..4 {
        for x in 0..4 {
            let pixel_idx = (indices >> index_pos) & 0x3;
            let mut pixel = *dict.get_unchecked(pixel_idx as usize);

            // Scale 4-bit alpha (0-15) to 8-bit (0-255)
            pixel.a = ((alpha >> alpha_pos) & 0x0F) as u8 * 17;

            result.set_pixel_unchecked(x, y, pixel);
            index_pos += 2;
            alpha_pos += 4;
        }
    }

    result
}

/// Safely wraps the unsafe [`decode_bc2_block`] function for use with slices
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is too short.
#[inline(always)]
pub fn decode_bc2_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    if src.len() < 16 {
        return None;
    }
    unsafe { Some(decode_bc2_block(src.as_ptr())) }
}

#[cfg(test)]
mod tests {
    use super::*;

    // There is also a fuzz test against rgbcx-sys and bcdec_rs, so this is minimal.

    #[test]
    fn can_decode_bc2_block() {
        let bc2_block = [
            // Alpha data (4 bits per pixel): 0x0 to 0xF across the 16 pixels
            0x10, 0x32, 0x54, 0x76, 0x98, 0xBA, 0xDC, 0xFE, // Color data
            0x00, 0xF8, // c0 = red
            0x00, 0xF8, // c1 = red
            0x00, 0x00, 0x00, 0x00, // All pixels use index 0
        ];

        let decoded = decode_bc2_block_from_slice(&bc2_block).unwrap();

        for (pixel_idx, pixel) in decoded.pixels.iter().enumerate() {
            assert_eq!(
                *pixel,
                Color8888::new(255, 0, 0, pixel_idx as u8 * 17),
                "Pixel {pixel_idx} incorrect"
            );
        }
    }

    #[test]
    fn equal_endpoints_never_use_punch_through() {
        let bc2_block = [
            0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // Opaque
            0x00, 0xF8, 0x00, 0xF8, // c0 == c1
            0xFF, 0xFF, 0xFF, 0xFF, // All pixels use index 3
        ];

        let decoded = decode_bc2_block_from_slice(&bc2_block).unwrap();
        assert!(decoded
            .pixels
            .iter()
            .all(|&p| p == Color8888::new(255, 0, 0, 255)));
    }

    #[test]
    fn test_slice_too_small() {
        let bc2_block = [0u8; 15];
        assert!(decode_bc2_block_from_slice(&bc2_block).is_none());
    }
}
