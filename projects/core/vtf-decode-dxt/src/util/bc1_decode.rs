//! BC1 (DXT1) decoding implementation; based on etcpak
//! <https://github.com/wolfpld/etcpak> and MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d9/opaque-and-1-bit-alpha-textures>
//!
//! Uses the 'ideal' rounding/computing method described in the DX9 docs, as opposed to DX10, AMD or Nvidia
//! method.
//!
//! DXT1 and DXT1 with one bit alpha share a single block layout; the punch-through alpha is
//! selected per block by the ordering of the two endpoints.

use vtf_decode_common::{
    color_565::Color565, color_8888::Color8888, decoded_4x4_block::Decoded4x4Block,
};

/// Builds the 4 entry colour palette of the 8 byte colour half of a DXT block.
///
/// When `allow_punch_through` is set and `c0 <= c1`, the block uses the three colour mode:
/// index 2 is the midpoint and index 3 is transparent black. DXT3 and DXT5 always use the
/// four colour mode.
///
/// # Safety
///
/// `color_src` must point to at least 8 bytes of valid memory.
#[inline(always)]
pub(crate) unsafe fn read_color_block(
    color_src: *const u8,
    allow_punch_through: bool,
) -> ([Color8888; 4], u32) {
    let c0 = Color565::from_le_bytes([*color_src, *color_src.add(1)]);
    let c1 = Color565::from_le_bytes([*color_src.add(2), *color_src.add(3)]);
    let indices: u32 = u32::from_le_bytes([
        *color_src.add(4),
        *color_src.add(5),
        *color_src.add(6),
        *color_src.add(7),
    ]);

    let (r0, g0, b0) = (c0.red() as u32, c0.green() as u32, c0.blue() as u32);
    let (r1, g1, b1) = (c1.red() as u32, c1.green() as u32, c1.blue() as u32);

    let mut dict = [Color8888::default(); 4];
    dict[0] = c0.to_color_8888();
    dict[1] = c1.to_color_8888();

    if !allow_punch_through || c0.greater_than(&c1) {
        dict[2] = Color8888::new(
            ((2 * r0 + r1) / 3) as u8,
            ((2 * g0 + g1) / 3) as u8,
            ((2 * b0 + b1) / 3) as u8,
            255,
        );
        dict[3] = Color8888::new(
            ((r0 + 2 * r1) / 3) as u8,
            ((g0 + 2 * g1) / 3) as u8,
            ((b0 + 2 * b1) / 3) as u8,
            255,
        );
    } else {
        dict[2] = Color8888::new(
            ((r0 + r1) / 2) as u8,
            ((g0 + g1) / 2) as u8,
            ((b0 + b1) / 2) as u8,
            255,
        );
        // Transparent black
        dict[3] = Color8888::new(0, 0, 0, 0);
    }

    (dict, indices)
}

/// Decodes a BC1 block into a structured representation of pixels
///
/// # Parameters
///
/// - `src`: Pointer to the source BC1 block (must point to at least 8 bytes of valid memory)
///
/// # Returns
///
/// A [`Decoded4x4Block`] containing all 16 decoded pixels
///
/// # Safety
///
/// The caller must ensure that `src` points to at least 8 bytes of valid memory.
///
/// # Example
///
/// ```
/// use vtf_decode_dxt::util::decode_bc1_block;
///
/// let bc1_block = [0u8; 8]; // Compressed BC1 block
///
/// unsafe {
///     let decoded = decode_bc1_block(bc1_block.as_ptr());
///     let pixel_at_0_0 = decoded.get_pixel_unchecked(0, 0);
/// }
/// ```
#[inline(always)]
pub unsafe fn decode_bc1_block(src: *const u8) -> Decoded4x4Block {
    let (dict, indices) = read_color_block(src, true);

    let mut result = Decoded4x4Block::new(Color8888::default());
    let mut index_pos = 0;
    for y in 0..4 {
        for x in 0..4 {
            let pixel_idx = (indices >> index_pos) & 0x3;
            result.set_pixel_unchecked(x, y, *dict.get_unchecked(pixel_idx as usize));
            index_pos += 2;
        }
    }

    result
}

/// Safely wraps the unsafe [`decode_bc1_block`] function for use with slices
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is too short.
#[inline(always)]
pub fn decode_bc1_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    if src.len() < 8 {
        return None;
    }
    unsafe { Some(decode_bc1_block(src.as_ptr())) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    // There is also a fuzz test against rgbcx-sys, so this only covers the two block modes.

    #[test]
    fn can_decode_four_color_block() {
        let bc1_block = [
            0x00, 0xF8, // c0 = red
            0x1F, 0x00, // c1 = blue
            0b11_10_01_00, // row 0: indices 0, 1, 2, 3
            0x00,
            0x00,
            0x00,
        ];

        let decoded = decode_bc1_block_from_slice(&bc1_block).unwrap();

        let red = Color8888::new(255, 0, 0, 255);
        assert_eq!(decoded.get_pixel(0, 0), Some(red));
        assert_eq!(decoded.get_pixel(1, 0), Some(Color8888::new(0, 0, 255, 255)));
        assert_eq!(decoded.get_pixel(2, 0), Some(Color8888::new(170, 0, 85, 255)));
        assert_eq!(decoded.get_pixel(3, 0), Some(Color8888::new(85, 0, 170, 255)));
        assert!(decoded.pixels[4..].iter().all(|&p| p == red));
    }

    #[test]
    fn can_decode_three_color_block_with_transparent_black() {
        let bc1_block = [
            0x1F, 0x00, // c0 = blue
            0x00, 0xF8, // c1 = red (c0 <= c1 selects three colour mode)
            0b11_10_01_00,
            0xFF, // row 1: all index 3
            0x00,
            0x00,
        ];

        let decoded = decode_bc1_block_from_slice(&bc1_block).unwrap();

        assert_eq!(decoded.get_pixel(2, 0), Some(Color8888::new(127, 0, 127, 255)));
        assert_eq!(decoded.get_pixel(3, 0), Some(Color8888::new(0, 0, 0, 0)));
        for x in 0..4 {
            assert_eq!(decoded.get_pixel(x, 1), Some(Color8888::new(0, 0, 0, 0)));
        }
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn equal_endpoints_are_opaque_unless_index_3(#[case] allow_punch_through: bool) {
        let color_block: [u8; 8] = [0x00, 0xF8, 0x00, 0xF8, 0x00, 0x00, 0x00, 0x00];
        let (dict, indices) = unsafe { read_color_block(color_block.as_ptr(), allow_punch_through) };
        assert_eq!(indices, 0);
        assert_eq!(dict[0], dict[1]);
        assert_eq!(dict[2].a, 255);
        assert_eq!(dict[3].a, if allow_punch_through { 0 } else { 255 });
    }

    #[test]
    fn test_slice_too_small() {
        let too_small = [0u8; 7];
        assert!(decode_bc1_block_from_slice(&too_small).is_none());
    }
}
