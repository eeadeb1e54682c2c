//! Decompression of whole 2D planes of DXT blocks into tightly packed RGBA8888.

use crate::util::{decode_bc1_block, decode_bc2_block, decode_bc3_block};
use crate::DecompressError;
use likely_stable::unlikely;
use vtf_decode_common::decoded_4x4_block::Decoded4x4Block;

/// Size in bytes of a DXT1 block.
pub const DXT1_BLOCK_SIZE: usize = 8;
/// Size in bytes of a DXT3 or DXT5 block.
pub const DXT3_DXT5_BLOCK_SIZE: usize = 16;

/// Returns the number of bytes a `width` x `height` plane of blocks of `block_size` bytes occupies.
///
/// Partial blocks on the right and bottom edges are counted as whole blocks.
/// Returns [`None`] on overflow.
#[inline]
pub fn compressed_plane_size(width: usize, height: usize, block_size: usize) -> Option<usize> {
    width
        .div_ceil(4)
        .checked_mul(height.div_ceil(4))?
        .checked_mul(block_size)
}

/// Decompresses a DXT1 plane (with or without one bit alpha) into `dst`.
///
/// `dst` receives `width * height` RGBA8888 pixels, row-major with no padding.
/// Pixels of edge blocks which lie outside the image are discarded.
///
/// # Errors
///
/// - [`DecompressError::SourceTooShort`] if `src` has fewer bytes than the plane's blocks.
/// - [`DecompressError::DestinationTooSmall`] if `dst` can't hold `width * height * 4` bytes.
///
/// # Example
///
/// ```
/// use vtf_decode_dxt::decompress_dxt1;
///
/// let block = [0x00, 0xF8, 0x00, 0xF8, 0, 0, 0, 0]; // solid red
/// let mut rgba = [0u8; 2 * 2 * 4];
/// decompress_dxt1(&block, &mut rgba, 2, 2).unwrap();
/// assert_eq!(&rgba[0..4], &[255, 0, 0, 255]);
/// ```
pub fn decompress_dxt1(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
) -> Result<(), DecompressError> {
    decompress_plane::<DXT1_BLOCK_SIZE>(src, dst, width, height, decode_bc1_block)
}

/// Decompresses a DXT3 plane into `dst`.
///
/// See [`decompress_dxt1`] for the output layout and errors.
pub fn decompress_dxt3(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
) -> Result<(), DecompressError> {
    decompress_plane::<DXT3_DXT5_BLOCK_SIZE>(src, dst, width, height, decode_bc2_block)
}

/// Decompresses a DXT5 plane into `dst`.
///
/// See [`decompress_dxt1`] for the output layout and errors.
pub fn decompress_dxt5(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
) -> Result<(), DecompressError> {
    decompress_plane::<DXT3_DXT5_BLOCK_SIZE>(src, dst, width, height, decode_bc3_block)
}

#[inline(always)]
fn decompress_plane<const BLOCK_SIZE: usize>(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
    decode_block: unsafe fn(*const u8) -> Decoded4x4Block,
) -> Result<(), DecompressError> {
    let required_src = compressed_plane_size(width, height, BLOCK_SIZE).unwrap_or(usize::MAX);
    if unlikely(src.len() < required_src) {
        return Err(DecompressError::SourceTooShort {
            required: required_src,
            actual: src.len(),
        });
    }

    let row_pitch = width.saturating_mul(4);
    let required_dst = row_pitch.saturating_mul(height);
    if unlikely(dst.len() < required_dst) {
        return Err(DecompressError::DestinationTooSmall {
            required: required_dst,
            actual: dst.len(),
        });
    }

    let blocks_wide = width.div_ceil(4);
    for (block_idx, block) in src[..required_src].chunks_exact(BLOCK_SIZE).enumerate() {
        let block_x = (block_idx % blocks_wide) * 4;
        let block_y = (block_idx / blocks_wide) * 4;

        // SAFETY: chunks_exact yields exactly BLOCK_SIZE bytes, which each decoder reads.
        let decoded = unsafe { decode_block(block.as_ptr()) };

        let copy_width = (width - block_x).min(4) * 4;
        let copy_height = (height - block_y).min(4);
        for row in 0..copy_height {
            let dst_offset = (block_y + row) * row_pitch + block_x * 4;
            dst[dst_offset..dst_offset + copy_width]
                .copy_from_slice(&decoded.row_bytes(row)[..copy_width]);
        }
    }

    Ok(())
}
