//! Turns the raw image data of a VTF file into the buffer a [`VtfTexture`](crate::VtfTexture) owns.

use crate::layout::TextureLayout;
use crate::DecodeError;
use alloc::vec::Vec;
use log::{debug, trace};
use vtf_decode_common::allocate::{allocate_copy, allocate_zeroed};
use vtf_decode_dxt::{decompress_dxt1, decompress_dxt3, decompress_dxt5, DecompressError};
use vtf_decode_format::format::{format_info, image_byte_size, mip_dimension, ImageFormat};
use vtf_decode_format::vtf::VtfHeader;
use vtf_decode_format::VtfParseError;

/// Format every block compressed texture is decompressed into.
pub(crate) const CANONICAL_FORMAT: ImageFormat = ImageFormat::Rgba8888;

/// Signature shared by the plane decompressors.
type DecompressFn = fn(&[u8], &mut [u8], usize, usize) -> Result<(), DecompressError>;

/// Decodes `image_data` (every mip level, frame, face and slice of the texture described by
/// `header`) into a newly allocated buffer.
///
/// Uncompressed data is copied verbatim. Block compressed data is decompressed into
/// [`CANONICAL_FORMAT`], after which `header.pixel_format` is set to it.
/// On error `header` is left untouched.
pub(crate) fn decode_image_data(
    header: &mut VtfHeader,
    image_data: &[u8],
) -> Result<Vec<u8>, DecodeError> {
    let info = format_info(header.pixel_format);
    if !info.is_compressed {
        debug!(
            "Copying {} bytes of {} image data",
            image_data.len(),
            info.name
        );
        return Ok(allocate_copy(image_data)?);
    }

    let decompress = decompressor_for(header.pixel_format)?;
    let layout = TextureLayout::new(header, CANONICAL_FORMAT);
    let decoded_size = layout.total_size().ok_or(VtfParseError::SizeOverflow)?;
    let mut decoded = allocate_zeroed(decoded_size)?;
    debug!(
        "Decompressing {} bytes of {} into {} bytes of {}",
        image_data.len(),
        info.name,
        decoded_size,
        format_info(CANONICAL_FORMAT).name
    );

    let mut src_offset = 0usize;
    let mut dst_offset = 0usize;
    for mip in (0..layout.mip_levels()).rev() {
        let width = mip_dimension(header.width as u32, mip);
        let height = mip_dimension(header.height as u32, mip);
        let depth = mip_dimension(header.depth as u32, mip);
        let src_plane_size = image_byte_size(width, height, 1, 1, header.pixel_format);
        let dst_plane_size = image_byte_size(width, height, 1, 1, CANONICAL_FORMAT);
        trace!(
            "Mip {mip}: {width}x{height}x{depth}, {} planes",
            layout.frames() * layout.faces() * depth
        );

        for _frame in 0..layout.frames() {
            for _face in 0..layout.faces() {
                for _slice in 0..depth {
                    let src = image_data.get(src_offset..).unwrap_or_default();
                    let dst = decoded.get_mut(dst_offset..).unwrap_or_default();
                    decompress(src, dst, width as usize, height as usize)?;

                    src_offset = src_offset.saturating_add(src_plane_size);
                    dst_offset = dst_offset.saturating_add(dst_plane_size);
                }
            }
        }
    }

    header.pixel_format = CANONICAL_FORMAT;
    Ok(decoded)
}

/// Picks the plane decompressor for a block compressed format.
fn decompressor_for(format: ImageFormat) -> Result<DecompressFn, DecodeError> {
    match format {
        ImageFormat::Dxt1 | ImageFormat::Dxt1OneBitAlpha => Ok(decompress_dxt1 as DecompressFn),
        ImageFormat::Dxt3 => Ok(decompress_dxt3 as DecompressFn),
        ImageFormat::Dxt5 => Ok(decompress_dxt5 as DecompressFn),
        other => Err(DecodeError::UnsupportedCompressedFormat(other)),
    }
}
