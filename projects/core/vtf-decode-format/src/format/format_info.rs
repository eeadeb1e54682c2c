use super::ImageFormat;
use crate::format::TextureFlags;
use crate::vtf::VtfHeader;

/// Static description of an [`ImageFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageFormatInfo {
    /// Display name, as used by the Source engine tools.
    pub name: &'static str,
    /// Bits per texel. Block compressed formats report their average.
    pub bits_per_pixel: u32,
    /// Bytes per texel. Zero for block compressed formats.
    pub bytes_per_pixel: u32,
    /// Whether texels are stored in 4x4 blocks.
    pub is_compressed: bool,
}

const fn info(
    name: &'static str,
    bits_per_pixel: u32,
    bytes_per_pixel: u32,
    is_compressed: bool,
) -> ImageFormatInfo {
    ImageFormatInfo {
        name,
        bits_per_pixel,
        bytes_per_pixel,
        is_compressed,
    }
}

/// Returns the metadata of `format`.
///
/// ```
/// use vtf_decode_format::format::{format_info, ImageFormat};
///
/// let info = format_info(ImageFormat::Bgr888);
/// assert_eq!(info.bytes_per_pixel, 3);
/// assert!(!info.is_compressed);
/// assert!(format_info(ImageFormat::Dxt5).is_compressed);
/// ```
pub const fn format_info(format: ImageFormat) -> ImageFormatInfo {
    match format {
        ImageFormat::None => info("NONE", 0, 0, false),
        ImageFormat::Rgba8888 => info("RGBA8888", 32, 4, false),
        ImageFormat::Abgr8888 => info("ABGR8888", 32, 4, false),
        ImageFormat::Rgb888 => info("RGB888", 24, 3, false),
        ImageFormat::Bgr888 => info("BGR888", 24, 3, false),
        ImageFormat::Rgb565 => info("RGB565", 16, 2, false),
        ImageFormat::I8 => info("I8", 8, 1, false),
        ImageFormat::Ia88 => info("IA88", 16, 2, false),
        ImageFormat::P8 => info("P8", 8, 1, false),
        ImageFormat::A8 => info("A8", 8, 1, false),
        ImageFormat::Rgb888Bluescreen => info("RGB888 Bluescreen", 24, 3, false),
        ImageFormat::Bgr888Bluescreen => info("BGR888 Bluescreen", 24, 3, false),
        ImageFormat::Argb8888 => info("ARGB8888", 32, 4, false),
        ImageFormat::Bgra8888 => info("BGRA8888", 32, 4, false),
        ImageFormat::Dxt1 => info("DXT1", 4, 0, true),
        ImageFormat::Dxt3 => info("DXT3", 8, 0, true),
        ImageFormat::Dxt5 => info("DXT5", 8, 0, true),
        ImageFormat::Bgrx8888 => info("BGRX8888", 32, 4, false),
        ImageFormat::Bgr565 => info("BGR565", 16, 2, false),
        ImageFormat::Bgrx5551 => info("BGRX5551", 16, 2, false),
        ImageFormat::Bgra4444 => info("BGRA4444", 16, 2, false),
        ImageFormat::Dxt1OneBitAlpha => info("DXT1 One Bit Alpha", 4, 0, true),
        ImageFormat::Bgra5551 => info("BGRA5551", 16, 2, false),
        ImageFormat::Uv88 => info("UV88", 16, 2, false),
        ImageFormat::Uvwq8888 => info("UVWQ8888", 32, 4, false),
        ImageFormat::Rgba16161616F => info("RGBA16161616F", 64, 8, false),
        ImageFormat::Rgba16161616 => info("RGBA16161616", 64, 8, false),
        ImageFormat::Uvlx8888 => info("UVLX8888", 32, 4, false),
        ImageFormat::Ati2n => info("ATI2N", 8, 0, true),
        ImageFormat::Ati1n => info("ATI1N", 4, 0, true),
    }
}

/// Bytes per 4x4 block of a compressed format, or [`None`] for uncompressed formats.
#[inline]
pub const fn block_size(format: ImageFormat) -> Option<usize> {
    match format {
        ImageFormat::Dxt1 | ImageFormat::Dxt1OneBitAlpha | ImageFormat::Ati1n => Some(8),
        ImageFormat::Dxt3 | ImageFormat::Dxt5 | ImageFormat::Ati2n => Some(16),
        _ => None,
    }
}

/// Returns `max(1, dimension >> level)`, the size of a dimension at a mip level.
#[inline]
pub fn mip_dimension(dimension: u32, level: u32) -> u32 {
    dimension.checked_shr(level).unwrap_or(0).max(1)
}

/// Size in bytes of one `width` x `height` x `depth` image in `format`, or [`None`] on overflow.
#[inline]
fn checked_level_size(width: u32, height: u32, depth: u32, format: ImageFormat) -> Option<usize> {
    let (width, height, depth) = (width as usize, height as usize, depth as usize);
    match block_size(format) {
        Some(block_size) => width
            .div_ceil(4)
            .checked_mul(height.div_ceil(4))?
            .checked_mul(block_size)?
            .checked_mul(depth),
        None => width
            .checked_mul(height)?
            .checked_mul(depth)?
            .checked_mul(format_info(format).bytes_per_pixel as usize),
    }
}

/// Size in bytes of a mip chain of `mip_count` levels starting at `width` x `height` x `depth`.
///
/// Each level halves every dimension, down to a minimum of 1.
/// Returns [`None`] if the size doesn't fit in a [`usize`].
pub fn checked_image_byte_size(
    width: u32,
    height: u32,
    depth: u32,
    mip_count: u32,
    format: ImageFormat,
) -> Option<usize> {
    (0..mip_count).try_fold(0usize, |total, level| {
        let level_size = checked_level_size(
            mip_dimension(width, level),
            mip_dimension(height, level),
            mip_dimension(depth, level),
            format,
        )?;
        total.checked_add(level_size)
    })
}

/// Size in bytes of a mip chain of `mip_count` levels starting at `width` x `height` x `depth`.
///
/// Saturates at [`usize::MAX`]; see [`checked_image_byte_size`].
///
/// ```
/// use vtf_decode_format::format::{image_byte_size, ImageFormat};
///
/// // 8x8 + 4x4 + 2x2 + 1x1 texels of 4 bytes
/// assert_eq!(image_byte_size(8, 8, 1, 4, ImageFormat::Rgba8888), 340);
/// // 2x2 DXT1 still occupies a whole block
/// assert_eq!(image_byte_size(2, 2, 1, 1, ImageFormat::Dxt1), 8);
/// ```
pub fn image_byte_size(
    width: u32,
    height: u32,
    depth: u32,
    mip_count: u32,
    format: ImageFormat,
) -> usize {
    checked_image_byte_size(width, height, depth, mip_count, format).unwrap_or(usize::MAX)
}

/// Number of faces stored per frame: 1, 6 for cubemaps, or 7 for cubemaps with a spheremap.
///
/// Cubemaps before 7.5 carry a trailing spheremap face unless `first_frame` is `0xFFFF`.
pub fn face_count(header: &VtfHeader) -> u8 {
    if !header.texture_flags().contains(TextureFlags::ENVMAP) {
        return 1;
    }

    if header.version.1 < 5 && header.first_frame != 0xFFFF {
        7
    } else {
        6
    }
}
