use crate::format::{ImageFormat, TextureFlags};

/// The fixed size VTF header, as read by [`parse_header`](super::parse_header).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VtfHeader {
    /// Major and minor version, e.g. `(7, 2)`.
    pub version: (u32, u32),
    /// Size of the header, including the 7.3+ resource directory.
    pub header_size: u32,
    /// Width of the largest mip level.
    pub width: u16,
    /// Height of the largest mip level.
    pub height: u16,
    /// Raw flags; see [`TextureFlags`].
    pub flags: u32,
    /// Number of animation frames.
    pub frames: u16,
    /// First frame of the animation. `0xFFFF` on cubemaps without a spheremap.
    pub first_frame: u16,
    /// Average colour of the texture, used for radiosity.
    pub reflectivity: [f32; 3],
    /// Bump map scale.
    pub bumpmap_scale: f32,
    /// Format of the high resolution image.
    pub pixel_format: ImageFormat,
    /// Number of mip levels, including the largest.
    pub mipmap_count: u8,
    /// Format of the low resolution thumbnail, [`ImageFormat::None`] if absent.
    pub low_res_format: ImageFormat,
    /// Width of the low resolution thumbnail.
    pub low_res_width: u8,
    /// Height of the low resolution thumbnail.
    pub low_res_height: u8,
    /// Depth of the largest mip level. Always at least 1.
    pub depth: u16,
    /// Number of 7.3+ resource entries. Zero before 7.3.
    pub resource_count: u32,
}

impl VtfHeader {
    /// Returns the flags field as [`TextureFlags`].
    #[inline]
    pub fn texture_flags(&self) -> TextureFlags {
        TextureFlags(self.flags)
    }

    /// Returns `true` if the file uses a 7.3+ resource directory.
    #[inline]
    pub fn has_resources(&self) -> bool {
        self.version.1 >= 3
    }
}

impl Default for VtfHeader {
    fn default() -> Self {
        Self {
            version: (7, 2),
            header_size: 0,
            width: 1,
            height: 1,
            flags: 0,
            frames: 1,
            first_frame: 0,
            reflectivity: [0.0; 3],
            bumpmap_scale: 1.0,
            pixel_format: ImageFormat::None,
            mipmap_count: 1,
            low_res_format: ImageFormat::None,
            low_res_width: 0,
            low_res_height: 0,
            depth: 1,
            resource_count: 0,
        }
    }
}
