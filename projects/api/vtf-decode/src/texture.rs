//! The decoded texture and its metadata queries.

use crate::decode::decode_image_data;
use crate::layout::TextureLayout;
use crate::DecodeError;
use alloc::vec::Vec;
use log::{debug, warn};
use vtf_decode_format::format::{
    face_count, format_info, mip_dimension, ImageFormat, ImageFormatInfo, TextureFlags,
};
use vtf_decode_format::vtf::{parse_header, parse_image_data, VtfHeader};

/// A VTF texture decoded into memory.
///
/// Either fully valid, or invalid: every query of an invalid texture returns zero or a default
/// value. Check [`VtfTexture::is_valid`] before trusting any result.
///
/// Block compressed images are decompressed to [`ImageFormat::Rgba8888`] on construction,
/// other images are kept in their stored format. Either way [`VtfTexture::image_data`] holds
/// every mip level (smallest first), frame, face and depth slice; see [`crate::layout`].
///
/// Cloning duplicates the decoded buffer; clones share nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VtfTexture {
    header: Option<VtfHeader>,
    image_data: Vec<u8>,
    face_count: u8,
}

impl VtfTexture {
    /// Decodes a VTF file held in memory.
    ///
    /// Never fails; a file which can't be decoded produces an invalid texture.
    /// Use [`VtfTexture::try_new`] to find out why.
    pub fn new(data: &[u8]) -> Self {
        Self::from_bytes(data, false)
    }

    /// Reads only the header of a VTF file.
    ///
    /// Metadata queries work as for a fully decoded texture. The image data isn't decoded, so
    /// pixel reads and samples return [`Pixel::default`](crate::Pixel::default).
    pub fn new_header_only(data: &[u8]) -> Self {
        Self::from_bytes(data, true)
    }

    /// Decodes a VTF file, or only its header if `header_only` is set.
    ///
    /// Failures are logged and produce an invalid texture.
    pub fn from_bytes(data: &[u8], header_only: bool) -> Self {
        match Self::try_new(data, header_only) {
            Ok(texture) => texture,
            Err(e) => {
                warn!("Failed to decode VTF texture: {e}");
                Self::default()
            }
        }
    }

    /// Decodes a VTF file, or only its header if `header_only` is set.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Parse`] if the header is invalid or the image data doesn't fit in `data`.
    /// - [`DecodeError::UnsupportedCompressedFormat`] for block compressed formats other than
    ///   DXT1, DXT3 and DXT5.
    /// - [`DecodeError::Allocate`] if the decoded buffer can't be allocated.
    /// - [`DecodeError::Decompress`] if a compressed plane can't be decompressed.
    pub fn try_new(data: &[u8], header_only: bool) -> Result<Self, DecodeError> {
        let mut header = parse_header(data)?;
        let face_count = face_count(&header);
        debug!(
            "VTF {}.{}: {}x{}x{}, {} mips, {} frames, {} faces, {}",
            header.version.0,
            header.version.1,
            header.width,
            header.height,
            header.depth,
            header.mipmap_count,
            header.frames,
            face_count,
            format_info(header.pixel_format).name
        );

        if header_only {
            return Ok(Self {
                header: Some(header),
                image_data: Vec::new(),
                face_count,
            });
        }

        let image_data = parse_image_data(data, &header)?;
        let image_data = decode_image_data(&mut header, image_data)?;
        Ok(Self {
            header: Some(header),
            image_data,
            face_count,
        })
    }

    /// Whether the texture was decoded successfully.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.header.is_some()
    }

    /// The parsed header, with the pixel format updated to the format of the decoded data.
    #[inline]
    pub fn header(&self) -> Option<&VtfHeader> {
        self.header.as_ref()
    }

    /// Layout of [`VtfTexture::image_data`].
    #[inline]
    pub fn layout(&self) -> Option<TextureLayout> {
        self.header.as_ref().map(TextureLayout::from_header)
    }

    /// Format the image data is held in. [`ImageFormat::None`] if invalid.
    #[inline]
    pub fn pixel_format(&self) -> ImageFormat {
        self.header
            .map(|header| header.pixel_format)
            .unwrap_or(ImageFormat::None)
    }

    /// Description of [`VtfTexture::pixel_format`].
    #[inline]
    pub fn format(&self) -> ImageFormatInfo {
        format_info(self.pixel_format())
    }

    /// Major version of the file.
    pub fn version_major(&self) -> u32 {
        self.header.map(|header| header.version.0).unwrap_or(0)
    }

    /// Minor version of the file.
    pub fn version_minor(&self) -> u32 {
        self.header.map(|header| header.version.1).unwrap_or(0)
    }

    /// Width of mip level `mip`: `max(1, width >> mip)`.
    pub fn width(&self, mip: u32) -> u32 {
        self.header
            .map(|header| mip_dimension(header.width as u32, mip))
            .unwrap_or(0)
    }

    /// Height of mip level `mip`: `max(1, height >> mip)`.
    pub fn height(&self, mip: u32) -> u32 {
        self.header
            .map(|header| mip_dimension(header.height as u32, mip))
            .unwrap_or(0)
    }

    /// Depth of mip level `mip`: `max(1, depth >> mip)`.
    pub fn depth(&self, mip: u32) -> u32 {
        self.header
            .map(|header| mip_dimension(header.depth as u32, mip))
            .unwrap_or(0)
    }

    /// Number of mip levels.
    pub fn mip_levels(&self) -> u32 {
        self.header
            .map(|header| header.mipmap_count as u32)
            .unwrap_or(0)
    }

    /// Number of animation frames.
    pub fn frames(&self) -> u32 {
        self.header.map(|header| header.frames as u32).unwrap_or(0)
    }

    /// Frame an animation starts at.
    pub fn first_frame(&self) -> u32 {
        self.header
            .map(|header| header.first_frame as u32)
            .unwrap_or(0)
    }

    /// Number of faces per frame: 1, 6 for cubemaps, or 7 for cubemaps with a spheremap.
    pub fn face_count(&self) -> u32 {
        self.face_count as u32
    }

    /// Flags of the texture.
    pub fn flags(&self) -> TextureFlags {
        self.header
            .map(|header| header.texture_flags())
            .unwrap_or_default()
    }

    /// Average colour of the texture, as stored by the tools that made it.
    pub fn reflectivity(&self) -> [f32; 3] {
        self.header
            .map(|header| header.reflectivity)
            .unwrap_or_default()
    }

    /// Scale of the bumpmap, if the texture is one.
    pub fn bumpmap_scale(&self) -> f32 {
        self.header
            .map(|header| header.bumpmap_scale)
            .unwrap_or(0.0)
    }

    /// The decoded image data. Empty if invalid or only the header was read.
    #[inline]
    pub fn image_data(&self) -> &[u8] {
        &self.image_data
    }

    /// Size of [`VtfTexture::image_data`] in bytes.
    #[inline]
    pub fn image_data_size(&self) -> usize {
        self.image_data.len()
    }
}
