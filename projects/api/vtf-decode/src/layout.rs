//! Where each texel of a decoded texture lives in its buffer.
//!
//! The decoded buffer stores mip levels from the smallest to the largest. Each level holds
//! every frame; each frame every face; each face every depth slice; each slice is a
//! tightly packed, row-major image:
//!
//! ```text
//! [mip N-1] [mip N-2] ... [mip 0]
//!            |
//!            +-- [frame 0] [frame 1] ...
//!                 |
//!                 +-- [face 0] [face 1] ...
//!                      |
//!                      +-- [slice 0] [slice 1] ...
//! ```
//!
//! Every query returns [`None`] for indices outside the texture, or if the offset can't be
//! represented, so callers never read a neighbouring plane by accident.

use vtf_decode_format::format::{
    checked_image_byte_size, face_count, format_info, mip_dimension, ImageFormat,
};
use vtf_decode_format::vtf::VtfHeader;

/// Describes the layout of the buffer of a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureLayout {
    width: u32,
    height: u32,
    depth: u32,
    mip_levels: u32,
    frames: u32,
    faces: u32,
    format: ImageFormat,
}

/// Dimensions and byte offsets of one mip level within a [`TextureLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelLayout {
    /// Width of the level in texels.
    pub width: u32,
    /// Height of the level in texels.
    pub height: u32,
    /// Number of depth slices in the level.
    pub depth: u32,
    /// Offset of the level from the start of the buffer.
    pub offset: usize,
    /// Size of one texel.
    pub pixel_size: usize,
    /// Size of one depth slice.
    pub slice_size: usize,
    /// Size of one face (all of its slices).
    pub face_size: usize,
    /// Size of one frame (all of its faces).
    pub frame_size: usize,
}

impl TextureLayout {
    /// Creates the layout of a texture stored in `format`, with the dimensions and counts of `header`.
    pub fn new(header: &VtfHeader, format: ImageFormat) -> Self {
        Self {
            width: header.width as u32,
            height: header.height as u32,
            depth: header.depth as u32,
            mip_levels: header.mipmap_count as u32,
            frames: header.frames as u32,
            faces: face_count(header) as u32,
            format,
        }
    }

    /// Creates the layout of a texture stored in the header's own pixel format.
    pub fn from_header(header: &VtfHeader) -> Self {
        Self::new(header, header.pixel_format)
    }

    /// Format the texels are stored in.
    #[inline]
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Number of mip levels.
    #[inline]
    pub fn mip_levels(&self) -> u32 {
        self.mip_levels
    }

    /// Number of frames.
    #[inline]
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Number of faces per frame.
    #[inline]
    pub fn faces(&self) -> u32 {
        self.faces
    }

    /// Size of one `width` x `height` x `depth` plane of level `mip`, including every frame and face.
    fn stored_level_size(&self, mip: u32) -> Option<usize> {
        checked_image_byte_size(
            mip_dimension(self.width, mip),
            mip_dimension(self.height, mip),
            mip_dimension(self.depth, mip),
            1,
            self.format,
        )?
        .checked_mul(self.faces as usize)?
        .checked_mul(self.frames as usize)
    }

    /// Size in bytes of the whole buffer.
    pub fn total_size(&self) -> Option<usize> {
        (0..self.mip_levels).try_fold(0usize, |total, mip| {
            total.checked_add(self.stored_level_size(mip)?)
        })
    }

    /// Offset of mip level `mip`: the size of every smaller level stored before it.
    pub fn level_offset(&self, mip: u32) -> Option<usize> {
        if mip >= self.mip_levels {
            return None;
        }

        ((mip + 1)..self.mip_levels).try_fold(0usize, |offset, smaller| {
            offset.checked_add(self.stored_level_size(smaller)?)
        })
    }

    /// Returns the dimensions and offsets of mip level `mip`.
    ///
    /// [`None`] if the level doesn't exist or the layout's format isn't addressable per texel
    /// (block compressed, or [`ImageFormat::None`]).
    pub fn level(&self, mip: u32) -> Option<LevelLayout> {
        let pixel_size = format_info(self.format).bytes_per_pixel as usize;
        if pixel_size == 0 {
            return None;
        }

        let offset = self.level_offset(mip)?;
        let width = mip_dimension(self.width, mip);
        let height = mip_dimension(self.height, mip);
        let depth = mip_dimension(self.depth, mip);

        let slice_size = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(pixel_size)?;
        let face_size = slice_size.checked_mul(depth as usize)?;
        let frame_size = face_size.checked_mul(self.faces as usize)?;

        Some(LevelLayout {
            width,
            height,
            depth,
            offset,
            pixel_size,
            slice_size,
            face_size,
            frame_size,
        })
    }

    /// Offset of the first texel of depth slice `z` of a face of a frame, at level `mip`.
    pub fn slice_offset(&self, mip: u32, frame: u32, face: u32, z: u32) -> Option<usize> {
        let level = self.level(mip)?;
        level.slice_offset(frame, face, z, self)
    }

    /// Offset of the texel at (`x`, `y`, `z`) of a face of a frame, at level `mip`.
    pub fn pixel_offset(
        &self,
        mip: u32,
        frame: u32,
        face: u32,
        z: u32,
        y: u32,
        x: u32,
    ) -> Option<usize> {
        let level = self.level(mip)?;
        if x >= level.width || y >= level.height {
            return None;
        }

        let slice = level.slice_offset(frame, face, z, self)?;
        let row = (y as usize).checked_mul(level.width as usize)?;
        slice.checked_add(row.checked_add(x as usize)?.checked_mul(level.pixel_size)?)
    }
}

impl LevelLayout {
    /// Offset of the first texel of slice `z` of a face of a frame within `layout`.
    pub fn slice_offset(
        &self,
        frame: u32,
        face: u32,
        z: u32,
        layout: &TextureLayout,
    ) -> Option<usize> {
        if frame >= layout.frames || face >= layout.faces || z >= self.depth {
            return None;
        }

        self.offset
            .checked_add((frame as usize).checked_mul(self.frame_size)?)?
            .checked_add((face as usize).checked_mul(self.face_size)?)?
            .checked_add((z as usize).checked_mul(self.slice_size)?)
    }
}
