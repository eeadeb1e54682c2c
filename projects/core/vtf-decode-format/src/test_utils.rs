//! In-memory construction of small VTF files.
//!
//! Only writes what tests need: the fixed header, a resource directory for 7.3+ files,
//! an optional (zero filled) low resolution thumbnail and the high resolution image data.

use crate::format::ImageFormat;
use crate::vtf::constants::*;
use crate::vtf::{high_res_image_size, low_res_image_size, VtfHeader};
use alloc::vec;
use alloc::vec::Vec;
use endian_writer::{EndianWriter, LittleEndianWriter};

/// Builder for a VTF file held in memory.
#[derive(Debug, Clone)]
pub struct VtfBuilder {
    header: VtfHeader,
    image_data: Option<Vec<u8>>,
}

impl VtfBuilder {
    /// Starts a 7.2, single mip, single frame texture.
    pub fn new(format: ImageFormat, width: u16, height: u16) -> Self {
        Self {
            header: VtfHeader {
                width,
                height,
                pixel_format: format,
                ..VtfHeader::default()
            },
            image_data: None,
        }
    }

    /// Sets the minor version (major is always 7).
    pub fn version(mut self, minor: u32) -> Self {
        self.header.version = (VTF_MAJOR_VERSION, minor);
        self
    }

    /// Sets the raw flags field.
    pub fn flags(mut self, flags: u32) -> Self {
        self.header.flags = flags;
        self
    }

    /// Sets the number of frames.
    pub fn frames(mut self, frames: u16) -> Self {
        self.header.frames = frames;
        self
    }

    /// Sets the first frame field.
    pub fn first_frame(mut self, first_frame: u16) -> Self {
        self.header.first_frame = first_frame;
        self
    }

    /// Sets the number of mip levels.
    pub fn mipmap_count(mut self, mipmap_count: u8) -> Self {
        self.header.mipmap_count = mipmap_count;
        self
    }

    /// Sets the depth. Only stored by 7.2+ files.
    pub fn depth(mut self, depth: u16) -> Self {
        self.header.depth = depth;
        self
    }

    /// Adds a low resolution thumbnail of the given format and size.
    pub fn low_res(mut self, format: ImageFormat, width: u8, height: u8) -> Self {
        self.header.low_res_format = format;
        self.header.low_res_width = width;
        self.header.low_res_height = height;
        self
    }

    /// Sets the high resolution image data, stored as is.
    ///
    /// Without this, a pattern of the size the header calls for is generated.
    pub fn image_data(mut self, data: Vec<u8>) -> Self {
        self.image_data = Some(data);
        self
    }

    /// Returns the header this builder writes, with `header_size` and `resource_count` filled in.
    pub fn header(&self) -> VtfHeader {
        let mut header = self.header;
        header.resource_count = if header.has_resources() {
            1 + self.has_low_res() as u32
        } else {
            0
        };
        header.header_size = match header.version.1 {
            0 | 1 => HEADER_SIZE_7_0 as u32,
            2 => HEADER_SIZE_7_3 as u32,
            _ => (RESOURCE_ENTRIES_OFFSET + header.resource_count as usize * RESOURCE_ENTRY_SIZE)
                as u32,
        };
        header
    }

    /// Writes the file.
    pub fn build(&self) -> Vec<u8> {
        let header = self.header();
        let header_size = header.header_size as usize;
        let low_res_size = low_res_image_size(&header).unwrap_or(0);
        let image_data = self.image_data.clone().unwrap_or_else(|| {
            let size = high_res_image_size(&header).unwrap_or(0);
            (0..size).map(|i| (i % 251) as u8).collect()
        });

        let mut data = vec![0u8; header_size + low_res_size];
        write_header(&mut data, &header);

        if header.has_resources() {
            let mut entry = RESOURCE_ENTRIES_OFFSET;
            if self.has_low_res() {
                write_resource(&mut data, entry, RESOURCE_TAG_LOW_RES_IMAGE, header_size);
                entry += RESOURCE_ENTRY_SIZE;
            }
            write_resource(
                &mut data,
                entry,
                RESOURCE_TAG_HIGH_RES_IMAGE,
                header_size + low_res_size,
            );
        }

        data.extend_from_slice(&image_data);
        data
    }

    fn has_low_res(&self) -> bool {
        self.header.low_res_format != ImageFormat::None
    }
}

fn write_header(data: &mut [u8], header: &VtfHeader) {
    data[0..4].copy_from_slice(b"VTF\0");

    // SAFETY: data holds at least HEADER_SIZE_7_0 bytes, enough for every u32 field before 7.3.
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(header.version.0, VERSION_MAJOR_OFFSET as isize);
        writer.write_u32_at(header.version.1, VERSION_MINOR_OFFSET as isize);
        writer.write_u32_at(header.header_size, HEADER_SIZE_OFFSET as isize);
        writer.write_u32_at(header.flags, FLAGS_OFFSET as isize);
        for (i, value) in header.reflectivity.iter().enumerate() {
            writer.write_u32_at(value.to_bits(), (REFLECTIVITY_OFFSET + i * 4) as isize);
        }
        writer.write_u32_at(header.bumpmap_scale.to_bits(), BUMPMAP_SCALE_OFFSET as isize);
        writer.write_u32_at(
            header.pixel_format.raw_value() as u32,
            HIGH_RES_FORMAT_OFFSET as isize,
        );
        writer.write_u32_at(
            header.low_res_format.raw_value() as u32,
            LOW_RES_FORMAT_OFFSET as isize,
        );
    }

    data[WIDTH_OFFSET..WIDTH_OFFSET + 2].copy_from_slice(&header.width.to_le_bytes());
    data[HEIGHT_OFFSET..HEIGHT_OFFSET + 2].copy_from_slice(&header.height.to_le_bytes());
    data[FRAMES_OFFSET..FRAMES_OFFSET + 2].copy_from_slice(&header.frames.to_le_bytes());
    data[FIRST_FRAME_OFFSET..FIRST_FRAME_OFFSET + 2]
        .copy_from_slice(&header.first_frame.to_le_bytes());
    data[MIPMAP_COUNT_OFFSET] = header.mipmap_count;
    data[LOW_RES_WIDTH_OFFSET] = header.low_res_width;
    data[LOW_RES_HEIGHT_OFFSET] = header.low_res_height;

    if header.version.1 >= 2 {
        data[DEPTH_OFFSET..DEPTH_OFFSET + 2].copy_from_slice(&header.depth.to_le_bytes());
    }
    if header.has_resources() {
        data[RESOURCE_COUNT_OFFSET..RESOURCE_COUNT_OFFSET + 4]
            .copy_from_slice(&header.resource_count.to_le_bytes());
    }
}

fn write_resource(data: &mut [u8], entry: usize, tag: [u8; 3], offset: usize) {
    data[entry..entry + 3].copy_from_slice(&tag);
    data[entry + 3] = 0;
    data[entry + 4..entry + 8].copy_from_slice(&(offset as u32).to_le_bytes());
}
