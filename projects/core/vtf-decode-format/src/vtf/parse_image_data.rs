use super::{constants::*, VtfHeader};
use crate::format::{checked_image_byte_size, face_count, ImageFormat};
use crate::VtfParseError;
use endian_writer::{EndianReader, LittleEndianReader};
use likely_stable::unlikely;
use log::debug;

/// Location of the high resolution image data within a VTF file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDataLocation {
    /// Offset from the start of the file.
    pub offset: usize,
    /// Length in bytes: every mip level, frame, face and slice.
    pub length: usize,
}

/// Returns the high resolution image data of a VTF file, borrowed from `data`.
///
/// `header` must have been parsed from the same `data` by [`parse_header`](super::parse_header).
///
/// # Errors
///
/// See [`locate_image_data`].
pub fn parse_image_data<'a>(
    data: &'a [u8],
    header: &VtfHeader,
) -> Result<&'a [u8], VtfParseError> {
    let location = locate_image_data(data, header)?;
    Ok(&data[location.offset..location.offset + location.length])
}

/// Finds where the high resolution image data of a VTF file lies.
///
/// Files before 7.3 store it after the header and the low resolution thumbnail.
/// From 7.3 onwards it is found through the resource directory.
///
/// # Errors
///
/// - [`VtfParseError::TooManyResources`] / [`VtfParseError::InputTooShort`] for a resource
///   directory that is too large or doesn't fit in `data`.
/// - [`VtfParseError::MissingHighResResource`] if the directory has no image entry.
/// - [`VtfParseError::SizeOverflow`] if the image size can't be represented.
/// - [`VtfParseError::ImageDataOutOfBounds`] if the image extends past the end of `data`.
pub fn locate_image_data(
    data: &[u8],
    header: &VtfHeader,
) -> Result<ImageDataLocation, VtfParseError> {
    let offset = if header.has_resources() {
        find_high_res_resource(data, header)?
    } else {
        (header.header_size as usize)
            .checked_add(low_res_image_size(header).ok_or(VtfParseError::SizeOverflow)?)
            .ok_or(VtfParseError::SizeOverflow)?
    };

    let length = high_res_image_size(header).ok_or(VtfParseError::SizeOverflow)?;
    let end = offset
        .checked_add(length)
        .ok_or(VtfParseError::SizeOverflow)?;
    if unlikely(end > data.len()) {
        return Err(VtfParseError::ImageDataOutOfBounds {
            offset,
            length,
            available: data.len(),
        });
    }

    debug!(
        "VTF {}.{} image data: {} bytes at offset {}",
        header.version.0, header.version.1, length, offset
    );
    Ok(ImageDataLocation { offset, length })
}

/// Size in bytes of the full high resolution image: every mip level, frame, face and slice.
pub fn high_res_image_size(header: &VtfHeader) -> Option<usize> {
    checked_image_byte_size(
        header.width as u32,
        header.height as u32,
        header.depth as u32,
        header.mipmap_count as u32,
        header.pixel_format,
    )?
    .checked_mul(header.frames as usize)?
    .checked_mul(face_count(header) as usize)
}

/// Size in bytes of the low resolution thumbnail; zero if the file has none.
pub fn low_res_image_size(header: &VtfHeader) -> Option<usize> {
    if header.low_res_format == ImageFormat::None
        || header.low_res_width == 0
        || header.low_res_height == 0
    {
        return Some(0);
    }

    checked_image_byte_size(
        header.low_res_width as u32,
        header.low_res_height as u32,
        1,
        1,
        header.low_res_format,
    )
}

fn find_high_res_resource(data: &[u8], header: &VtfHeader) -> Result<usize, VtfParseError> {
    if unlikely(header.resource_count > MAX_RESOURCES) {
        return Err(VtfParseError::TooManyResources(header.resource_count));
    }

    let directory_end =
        RESOURCE_ENTRIES_OFFSET + header.resource_count as usize * RESOURCE_ENTRY_SIZE;
    if unlikely(data.len() < directory_end) {
        return Err(VtfParseError::InputTooShort {
            required: directory_end,
            actual: data.len(),
        });
    }

    // SAFETY: Every entry lies below directory_end, which we checked is within data.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    (0..header.resource_count as usize)
        .map(|index| RESOURCE_ENTRIES_OFFSET + index * RESOURCE_ENTRY_SIZE)
        .find(|&entry| data[entry..entry + 3] == RESOURCE_TAG_HIGH_RES_IMAGE)
        .map(|entry| unsafe { reader.read_u32_at(entry as isize + 4) } as usize)
        .ok_or(VtfParseError::MissingHighResResource)
}
