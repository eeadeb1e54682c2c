use super::{constants::*, likely_vtf, VtfHeader};
use crate::format::ImageFormat;
use crate::VtfParseError;
use endian_writer::{EndianReader, LittleEndianReader};
use likely_stable::unlikely;

/// Parses and validates the header of a VTF file.
///
/// # Errors
///
/// - [`VtfParseError::InputTooShort`] if `data` ends inside the header for its version.
/// - [`VtfParseError::InvalidSignature`] if `data` doesn't start with `VTF\0`.
/// - [`VtfParseError::UnsupportedVersion`] for versions other than 7.0 to 7.5.
/// - [`VtfParseError::InvalidHeaderSize`] if the declared header size is smaller than the
///   header for the version or larger than `data`.
/// - [`VtfParseError::UnknownFormat`] / [`VtfParseError::NoImageFormat`] for an unusable
///   high resolution format.
/// - [`VtfParseError::ZeroDimension`], [`VtfParseError::ZeroFrameCount`],
///   [`VtfParseError::ZeroMipmapCount`] for empty textures.
///
/// # Remarks
///
/// A stored depth of 0 is read as 1, as is the depth of files older than 7.2.
pub fn parse_header(data: &[u8]) -> Result<VtfHeader, VtfParseError> {
    if unlikely(data.len() < HEADER_SIZE_7_0) {
        return Err(VtfParseError::InputTooShort {
            required: HEADER_SIZE_7_0,
            actual: data.len(),
        });
    }

    if unlikely(!likely_vtf(data)) {
        return Err(VtfParseError::InvalidSignature);
    }

    // SAFETY: We checked data.len() >= HEADER_SIZE_7_0 (64), every fixed field up to
    // LOW_RES_HEIGHT_OFFSET (0x3E) is in bounds.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let major = unsafe { reader.read_u32_at(VERSION_MAJOR_OFFSET as isize) };
    let minor = unsafe { reader.read_u32_at(VERSION_MINOR_OFFSET as isize) };
    if unlikely(major != VTF_MAJOR_VERSION || minor > VTF_MAX_MINOR_VERSION) {
        return Err(VtfParseError::UnsupportedVersion { major, minor });
    }

    let min_size = min_header_size(minor);
    if unlikely(data.len() < min_size) {
        return Err(VtfParseError::InputTooShort {
            required: min_size,
            actual: data.len(),
        });
    }

    let header_size = unsafe { reader.read_u32_at(HEADER_SIZE_OFFSET as isize) };
    if unlikely((header_size as usize) < min_size || header_size as usize > data.len()) {
        return Err(VtfParseError::InvalidHeaderSize);
    }

    let width = read_u16(data, WIDTH_OFFSET);
    let height = read_u16(data, HEIGHT_OFFSET);
    let flags = unsafe { reader.read_u32_at(FLAGS_OFFSET as isize) };
    let frames = read_u16(data, FRAMES_OFFSET);
    let first_frame = read_u16(data, FIRST_FRAME_OFFSET);
    let reflectivity = unsafe {
        [
            f32::from_bits(reader.read_u32_at(REFLECTIVITY_OFFSET as isize)),
            f32::from_bits(reader.read_u32_at(REFLECTIVITY_OFFSET as isize + 4)),
            f32::from_bits(reader.read_u32_at(REFLECTIVITY_OFFSET as isize + 8)),
        ]
    };
    let bumpmap_scale =
        f32::from_bits(unsafe { reader.read_u32_at(BUMPMAP_SCALE_OFFSET as isize) });
    let raw_format = unsafe { reader.read_u32_at(HIGH_RES_FORMAT_OFFSET as isize) } as i32;
    let mipmap_count = data[MIPMAP_COUNT_OFFSET];
    let raw_low_res_format = unsafe { reader.read_u32_at(LOW_RES_FORMAT_OFFSET as isize) } as i32;
    let low_res_width = data[LOW_RES_WIDTH_OFFSET];
    let low_res_height = data[LOW_RES_HEIGHT_OFFSET];

    let depth = if minor >= 2 {
        read_u16(data, DEPTH_OFFSET).max(1)
    } else {
        1
    };
    let resource_count = if minor >= 3 {
        unsafe { reader.read_u32_at(RESOURCE_COUNT_OFFSET as isize) }
    } else {
        0
    };

    let pixel_format =
        ImageFormat::from_raw(raw_format).ok_or(VtfParseError::UnknownFormat(raw_format))?;
    if unlikely(pixel_format == ImageFormat::None) {
        return Err(VtfParseError::NoImageFormat);
    }
    let low_res_format = ImageFormat::from_raw(raw_low_res_format)
        .ok_or(VtfParseError::UnknownFormat(raw_low_res_format))?;

    if unlikely(width == 0 || height == 0) {
        return Err(VtfParseError::ZeroDimension);
    }
    if unlikely(frames == 0) {
        return Err(VtfParseError::ZeroFrameCount);
    }
    if unlikely(mipmap_count == 0) {
        return Err(VtfParseError::ZeroMipmapCount);
    }

    Ok(VtfHeader {
        version: (major, minor),
        header_size,
        width,
        height,
        flags,
        frames,
        first_frame,
        reflectivity,
        bumpmap_scale,
        pixel_format,
        mipmap_count,
        low_res_format,
        low_res_width,
        low_res_height,
        depth,
        resource_count,
    })
}

/// Reads a little endian u16; callers ensure `offset + 2 <= data.len()`.
#[inline(always)]
fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use endian_writer::{EndianWriter, LittleEndianWriter};

    fn write_u32(data: &mut [u8], value: u32, offset: usize) {
        let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
        unsafe { writer.write_u32_at(value, offset as isize) };
    }

    #[rstest]
    #[case(0, 64)]
    #[case(1, 64)]
    #[case(2, 80)]
    #[case(3, 88)]
    #[case(4, 88)]
    #[case(5, 88)]
    fn parses_every_supported_version(#[case] minor: u32, #[case] header_size: u32) {
        let data = VtfBuilder::new(ImageFormat::Bgra8888, 16, 8)
            .version(minor)
            .mipmap_count(3)
            .frames(2)
            .flags(TextureFlags::CLAMP_S.bits())
            .build();

        let header = parse_header(&data).unwrap();
        assert_eq!(header.version, (7, minor));
        assert_eq!(header.header_size, header_size);
        assert_eq!(header.width, 16);
        assert_eq!(header.height, 8);
        assert_eq!(header.depth, 1);
        assert_eq!(header.frames, 2);
        assert_eq!(header.mipmap_count, 3);
        assert_eq!(header.flags, TextureFlags::CLAMP_S.bits());
        assert_eq!(header.pixel_format, ImageFormat::Bgra8888);
        assert_eq!(header.low_res_format, ImageFormat::None);
        assert_eq!(header.resource_count, if minor >= 3 { 1 } else { 0 });
    }

    #[test]
    fn reads_float_fields() {
        let mut data = VtfBuilder::new(ImageFormat::Rgba8888, 1, 1).build();
        write_u32(&mut data, 0.5f32.to_bits(), REFLECTIVITY_OFFSET + 4);
        write_u32(&mut data, 2.0f32.to_bits(), BUMPMAP_SCALE_OFFSET);

        let header = parse_header(&data).unwrap();
        assert_eq!(header.reflectivity, [0.0, 0.5, 0.0]);
        assert_eq!(header.bumpmap_scale, 2.0);
    }

    #[rstest]
    #[case(1, 0, 1)]
    #[case(2, 0, 1)]
    #[case(2, 4, 4)]
    #[case(1, 4, 1)]
    fn normalizes_depth(#[case] minor: u32, #[case] stored: u16, #[case] expected: u16) {
        let mut data = VtfBuilder::new(ImageFormat::Rgba8888, 1, 1)
            .version(minor)
            .build();
        data[DEPTH_OFFSET..DEPTH_OFFSET + 2].copy_from_slice(&stored.to_le_bytes());

        assert_eq!(parse_header(&data).unwrap().depth, expected);
    }

    #[rstest]
    #[case(0, HEADER_SIZE_7_0)]
    #[case(10, HEADER_SIZE_7_0)]
    #[case(63, HEADER_SIZE_7_0)]
    fn rejects_truncated_header(#[case] len: usize, #[case] required: usize) {
        let data = VtfBuilder::new(ImageFormat::Rgba8888, 4, 4).build();
        assert_eq!(
            parse_header(&data[..len]),
            Err(VtfParseError::InputTooShort {
                required,
                actual: len
            })
        );
    }

    #[test]
    fn rejects_header_shorter_than_version_requires() {
        let data = VtfBuilder::new(ImageFormat::Rgba8888, 1, 1)
            .version(3)
            .build();
        assert_eq!(
            parse_header(&data[..79]),
            Err(VtfParseError::InputTooShort {
                required: HEADER_SIZE_7_3,
                actual: 79
            })
        );
    }

    #[test]
    fn rejects_bad_signature() {
        let mut data = VtfBuilder::new(ImageFormat::Rgba8888, 1, 1).build();
        data[3] = b'X';
        assert_eq!(parse_header(&data), Err(VtfParseError::InvalidSignature));
    }

    #[rstest]
    #[case(6, 2)]
    #[case(8, 0)]
    #[case(7, 6)]
    fn rejects_unsupported_versions(#[case] major: u32, #[case] minor: u32) {
        let mut data = VtfBuilder::new(ImageFormat::Rgba8888, 1, 1).build();
        write_u32(&mut data, major, VERSION_MAJOR_OFFSET);
        write_u32(&mut data, minor, VERSION_MINOR_OFFSET);
        assert_eq!(
            parse_header(&data),
            Err(VtfParseError::UnsupportedVersion { major, minor })
        );
    }

    #[rstest]
    #[case(0)]
    #[case(63)]
    #[case(100_000)]
    fn rejects_bad_header_size(#[case] header_size: u32) {
        let mut data = VtfBuilder::new(ImageFormat::Rgba8888, 1, 1).build();
        write_u32(&mut data, header_size, HEADER_SIZE_OFFSET);
        assert_eq!(parse_header(&data), Err(VtfParseError::InvalidHeaderSize));
    }

    #[rstest]
    #[case(27, VtfParseError::UnknownFormat(27))]
    #[case(-1, VtfParseError::NoImageFormat)]
    fn rejects_unusable_formats(#[case] raw: i32, #[case] expected: VtfParseError) {
        let mut data = VtfBuilder::new(ImageFormat::Rgba8888, 1, 1).build();
        write_u32(&mut data, raw as u32, HIGH_RES_FORMAT_OFFSET);
        assert_eq!(parse_header(&data), Err(expected));
    }

    #[rstest]
    #[case(WIDTH_OFFSET, VtfParseError::ZeroDimension)]
    #[case(HEIGHT_OFFSET, VtfParseError::ZeroDimension)]
    #[case(FRAMES_OFFSET, VtfParseError::ZeroFrameCount)]
    fn rejects_empty_textures(#[case] offset: usize, #[case] expected: VtfParseError) {
        let mut data = VtfBuilder::new(ImageFormat::Rgba8888, 1, 1).build();
        data[offset..offset + 2].copy_from_slice(&[0, 0]);
        assert_eq!(parse_header(&data), Err(expected));
    }

    #[test]
    fn rejects_zero_mipmap_count() {
        let mut data = VtfBuilder::new(ImageFormat::Rgba8888, 1, 1).build();
        data[MIPMAP_COUNT_OFFSET] = 0;
        assert_eq!(parse_header(&data), Err(VtfParseError::ZeroMipmapCount));
    }
}
