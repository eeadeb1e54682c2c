//! Tests for decoding textures straight from files
#![cfg(feature = "file-io")]

use std::io::Write;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};
use vtf_decode::{DecodeError, FileDecodeError, ImageFormat, VtfTexture};
use vtf_decode_format::test_utils::VtfBuilder;
use vtf_decode_format::VtfParseError;

/// Helper to create a temporary `.vtf` file holding `data`.
fn create_input_file(data: &[u8]) -> NamedTempFile {
    let mut file = Builder::new()
        .suffix(".vtf")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(data).expect("Failed to write input data");
    file.flush().expect("Failed to flush input data");
    file
}

#[test]
fn decodes_the_same_as_in_memory() {
    let data = VtfBuilder::new(ImageFormat::Dxt1, 32, 16)
        .mipmap_count(6)
        .frames(2)
        .build();
    let file = create_input_file(&data);

    let texture = VtfTexture::from_file(file.path(), false).expect("File should decode");

    assert!(texture.is_valid());
    assert_eq!(texture, VtfTexture::new(&data));
}

#[test]
fn reads_header_only() {
    let data = VtfBuilder::new(ImageFormat::Bgr888, 8, 8).build();
    let file = create_input_file(&data);

    let texture = VtfTexture::from_file(file.path(), true).expect("Header should parse");

    assert_eq!(texture.width(0), 8);
    assert!(texture.image_data().is_empty());
}

#[test]
fn empty_file_is_too_short() {
    let file = create_input_file(&[]);

    let result = VtfTexture::from_file(file.path(), false);

    assert!(matches!(
        result,
        Err(FileDecodeError::Decode(DecodeError::Parse(
            VtfParseError::InputTooShort { actual: 0, .. }
        )))
    ));
}

#[test]
fn invalid_file_reports_decode_error() {
    let mut data = VtfBuilder::new(ImageFormat::Rgba8888, 4, 4).build();
    data[0] = b'X';
    let file = create_input_file(&data);

    let result = VtfTexture::from_file(file.path(), false);

    assert!(matches!(
        result,
        Err(FileDecodeError::Decode(DecodeError::Parse(
            VtfParseError::InvalidSignature
        )))
    ));
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing.vtf");

    let result = VtfTexture::from_file(Path::new(&path), false);

    assert!(matches!(result, Err(FileDecodeError::FileHandle(_))));
}
