//! Error types for texture decoding.

use thiserror::Error;
use vtf_decode_common::allocate::AllocateError;
use vtf_decode_dxt::DecompressError;
use vtf_decode_format::format::ImageFormat;
use vtf_decode_format::VtfParseError;

/// Reasons a VTF file couldn't be turned into a [`VtfTexture`](crate::VtfTexture).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DecodeError {
    /// The header or the location of the image data is invalid.
    #[error(transparent)]
    Parse(#[from] VtfParseError),

    /// The decoded buffer couldn't be allocated.
    #[error(transparent)]
    Allocate(#[from] AllocateError),

    /// A compressed plane couldn't be decompressed.
    #[error(transparent)]
    Decompress(#[from] DecompressError),

    /// The image is block compressed in a format there is no decompressor for.
    #[error("Unsupported compressed format {0:?}")]
    UnsupportedCompressedFormat(ImageFormat),
}
