//! Error types for VTF parsing.

use thiserror::Error;

/// Reasons a buffer can't be read as a VTF file.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum VtfParseError {
    /// The buffer ends before a structure that has to be read.
    #[error("Input too short: required at least {required} bytes, got {actual} bytes")]
    InputTooShort {
        /// Number of bytes required.
        required: usize,
        /// Number of bytes available.
        actual: usize,
    },

    /// The buffer doesn't start with `VTF\0`.
    #[error("Invalid VTF signature")]
    InvalidSignature,

    /// Only versions 7.0 through 7.5 are understood.
    #[error("Unsupported VTF version {major}.{minor}")]
    UnsupportedVersion {
        /// Major version.
        major: u32,
        /// Minor version.
        minor: u32,
    },

    /// The declared header size is smaller than the header for the version, or larger than the file.
    #[error("Invalid header size")]
    InvalidHeaderSize,

    /// A format identifier not in [`ImageFormat`](crate::format::ImageFormat).
    #[error("Unknown image format {0}")]
    UnknownFormat(i32),

    /// The high resolution image has no format.
    #[error("High resolution image format is NONE")]
    NoImageFormat,

    /// Width or height is zero.
    #[error("Texture has a zero dimension")]
    ZeroDimension,

    /// The texture declares zero frames.
    #[error("Texture has zero frames")]
    ZeroFrameCount,

    /// The texture declares zero mip levels.
    #[error("Texture has zero mip levels")]
    ZeroMipmapCount,

    /// A 7.3+ resource directory has no high resolution image entry.
    #[error("No high resolution image resource")]
    MissingHighResResource,

    /// A 7.3+ resource directory declares more entries than a VTF may hold.
    #[error("Too many resources: {0}")]
    TooManyResources(u32),

    /// The high resolution image extends past the end of the buffer.
    #[error("Image data out of bounds: {length} bytes at offset {offset}, but only {available} bytes available")]
    ImageDataOutOfBounds {
        /// Offset of the image data.
        offset: usize,
        /// Expected length of the image data.
        length: usize,
        /// Size of the buffer.
        available: usize,
    },

    /// The size of the image data can't be represented.
    #[error("Image data size overflows")]
    SizeOverflow,
}
