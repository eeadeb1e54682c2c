use thiserror::Error;

/// An error that happened while decompressing a plane of DXT blocks.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum DecompressError {
    /// The compressed source holds fewer bytes than the plane's blocks need.
    #[error("Compressed source too short: {required} bytes required, {actual} available")]
    SourceTooShort {
        /// Number of bytes required.
        required: usize,
        /// Number of bytes supplied.
        actual: usize,
    },

    /// The RGBA8888 destination can't hold the decompressed plane.
    #[error("Destination too small: {required} bytes required, {actual} available")]
    DestinationTooSmall {
        /// Number of bytes required.
        required: usize,
        /// Number of bytes supplied.
        actual: usize,
    },
}
