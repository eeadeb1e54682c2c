//! Decoding of VTF files on disk, through memory mapping.

use crate::{DecodeError, VtfTexture};
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while decoding a texture from a file.
#[derive(Debug, Error)]
pub enum FileDecodeError {
    /// Error opening file handle
    #[error("Failed to open file handle: {0}")]
    FileHandle(#[from] HandleOpenError),

    /// Error creating memory mapping
    #[error("Failed to create memory mapping: {0}")]
    MemoryMapping(#[from] MmapError),

    /// The file isn't a texture which can be decoded
    #[error("Failed to decode texture: {0}")]
    Decode(#[from] DecodeError),
}

impl VtfTexture {
    /// Memory maps the file at `path` and decodes it, or only its header if `header_only` is set.
    ///
    /// The mapping is released before returning; the texture owns its decoded data.
    ///
    /// # Errors
    ///
    /// - [`FileDecodeError::FileHandle`] / [`FileDecodeError::MemoryMapping`] if the file
    ///   can't be opened or mapped.
    /// - [`FileDecodeError::Decode`] as for [`VtfTexture::try_new`].
    pub fn from_file(path: &Path, header_only: bool) -> Result<Self, FileDecodeError> {
        let handle = ReadOnlyFileHandle::open(path)?;
        let size = handle.size()? as usize;
        if size == 0 {
            // Nothing to map; report the same error an empty buffer gives.
            return Ok(Self::try_new(&[], header_only)?);
        }

        let mapping = ReadOnlyMmap::new(&handle, 0, size)?;
        Ok(Self::try_new(mapping.as_slice(), header_only)?)
    }
}
