//! Fallible allocation of the buffers a decoded texture is written into.
//!
//! Texture dimensions come straight from untrusted file headers, so a request for a buffer
//! which cannot be satisfied is reported as an error rather than aborting the process.

use alloc::collections::TryReserveError;
use alloc::vec::Vec;
use thiserror::Error;

/// An error that happened in memory allocation.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AllocateError {
    /// The allocator could not reserve the requested number of bytes.
    #[error("Failed to allocate {requested} bytes: {source}")]
    OutOfMemory {
        /// Number of bytes that were requested.
        requested: usize,
        /// Underlying error reported by the allocator.
        source: TryReserveError,
    },
}

/// Allocates a zero-filled buffer of exactly `num_bytes` bytes.
///
/// # Errors
///
/// Returns [`AllocateError::OutOfMemory`] if the allocation fails or the size
/// exceeds `isize::MAX`.
///
/// # Examples
///
/// ```
/// use vtf_decode_common::allocate::allocate_zeroed;
///
/// let buffer = allocate_zeroed(64).unwrap();
/// assert_eq!(buffer.len(), 64);
/// assert!(buffer.iter().all(|&b| b == 0));
/// ```
pub fn allocate_zeroed(num_bytes: usize) -> Result<Vec<u8>, AllocateError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(num_bytes)
        .map_err(|source| AllocateError::OutOfMemory {
            requested: num_bytes,
            source,
        })?;
    buffer.resize(num_bytes, 0);
    Ok(buffer)
}

/// Allocates a buffer holding a copy of `data`.
///
/// # Errors
///
/// Returns [`AllocateError::OutOfMemory`] if the allocation fails.
pub fn allocate_copy(data: &[u8]) -> Result<Vec<u8>, AllocateError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(data.len())
        .map_err(|source| AllocateError::OutOfMemory {
            requested: data.len(),
            source,
        })?;
    buffer.extend_from_slice(data);
    Ok(buffer)
}
