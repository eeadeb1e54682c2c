//! Common test imports and utilities for DXT tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Common types from vtf_decode_common
pub use vtf_decode_common::color_8888::Color8888;
pub use vtf_decode_common::decoded_4x4_block::Decoded4x4Block;

pub use crate::{decompress_dxt1, decompress_dxt3, decompress_dxt5, DecompressError};

/// Builds a BC1 block whose 16 pixels all take endpoint `c0`.
pub(crate) fn solid_bc1_block(c0: u16) -> [u8; 8] {
    let [lo, hi] = c0.to_le_bytes();
    [lo, hi, 0, 0, 0, 0, 0, 0]
}

/// Packs one 4x4 plane's worth of compressed blocks for a `width` x `height` image,
/// where block `n` (row-major) is produced by `block`.
pub(crate) fn build_plane<const N: usize>(
    width: usize,
    height: usize,
    block: impl Fn(usize) -> [u8; N],
) -> std::vec::Vec<u8> {
    let blocks = width.div_ceil(4) * height.div_ceil(4);
    (0..blocks).flat_map(block).collect()
}
