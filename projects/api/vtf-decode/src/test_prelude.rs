//! Common test imports and utilities for texture tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

pub use crate::{AddressMode, DecodeError, SamplerSettings, VtfTexture};
pub use vtf_decode_format::format::{ImageFormat, Pixel, TextureFlags};
pub use vtf_decode_format::test_utils::VtfBuilder;
pub use vtf_decode_format::VtfParseError;

/// Asserts two pixels are equal, allowing for float rounding in filtered samples.
#[track_caller]
pub(crate) fn assert_pixel_near(actual: Pixel, expected: Pixel) {
    let close = actual
        .to_array()
        .iter()
        .zip(expected.to_array())
        .all(|(a, e)| crate::util::abs(a - e) < 1e-5);
    assert!(close, "expected {expected:?}, got {actual:?}");
}
