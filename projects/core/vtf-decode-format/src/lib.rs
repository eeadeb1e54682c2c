#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

mod error;

/// Pixel formats, their metadata and pixel unpacking.
pub mod format;

/// Parsing of the VTF container.
pub mod vtf;

/// Builds VTF files in memory for tests.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

#[cfg(test)]
pub mod test_prelude;

pub use error::VtfParseError;
