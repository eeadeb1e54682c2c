#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(any(feature = "std", test))]
extern crate std;

mod decompress;
mod error;
pub mod util;

#[cfg(test)]
pub mod test_prelude;

pub use decompress::*;
pub use error::DecompressError;
