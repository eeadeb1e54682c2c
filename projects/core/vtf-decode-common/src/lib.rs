#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod allocate;
pub mod color_565;
pub mod color_8888;
pub mod decoded_4x4_block;
