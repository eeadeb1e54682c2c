#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod accessor;
mod decode;
mod error;
pub mod layout;
pub mod sampler;
mod texture;
mod util;

#[cfg(feature = "file-io")]
pub mod file_io;

#[cfg(test)]
pub mod test_prelude;

pub use error::DecodeError;
pub use sampler::{AddressMode, SamplerSettings};
pub use texture::VtfTexture;

#[cfg(feature = "file-io")]
pub use file_io::FileDecodeError;

// Types which appear in the public API of [`VtfTexture`].
pub use vtf_decode_format::format::{ImageFormat, ImageFormatInfo, Pixel, TextureFlags};
pub use vtf_decode_format::vtf::VtfHeader;
