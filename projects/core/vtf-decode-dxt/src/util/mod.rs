//! Decoders for individual 4x4 blocks.

mod bc1_decode;
mod bc2_decode;
mod bc3_decode;

pub use bc1_decode::*;
pub use bc2_decode::*;
pub use bc3_decode::*;
