mod format_info;
mod image_format;
mod pixel;
mod texture_flags;
mod unpack;

pub use format_info::*;
pub use image_format::*;
pub use pixel::*;
pub use texture_flags::*;
pub use unpack::*;
