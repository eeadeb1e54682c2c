/// Shared constants between modules.
pub mod constants;

/// The parsed VTF header.
pub mod header;

/// Determine if a file is a VTF file.
pub mod likely_vtf;

/// Parse and validate the VTF header.
pub mod parse_header;

/// Locate the high resolution image data in a VTF file.
pub mod parse_image_data;

pub use header::*;
pub use likely_vtf::*;
pub use parse_header::*;
pub use parse_image_data::*;
