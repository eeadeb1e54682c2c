//! VTF format constants and definitions

/// Magic header for VTF files, `VTF\0`
pub const VTF_MAGIC: u32 = u32::from_le_bytes(*b"VTF\0");

/// The only major version in existence.
pub const VTF_MAJOR_VERSION: u32 = 7;
/// Newest understood minor version.
pub const VTF_MAX_MINOR_VERSION: u32 = 5;

// Header field offsets
pub(crate) const VERSION_MAJOR_OFFSET: usize = 0x04;
pub(crate) const VERSION_MINOR_OFFSET: usize = 0x08;
pub(crate) const HEADER_SIZE_OFFSET: usize = 0x0C;
pub(crate) const WIDTH_OFFSET: usize = 0x10;
pub(crate) const HEIGHT_OFFSET: usize = 0x12;
pub(crate) const FLAGS_OFFSET: usize = 0x14;
pub(crate) const FRAMES_OFFSET: usize = 0x18;
pub(crate) const FIRST_FRAME_OFFSET: usize = 0x1A;
pub(crate) const REFLECTIVITY_OFFSET: usize = 0x20;
pub(crate) const BUMPMAP_SCALE_OFFSET: usize = 0x30;
pub(crate) const HIGH_RES_FORMAT_OFFSET: usize = 0x34;
pub(crate) const MIPMAP_COUNT_OFFSET: usize = 0x38;
pub(crate) const LOW_RES_FORMAT_OFFSET: usize = 0x39;
pub(crate) const LOW_RES_WIDTH_OFFSET: usize = 0x3D;
pub(crate) const LOW_RES_HEIGHT_OFFSET: usize = 0x3E;
/// 7.2+
pub(crate) const DEPTH_OFFSET: usize = 0x3F;
/// 7.3+
pub(crate) const RESOURCE_COUNT_OFFSET: usize = 0x44;
/// 7.3+
pub(crate) const RESOURCE_ENTRIES_OFFSET: usize = 0x50;

/// Minimum header size of 7.0 and 7.1 files.
pub const HEADER_SIZE_7_0: usize = 64;
/// Minimum header size of 7.2 files.
pub const HEADER_SIZE_7_2: usize = 65;
/// Minimum header size of 7.3+ files, up to the first resource entry.
pub const HEADER_SIZE_7_3: usize = 80;

/// Size of a 7.3+ resource directory entry: 3 byte tag, 1 byte flags, 4 byte offset/value.
pub const RESOURCE_ENTRY_SIZE: usize = 8;
/// Maximum number of resource entries in a 7.3+ file.
pub const MAX_RESOURCES: u32 = 32;

/// Resource tag of the low resolution thumbnail.
pub const RESOURCE_TAG_LOW_RES_IMAGE: [u8; 3] = [0x01, 0x00, 0x00];
/// Resource tag of the high resolution image data.
pub const RESOURCE_TAG_HIGH_RES_IMAGE: [u8; 3] = [0x30, 0x00, 0x00];

/// Returns the minimum number of bytes a header of the given minor version occupies.
#[inline]
pub const fn min_header_size(minor_version: u32) -> usize {
    match minor_version {
        0 | 1 => HEADER_SIZE_7_0,
        2 => HEADER_SIZE_7_2,
        _ => HEADER_SIZE_7_3,
    }
}
