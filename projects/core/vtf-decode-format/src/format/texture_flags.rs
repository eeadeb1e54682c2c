/// The flags field of a VTF header.
///
/// Only the flags read by this crate and by sampling are named here; other bits are preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct TextureFlags(pub u32);

impl TextureFlags {
    /// Point sampling.
    pub const POINT_SAMPLE: Self = Self(0x0000_0001);
    /// Trilinear filtering.
    pub const TRILINEAR: Self = Self(0x0000_0002);
    /// Clamp the horizontal (S) texture coordinate.
    pub const CLAMP_S: Self = Self(0x0000_0004);
    /// Clamp the vertical (T) texture coordinate.
    pub const CLAMP_T: Self = Self(0x0000_0008);
    /// Anisotropic filtering.
    pub const ANISOTROPIC: Self = Self(0x0000_0010);
    /// Hint to compress as DXT5.
    pub const HINT_DXT5: Self = Self(0x0000_0020);
    /// The texture is a normal map.
    pub const NORMAL: Self = Self(0x0000_0080);
    /// Don't use mipmaps.
    pub const NO_MIP: Self = Self(0x0000_0100);
    /// Don't apply the texture LOD setting.
    pub const NO_LOD: Self = Self(0x0000_0200);
    /// The alpha channel is one bit.
    pub const ONE_BIT_ALPHA: Self = Self(0x0000_1000);
    /// The alpha channel is eight bits.
    pub const EIGHT_BIT_ALPHA: Self = Self(0x0000_2000);
    /// The texture is a cubemap (environment map).
    pub const ENVMAP: Self = Self(0x0000_4000);
    /// Clamp the depth (U) texture coordinate.
    pub const CLAMP_U: Self = Self(0x0200_0000);

    /// Returns the raw bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if every bit of `other` is set.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl core::ops::BitOr for TextureFlags {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
