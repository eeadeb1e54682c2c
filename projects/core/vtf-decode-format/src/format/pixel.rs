use core::ops::{Add, Mul};

/// One texel with normalized floating point channels.
///
/// Channels are nominally in `[0, 1]`; nothing downstream clamps them.
/// [`Pixel::default`] (all zero) is returned by every read that can't be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pixel {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Pixel {
    /// Constructs a pixel from its four channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Constructs a pixel from 8-bit channels, dividing each by 255.
    #[inline]
    pub fn from_unorm8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(unorm8(r), unorm8(g), unorm8(b), unorm8(a))
    }

    /// Returns the channels as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Add for Pixel {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.a + rhs.a,
        )
    }
}

impl Mul<f32> for Pixel {
    type Output = Self;

    #[inline]
    fn mul(self, weight: f32) -> Self {
        Self::new(
            self.r * weight,
            self.g * weight,
            self.b * weight,
            self.a * weight,
        )
    }
}

#[inline(always)]
pub(crate) fn unorm8(value: u8) -> f32 {
    value as f32 / 255.0
}
