//! RGB565 colour endpoints, as stored in the colour half of every DXT block.

use crate::color_8888::Color8888;

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue)
/// As encountered in the endpoints of DXT1/DXT3/DXT5 blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color565`] from the two little endian bytes stored in a block.
    #[inline]
    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self::from_raw(u16::from_le_bytes(bytes))
    }

    /// Creates a new [`Color565`] from separate RGB components, truncating the low bits.
    ///
    /// # Parameters
    ///
    /// - `r`: The red component (0-255)
    /// - `g`: The green component (0-255)
    /// - `b`: The blue component (0-255)
    #[inline]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            value: ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3),
        }
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub fn raw_value(&self) -> u16 {
        self.value
    }

    // Endpoints are expanded from 5 or 6 bits to 8 bits by replicating the top bits,
    // matching D3D and GPU hardware.

    /// Extracts the expanded 8-bit red component
    #[inline]
    pub fn red(&self) -> u8 {
        let r = (self.value & 0b11111000_00000000) >> 11;
        ((r << 3) | (r >> 2)) as u8
    }

    /// Extracts the expanded 8-bit green component
    #[inline]
    pub fn green(&self) -> u8 {
        let g = (self.value & 0b00000111_11100000) >> 5;
        ((g << 2) | (g >> 4)) as u8
    }

    /// Extracts the expanded 8-bit blue component
    #[inline]
    pub fn blue(&self) -> u8 {
        let b = self.value & 0b00000000_00011111;
        ((b << 3) | (b >> 2)) as u8
    }

    /// Compares two [`Color565`] values.
    ///
    /// DXT1 uses this to pick between the four colour and the three colour + transparent modes.
    #[inline]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.value > other.value
    }

    /// Converts this [`Color565`] to a [`Color8888`] with full opacity (alpha=255)
    ///
    /// # Examples
    ///
    /// ```
    /// use vtf_decode_common::color_565::Color565;
    ///
    /// let rgb565 = Color565::from_rgb(255, 0, 0);
    /// let rgba8888 = rgb565.to_color_8888();
    /// assert_eq!(rgba8888.r, 255);
    /// assert_eq!(rgba8888.g, 0);
    /// assert_eq!(rgba8888.b, 0);
    /// assert_eq!(rgba8888.a, 255);
    /// ```
    #[inline]
    pub fn to_color_8888(&self) -> Color8888 {
        Color8888::new(self.red(), self.green(), self.blue(), 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0xF800, 255, 0, 0)]
    #[case(0x07E0, 0, 255, 0)]
    #[case(0x001F, 0, 0, 255)]
    #[case(0xFFFF, 255, 255, 255)]
    #[case(0x0000, 0, 0, 0)]
    // 0b10000_100000_10000 -> top bits replicated into the low bits
    #[case(0x8410, 132, 130, 132)]
    fn expands_endpoints_by_bit_replication(
        #[case] raw: u16,
        #[case] r: u8,
        #[case] g: u8,
        #[case] b: u8,
    ) {
        let color = Color565::from_raw(raw);
        assert_eq!(color.red(), r);
        assert_eq!(color.green(), g);
        assert_eq!(color.blue(), b);
    }

    #[test]
    fn from_le_bytes_matches_from_raw() {
        assert_eq!(
            Color565::from_le_bytes([0x00, 0xF8]),
            Color565::from_raw(0xF800)
        );
    }

    #[test]
    fn from_rgb_round_trips_representable_colours() {
        let color = Color565::from_rgb(255, 0, 255);
        assert_eq!(color.raw_value(), 0xF81F);
        assert_eq!(color.to_color_8888(), Color8888::new(255, 0, 255, 255));
    }

    #[test]
    fn greater_than_compares_raw_values() {
        let high = Color565::from_raw(0x8000);
        let low = Color565::from_raw(0x7FFF);
        assert!(high.greater_than(&low));
        assert!(!low.greater_than(&high));
        assert!(!high.greater_than(&high));
    }
}
