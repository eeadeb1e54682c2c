use derive_enum_all_values::AllValues;

/// A pixel format a VTF image can be stored in.
///
/// Discriminants are the identifiers stored in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
#[repr(i32)]
pub enum ImageFormat {
    /// No image; used by textures without a low resolution thumbnail.
    None = -1,
    /// 8 bits per channel, stored red, green, blue, alpha.
    Rgba8888 = 0,
    /// 8 bits per channel, stored alpha, blue, green, red.
    Abgr8888 = 1,
    /// 8 bits per channel, stored red, green, blue.
    Rgb888 = 2,
    /// 8 bits per channel, stored blue, green, red.
    Bgr888 = 3,
    /// 16-bit packed colour, red in the low bits.
    Rgb565 = 4,
    /// 8-bit luminance.
    I8 = 5,
    /// 8-bit luminance followed by 8-bit alpha.
    Ia88 = 6,
    /// 8-bit palette index. The palette is not stored in VTF files.
    P8 = 7,
    /// 8-bit alpha only.
    A8 = 8,
    /// RGB888 where pure blue marks transparent texels.
    Rgb888Bluescreen = 9,
    /// BGR888 where pure blue marks transparent texels.
    Bgr888Bluescreen = 10,
    /// 8 bits per channel, stored alpha, red, green, blue.
    Argb8888 = 11,
    /// 8 bits per channel, stored blue, green, red, alpha.
    Bgra8888 = 12,
    /// BC1 without alpha.
    Dxt1 = 13,
    /// BC2, explicit 4-bit alpha.
    Dxt3 = 14,
    /// BC3, interpolated alpha.
    Dxt5 = 15,
    /// BGRA8888 with the alpha byte unused.
    Bgrx8888 = 16,
    /// 16-bit packed colour, blue in the low bits.
    Bgr565 = 17,
    /// 16-bit packed colour, 5 bits per channel, top bit unused.
    Bgrx5551 = 18,
    /// 16-bit packed colour, 4 bits per channel.
    Bgra4444 = 19,
    /// BC1 with punch-through alpha.
    Dxt1OneBitAlpha = 20,
    /// 16-bit packed colour, 5 bits per colour channel and 1 bit of alpha.
    Bgra5551 = 21,
    /// Two channel du/dv map.
    Uv88 = 22,
    /// Four channel du/dv map.
    Uvwq8888 = 23,
    /// Four IEEE 754 half precision channels.
    Rgba16161616F = 24,
    /// 16-bit unsigned integer per channel.
    Rgba16161616 = 25,
    /// du/dv map with luminance, fourth byte unused.
    Uvlx8888 = 26,
    /// Two channel block compression (BC5).
    Ati2n = 34,
    /// Single channel block compression (BC4).
    Ati1n = 35,
}

impl ImageFormat {
    /// Converts a format identifier read from a file, or [`None`] if it isn't known.
    ///
    /// ```
    /// use vtf_decode_format::format::ImageFormat;
    ///
    /// assert_eq!(ImageFormat::from_raw(13), Some(ImageFormat::Dxt1));
    /// assert_eq!(ImageFormat::from_raw(-1), Some(ImageFormat::None));
    /// assert_eq!(ImageFormat::from_raw(27), None);
    /// ```
    pub fn from_raw(value: i32) -> Option<Self> {
        Self::all_values()
            .iter()
            .copied()
            .find(|format| *format as i32 == value)
    }

    /// Returns the identifier stored in the file for this format.
    #[inline]
    pub fn raw_value(self) -> i32 {
        self as i32
    }
}
