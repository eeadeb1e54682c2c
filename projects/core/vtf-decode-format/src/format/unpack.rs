use super::pixel::unorm8;
use super::{format_info, ImageFormat, Pixel};
use half::f16;
use likely_stable::unlikely;

/// Converts one stored texel into a [`Pixel`].
///
/// `bytes` must start at the texel; extra trailing bytes are ignored. Channels missing from
/// the format read as `0.0`, and alpha as `1.0`. Luminance is replicated into red, green and
/// blue. Packed 16-bit formats are little endian with the first named channel in the low bits.
///
/// Returns [`Pixel::default`] for block compressed formats, [`ImageFormat::P8`] (no palette),
/// [`ImageFormat::None`], or when `bytes` is shorter than one texel.
///
/// ```
/// use vtf_decode_format::format::{unpack_pixel, ImageFormat, Pixel};
///
/// let pixel = unpack_pixel(&[0, 255, 0], ImageFormat::Bgr888);
/// assert_eq!(pixel, Pixel::new(0.0, 1.0, 0.0, 1.0));
/// ```
pub fn unpack_pixel(bytes: &[u8], format: ImageFormat) -> Pixel {
    let info = format_info(format);
    if unlikely(info.is_compressed || bytes.len() < info.bytes_per_pixel as usize) {
        return Pixel::default();
    }

    match format {
        ImageFormat::Rgba8888 => Pixel::from_unorm8(bytes[0], bytes[1], bytes[2], bytes[3]),
        ImageFormat::Abgr8888 => Pixel::from_unorm8(bytes[3], bytes[2], bytes[1], bytes[0]),
        ImageFormat::Argb8888 => Pixel::from_unorm8(bytes[1], bytes[2], bytes[3], bytes[0]),
        ImageFormat::Bgra8888 => Pixel::from_unorm8(bytes[2], bytes[1], bytes[0], bytes[3]),
        ImageFormat::Rgb888 => Pixel::from_unorm8(bytes[0], bytes[1], bytes[2], 255),
        ImageFormat::Bgr888 | ImageFormat::Bgrx8888 => {
            Pixel::from_unorm8(bytes[2], bytes[1], bytes[0], 255)
        }
        ImageFormat::Rgb888Bluescreen => bluescreen(bytes[0], bytes[1], bytes[2]),
        ImageFormat::Bgr888Bluescreen => bluescreen(bytes[2], bytes[1], bytes[0]),
        ImageFormat::I8 => Pixel::from_unorm8(bytes[0], bytes[0], bytes[0], 255),
        ImageFormat::Ia88 => Pixel::from_unorm8(bytes[0], bytes[0], bytes[0], bytes[1]),
        ImageFormat::A8 => Pixel::from_unorm8(0, 0, 0, bytes[0]),
        ImageFormat::Uv88 => Pixel::from_unorm8(bytes[0], bytes[1], 0, 255),
        ImageFormat::Uvwq8888 => Pixel::from_unorm8(bytes[0], bytes[1], bytes[2], bytes[3]),
        ImageFormat::Uvlx8888 => Pixel::from_unorm8(bytes[0], bytes[1], bytes[2], 255),
        ImageFormat::Rgb565 => {
            let value = u16::from_le_bytes([bytes[0], bytes[1]]);
            Pixel::new(
                bits(value, 0, 5),
                bits(value, 5, 6),
                bits(value, 11, 5),
                1.0,
            )
        }
        ImageFormat::Bgr565 => {
            let value = u16::from_le_bytes([bytes[0], bytes[1]]);
            Pixel::new(
                bits(value, 11, 5),
                bits(value, 5, 6),
                bits(value, 0, 5),
                1.0,
            )
        }
        ImageFormat::Bgrx5551 => {
            let value = u16::from_le_bytes([bytes[0], bytes[1]]);
            Pixel::new(
                bits(value, 10, 5),
                bits(value, 5, 5),
                bits(value, 0, 5),
                1.0,
            )
        }
        ImageFormat::Bgra5551 => {
            let value = u16::from_le_bytes([bytes[0], bytes[1]]);
            Pixel::new(
                bits(value, 10, 5),
                bits(value, 5, 5),
                bits(value, 0, 5),
                bits(value, 15, 1),
            )
        }
        ImageFormat::Bgra4444 => {
            let value = u16::from_le_bytes([bytes[0], bytes[1]]);
            Pixel::new(
                bits(value, 8, 4),
                bits(value, 4, 4),
                bits(value, 0, 4),
                bits(value, 12, 4),
            )
        }
        ImageFormat::Rgba16161616 => {
            let channel = |i: usize| {
                u16::from_le_bytes([bytes[i * 2], bytes[i * 2 + 1]]) as f32 / 65535.0
            };
            Pixel::new(channel(0), channel(1), channel(2), channel(3))
        }
        ImageFormat::Rgba16161616F => {
            let channel =
                |i: usize| f16::from_le_bytes([bytes[i * 2], bytes[i * 2 + 1]]).to_f32();
            Pixel::new(channel(0), channel(1), channel(2), channel(3))
        }
        ImageFormat::P8
        | ImageFormat::None
        | ImageFormat::Dxt1
        | ImageFormat::Dxt1OneBitAlpha
        | ImageFormat::Dxt3
        | ImageFormat::Dxt5
        | ImageFormat::Ati1n
        | ImageFormat::Ati2n => Pixel::default(),
    }
}

/// Extracts `count` bits starting at `shift` and normalizes them to `[0, 1]`.
#[inline(always)]
fn bits(value: u16, shift: u32, count: u32) -> f32 {
    let max = (1u32 << count) - 1;
    ((value as u32 >> shift) & max) as f32 / max as f32
}

/// Pure blue is the transparent key colour.
#[inline(always)]
fn bluescreen(r: u8, g: u8, b: u8) -> Pixel {
    if r == 0 && g == 0 && b == 255 {
        Pixel::default()
    } else {
        Pixel::new(unorm8(r), unorm8(g), unorm8(b), 1.0)
    }
}
