use std::io::{self, Write};
use vtf_decode::VtfTexture;

/// Converts a normalized channel to 8 bits, saturating values outside `[0, 1]`.
#[inline]
pub fn to_unorm8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Writes one plane of `texture` as a binary (`P6`) PPM image: RGB, 8 bits per channel, row-major.
///
/// # Arguments
///
/// * `writer` - Where the image is written to
/// * `texture` - Texture to read the plane from
/// * `mip`, `frame`, `face`, `slice` - The plane to write
pub fn write_ppm<W: Write>(
    writer: &mut W,
    texture: &VtfTexture,
    mip: u32,
    frame: u32,
    face: u32,
    slice: u32,
) -> io::Result<()> {
    let width = texture.width(mip);
    let height = texture.height(mip);
    write!(writer, "P6\n{width} {height}\n255\n")?;

    let mut row = Vec::with_capacity(width as usize * 3);
    for y in 0..height {
        row.clear();
        for x in 0..width {
            let pixel = texture.pixel(x, y, slice, mip, frame, face);
            row.extend_from_slice(&[to_unorm8(pixel.r), to_unorm8(pixel.g), to_unorm8(pixel.b)]);
        }
        writer.write_all(&row)?;
    }

    Ok(())
}
