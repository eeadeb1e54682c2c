//! Reads of single texels at exact coordinates.

use crate::VtfTexture;
use vtf_decode_format::format::{unpack_pixel, ImageFormat, Pixel};

impl VtfTexture {
    /// Reads the texel at (`x`, `y`, `z`) of face `face` of frame `frame`, at mip level `mip`.
    ///
    /// Returns [`Pixel::default`] if the texture is invalid or any index is out of range.
    pub fn pixel(&self, x: u32, y: u32, z: u32, mip: u32, frame: u32, face: u32) -> Pixel {
        let Some(layout) = self.layout() else {
            return Pixel::default();
        };

        let Some(offset) = layout.pixel_offset(mip, frame, face, z, y, x) else {
            return Pixel::default();
        };

        self.read_pixel(offset, layout.format())
    }

    /// Reads a texel of a frame of a 2D texture.
    #[inline]
    pub fn pixel_2d_animated(&self, x: u32, y: u32, mip: u32, frame: u32) -> Pixel {
        self.pixel(x, y, 0, mip, frame, 0)
    }

    /// Reads a texel of the first frame of a 2D texture.
    #[inline]
    pub fn pixel_2d(&self, x: u32, y: u32, mip: u32) -> Pixel {
        self.pixel(x, y, 0, mip, 0, 0)
    }

    /// Unpacks the texel stored at `offset`, or [`Pixel::default`] if it lies outside the buffer.
    #[inline]
    pub(crate) fn read_pixel(&self, offset: usize, format: ImageFormat) -> Pixel {
        match self.image_data().get(offset..) {
            Some(bytes) => unpack_pixel(bytes, format),
            None => Pixel::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    /// 3x2 RGBA texture where texel `n` (row-major) is `[n, 10 * n, 255 - n, 255]`.
    fn numbered_texture() -> VtfTexture {
        let data = (0..6u8).flat_map(|n| [n, 10 * n, 255 - n, 255]).collect();
        let file = VtfBuilder::new(ImageFormat::Rgba8888, 3, 2)
            .image_data(data)
            .build();
        VtfTexture::new(&file)
    }

    #[rstest]
    #[case(0, 0, 0)]
    #[case(2, 0, 2)]
    #[case(0, 1, 3)]
    #[case(2, 1, 5)]
    fn reads_row_major_texels(#[case] x: u32, #[case] y: u32, #[case] n: u8) {
        let texture = numbered_texture();
        assert_eq!(
            texture.pixel_2d(x, y, 0),
            Pixel::from_unorm8(n, 10 * n, 255 - n, 255)
        );
    }

    #[rstest]
    #[case(3, 0, 0, 0, 0, 0)]
    #[case(0, 2, 0, 0, 0, 0)]
    #[case(0, 0, 1, 0, 0, 0)]
    #[case(0, 0, 0, 1, 0, 0)]
    #[case(0, 0, 0, 0, 1, 0)]
    #[case(0, 0, 0, 0, 0, 1)]
    fn out_of_range_reads_are_default(
        #[case] x: u32,
        #[case] y: u32,
        #[case] z: u32,
        #[case] mip: u32,
        #[case] frame: u32,
        #[case] face: u32,
    ) {
        let texture = numbered_texture();
        assert_eq!(texture.pixel(x, y, z, mip, frame, face), Pixel::default());
    }

    #[test]
    fn convenience_forms_fix_the_other_indices() {
        let data = (0..2u8).flat_map(|frame| [frame, 0, 0, 255]).collect();
        let file = VtfBuilder::new(ImageFormat::Rgba8888, 1, 1)
            .frames(2)
            .image_data(data)
            .build();
        let texture = VtfTexture::new(&file);

        assert_eq!(texture.pixel_2d_animated(0, 0, 0, 1), texture.pixel(0, 0, 0, 0, 1, 0));
        assert_eq!(texture.pixel_2d(0, 0, 0), texture.pixel(0, 0, 0, 0, 0, 0));
        assert_ne!(texture.pixel_2d(0, 0, 0), texture.pixel_2d_animated(0, 0, 0, 1));
    }

    #[test]
    fn stored_format_is_unpacked() {
        let file = VtfBuilder::new(ImageFormat::Bgr888, 1, 1)
            .image_data(vec![0, 128, 255])
            .build();
        let texture = VtfTexture::new(&file);

        assert_eq!(texture.pixel_2d(0, 0, 0), Pixel::from_unorm8(255, 128, 0, 255));
    }

    #[test]
    fn header_only_texture_reads_default() {
        let file = VtfBuilder::new(ImageFormat::Rgba8888, 2, 2).build();
        let texture = VtfTexture::new_header_only(&file);

        assert!(texture.is_valid());
        assert_eq!(texture.pixel_2d(0, 0, 0), Pixel::default());
    }
}
