#![no_main]

// Builds well formed files from arbitrary parameters and checks the decoded layout.

use libfuzzer_sys::{arbitrary, fuzz_target};
use vtf_decode::{ImageFormat, TextureFlags, VtfTexture};
use vtf_decode_format::test_utils::VtfBuilder;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct TextureParams {
    format: u8,
    minor_version: u8,
    width: u8,
    height: u8,
    depth: u8,
    mipmap_count: u8,
    frames: u8,
    envmap: bool,
    u: f32,
    v: f32,
    mip: f32,
}

fuzz_target!(|params: TextureParams| {
    let formats = ImageFormat::all_values();
    let format = formats[params.format as usize % formats.len()];
    let width = (params.width % 64) as u16 + 1;
    let height = (params.height % 64) as u16 + 1;
    let flags = if params.envmap {
        TextureFlags::ENVMAP.bits()
    } else {
        0
    };

    let file = VtfBuilder::new(format, width, height)
        .version((params.minor_version % 6) as u32)
        .depth((params.depth % 4) as u16 + 1)
        .mipmap_count(params.mipmap_count % 8 + 1)
        .frames((params.frames % 4) as u16 + 1)
        .flags(flags)
        .build();

    let Ok(texture) = VtfTexture::try_new(&file, false) else {
        return;
    };

    let layout = texture.layout().unwrap();
    assert_eq!(Some(texture.image_data_size()), layout.total_size());
    assert_eq!(texture.width(0), width as u32);
    assert_eq!(texture.height(0), height as u32);

    // The largest mip is stored last.
    if let Some(level) = layout.level(0) {
        let end = level.offset + level.frame_size * layout.frames() as usize;
        assert_eq!(end, texture.image_data_size());
    }

    // Sampling must stay inside the buffer for any coordinate.
    let _ = texture.sample(params.u, params.v, 0, params.mip, 0, 0);
    let _ = texture.sample_bilinear(params.u, params.v, u32::MAX, 0, 0, 0);
});
