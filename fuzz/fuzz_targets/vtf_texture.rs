#![no_main]

// Feeds arbitrary bytes to the decoder and every query; none of them may panic.

use libfuzzer_sys::fuzz_target;
use vtf_decode::VtfTexture;

fuzz_target!(|data: &[u8]| {
    let header_only = VtfTexture::new_header_only(data);
    let texture = VtfTexture::new(data);
    if !texture.is_valid() {
        assert_eq!(texture.image_data_size(), 0);
        return;
    }

    assert!(header_only.is_valid());
    assert_eq!(header_only.mip_levels(), texture.mip_levels());
    if let Some(total) = texture.layout().and_then(|layout| layout.total_size()) {
        assert_eq!(texture.image_data_size(), total);
    }

    let mip = texture.mip_levels().saturating_sub(1);
    let _ = texture.pixel(texture.width(mip), 0, 0, mip, 0, 0);
    let _ = texture.pixel_2d(0, 0, 0);
    let _ = texture.sample_bilinear(0.5, 0.5, 0, 0, 0, 0);
    let _ = texture.sample(-1.25, 3.75, 0, 0.5, 0, 0);
    let _ = texture.sample(f32::NAN, 0.0, 0, 0.0, 0, 0);
});
