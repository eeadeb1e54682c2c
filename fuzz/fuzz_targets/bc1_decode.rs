#![no_main]

// Compares our DXT1 block decoder against rgbcx using the Ideal method.
// Extra reading: https://fgiesen.wordpress.com/2021/10/04/gpu-bcn-decoding/

use core::ffi::c_void;
use core::mem;
use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;
use vtf_decode_common::color_8888::Color8888;
use vtf_decode_common::decoded_4x4_block::Decoded4x4Block;
use vtf_decode_dxt::util::decode_bc1_block_from_slice;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Dxt1Block {
    pub bytes: [u8; 8],
}

fuzz_target!(|block: Dxt1Block| {
    let ours = decode_bc1_block_from_slice(&block.bytes).unwrap();
    let reference = rgbcx_decode_dxt1(&block.bytes);
    assert_eq!(ours, reference, "DXT1 block {:02X?} decoded differently", block.bytes);
});

fn rgbcx_decode_dxt1(block: &[u8; 8]) -> Decoded4x4Block {
    let mut rgba = [0u8; 64];
    unsafe {
        rgbcx::unpack_bc1(
            block.as_ptr() as *const c_void,
            rgba.as_mut_ptr() as *mut c_void,
            true,
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );
    }

    // RGBA byte order matches Color8888
    let pixels = unsafe { mem::transmute::<[u8; 64], [Color8888; 16]>(rgba) };
    Decoded4x4Block { pixels }
}
