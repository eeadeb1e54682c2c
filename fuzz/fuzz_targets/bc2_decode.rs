#![no_main]

// Compares our DXT3 block decoder against rgbcx for colour and bcdec_rs for alpha.

use core::ffi::c_void;
use core::mem;
use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;
use vtf_decode_common::decoded_4x4_block::Decoded4x4Block;
use vtf_decode_common::{color_565::Color565, color_8888::Color8888};
use vtf_decode_dxt::util::decode_bc2_block_from_slice;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Dxt3Block {
    pub bytes: [u8; 16],
}

fuzz_target!(|block: Dxt3Block| {
    // DXT3 colour blocks are always four colour; rgbcx only agrees when c0 > c1.
    let c0 = Color565::from_le_bytes([block.bytes[8], block.bytes[9]]);
    let c1 = Color565::from_le_bytes([block.bytes[10], block.bytes[11]]);
    if !c0.greater_than(&c1) {
        return;
    }

    let ours = decode_bc2_block_from_slice(&block.bytes).unwrap();
    let reference = reference_decode_dxt3(&block.bytes);
    assert_eq!(ours, reference, "DXT3 block {:02X?} decoded differently", block.bytes);
});

fn reference_decode_dxt3(block: &[u8; 16]) -> Decoded4x4Block {
    let mut colour = [0u8; 64];
    let mut alpha = [0u8; 64];
    unsafe {
        rgbcx::unpack_bc1(
            block.as_ptr().add(8) as *const c_void,
            colour.as_mut_ptr() as *mut c_void,
            true,
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );
    }
    bcdec_rs::bc2(block, &mut alpha, 16);

    let mut pixels = unsafe { mem::transmute::<[u8; 64], [Color8888; 16]>(colour) };
    let alpha = unsafe { mem::transmute::<[u8; 64], [Color8888; 16]>(alpha) };
    for (pixel, alpha) in pixels.iter_mut().zip(alpha) {
        pixel.a = alpha.a;
    }
    Decoded4x4Block { pixels }
}
