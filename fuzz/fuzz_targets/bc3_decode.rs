#![no_main]

// Compares our DXT5 block decoder against rgbcx using the Ideal method.

use core::ffi::c_void;
use core::mem;
use libfuzzer_sys::{arbitrary, fuzz_target};
use rgbcx_sys::root::rgbcx;
use vtf_decode_common::decoded_4x4_block::Decoded4x4Block;
use vtf_decode_common::{color_565::Color565, color_8888::Color8888};
use vtf_decode_dxt::util::decode_bc3_block_from_slice;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Dxt5Block {
    pub bytes: [u8; 16],
}

fuzz_target!(|block: Dxt5Block| {
    // DXT5 colour blocks are always four colour; rgbcx only agrees when c0 > c1.
    let c0 = Color565::from_le_bytes([block.bytes[8], block.bytes[9]]);
    let c1 = Color565::from_le_bytes([block.bytes[10], block.bytes[11]]);
    if !c0.greater_than(&c1) {
        return;
    }

    let ours = decode_bc3_block_from_slice(&block.bytes).unwrap();
    let reference = rgbcx_decode_dxt5(&block.bytes);
    assert_eq!(ours, reference, "DXT5 block {:02X?} decoded differently", block.bytes);
});

fn rgbcx_decode_dxt5(block: &[u8; 16]) -> Decoded4x4Block {
    let mut rgba = [0u8; 64];
    unsafe {
        rgbcx::unpack_bc3(
            block.as_ptr() as *const c_void,
            rgba.as_mut_ptr() as *mut c_void,
            rgbcx::bc1_approx_mode::cBC1Ideal,
        );
    }

    let pixels = unsafe { mem::transmute::<[u8; 64], [Color8888; 16]>(rgba) };
    Decoded4x4Block { pixels }
}
