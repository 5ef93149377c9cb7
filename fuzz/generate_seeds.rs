#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // PPM 2x2
    let ppm = b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80";
    fs::write(format!("{dir}/ppm_2x2.ppm"), ppm).unwrap();

    // PPM with comment and low maxval
    let ppm15 = b"P6\n# seed\n1 1\n15\n\x0f\x07\x00";
    fs::write(format!("{dir}/ppm_maxval15.ppm"), ppm15).unwrap();

    // Minimal BMP 1x1 24-bit, same header values the encoder writes
    let mut bmp = vec![0u8; 58]; // 54 header + 4 pixel (3 + 1 padding)
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&58u32.to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // info header size
    bmp[18..22].copy_from_slice(&1u32.to_le_bytes()); // width
    bmp[22..26].copy_from_slice(&1u32.to_le_bytes()); // height
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    bmp[34..38].copy_from_slice(&4u32.to_le_bytes()); // pixel data size
    bmp[38..42].copy_from_slice(&11811u32.to_le_bytes());
    bmp[42..46].copy_from_slice(&11811u32.to_le_bytes());
    bmp[50..54].copy_from_slice(&0x100_0000u32.to_le_bytes());
    bmp[54] = 0xff; bmp[55] = 0x00; bmp[56] = 0x00; // BGR
    fs::write(format!("{dir}/bmp_1x1.bmp"), &bmp).unwrap();

    // BMP 2x1 with nonzero padding
    let mut bmp2 = bmp.clone();
    bmp2[2..6].copy_from_slice(&62u32.to_le_bytes());
    bmp2[18..22].copy_from_slice(&2u32.to_le_bytes());
    bmp2[34..38].copy_from_slice(&8u32.to_le_bytes());
    bmp2.truncate(54);
    bmp2.extend_from_slice(&[1, 2, 3, 4, 5, 6, 0xAA, 0xBB]);
    fs::write(format!("{dir}/bmp_2x1_padding.bmp"), bmp2).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p6.bin"), b"P6").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/bmp_truncated.bin"), &bmp[..56]).unwrap();

    println!("Generated seed corpus in {dir}/");
}
