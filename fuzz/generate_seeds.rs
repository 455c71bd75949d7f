#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(width: u32, height: u32) -> Vec<u8> {
    let mut v = b"qoif".to_vec();
    v.extend_from_slice(&width.to_be_bytes());
    v.extend_from_slice(&height.to_be_bytes());
    v.extend_from_slice(&[4, 0]);
    v
}

const END: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 1];

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 1x1 RGBA
    let mut rgba = header(1, 1);
    rgba.extend_from_slice(&[0xff, 10, 20, 30, 255]);
    rgba.extend_from_slice(&END);
    fs::write(format!("{dir}/rgba_1x1.qoi"), rgba).unwrap();

    // 4x2 with every op: RGB, DIFF, LUMA, INDEX, RUN
    let mut ops = header(4, 2);
    ops.extend_from_slice(&[0xfe, 100, 50, 25, 0x6b, 0xa0, 0x77, 0x00, 0xc3]);
    ops.extend_from_slice(&END);
    fs::write(format!("{dir}/all_ops_4x2.qoi"), ops).unwrap();

    // 64x64 solid, runs only
    let mut solid = header(64, 64);
    let mut left = 64 * 64;
    while left > 0 {
        let n = left.min(62);
        solid.push(0xc0 | (n as u8 - 1));
        left -= n;
    }
    solid.extend_from_slice(&END);
    fs::write(format!("{dir}/solid_64x64.qoi"), solid).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_magic.bin"), b"qoif").unwrap();
    fs::write(format!("{dir}/header_only.bin"), header(2, 2)).unwrap();
    let mut bad_end = header(1, 1);
    bad_end.extend_from_slice(&[0xc0, 0, 0, 0, 0, 0, 0, 0, 2]);
    fs::write(format!("{dir}/bad_end_marker.bin"), bad_end).unwrap();

    println!("Generated seed corpus in {dir}/");
}
