//! Test corpus: synthetic images pushed through a minimal reference
//! encoder, then decoded and compared pixel for pixel.

use enough::Unstoppable;
use zenqoi::*;

fn hash(px: [u8; 4]) -> usize {
    let [r, g, b, a] = px.map(usize::from);
    (r * 3 + g * 5 + b * 7 + a * 11) % 64
}

/// Reference QOI encoder for RGBA8 input. Test-only.
fn encode(pixels: &[u8], width: u32, height: u32) -> Vec<u8> {
    assert_eq!(pixels.len(), width as usize * height as usize * 4);

    let mut out = b"qoif".to_vec();
    out.extend_from_slice(&width.to_be_bytes());
    out.extend_from_slice(&height.to_be_bytes());
    out.extend_from_slice(&[4, 0]);

    let mut cache = [[0u8; 4]; 64];
    let mut prev = [0u8, 0, 0, 255];
    let mut run = 0u8;
    let count = pixels.len() / 4;

    for (i, chunk) in pixels.chunks_exact(4).enumerate() {
        let px = [chunk[0], chunk[1], chunk[2], chunk[3]];

        if px == prev {
            run += 1;
            if run == 62 || i + 1 == count {
                out.push(0xc0 | (run - 1));
                run = 0;
            }
            continue;
        }
        if run > 0 {
            out.push(0xc0 | (run - 1));
            run = 0;
        }

        let slot = hash(px);
        if cache[slot] == px {
            out.push(slot as u8);
        } else {
            cache[slot] = px;
            if px[3] == prev[3] {
                let dr = px[0].wrapping_sub(prev[0]) as i8;
                let dg = px[1].wrapping_sub(prev[1]) as i8;
                let db = px[2].wrapping_sub(prev[2]) as i8;
                let dr_dg = dr.wrapping_sub(dg);
                let db_dg = db.wrapping_sub(dg);

                let small = -2..=1;
                if small.contains(&dr) && small.contains(&dg) && small.contains(&db) {
                    out.push(
                        0x40 | ((dr + 2) as u8) << 4 | ((dg + 2) as u8) << 2 | (db + 2) as u8,
                    );
                } else if (-32..=31).contains(&dg)
                    && (-8..=7).contains(&dr_dg)
                    && (-8..=7).contains(&db_dg)
                {
                    out.push(0x80 | (dg + 32) as u8);
                    out.push(((dr_dg + 8) as u8) << 4 | (db_dg + 8) as u8);
                } else {
                    out.extend_from_slice(&[0xfe, px[0], px[1], px[2]]);
                }
            } else {
                out.extend_from_slice(&[0xff, px[0], px[1], px[2], px[3]]);
            }
        }
        prev = px;
    }

    out.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 1]);
    out
}

fn checkerboard(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * 4];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * 4;
            let px = if (x + y) % 2 == 0 {
                [200, 220, 240, 255]
            } else {
                [10, 40, 70, 255]
            };
            pixels[off..off + 4].copy_from_slice(&px);
        }
    }
    pixels
}

fn gradient(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * 4];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * 4;
            pixels[off] = (x * 3) as u8;
            pixels[off + 1] = (y * 5 + x) as u8;
            pixels[off + 2] = (x * 7 + y * 11) as u8;
            pixels[off + 3] = 255;
        }
    }
    pixels
}

fn noise_pattern(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * 4];
    let mut state: u32 = 0xDEAD_BEEF;
    for p in pixels.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = state as u8;
    }
    pixels
}

/// Few distinct colors, long runs, alpha changes: hits INDEX and RUN.
fn stripes(w: usize, h: usize) -> Vec<u8> {
    const COLORS: [[u8; 4]; 4] = [
        [255, 0, 0, 255],
        [0, 255, 0, 128],
        [0, 0, 255, 0],
        [255, 255, 255, 255],
    ];
    let mut pixels = Vec::with_capacity(w * h * 4);
    for y in 0..h {
        for x in 0..w {
            pixels.extend_from_slice(&COLORS[(x / 5 + y) % COLORS.len()]);
        }
    }
    pixels
}

fn assert_roundtrip(pixels: &[u8], w: u32, h: u32) {
    let encoded = encode(pixels, w, h);
    let decoded = decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.width, w);
    assert_eq!(decoded.height, h);
    assert_eq!(decoded.pixel_count(), (w * h) as usize);
    assert_eq!(decoded.pixels(), pixels);
}

#[test]
fn checkerboard_roundtrip() {
    assert_roundtrip(&checkerboard(8, 6), 8, 6);
}

#[test]
fn gradient_roundtrip() {
    assert_roundtrip(&gradient(64, 48), 64, 48);
}

#[test]
fn noise_roundtrip() {
    assert_roundtrip(&noise_pattern(17, 13), 17, 13);
}

#[test]
fn stripes_roundtrip() {
    assert_roundtrip(&stripes(33, 20), 33, 20);
}

#[test]
fn solid_roundtrip_long_runs() {
    let pixels: Vec<u8> = [12u8, 34, 56, 255].repeat(100 * 7);
    assert_roundtrip(&pixels, 100, 7);
}

#[test]
fn start_pixel_run_roundtrip() {
    // image that begins with the implicit start pixel
    let pixels: Vec<u8> = [0u8, 0, 0, 255].repeat(70);
    assert_roundtrip(&pixels, 10, 7);
}

#[test]
fn single_row_and_single_column() {
    assert_roundtrip(&noise_pattern(50, 1), 50, 1);
    assert_roundtrip(&gradient(1, 50), 1, 50);
}

#[test]
fn decode_into_matches_decode() {
    let pixels = gradient(20, 20);
    let encoded = encode(&pixels, 20, 20);
    let mut buf = vec![0u8; pixels.len()];
    let info = DecodeRequest::new(&encoded)
        .decode_into(&mut buf, Unstoppable)
        .unwrap();
    assert_eq!(info, ImageInfo { width: 20, height: 20 });
    assert_eq!(buf, pixels);
}

#[test]
fn every_truncation_fails() {
    let pixels = stripes(9, 4);
    let encoded = encode(&pixels, 9, 4);
    for len in 0..encoded.len() {
        match decode(&encoded[..len], Unstoppable) {
            Err(QoiError::UnexpectedEnd(_)) => {}
            other => panic!("len {len}: expected UnexpectedEnd, got {other:?}"),
        }
    }
}

#[cfg(feature = "std")]
#[test]
fn reader_roundtrip() {
    let pixels = noise_pattern(31, 9);
    let encoded = encode(&pixels, 31, 9);
    let decoded = decode_from_reader(std::io::BufReader::new(&encoded[..]), Unstoppable).unwrap();
    assert_eq!(decoded.pixels(), &pixels[..]);
}

#[cfg(feature = "rgb")]
#[test]
fn typed_rgba_view() {
    let pixels = checkerboard(4, 2);
    let decoded = decode(&encode(&pixels, 4, 2), Unstoppable).unwrap();
    let typed = decoded.as_rgba();
    assert_eq!(typed.len(), 8);
    assert_eq!(typed[0], rgb::RGBA8::new(200, 220, 240, 255));
    assert_eq!(typed[1], rgb::RGBA8::new(10, 40, 70, 255));
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_view() {
    let pixels = gradient(6, 3);
    let decoded = decode(&encode(&pixels, 6, 3), Unstoppable).unwrap();
    let img = decoded.as_imgref();
    assert_eq!(img.width(), 6);
    assert_eq!(img.height(), 3);
    assert_eq!(decoded.to_imgvec().buf().len(), 18);
}
