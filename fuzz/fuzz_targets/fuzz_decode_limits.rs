#![no_main]
use libfuzzer_sys::fuzz_target;
use zenqoi::{DecodeRequest, Limits};

fuzz_target!(|data: &[u8]| {
    // Small limits keep the fuzzer from spending its time allocating
    let limits = Limits {
        max_pixels: Some(1 << 20),
        max_memory_bytes: Some(4 << 20),
        ..Default::default()
    };
    let Ok(decoded) = DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    else {
        return;
    };

    let mut buf = vec![0u8; decoded.pixels().len()];
    let info = DecodeRequest::new(data)
        .with_limits(&limits)
        .decode_into(&mut buf, enough::Unstoppable)
        .expect("decode succeeded but decode_into failed");
    assert_eq!(info, decoded.info());
    assert_eq!(&buf[..], decoded.pixels(), "decode_into pixel mismatch");
});
