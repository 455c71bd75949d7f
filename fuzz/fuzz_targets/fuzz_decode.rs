#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header read and full decode must never panic
    let info = zenqoi::decode_config(data);
    let decoded = zenqoi::decode(data, enough::Unstoppable);

    // A successful decode always agrees with the header and the reader path
    if let Ok(decoded) = decoded {
        let info = info.expect("decode succeeded but header read failed");
        assert_eq!((decoded.width, decoded.height), (info.width, info.height));
        assert_eq!(decoded.pixel_count() as u64, info.pixel_count());

        let from_reader = zenqoi::decode_from_reader(data, enough::Unstoppable)
            .expect("slice decode succeeded but reader decode failed");
        assert_eq!(decoded, from_reader);
    }
});
