#![no_main]
use libfuzzer_sys::fuzz_target;
use imglib::*;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must survive re-encoding unchanged
    let decoded = match ImageFormat::from_magic(data) {
        Some(ImageFormat::Bmp) => decode_bmp(data, enough::Unstoppable),
        Some(ImageFormat::Ppm) => decode_ppm(data, enough::Unstoppable),
        _ => return,
    };
    let Ok(decoded) = decoded else { return };

    // PPM allows dimensions (e.g. 4294967295x0) that BMP headers cannot hold
    let Ok(bmp) = encode_bmp(&decoded, enough::Unstoppable) else { return };
    let again = decode_bmp(&bmp, enough::Unstoppable).expect("re-encoded BMP failed to decode");
    assert_eq!(decoded, again, "BMP roundtrip pixel mismatch");

    let ppm = encode_ppm(&decoded, enough::Unstoppable).expect("decoded image must encode");
    let again = decode_ppm(&ppm, enough::Unstoppable).expect("re-encoded PPM failed to decode");
    assert_eq!(decoded, again, "PPM roundtrip pixel mismatch");
});
