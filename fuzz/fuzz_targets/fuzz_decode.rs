#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Each decoder must reject garbage with an error, never a panic
    let _ = imglib::decode_bmp(data, enough::Unstoppable);
    let _ = imglib::decode_ppm(data, enough::Unstoppable);
    let _ = imglib::read_bmp(data, Some(&limits()), enough::Unstoppable);
});

fn limits() -> imglib::Limits {
    imglib::Limits {
        max_pixels: Some(1 << 24),
        ..Default::default()
    }
}
