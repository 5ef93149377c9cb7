use std::path::PathBuf;

use enough::Unstoppable;
use imglib::*;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("imglib-rt-{}-{name}", std::process::id()))
}

fn sample_image() -> Image {
    let pixels = vec![
        Color::rgb(255, 0, 0),
        Color::rgb(0, 255, 0),
        Color::rgb(0, 0, 255), // row 0: R G B
        Color::rgb(128, 128, 128),
        Color::rgb(64, 64, 64),
        Color::rgb(0, 0, 0), // row 1: gray dark black
    ];
    Image::from_pixels(3, 2, pixels).unwrap()
}

#[test]
fn bmp_file_roundtrip() {
    let path = temp_path("sample.bmp");
    let image = sample_image();
    save_bmp(&path, &image).unwrap();

    let decoded = load_bmp(&path).unwrap();
    assert_eq!(decoded, image);

    let bytes = std::fs::read(&path).unwrap();
    // 3 px * 3 bytes = 9, padded to 12, two rows
    assert_eq!(bytes.len(), 54 + 24);
    assert_eq!(&bytes[0..2], b"BM");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn bmp_bytes_roundtrip() {
    let image = sample_image();
    let encoded = encode_bmp(&image, Unstoppable).unwrap();
    let decoded = decode_bmp(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.width(), 3);
    assert_eq!(decoded.height(), 2);
    assert_eq!(decoded.pixels(), image.pixels());
}

#[test]
fn bmp_stream_roundtrip() {
    let image = sample_image();
    let mut out = Vec::new();
    write_bmp(&mut out, &image, Unstoppable).unwrap();
    let decoded = read_bmp(&out[..], None, Unstoppable).unwrap();
    assert_eq!(decoded, image);
}

#[test]
fn bmp_drops_alpha() {
    let pixels = vec![
        Color::new(255, 0, 0, 0),
        Color::new(0, 255, 0, 128),
        Color::new(0, 0, 255, 64),
        Color::new(128, 128, 128, 255),
    ];
    let image = Image::from_pixels(2, 2, pixels.clone()).unwrap();
    let encoded = encode_bmp(&image, Unstoppable).unwrap();

    // alpha never reaches the file: same bytes as the opaque image
    let opaque: Vec<Color> = pixels.iter().map(|c| c.opaque()).collect();
    let opaque_image = Image::from_pixels(2, 2, opaque.clone()).unwrap();
    assert_eq!(encoded, encode_bmp(&opaque_image, Unstoppable).unwrap());

    let decoded = decode_bmp(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.pixels(), &opaque[..]);
}

#[test]
fn ppm_file_roundtrip() {
    let path = temp_path("sample.ppm");
    let image = sample_image();
    save_ppm(&path, &image).unwrap();
    let decoded = load_ppm(&path).unwrap();
    assert_eq!(decoded, image);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn format_dispatch_roundtrip() {
    let image = sample_image();
    for format in [ImageFormat::Bmp, ImageFormat::Ppm] {
        let path = temp_path(&format!("dispatch.{}", format.extension()));
        assert_eq!(ImageFormat::from_path(&path), Some(format));
        format.save(&path, &image).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(ImageFormat::from_magic(&bytes), Some(format));
        assert_eq!(format.load(&path).unwrap(), image);
        std::fs::remove_file(&path).unwrap();
    }
}

#[test]
fn bmp_to_ppm_conversion() {
    let bmp_path = temp_path("convert.bmp");
    let ppm_path = temp_path("convert.ppm");
    let image = sample_image();
    save_bmp(&bmp_path, &image).unwrap();

    let loaded = load_bmp(&bmp_path).unwrap();
    save_ppm(&ppm_path, &loaded).unwrap();
    assert_eq!(load_ppm(&ppm_path).unwrap(), image);

    std::fs::remove_file(&bmp_path).unwrap();
    std::fs::remove_file(&ppm_path).unwrap();
}

#[test]
fn limits_reject_large() {
    let image = Image::new(4, 4, Color::WHITE);
    let encoded = encode_bmp(&image, Unstoppable).unwrap();

    let limits = Limits {
        max_pixels: Some(8),
        ..Default::default()
    };

    let result = decode_bmp_with_limits(&encoded, Some(&limits), Unstoppable);
    match result.unwrap_err() {
        ImageError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}
