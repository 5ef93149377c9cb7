//! Binary PPM (P6), the lossless companion format of the converter.

mod decode;
mod encode;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use enough::{Stop, Unstoppable};

use crate::error::ImageError;
use crate::image::Image;
use crate::limits::Limits;

/// Write `image` to `path` as P6, creating or truncating the file.
pub fn save_ppm(path: impl AsRef<Path>, image: &Image) -> Result<(), ImageError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| ImageError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "saving {}x{} PPM to {}",
        image.width(),
        image.height(),
        path.display()
    );
    encode::write_ppm(BufWriter::new(file), image, &Unstoppable)
}

/// Read a P6 file from `path`.
pub fn load_ppm(path: impl AsRef<Path>) -> Result<Image, ImageError> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| ImageError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    decode::decode_ppm(&data, None, &Unstoppable).inspect_err(|e| {
        log::warn!("rejected PPM {}: {e}", path.display());
    })
}

/// Encode `image` to P6 bytes.
pub fn encode_ppm(image: &Image, stop: impl Stop) -> Result<Vec<u8>, ImageError> {
    let mut out = Vec::new();
    encode::write_ppm(&mut out, image, &stop)?;
    Ok(out)
}

/// Decode P6 bytes.
pub fn decode_ppm(data: &[u8], stop: impl Stop) -> Result<Image, ImageError> {
    decode::decode_ppm(data, None, &stop)
}

/// Decode P6 bytes, rejecting images beyond `limits`.
pub fn decode_ppm_with_limits(
    data: &[u8],
    limits: Option<&Limits>,
    stop: impl Stop,
) -> Result<Image, ImageError> {
    decode::decode_ppm(data, limits, &stop)
}
