//! 24-bit uncompressed BMP: 14-byte file header, 40-byte BITMAPINFOHEADER,
//! then BGR rows stored bottom-up, each padded to a multiple of 4 bytes.
//!
//! The top-level [`crate::save_bmp`] / [`crate::load_bmp`] work on paths;
//! the stream and slice forms take an [`enough::Stop`] token.

mod decode;
mod encode;
mod header;
mod row;

pub use header::{
    FILE_HEADER_SIZE, FileHeader, INFO_HEADER_SIZE, InfoHeader, PIXEL_DATA_OFFSET, SIGNATURE,
    pixel_data_size, row_stride,
};

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use enough::{Stop, Unstoppable};

use crate::error::ImageError;
use crate::image::Image;
use crate::limits::Limits;

/// Write `image` to `path` as a 24-bit BMP, creating or truncating the file.
///
/// Alpha is dropped. On error the file may be left truncated.
pub fn save_bmp(path: impl AsRef<Path>, image: &Image) -> Result<(), ImageError> {
    let path = path.as_ref();
    encode::check_dimensions(image.width(), image.height())?;
    let file = File::create(path).map_err(|source| ImageError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!(
        "saving {}x{} BMP to {}",
        image.width(),
        image.height(),
        path.display()
    );
    encode::write_bmp(BufWriter::new(file), image, &Unstoppable)
}

/// Read a 24-bit BMP from `path`. Decoded alpha is always 255.
pub fn load_bmp(path: impl AsRef<Path>) -> Result<Image, ImageError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ImageError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let len = file.metadata().ok().map(|m| m.len());
    decode::read_bmp(BufReader::new(file), len, None, &Unstoppable).inspect_err(|e| {
        log::warn!("rejected BMP {}: {e}", path.display());
    })
}

/// Write `image` as BMP to any writer. The writer is flushed on success.
pub fn write_bmp<W: Write>(writer: W, image: &Image, stop: impl Stop) -> Result<(), ImageError> {
    encode::write_bmp(writer, image, &stop)
}

/// Read a BMP from any reader.
///
/// The input length is unknown here, so `limits` is the only bound on the
/// allocation a corrupt header can request.
pub fn read_bmp<R: Read>(
    reader: R,
    limits: Option<&Limits>,
    stop: impl Stop,
) -> Result<Image, ImageError> {
    decode::read_bmp(reader, None, limits, &stop)
}

/// Encode `image` to BMP bytes.
pub fn encode_bmp(image: &Image, stop: impl Stop) -> Result<Vec<u8>, ImageError> {
    let file_size = encode::check_dimensions(image.width(), image.height())?;
    let mut out = Vec::with_capacity(file_size as usize);
    encode::write_bmp(&mut out, image, &stop)?;
    Ok(out)
}

/// Decode BMP bytes.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<Image, ImageError> {
    decode_bmp_with_limits(data, None, stop)
}

/// Decode BMP bytes, rejecting images beyond `limits`.
pub fn decode_bmp_with_limits(
    data: &[u8],
    limits: Option<&Limits>,
    stop: impl Stop,
) -> Result<Image, ImageError> {
    decode::read_bmp(data, Some(data.len() as u64), limits, &stop)
}
