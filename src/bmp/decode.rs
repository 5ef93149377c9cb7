//! BMP decoder for uncompressed, bottom-up, 24-bit files.
//!
//! Validation is minimal: the signature and the info header size are
//! checked, while planes, bit depth and compression are trusted as written.
//! Dimensions are bounded before allocating and every row read must be
//! complete.

use std::io::Read;

use enough::Stop;

use super::header::{
    FILE_HEADER_SIZE, FileHeader, INFO_HEADER_SIZE, InfoHeader, PIXEL_DATA_OFFSET, row_stride,
};
use super::row::decode_row;
use crate::error::ImageError;
use crate::image::Image;
use crate::limits::{Limits, check_decode};
use crate::pixel::Color;

/// Parsed and validated header pair.
pub(crate) struct BmpHeader {
    pub width: u32,
    pub height: u32,
}

/// Read and validate both headers, leaving `input` at the first pixel row.
pub(crate) fn read_headers<R: Read>(input: &mut R) -> Result<BmpHeader, ImageError> {
    let mut file_bytes = [0u8; FILE_HEADER_SIZE as usize];
    input
        .read_exact(&mut file_bytes)
        .map_err(ImageError::from_read)?;
    let file_header = FileHeader::from_bytes(&file_bytes);
    if !file_header.has_signature() {
        return Err(ImageError::SignatureMismatch {
            found: file_header.signature,
        });
    }

    let mut info_bytes = [0u8; INFO_HEADER_SIZE as usize];
    input
        .read_exact(&mut info_bytes)
        .map_err(ImageError::from_read)?;
    let info = InfoHeader::from_bytes(&info_bytes);
    if info.header_size != INFO_HEADER_SIZE {
        return Err(ImageError::InfoHeaderSize(info.header_size));
    }

    // Stored unsigned, meant as signed: a negative value is a top-down or
    // corrupt file, neither of which this decoder reads.
    let (w, h) = (info.width as i32, info.height as i32);
    if w < 0 || h < 0 {
        return Err(ImageError::InvalidDimensions {
            width: i64::from(w),
            height: i64::from(h),
        });
    }

    Ok(BmpHeader {
        width: info.width,
        height: info.height,
    })
}

/// Decode a BMP stream.
///
/// `available` is the total input length when known (file or slice size);
/// pixel storage is only allocated once the input is long enough to fill it.
pub(crate) fn read_bmp<R: Read>(
    mut input: R,
    available: Option<u64>,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, ImageError> {
    let BmpHeader { width, height } = read_headers(&mut input)?;
    let stride = row_stride(width);
    // The line buffer only exists when there is a row to read
    let scratch = if height == 0 { 0 } else { stride };
    check_decode(limits, width, height, scratch)?;

    if let Some(len) = available {
        let needed = stride
            .saturating_mul(u64::from(height))
            .saturating_add(u64::from(PIXEL_DATA_OFFSET));
        if len < needed {
            return Err(ImageError::UnexpectedEof);
        }
    }
    let stride =
        usize::try_from(stride).map_err(|_| ImageError::DimensionsTooLarge { width, height })?;
    stop.check()?;

    log::debug!("decoding {width}x{height} BMP, stride {stride}");
    let mut image = Image::new(width, height, Color::BLACK);
    if image.is_empty() {
        // Zero-width rows are zero bytes long, so there is nothing to read
        return Ok(image);
    }
    let mut line = vec![0u8; stride];
    for y in (0..height).rev() {
        if y % 16 == 0 {
            stop.check()?;
        }
        input.read_exact(&mut line).map_err(ImageError::from_read)?;
        decode_row(&line, image.row_mut(y));
    }

    Ok(image)
}
