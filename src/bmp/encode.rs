//! BMP encoder: uncompressed, bottom-up, 24-bit BMP.

use std::io::Write;

use enough::Stop;

use super::header::{FileHeader, InfoHeader, PIXEL_DATA_OFFSET, row_stride};
use super::row::encode_row;
use crate::error::ImageError;
use crate::image::Image;

/// Reject images whose file size overflows the u32 size fields, or whose
/// dimensions would read back as negative.
pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<u64, ImageError> {
    let too_large = ImageError::DimensionsTooLarge { width, height };
    if width > i32::MAX as u32 || height > i32::MAX as u32 {
        return Err(too_large);
    }
    let file_size = row_stride(width)
        .checked_mul(u64::from(height))
        .and_then(|n| n.checked_add(u64::from(PIXEL_DATA_OFFSET)))
        .filter(|&n| n <= u64::from(u32::MAX))
        .ok_or(too_large)?;
    Ok(file_size)
}

/// Write `image` as a complete BMP stream.
///
/// Rows go out bottom row first. Alpha is not stored.
pub(crate) fn write_bmp<W: Write>(
    mut out: W,
    image: &Image,
    stop: &dyn Stop,
) -> Result<(), ImageError> {
    let (width, height) = (image.width(), image.height());
    check_dimensions(width, height)?;
    stop.check()?;

    let file_header = FileHeader::for_dimensions(width, height);
    out.write_all(&file_header.to_bytes())
        .map_err(ImageError::StreamWrite)?;
    let info_header = InfoHeader::for_dimensions(width, height);
    out.write_all(&info_header.to_bytes())
        .map_err(ImageError::StreamWrite)?;

    if image.is_empty() {
        // Headers only: zero-width rows have no bytes, not even padding
        return out.flush().map_err(ImageError::StreamWrite);
    }

    // check_dimensions bounds the whole file by u32::MAX
    let mut line = vec![0u8; row_stride(width) as usize];
    for y in (0..height).rev() {
        if y % 16 == 0 {
            stop.check()?;
        }
        encode_row(image.row(y), &mut line);
        out.write_all(&line).map_err(ImageError::StreamWrite)?;
    }

    out.flush().map_err(ImageError::StreamWrite)
}
