//! Binary PPM (P6) decoder, 8-bit samples only.

use enough::Stop;

use crate::error::ImageError;
use crate::image::{Image, pixel_count};
use crate::limits::{Limits, check_decode};
use crate::pixel::Color;

pub(crate) struct PpmHeader {
    pub width: u32,
    pub height: u32,
    pub maxval: u32,
    /// Offset of the first sample byte.
    pub data_offset: usize,
}

struct HeaderReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl HeaderReader<'_> {
    /// Skip whitespace and `#` comments (which run to end of line).
    fn skip_separators(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if b == b'#' {
                while let Some(&c) = self.data.get(self.pos) {
                    self.pos += 1;
                    if c == b'\n' || c == b'\r' {
                        break;
                    }
                }
            } else if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn read_u32(&mut self, what: &str) -> Result<u32, ImageError> {
        self.skip_separators();
        let start = self.pos;
        while self.data.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }
        if start == self.pos {
            if self.pos >= self.data.len() {
                return Err(ImageError::UnexpectedEof);
            }
            return Err(ImageError::InvalidHeader(format!("expected {what}")));
        }
        // digits only, so this is valid UTF-8
        let text = core::str::from_utf8(&self.data[start..self.pos]).unwrap_or_default();
        text.parse()
            .map_err(|_| ImageError::InvalidHeader(format!("{what} out of range: {text}")))
    }
}

/// Parse a P6 header.
pub(crate) fn parse_header(data: &[u8]) -> Result<PpmHeader, ImageError> {
    if data.len() < 2 {
        return Err(ImageError::UnexpectedEof);
    }
    if &data[0..2] != b"P6" {
        return Err(ImageError::UnrecognizedFormat);
    }
    let mut r = HeaderReader { data, pos: 2 };
    let width = r.read_u32("width")?;
    let height = r.read_u32("height")?;
    let maxval = r.read_u32("maxval")?;

    if maxval == 0 {
        return Err(ImageError::InvalidHeader("PPM maxval is zero".into()));
    }
    if maxval > 255 {
        return Err(ImageError::UnsupportedVariant(format!(
            "16-bit PPM (maxval {maxval})"
        )));
    }

    // Exactly one whitespace byte separates the header from the samples.
    match data.get(r.pos) {
        Some(b) if b.is_ascii_whitespace() => r.pos += 1,
        Some(_) => {
            return Err(ImageError::InvalidHeader(
                "missing whitespace after maxval".into(),
            ));
        }
        None => return Err(ImageError::UnexpectedEof),
    }

    Ok(PpmHeader {
        width,
        height,
        maxval,
        data_offset: r.pos,
    })
}

/// Decode P6 bytes into an opaque image.
pub(crate) fn decode_ppm(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image, ImageError> {
    let header = parse_header(data)?;
    let (width, height) = (header.width, header.height);
    check_decode(limits, width, height, 0)?;

    let sample_bytes = pixel_count(width, height)
        .and_then(|n| n.checked_mul(3))
        .ok_or(ImageError::DimensionsTooLarge { width, height })?;
    let samples = data
        .get(header.data_offset..)
        .and_then(|rest| rest.get(..sample_bytes))
        .ok_or(ImageError::UnexpectedEof)?;
    stop.check()?;

    log::debug!("decoding {width}x{height} PPM, maxval {}", header.maxval);
    let maxval = header.maxval;
    let scale = |v: u8| -> u8 {
        if maxval == 255 {
            v
        } else {
            ((u32::from(v).min(maxval) * 255 + maxval / 2) / maxval) as u8
        }
    };

    let mut image = Image::new(width, height, Color::BLACK);
    let row_bytes = width as usize * 3;
    if row_bytes > 0 {
        for (y, src) in samples.chunks_exact(row_bytes).enumerate() {
            if y % 16 == 0 {
                stop.check()?;
            }
            let row = image.row_mut(y as u32);
            for (px, rgb) in row.iter_mut().zip(src.chunks_exact(3)) {
                *px = Color::rgb(scale(rgb[0]), scale(rgb[1]), scale(rgb[2]));
            }
        }
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use enough::Unstoppable;

    #[test]
    fn header_with_comments() {
        let data = b"P6\n# made by hand\n2 # width\n1\n255\n\x01\x02\x03\x04\x05\x06";
        let h = parse_header(data).unwrap();
        assert_eq!((h.width, h.height, h.maxval), (2, 1, 255));
        assert_eq!(&data[h.data_offset..], b"\x01\x02\x03\x04\x05\x06");
    }

    #[test]
    fn sample_bytes_that_look_like_whitespace() {
        // first sample is '\n'; only one separator byte may be consumed
        let data = b"P6 1 1 255 \n\x20\x09";
        let img = decode_ppm(data, None, &Unstoppable).unwrap();
        assert_eq!(img.pixel(0, 0), Some(Color::rgb(b'\n', 0x20, 0x09)));
    }

    #[test]
    fn low_maxval_rescales() {
        let data = b"P6 1 1 15\n\x0f\x00\x07";
        let img = decode_ppm(data, None, &Unstoppable).unwrap();
        assert_eq!(img.pixel(0, 0), Some(Color::rgb(255, 0, 119)));
    }

    #[test]
    fn rejects_other_variants() {
        assert!(matches!(
            parse_header(b"P5 1 1 255\n\0"),
            Err(ImageError::UnrecognizedFormat)
        ));
        assert!(matches!(
            parse_header(b"P6 1 1 65535\n\0\0\0\0\0\0"),
            Err(ImageError::UnsupportedVariant(_))
        ));
        assert!(matches!(
            parse_header(b"P6 1 1 0\n"),
            Err(ImageError::InvalidHeader(_))
        ));
    }

    #[test]
    fn truncated_samples() {
        let err = decode_ppm(b"P6 2 2 255\n\0\0\0", None, &Unstoppable).unwrap_err();
        assert!(matches!(err, ImageError::UnexpectedEof));
    }
}
