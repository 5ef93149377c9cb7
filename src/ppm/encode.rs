//! Binary PPM (P6) encoder.

use std::io::Write;

use enough::Stop;

use crate::error::ImageError;
use crate::image::Image;

/// Write `image` as P6 with maxval 255. Alpha is dropped.
pub(crate) fn write_ppm<W: Write>(
    mut out: W,
    image: &Image,
    stop: &dyn Stop,
) -> Result<(), ImageError> {
    let (width, height) = (image.width(), image.height());
    stop.check()?;

    let header = format!("P6\n{width} {height}\n255\n");
    out.write_all(header.as_bytes())
        .map_err(ImageError::StreamWrite)?;

    // Grows on the first row; an image with no rows never allocates
    let mut line = Vec::new();
    for (y, row) in image.rows().enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        line.clear();
        for px in row {
            line.extend_from_slice(&[px.r, px.g, px.b]);
        }
        out.write_all(&line).map_err(ImageError::StreamWrite)?;
    }

    out.flush().map_err(ImageError::StreamWrite)
}
