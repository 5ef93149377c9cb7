use crate::error::ImageError;
use crate::pixel::Color;

/// A rectangular, row-major grid of [`Color`] samples, top row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Image {
    /// Allocate a `width` x `height` image with every sample set to `fill`.
    ///
    /// Panics if `width * height` does not fit in `usize`. Decoders check
    /// dimensions before calling this.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let len = pixel_count(width, height).expect("image dimensions overflow usize");
        Self {
            width,
            height,
            pixels: vec![fill; len],
        }
    }

    /// Wrap an existing pixel vector. Its length must be exactly `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self, ImageError> {
        let needed =
            pixel_count(width, height).ok_or(ImageError::DimensionsTooLarge { width, height })?;
        if pixels.len() != needed {
            return Err(ImageError::BufferSizeMismatch {
                needed,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when the image has no pixels (either dimension is zero).
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All samples, row-major, top row first.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<Color> {
        self.pixels
    }

    /// Row `y` (0 = top). Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[Color] {
        let (start, end) = self.row_span(y);
        &self.pixels[start..end]
    }

    /// Mutable row `y` (0 = top). Panics if `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [Color] {
        let (start, end) = self.row_span(y);
        &mut self.pixels[start..end]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Color]> + ExactSizeIterator {
        // chunks_exact(0) panics; a zero-width image still has `height` empty rows
        let w = (self.width as usize).max(1);
        let n = if self.width == 0 { 0 } else { self.height as usize };
        self.pixels.chunks_exact(w).take(n)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Set one sample. Returns false (and changes nothing) when out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.pixels[y as usize * self.width as usize + x as usize] = color;
        true
    }

    fn row_span(&self, y: u32) -> (usize, usize) {
        assert!(y < self.height, "row {y} out of bounds (height {})", self.height);
        let w = self.width as usize;
        let start = y as usize * w;
        (start, start + w)
    }

    /// Copy into an [`imgref::ImgVec`] of `RGBA8`.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGBA8> {
        let pixels = self.pixels.iter().map(|&c| rgb::RGBA8::from(c)).collect();
        imgref::ImgVec::new(pixels, self.width as usize, self.height as usize)
    }

    /// Copy from an [`imgref::ImgRef`] of `RGBA8`, honoring its stride.
    #[cfg(feature = "imgref")]
    pub fn from_imgref(img: imgref::ImgRef<'_, rgb::RGBA8>) -> Result<Self, ImageError> {
        let (Ok(width), Ok(height)) = (u32::try_from(img.width()), u32::try_from(img.height()))
        else {
            return Err(ImageError::DimensionsTooLarge {
                width: u32::MAX,
                height: u32::MAX,
            });
        };
        let pixels = img
            .rows()
            .flat_map(|row| row.iter().map(|&px| Color::from(px)))
            .collect();
        Self::from_pixels(width, height, pixels)
    }
}

/// `width * height` as a `usize`, or `None` on overflow.
pub(crate) fn pixel_count(width: u32, height: u32) -> Option<usize> {
    (width as usize).checked_mul(height as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_every_sample() {
        let img = Image::new(3, 2, Color::WHITE);
        assert_eq!(img.pixels().len(), 6);
        assert!(img.pixels().iter().all(|&c| c == Color::WHITE));
        assert!(!img.is_empty());
    }

    #[test]
    fn rows_are_top_first() {
        let mut img = Image::new(2, 3, Color::BLACK);
        img.row_mut(2)[1] = Color::rgb(9, 8, 7);
        assert_eq!(img.pixel(1, 2), Some(Color::rgb(9, 8, 7)));
        let last = img.rows().last().unwrap();
        assert_eq!(last[1], Color::rgb(9, 8, 7));
        assert_eq!(img.rows().len(), 3);
    }

    #[test]
    fn zero_width_has_no_rows() {
        let img = Image::new(0, 5, Color::BLACK);
        assert!(img.is_empty());
        assert_eq!(img.rows().count(), 0);
        assert_eq!(img.row(4), &[] as &[Color]);
    }

    #[test]
    fn from_pixels_rejects_wrong_length() {
        let err = Image::from_pixels(2, 2, vec![Color::BLACK; 3]).unwrap_err();
        assert!(matches!(
            err,
            ImageError::BufferSizeMismatch {
                needed: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn set_pixel_out_of_bounds_is_ignored() {
        let mut img = Image::new(1, 1, Color::BLACK);
        assert!(!img.set_pixel(1, 0, Color::WHITE));
        assert!(img.set_pixel(0, 0, Color::WHITE));
        assert_eq!(img.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(img.pixel(0, 1), None);
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn imgref_roundtrip() {
        let mut img = Image::new(2, 2, Color::BLACK);
        img.set_pixel(1, 0, Color::new(1, 2, 3, 4));
        let v = img.to_imgvec();
        assert_eq!(v.width(), 2);
        let back = Image::from_imgref(v.as_ref()).unwrap();
        assert_eq!(back, img);
    }
}
