use std::path::Path;

use crate::error::ImageError;
use crate::image::Image;
use crate::{bmp, ppm};

/// Image file format with a load/save codec in this crate.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// 24-bit uncompressed Windows bitmap.
    Bmp,
    /// Binary portable pixmap (P6).
    Ppm,
}

impl ImageFormat {
    /// Pick a format from the file extension (`.bmp`, `.ppm`; ASCII
    /// case-insensitive). Returns `None` for anything else, JPEG included.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("bmp") {
            Some(Self::Bmp)
        } else if ext.eq_ignore_ascii_case("ppm") {
            Some(Self::Ppm)
        } else {
            None
        }
    }

    /// Detect the format from leading magic bytes.
    pub fn from_magic(data: &[u8]) -> Option<Self> {
        match data.get(..2)? {
            m if m == &bmp::SIGNATURE[..] => Some(Self::Bmp),
            b"P6" => Some(Self::Ppm),
            _ => None,
        }
    }

    /// Conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Bmp => "bmp",
            Self::Ppm => "ppm",
        }
    }

    /// Write `image` to `path` in this format.
    pub fn save(self, path: impl AsRef<Path>, image: &Image) -> Result<(), ImageError> {
        match self {
            Self::Bmp => bmp::save_bmp(path, image),
            Self::Ppm => ppm::save_ppm(path, image),
        }
    }

    /// Read `path` as this format.
    pub fn load(self, path: impl AsRef<Path>) -> Result<Image, ImageError> {
        match self {
            Self::Bmp => bmp::load_bmp(path),
            Self::Ppm => ppm::load_ppm(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_sniffing() {
        assert_eq!(ImageFormat::from_path("a/b/photo.bmp"), Some(ImageFormat::Bmp));
        assert_eq!(ImageFormat::from_path("PHOTO.BMP"), Some(ImageFormat::Bmp));
        assert_eq!(ImageFormat::from_path("x.ppm"), Some(ImageFormat::Ppm));
        assert_eq!(ImageFormat::from_path("x.jpg"), None);
        assert_eq!(ImageFormat::from_path("x.jpeg"), None);
        assert_eq!(ImageFormat::from_path("bmp"), None);
        assert_eq!(ImageFormat::from_path("x"), None);
    }

    #[test]
    fn magic_sniffing() {
        assert_eq!(ImageFormat::from_magic(b"BM\0\0"), Some(ImageFormat::Bmp));
        assert_eq!(ImageFormat::from_magic(b"P6\n"), Some(ImageFormat::Ppm));
        assert_eq!(ImageFormat::from_magic(b"P5\n"), None);
        assert_eq!(ImageFormat::from_magic(b"B"), None);
    }
}
