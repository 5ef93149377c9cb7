//! # imglib
//!
//! 24-bit BMP and binary PPM image codec.
//!
//! Both formats load into and save from an [`Image`]: a row-major grid of
//! [`Color`] samples, top row first. Neither format stores alpha; decoded
//! images are always opaque.
//!
//! ## Supported Formats
//!
//! ### BMP
//! - Uncompressed 24-bit, bottom-up, no palette, 40-byte BITMAPINFOHEADER
//! - Output is byte-exact: fixed 11811 px/m density, fixed header fields
//!
//! ### PPM
//! - P6 (binary RGB), maxval 1–255
//!
//! ## Non-Goals
//!
//! - Compressed, paletted, bitfield or top-down BMP variants
//! - Alpha persistence
//! - JPEG and color management
//!
//! ## Usage
//!
//! ```no_run
//! use imglib::{Color, Image, ImageFormat};
//!
//! let mut image = Image::new(4, 3, Color::BLACK);
//! image.set_pixel(1, 1, Color::rgb(255, 128, 0));
//! imglib::save_bmp("out.bmp", &image)?;
//!
//! let back = imglib::load_bmp("out.bmp")?;
//! assert_eq!(back.pixel(1, 1), Some(Color::rgb(255, 128, 0)));
//!
//! // Pick the codec from the extension
//! let format = ImageFormat::from_path("out.ppm").unwrap();
//! format.save("out.ppm", &back)?;
//! # Ok::<(), imglib::ImageError>(())
//! ```

#![forbid(unsafe_code)]

mod error;
mod format;
mod image;
mod limits;
mod pixel;

pub mod bmp;
pub mod ppm;

// Re-exports
pub use bmp::{
    decode_bmp, decode_bmp_with_limits, encode_bmp, load_bmp, read_bmp, save_bmp, write_bmp,
};
pub use enough::{Stop, Unstoppable};
pub use error::ImageError;
pub use format::ImageFormat;
pub use image::Image;
pub use limits::Limits;
pub use pixel::Color;
pub use ppm::{decode_ppm, decode_ppm_with_limits, encode_ppm, load_ppm, save_ppm};
