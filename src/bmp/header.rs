//! BMP file header and BITMAPINFOHEADER, packed field by field.
//!
//! All fields are little-endian with no padding between them.

/// `"BM"`.
pub const SIGNATURE: [u8; 2] = *b"BM";
pub const FILE_HEADER_SIZE: u32 = 14;
pub const INFO_HEADER_SIZE: u32 = 40;
/// Offset of the first pixel row: both headers, no palette.
pub const PIXEL_DATA_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

const BITS_PER_PIXEL: u16 = 24;
/// 300 DPI in pixels per meter.
const DENSITY: u32 = 11811;
/// Nonzero in files this format has always written; kept for byte-exact output.
const IMPORTANT_COLORS: u32 = 0x100_0000;

/// Bytes in one stored row: `width * 3` rounded up to a multiple of 4.
pub const fn row_stride(width: u32) -> u64 {
    (width as u64 * 3 + 3) & !3
}

/// Size of the pixel array for a `width` x `height` image.
pub const fn pixel_data_size(width: u32, height: u32) -> u64 {
    row_stride(width) * height as u64
}

/// The 14-byte BITMAPFILEHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: [u8; 2],
    pub file_size: u32,
    pub reserved: u32,
    pub data_offset: u32,
}

impl FileHeader {
    /// Header for a 24-bit image of the given dimensions.
    ///
    /// Sizes past `u32::MAX` wrap; encoders reject such dimensions first.
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        Self {
            signature: SIGNATURE,
            file_size: (u64::from(PIXEL_DATA_OFFSET) + pixel_data_size(width, height)) as u32,
            reserved: 0,
            data_offset: PIXEL_DATA_OFFSET,
        }
    }

    pub fn to_bytes(&self) -> [u8; FILE_HEADER_SIZE as usize] {
        let mut out = [0u8; FILE_HEADER_SIZE as usize];
        out[0..2].copy_from_slice(&self.signature);
        out[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        out[6..10].copy_from_slice(&self.reserved.to_le_bytes());
        out[10..14].copy_from_slice(&self.data_offset.to_le_bytes());
        out
    }

    /// Unpack any 14 bytes. The signature is not checked here.
    pub fn from_bytes(b: &[u8; FILE_HEADER_SIZE as usize]) -> Self {
        Self {
            signature: [b[0], b[1]],
            file_size: u32_at(b, 2),
            reserved: u32_at(b, 6),
            data_offset: u32_at(b, 10),
        }
    }

    pub fn has_signature(&self) -> bool {
        self.signature == SIGNATURE
    }
}

/// The 40-byte BITMAPINFOHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: u32,
    pub y_pixels_per_meter: u32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    /// Header for a bottom-up, uncompressed, 24-bit image.
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        Self {
            header_size: INFO_HEADER_SIZE,
            width,
            height,
            planes: 1,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: 0,
            image_size: pixel_data_size(width, height) as u32,
            x_pixels_per_meter: DENSITY,
            y_pixels_per_meter: DENSITY,
            colors_used: 0,
            colors_important: IMPORTANT_COLORS,
        }
    }

    pub fn to_bytes(&self) -> [u8; INFO_HEADER_SIZE as usize] {
        let mut out = [0u8; INFO_HEADER_SIZE as usize];
        out[0..4].copy_from_slice(&self.header_size.to_le_bytes());
        out[4..8].copy_from_slice(&self.width.to_le_bytes());
        out[8..12].copy_from_slice(&self.height.to_le_bytes());
        out[12..14].copy_from_slice(&self.planes.to_le_bytes());
        out[14..16].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        out[16..20].copy_from_slice(&self.compression.to_le_bytes());
        out[20..24].copy_from_slice(&self.image_size.to_le_bytes());
        out[24..28].copy_from_slice(&self.x_pixels_per_meter.to_le_bytes());
        out[28..32].copy_from_slice(&self.y_pixels_per_meter.to_le_bytes());
        out[32..36].copy_from_slice(&self.colors_used.to_le_bytes());
        out[36..40].copy_from_slice(&self.colors_important.to_le_bytes());
        out
    }

    /// Unpack any 40 bytes. Nothing is validated here.
    pub fn from_bytes(b: &[u8; INFO_HEADER_SIZE as usize]) -> Self {
        Self {
            header_size: u32_at(b, 0),
            width: u32_at(b, 4),
            height: u32_at(b, 8),
            planes: u16::from_le_bytes([b[12], b[13]]),
            bits_per_pixel: u16::from_le_bytes([b[14], b[15]]),
            compression: u32_at(b, 16),
            image_size: u32_at(b, 20),
            x_pixels_per_meter: u32_at(b, 24),
            y_pixels_per_meter: u32_at(b, 28),
            colors_used: u32_at(b, 32),
            colors_important: u32_at(b, 36),
        }
    }
}

fn u32_at(b: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([b[off], b[off + 1], b[off + 2], b[off + 3]])
}
