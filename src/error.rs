use std::io;
use std::path::PathBuf;

use enough::StopReason;

/// Errors from BMP/PPM decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ImageError {
    #[error("cannot open {}", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("not a BMP file: signature {found:02x?}, expected \"BM\"")]
    SignatureMismatch { found: [u8; 2] },

    #[error("unsupported BMP info header size {0}, expected 40")]
    InfoHeaderSize(u32),

    #[error("write failed")]
    StreamWrite(#[source] io::Error),

    #[error("read failed")]
    StreamRead(#[source] io::Error),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("pixel buffer size mismatch: need {needed} pixels, got {actual}")]
    BufferSizeMismatch { needed: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for ImageError {
    fn from(r: StopReason) -> Self {
        ImageError::Cancelled(r)
    }
}

impl ImageError {
    /// Map a read error, folding short reads into [`ImageError::UnexpectedEof`].
    pub(crate) fn from_read(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            ImageError::UnexpectedEof
        } else {
            ImageError::StreamRead(err)
        }
    }
}
