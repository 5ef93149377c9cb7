//! Scanline packing between [`Color`] rows and stored 24-bit rows.

use crate::pixel::Color;

/// Pack `row` as B,G,R triples into `out`, zero-filling the rest of `out`.
///
/// `out` is one stored row (`row_stride(width)` bytes) and must hold at
/// least `row.len() * 3` bytes.
pub(crate) fn encode_row(row: &[Color], out: &mut [u8]) {
    let (data, padding) = out.split_at_mut(row.len() * 3);
    for (dst, px) in data.chunks_exact_mut(3).zip(row) {
        dst[0] = px.b;
        dst[1] = px.g;
        dst[2] = px.r;
    }
    padding.fill(0);
}

/// Unpack B,G,R triples from `bytes` into `row`. Trailing padding is ignored.
pub(crate) fn decode_row(bytes: &[u8], row: &mut [Color]) {
    for (px, src) in row.iter_mut().zip(bytes.chunks_exact(3)) {
        *px = Color::rgb(src[2], src[1], src[0]);
    }
}
