/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit). Decoders still refuse to
/// allocate more than the input can fill whenever the input length is known.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum memory bytes for output buffer allocation.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check dimensions against limits. Returns Ok(()) or LimitExceeded error.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), crate::ImageError> {
        if let Some(max_w) = self.max_width {
            if u64::from(width) > max_w {
                return Err(crate::ImageError::LimitExceeded(format!(
                    "width {width} exceeds limit {max_w}"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if u64::from(height) > max_h {
                return Err(crate::ImageError::LimitExceeded(format!(
                    "height {height} exceeds limit {max_h}"
                )));
            }
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_px {
                return Err(crate::ImageError::LimitExceeded(format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        Ok(())
    }

    /// Check that an allocation size is within memory limits.
    pub(crate) fn check_memory(&self, bytes: u64) -> Result<(), crate::ImageError> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes > max_mem {
                return Err(crate::ImageError::LimitExceeded(format!(
                    "allocation {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}

/// Check optional caller limits plus the output allocation size.
///
/// `scratch_bytes` is any working buffer the decoder holds next to the
/// output, such as a row of raw file bytes.
pub(crate) fn check_decode(
    limits: Option<&Limits>,
    width: u32,
    height: u32,
    scratch_bytes: u64,
) -> Result<(), crate::ImageError> {
    let out_bytes = u64::from(width) * u64::from(height) * crate::Color::SIZE as u64;
    if let Some(limits) = limits {
        limits.check(width, height)?;
        limits.check_memory(out_bytes.saturating_add(scratch_bytes))?;
    }
    if usize::try_from(out_bytes).is_err() {
        return Err(crate::ImageError::DimensionsTooLarge { width, height });
    }
    Ok(())
}
