//! Size checks run between header parse and output allocation.

use crate::error::{QoiError, Section};
use crate::info::ImageInfo;
use crate::qoi::{END_MARKER, MAX_RUN};

/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the RGBA8 output buffer in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    fn exceeded(what: &str, value: u64, max: Option<u64>) -> Result<(), QoiError> {
        match max {
            Some(max) if value > max => Err(QoiError::LimitExceeded(alloc::format!(
                "{what} {value} exceeds limit {max}"
            ))),
            _ => Ok(()),
        }
    }

    /// Check header dimensions and the resulting output size.
    fn check(&self, info: &ImageInfo, out_bytes: Option<usize>) -> Result<(), QoiError> {
        Self::exceeded("width", u64::from(info.width), self.max_width)?;
        Self::exceeded("height", u64::from(info.height), self.max_height)?;
        Self::exceeded("pixel count", info.pixel_count(), self.max_pixels)?;
        if let Some(bytes) = out_bytes {
            Self::exceeded("output size", bytes as u64, self.max_memory_bytes)?;
        }
        Ok(())
    }
}

/// Size of the RGBA8 output for `info`, after applying `limits`.
pub(crate) fn output_len(info: &ImageInfo, limits: Option<&Limits>) -> Result<usize, QoiError> {
    let out_bytes = info.rgba_len();
    if let Some(limits) = limits {
        limits.check(info, out_bytes)?;
    }
    out_bytes.ok_or(QoiError::DimensionsTooLarge {
        width: info.width,
        height: info.height,
    })
}

/// Reject headers that `remaining` input bytes cannot possibly fill.
///
/// `remaining` counts everything after the header, end marker included.
/// Every op-code byte yields at most one run's worth of pixels.
pub(crate) fn check_stream_len(info: &ImageInfo, remaining: usize) -> Result<(), QoiError> {
    let op_bytes = remaining.saturating_sub(END_MARKER.len()) as u64;
    if info.pixel_count() > op_bytes.saturating_mul(u64::from(MAX_RUN)) {
        return Err(QoiError::UnexpectedEnd(Section::Pixels));
    }
    Ok(())
}
