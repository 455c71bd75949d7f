use crate::error::QoiError;
use crate::source::SliceSource;

/// Image dimensions read from a QOI header.
///
/// The header's channel-count and colorspace bytes are informational only
/// and are not kept; decoded output is always RGBA8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    /// Read the header without decoding pixels.
    pub fn from_bytes(data: &[u8]) -> Result<Self, QoiError> {
        crate::qoi::read_info(&mut SliceSource::new(data))
    }

    /// Number of pixels (width * height).
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Size of the decoded RGBA8 buffer, or `None` if it doesn't fit in `usize`.
    pub fn rgba_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|wh| wh.checked_mul(4))
    }
}
