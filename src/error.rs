use alloc::string::String;
use core::fmt;
use enough::StopReason;

/// Part of the QOI stream being read when input ran out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    /// The 14-byte header.
    Header,
    /// The op-code stream.
    Pixels,
    /// The 8-byte end marker.
    EndMarker,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Header => "header",
            Self::Pixels => "pixel data",
            Self::EndMarker => "end marker",
        })
    }
}

/// Errors from QOI decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum QoiError {
    #[error("invalid magic: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: [u8; 4], actual: [u8; 4] },

    #[error("unexpected end of input in {0}")]
    UnexpectedEnd(Section),

    #[error("invalid run length {0}, must be between 1 and 62")]
    InvalidRunLength(u8),

    #[error("invalid end marker: expected {expected:02x?}, got {actual:02x?}")]
    InvalidEof { expected: [u8; 8], actual: [u8; 8] },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for QoiError {
    fn from(r: StopReason) -> Self {
        QoiError::Cancelled(r)
    }
}
