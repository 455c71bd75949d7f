//! # zenqoi
//!
//! Decoder for the QOI ("Quite OK Image") format.
//!
//! QOI stores RGB/RGBA8 images as a 14-byte header followed by a stream of
//! small op-codes (literal colors, deltas against the previous pixel, runs,
//! and back-references into a 64-entry color cache) and an 8-byte end
//! marker. Decoding is a single forward pass.
//!
//! ## Output
//!
//! Always row-major RGBA8, straight alpha, regardless of the channel count
//! recorded in the header. The header's channel and colorspace bytes are
//! read but not interpreted.
//!
//! ## Non-Goals
//!
//! - Encoding
//! - Color management
//!
//! ## Usage
//!
//! ```no_run
//! use zenqoi::{DecodeRequest, ImageInfo};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your QOI bytes
//!
//! // Header only, no pixel decode
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{}", info.width, info.height);
//!
//! // Decode
//! let decoded = DecodeRequest::new(data).decode(Unstoppable)?;
//! assert_eq!(decoded.pixels().len(), decoded.pixel_count() * 4);
//! # Ok::<(), zenqoi::QoiError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod info;
mod limits;
mod pixel;
mod qoi;
mod source;

mod decode;

// Re-exports
pub use decode::{DecodeOutput, DecodeRequest};
pub use enough::{Stop, Unstoppable};
pub use error::{QoiError, Section};
pub use info::ImageInfo;
pub use limits::Limits;

/// Read width and height from the header of an in-memory QOI payload.
///
/// Only the 14 header bytes are examined.
pub fn decode_config(data: &[u8]) -> Result<ImageInfo, QoiError> {
    ImageInfo::from_bytes(data)
}

/// Decode an in-memory QOI payload to RGBA8.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, QoiError> {
    DecodeRequest::new(data).decode(stop)
}

/// Read width and height from a QOI stream, consuming exactly the 14 header bytes.
///
/// The reader is left at the first op-code. [`decode_from_reader`] expects
/// the start of the payload, so rewind (or buffer) before decoding.
#[cfg(feature = "std")]
pub fn decode_config_from_reader<R: std::io::Read>(reader: R) -> Result<ImageInfo, QoiError> {
    qoi::read_info(&mut source::ReadSource::new(reader))
}

/// Decode a QOI stream to RGBA8.
///
/// Reads header, pixel data and the end marker, and nothing past it.
/// Pass a [`std::io::BufReader`] for unbuffered readers; op-codes are read
/// a byte at a time.
#[cfg(feature = "std")]
pub fn decode_from_reader<R: std::io::Read>(
    reader: R,
    stop: impl Stop,
) -> Result<DecodeOutput, QoiError> {
    qoi::decode(&mut source::ReadSource::new(reader), None, &stop)
}

/// Like [`decode_from_reader`], rejecting images that exceed `limits`
/// before the output buffer is allocated.
#[cfg(feature = "std")]
pub fn decode_from_reader_with_limits<R: std::io::Read>(
    reader: R,
    limits: &Limits,
    stop: impl Stop,
) -> Result<DecodeOutput, QoiError> {
    qoi::decode(&mut source::ReadSource::new(reader), Some(limits), &stop)
}
