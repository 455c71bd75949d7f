//! QOI ("Quite OK Image") decoder (internal).
//!
//! Layout: 14-byte header (`"qoif"`, width and height as u32 big-endian,
//! channels, colorspace), a stream of tagged op-codes, then an 8-byte end
//! marker. Output is always RGBA8 with straight alpha.
//!
//! Use top-level [`crate::decode()`], [`crate::decode_config()`], etc.

pub(crate) mod decode;

use alloc::vec;
use alloc::vec::Vec;
use enough::Stop;

use crate::decode::DecodeOutput;
use crate::error::QoiError;
use crate::info::ImageInfo;
use crate::limits::{Limits, check_stream_len, output_len};
use crate::source::Source;

pub(crate) const MAGIC: [u8; 4] = *b"qoif";
pub(crate) const END_MARKER: [u8; 8] = [0, 0, 0, 0, 0, 0, 0, 1];
/// Longest run a single RUN op can encode.
pub(crate) const MAX_RUN: u8 = 62;

/// Output bytes reserved up front when the input length is unknown.
const STREAM_PREALLOC: usize = 1 << 20;

/// Read the header only.
pub(crate) fn read_info<S: Source>(src: &mut S) -> Result<ImageInfo, QoiError> {
    decode::parse_header(src)
}

/// Parse the header and size the output, rejecting inputs too short to fill it.
fn prepare<S: Source>(
    src: &mut S,
    limits: Option<&Limits>,
) -> Result<(ImageInfo, usize), QoiError> {
    let info = decode::parse_header(src)?;
    log::debug!("qoi header: {}x{}", info.width, info.height);
    let out_bytes = output_len(&info, limits)?;
    if let Some(remaining) = src.remaining() {
        check_stream_len(&info, remaining)?;
    }
    Ok((info, out_bytes))
}

/// Decode header, pixels and end marker into a freshly allocated buffer.
///
/// Sources of known length are bounds-checked and decoded into one
/// allocation. Others grow the buffer as pixels arrive, so a lying header
/// costs no more memory than the input actually backs.
pub(crate) fn decode<S: Source>(
    src: &mut S,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput, QoiError> {
    let (info, out_bytes) = prepare(src, limits)?;
    stop.check()?;

    let pixels = if src.remaining().is_some() {
        let mut pixels = vec![0u8; out_bytes];
        decode::decode_pixels(src, info.width, &mut pixels, stop)?;
        pixels
    } else {
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(out_bytes.min(STREAM_PREALLOC))
            .map_err(|_| QoiError::DimensionsTooLarge {
                width: info.width,
                height: info.height,
            })?;
        decode::decode_pixels_growing(src, &info, &mut pixels, stop)?;
        pixels
    };
    decode::check_end_marker(src)?;

    log::debug!("qoi decoded {}x{} ({} bytes)", info.width, info.height, out_bytes);
    Ok(DecodeOutput::new(pixels, info.width, info.height))
}

/// Decode into a caller-provided RGBA8 buffer of at least `width * height * 4` bytes.
///
/// If decoding fails after pixels were written, the written region is zeroed.
pub(crate) fn decode_into<S: Source>(
    src: &mut S,
    dst: &mut [u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<ImageInfo, QoiError> {
    let (info, out_bytes) = prepare(src, limits)?;
    if dst.len() < out_bytes {
        return Err(QoiError::BufferTooSmall {
            needed: out_bytes,
            actual: dst.len(),
        });
    }
    stop.check()?;

    let out = &mut dst[..out_bytes];
    let result = decode::decode_pixels(src, info.width, out, stop)
        .and_then(|()| decode::check_end_marker(src));
    if let Err(err) = result {
        out.fill(0);
        return Err(err);
    }

    log::debug!("qoi decoded {}x{} into caller buffer", info.width, info.height);
    Ok(info)
}
