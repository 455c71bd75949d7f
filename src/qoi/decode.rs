//! QOI header parser and op-code stream decoder.

use alloc::vec::Vec;
use enough::Stop;

use super::{END_MARKER, MAGIC, MAX_RUN};
use crate::error::{QoiError, Section};
use crate::info::ImageInfo;
use crate::pixel::Pixel;
use crate::source::Source;

/// Parse the 14-byte header. Channels and colorspace are read and dropped.
pub(crate) fn parse_header<S: Source>(src: &mut S) -> Result<ImageInfo, QoiError> {
    let header: [u8; 14] = src.read_array(Section::Header)?;

    let magic = [header[0], header[1], header[2], header[3]];
    if magic != MAGIC {
        return Err(QoiError::InvalidMagic {
            expected: MAGIC,
            actual: magic,
        });
    }
    let width = u32::from_be_bytes([header[4], header[5], header[6], header[7]]);
    let height = u32::from_be_bytes([header[8], header[9], header[10], header[11]]);
    let (_channels, _colorspace) = (header[12], header[13]);

    Ok(ImageInfo { width, height })
}

/// One op-code, decoded from its tag byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Op {
    /// `0xFE`, followed by r, g, b.
    Rgb,
    /// `0xFF`, followed by r, g, b, a.
    Rgba,
    /// `00iiiiii`: history cache slot.
    Index(u8),
    /// `01rrggbb`: small deltas, each in -2..=1.
    Diff { dr: i8, dg: i8, db: i8 },
    /// `10gggggg`: green delta in -32..=31, followed by the red/blue byte.
    Luma { dg: i8 },
    /// `11llllll`: repeat the last pixel `len` times.
    Run(u8),
}

const OP_RGB: u8 = 0xfe;
const OP_RGBA: u8 = 0xff;
const MASK_2: u8 = 0xc0;

impl Op {
    #[inline]
    pub(crate) fn from_tag(tag: u8) -> Result<Self, QoiError> {
        Ok(match tag {
            OP_RGB => Op::Rgb,
            OP_RGBA => Op::Rgba,
            _ => match tag & MASK_2 {
                0x00 => Op::Index(tag & 0x3f),
                0x40 => Op::Diff {
                    dr: ((tag >> 4) & 0x03) as i8 - 2,
                    dg: ((tag >> 2) & 0x03) as i8 - 2,
                    db: (tag & 0x03) as i8 - 2,
                },
                0x80 => Op::Luma {
                    dg: (tag & 0x3f) as i8 - 32,
                },
                _ => Op::Run(run_length(tag)?),
            },
        })
    }
}

/// Run length carried by a RUN tag.
///
/// Only 1..=62 is representable; the two longer encodings are taken by
/// the RGB and RGBA tags.
#[inline]
pub(crate) fn run_length(tag: u8) -> Result<u8, QoiError> {
    let len = (tag & 0x3f) + 1;
    if !(1..=MAX_RUN).contains(&len) {
        return Err(QoiError::InvalidRunLength(len));
    }
    Ok(len)
}

/// Per-call decoder state: history cache, last pixel and pending run.
pub(crate) struct PixelDecoder {
    cache: [Pixel; 64],
    last: Pixel,
    run: u8,
}

impl PixelDecoder {
    pub(crate) fn new() -> Self {
        Self {
            cache: [Pixel::default(); 64],
            last: Pixel::START,
            run: 0,
        }
    }

    /// Produce the next pixel, continuing a run or consuming one op-code.
    #[inline]
    pub(crate) fn next_pixel<S: Source>(&mut self, src: &mut S) -> Result<Pixel, QoiError> {
        if self.run > 0 {
            self.run -= 1;
            return Ok(self.last);
        }

        let px = match Op::from_tag(src.read_u8(Section::Pixels)?)? {
            Op::Rgb => {
                let [r, g, b] = src.read_array::<3>(Section::Pixels)?;
                Pixel::new(r, g, b, self.last.a)
            }
            Op::Rgba => {
                let [r, g, b, a] = src.read_array::<4>(Section::Pixels)?;
                Pixel::new(r, g, b, a)
            }
            Op::Index(slot) => {
                self.last = self.cache[slot as usize];
                return Ok(self.last);
            }
            Op::Diff { dr, dg, db } => self.last.offset(dr, dg, db),
            Op::Luma { dg } => {
                let rb = src.read_u8(Section::Pixels)?;
                let dr = (rb >> 4) as i8 - 8 + dg;
                let db = (rb & 0x0f) as i8 - 8 + dg;
                self.last.offset(dr, dg, db)
            }
            Op::Run(len) => {
                self.run = len - 1;
                return Ok(self.last);
            }
        };

        self.cache[px.hash()] = px;
        self.last = px;
        Ok(px)
    }
}

/// Decode `out.len() / 4` pixels in row-major order into `out` (RGBA8).
///
/// `out` must hold exactly `width * height * 4` bytes.
pub(crate) fn decode_pixels<S: Source>(
    src: &mut S,
    width: u32,
    out: &mut [u8],
    stop: &dyn Stop,
) -> Result<(), QoiError> {
    if out.is_empty() {
        return Ok(());
    }
    // fits: out.len() is a multiple of it
    let row_bytes = width as usize * 4;

    let mut decoder = PixelDecoder::new();
    for (row_idx, row) in out.chunks_exact_mut(row_bytes).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for dst in row.chunks_exact_mut(4) {
            let px = decoder.next_pixel(src)?;
            dst.copy_from_slice(&px.to_bytes());
        }
    }
    Ok(())
}

/// Like [`decode_pixels`], appending to `out` one pixel at a time.
///
/// Memory grows with the pixels the source actually delivers.
pub(crate) fn decode_pixels_growing<S: Source>(
    src: &mut S,
    info: &ImageInfo,
    out: &mut Vec<u8>,
    stop: &dyn Stop,
) -> Result<(), QoiError> {
    if info.width == 0 {
        return Ok(());
    }

    let mut decoder = PixelDecoder::new();
    for row_idx in 0..info.height {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for _ in 0..info.width {
            let px = decoder.next_pixel(src)?;
            out.extend_from_slice(&px.to_bytes());
        }
    }
    Ok(())
}

/// Read the 8 trailing bytes and compare them to the end marker.
pub(crate) fn check_end_marker<S: Source>(src: &mut S) -> Result<(), QoiError> {
    let actual: [u8; 8] = src.read_array(Section::EndMarker)?;
    if actual != END_MARKER {
        return Err(QoiError::InvalidEof {
            expected: END_MARKER,
            actual,
        });
    }
    log::trace!("qoi end marker ok");
    Ok(())
}
