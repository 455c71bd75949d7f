use alloc::vec::Vec;
use enough::Stop;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::error::QoiError;
use crate::info::ImageInfo;
use crate::limits::Limits;
use crate::source::SliceSource;

/// Decoded image: row-major RGBA8 pixels, straight alpha.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOutput {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl DecodeOutput {
    pub(crate) fn new(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Access the pixel data, 4 bytes (R, G, B, A) per pixel.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Number of decoded pixels (width * height).
    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / 4
    }

    /// Image dimensions.
    pub fn info(&self) -> ImageInfo {
        ImageInfo {
            width: self.width,
            height: self.height,
        }
    }

    /// Reinterpret pixel data as a typed RGBA8 slice.
    #[cfg(feature = "rgb")]
    pub fn as_rgba(&self) -> &[rgb::RGBA8] {
        self.pixels().as_pixels()
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of RGBA8 pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGBA8> {
        imgref::ImgRef::new(self.as_rgba(), self.width as usize, self.height as usize)
    }

    /// Convert to an [`imgref::ImgVec`] of RGBA8 pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGBA8> {
        imgref::ImgVec::new(
            self.as_rgba().to_vec(),
            self.width as usize,
            self.height as usize,
        )
    }
}

/// Decode request over an in-memory QOI payload.
///
/// ```no_run
/// use zenqoi::{DecodeRequest, Limits};
/// use enough::Unstoppable;
///
/// let data: &[u8] = &[]; // your QOI bytes
/// let limits = Limits {
///     max_pixels: Some(64 * 1024 * 1024),
///     ..Default::default()
/// };
/// let decoded = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// println!("{}x{}", decoded.width, decoded.height);
/// # Ok::<(), zenqoi::QoiError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images whose dimensions or output size exceed `limits`.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Read the header only.
    pub fn info(&self) -> Result<ImageInfo, QoiError> {
        ImageInfo::from_bytes(self.data)
    }

    /// Decode into a newly allocated RGBA8 buffer.
    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput, QoiError> {
        crate::qoi::decode(&mut SliceSource::new(self.data), self.limits, &stop)
    }

    /// Decode into `dst`, which must hold at least `width * height * 4` bytes.
    ///
    /// Only the first `width * height * 4` bytes are written. If decoding
    /// fails after pixels were written, those bytes are zeroed again.
    pub fn decode_into(self, dst: &mut [u8], stop: impl Stop) -> Result<ImageInfo, QoiError> {
        crate::qoi::decode_into(&mut SliceSource::new(self.data), dst, self.limits, &stop)
    }
}
