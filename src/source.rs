//! Byte sources the decoder reads from.

use crate::error::{QoiError, Section};

/// Sequential byte source.
///
/// A source either fills the whole buffer or fails; a short read is always
/// reported as [`QoiError::UnexpectedEnd`] for the section being read.
pub(crate) trait Source {
    fn read_exact(&mut self, buf: &mut [u8], section: Section) -> Result<(), QoiError>;

    /// Bytes left to read, when the source knows.
    fn remaining(&self) -> Option<usize> {
        None
    }

    #[inline]
    fn read_array<const N: usize>(&mut self, section: Section) -> Result<[u8; N], QoiError> {
        let mut buf = [0u8; N];
        self.read_exact(&mut buf, section)?;
        Ok(buf)
    }

    #[inline]
    fn read_u8(&mut self, section: Section) -> Result<u8, QoiError> {
        let [b] = self.read_array::<1>(section)?;
        Ok(b)
    }
}

/// Cursor over an in-memory buffer.
#[derive(Debug)]
pub(crate) struct SliceSource<'a> {
    cursor: usize,
    data: &'a [u8],
}

impl<'a> SliceSource<'a> {
    pub const fn new(data: &'a [u8]) -> Self {
        Self { cursor: 0, data }
    }

    #[cfg(test)]
    pub const fn position(&self) -> usize {
        self.cursor
    }
}

impl Source for SliceSource<'_> {
    fn remaining(&self) -> Option<usize> {
        Some(self.data.len() - self.cursor)
    }

    #[inline]
    fn read_exact(&mut self, buf: &mut [u8], section: Section) -> Result<(), QoiError> {
        let end = self.cursor + buf.len();
        let slice = self
            .data
            .get(self.cursor..end)
            .ok_or(QoiError::UnexpectedEnd(section))?;
        buf.copy_from_slice(slice);
        self.cursor = end;
        Ok(())
    }

    // Op-codes are read one byte at a time; skip the array round-trip.
    #[inline]
    fn read_u8(&mut self, section: Section) -> Result<u8, QoiError> {
        let b = *self
            .data
            .get(self.cursor)
            .ok_or(QoiError::UnexpectedEnd(section))?;
        self.cursor += 1;
        Ok(b)
    }
}

/// Adapter over a blocking [`std::io::Read`].
///
/// Every I/O failure, including timeouts and interruptions the reader
/// gives up on, becomes [`QoiError::UnexpectedEnd`].
#[cfg(feature = "std")]
pub(crate) struct ReadSource<R> {
    inner: R,
}

#[cfg(feature = "std")]
impl<R: std::io::Read> ReadSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

#[cfg(feature = "std")]
impl<R: std::io::Read> Source for ReadSource<R> {
    fn read_exact(&mut self, buf: &mut [u8], section: Section) -> Result<(), QoiError> {
        self.inner
            .read_exact(buf)
            .map_err(|_| QoiError::UnexpectedEnd(section))
    }
}
