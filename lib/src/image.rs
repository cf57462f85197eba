//! Image records: a header plus its pixel payload.

use crate::header::{ImageHeader, HEADER_SIZE};
use crate::Error;

/// An image record.
///
/// The payload length is the slice length; it is never derived from the
/// extents, since the pixel format belongs to whoever renders the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Image<'a> {
    header: ImageHeader,
    data:   &'a [u8],
}

impl<'a> Image<'a> {
    pub const fn new(header: ImageHeader, data: &'a [u8]) -> Self {
        Self { header, data }
    }

    /// Parse a self-describing record: the header, immediately followed by
    /// the payload, which runs to the end of `bytes`.
    pub const fn from_flat(bytes: &'a [u8]) -> Result<Self, Error> {
        let (header, data) = match ImageHeader::read(bytes) {
            Ok(split) => split,
            Err(e) => return Err(e),
        };
        // header accessors are not const, so decode the extents again
        let width = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let height = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        if width == 0 || height == 0 {
            return Err(Error::EmptyExtent { width, height });
        }
        if data.is_empty() {
            return Err(Error::EmptyPayload);
        }
        Ok(Self { header, data })
    }

    pub fn header(&self) -> &ImageHeader {
        &self.header
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn width(&self) -> u32 {
        self.header.width()
    }

    pub fn height(&self) -> u32 {
        self.header.height()
    }

    /// Return (width, height).
    pub fn size(&self) -> (u32, u32) {
        self.header.size()
    }

    /// Length of the self-describing encoding of this record.
    pub fn flat_len(&self) -> usize {
        HEADER_SIZE + self.data.len()
    }

    /// Encode this record in the self-describing layout into `out`.
    ///
    /// Returns the number of bytes written.
    pub fn write_flat(&self, out: &mut [u8]) -> Result<usize, Error> {
        let needed = self.flat_len();
        if out.len() < needed {
            return Err(Error::BufferTooSmall { needed, available: out.len() });
        }
        out[..HEADER_SIZE].copy_from_slice(self.header.as_bytes());
        out[HEADER_SIZE..needed].copy_from_slice(self.data);
        Ok(needed)
    }

    /// Check the per-record integrity properties: both extents positive and
    /// a non-empty payload.
    pub fn validate(&self) -> Result<(), Error> {
        if self.header.is_empty() {
            return Err(Error::EmptyExtent { width: self.width(), height: self.height() });
        }
        if self.data.is_empty() {
            return Err(Error::EmptyPayload);
        }
        Ok(())
    }
}
