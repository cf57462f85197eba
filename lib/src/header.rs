//! The fixed-size image header.

use zerocopy::byteorder::{LittleEndian, U32};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::Error;

/// Size of the encoded header: two 32-bit extents, no padding.
pub const HEADER_SIZE: usize = core::mem::size_of::<ImageHeader>();

/// Width and height of an image, in pixels.
///
/// The in-memory layout is also the byte layout of the self-describing
/// record: `width` at offset 0, `height` at offset 4, both little-endian.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
pub struct ImageHeader {
    width:  U32<LittleEndian>,
    height: U32<LittleEndian>,
}

impl ImageHeader {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width: U32::new(width), height: U32::new(height) }
    }

    pub fn width(&self) -> u32 {
        self.width.get()
    }

    pub fn height(&self) -> u32 {
        self.height.get()
    }

    /// Return (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Number of pixels covered; computed in 64 bits so it cannot overflow.
    pub fn pixel_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// True if either extent is zero.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Split a header off the front of `bytes`, returning it together with
    /// the rest of the buffer.
    ///
    /// This is a `const fn` so that statics can be parsed at compile time.
    pub const fn read(bytes: &[u8]) -> Result<(Self, &[u8]), Error> {
        if bytes.len() < HEADER_SIZE {
            return Err(Error::Truncated { len: bytes.len() });
        }
        let width = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let height = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        let (_, rest) = bytes.split_at(HEADER_SIZE);
        Ok((Self::new(width, height), rest))
    }

    /// The 8-byte encoding of this header.
    pub fn as_bytes(&self) -> &[u8] {
        IntoBytes::as_bytes(self)
    }
}
