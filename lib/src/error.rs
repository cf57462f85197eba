//! Errors raised while reading or writing image records.

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The buffer ends before the 8-byte header does.
    #[error("record truncated: {len} bytes is shorter than the header")]
    Truncated { len: usize },
    #[error("image has an empty extent ({width}x{height})")]
    EmptyExtent { width: u32, height: u32 },
    #[error("image has no pixel data")]
    EmptyPayload,
    #[error("output buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
}
