use thiserror::Error;

use crate::source::AbsoluteOffset;

/// The container can't be read at all, nothing can be extracted from it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedContainer {
    #[error("file is only {len} bytes long, too short to hold the DWAV pointer")]
    TooShort { len: usize },
    #[error("DWAV pointer is zero")]
    NullDwavPointer,
    #[error("DWAV pointer {offset:#x} points past the end of the file ({len} bytes)")]
    DwavOutOfBounds { offset: u32, len: usize },
}

/// A single entry can't be extracted, the other entries are not affected.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EntryError {
    #[error("sample header at {offset} lies outside the file")]
    OutOfBoundsEntry { offset: AbsoluteOffset },
    #[error("sample header at {offset} is truncated, only {available} bytes available")]
    TruncatedHeader {
        offset: AbsoluteOffset,
        available: usize,
    },
    #[error("unknown channel configuration {code:#04x}")]
    UnknownChannelConfig { code: u8 },
    #[error("PCM region has an odd length of {len} bytes")]
    OddByteCount { len: usize },
    #[error("PCM payload of {len} bytes doesn't fit into a WAVE file")]
    PayloadTooLarge { len: usize },
    #[error(transparent)]
    Binary(#[from] binrw::Error),
}

/// An [`EntryError`] together with the index of the entry it happened for.
#[derive(Error, Debug)]
#[error("entry {index}: {error}")]
pub struct EntryFailure {
    pub index: u32,
    #[source]
    pub error: EntryError,
}

impl EntryFailure {
    pub fn new(index: u32, error: EntryError) -> Self {
        Self { index, error }
    }
}
