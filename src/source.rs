use std::{fmt, ops::Range};

/// absolute position inside the container file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct AbsoluteOffset(pub usize);

/// position measured from the start of the DWAV section
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RelativeOffset(pub u32);

impl AbsoluteOffset {
    pub fn get(self) -> usize {
        self.0
    }

    pub fn checked_add(self, len: usize) -> Option<Self> {
        self.0.checked_add(len).map(Self)
    }

    /// resolves an offset that is relative to `self`
    pub fn resolve(self, rel: RelativeOffset) -> Option<Self> {
        self.checked_add(rel.0 as usize)
    }
}

impl fmt::Display for AbsoluteOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::Display for RelativeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{:#x}", self.0)
    }
}

/// The complete, read only contents of a container file.
///
/// All reads are bounds checked and return `None` instead of panicking when
/// they would reach past the end of the file.
#[derive(Debug, Clone)]
pub struct ByteSource {
    data: Vec<u8>,
}

impl ByteSource {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn end(&self) -> AbsoluteOffset {
        AbsoluteOffset(self.data.len())
    }

    /// true if `len` bytes starting at `offset` are inside the file
    pub fn contains(&self, offset: AbsoluteOffset, len: usize) -> bool {
        offset
            .checked_add(len)
            .is_some_and(|end| end.0 <= self.data.len())
    }

    pub fn slice(&self, offset: AbsoluteOffset, len: usize) -> Option<&[u8]> {
        let end = offset.checked_add(len)?;
        self.range(offset..end)
    }

    pub fn range(&self, range: Range<AbsoluteOffset>) -> Option<&[u8]> {
        self.data.get(range.start.0..range.end.0)
    }

    pub fn array_at<const N: usize>(&self, offset: AbsoluteOffset) -> Option<[u8; N]> {
        self.slice(offset, N)?.try_into().ok()
    }

    pub fn read_u32_be(&self, offset: AbsoluteOffset) -> Option<u32> {
        self.array_at(offset).map(u32::from_be_bytes)
    }
}

impl From<Vec<u8>> for ByteSource {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}
