use crate::{
    error::MalformedContainer,
    source::{AbsoluteOffset, ByteSource},
};

/// where the absolute offset of the DWAV section is stored
pub const DWAV_POINTER_OFFSET: AbsoluteOffset = AbsoluteOffset(0xC4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerOffsets {
    pub dwav_offset: AbsoluteOffset,
}

impl ContainerOffsets {
    pub fn locate(source: &ByteSource) -> Result<Self, MalformedContainer> {
        let dwav_offset = source
            .read_u32_be(DWAV_POINTER_OFFSET)
            .ok_or(MalformedContainer::TooShort { len: source.len() })?;
        if dwav_offset == 0 {
            return Err(MalformedContainer::NullDwavPointer);
        }
        if dwav_offset as usize >= source.len() {
            return Err(MalformedContainer::DwavOutOfBounds {
                offset: dwav_offset,
                len: source.len(),
            });
        }
        Ok(Self {
            dwav_offset: AbsoluteOffset(dwav_offset as usize),
        })
    }
}
