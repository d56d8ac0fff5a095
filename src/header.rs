use std::io::Cursor;

use binrw::BinReaderExt;
use log::debug;

use crate::{
    error::EntryError,
    source::{AbsoluteOffset, ByteSource},
    structs::SampleHeaderRecord,
};

/// used when a header stores a sample rate of 0
pub const DEFAULT_SAMPLE_RATE: u16 = 44100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    Mono,
    Stereo,
}

impl ChannelLayout {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(Self::Mono),
            0x02 => Some(Self::Stereo),
            _ => None,
        }
    }

    pub fn channels(&self) -> u16 {
        match self {
            Self::Mono => 1,
            Self::Stereo => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleHeader {
    /// `None` if the stored name is empty
    pub name: Option<String>,
    pub sample_rate: u16,
    pub layout: ChannelLayout,
    pub header_offset: AbsoluteOffset,
    pub pcm_offset: AbsoluteOffset,
}

impl SampleHeader {
    pub fn read(source: &ByteSource, offset: AbsoluteOffset) -> Result<Self, EntryError> {
        let header_len = SampleHeaderRecord::byte_len();
        let bytes = source
            .slice(offset, header_len)
            .ok_or(EntryError::TruncatedHeader {
                offset,
                available: source.len().saturating_sub(offset.get()),
            })?;
        let record: SampleHeaderRecord = Cursor::new(bytes).read_be()?;
        let layout = ChannelLayout::from_code(record.channel_code).ok_or(
            EntryError::UnknownChannelConfig {
                code: record.channel_code,
            },
        )?;
        let sample_rate = if record.sample_rate == 0 {
            debug!("sample header at {offset} has no sample rate, using {DEFAULT_SAMPLE_RATE}");
            DEFAULT_SAMPLE_RATE
        } else {
            record.sample_rate
        };
        Ok(Self {
            name: parse_name(&record.name),
            sample_rate,
            layout,
            header_offset: offset,
            // can't overflow, the whole header is inside the file
            pcm_offset: AbsoluteOffset(offset.get() + header_len),
        })
    }
}

/// cuts the name at the first NUL and drops anything that isn't ASCII
pub fn parse_name(raw: &[u8]) -> Option<String> {
    let name: String = raw
        .iter()
        .take_while(|b| **b != 0)
        .filter(|b| b.is_ascii())
        .map(|b| *b as char)
        .collect();
    let name = name.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
