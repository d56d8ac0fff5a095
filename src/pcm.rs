use log::debug;

use crate::{
    error::EntryError,
    header::{ChannelLayout, SampleHeader},
    source::{AbsoluteOffset, ByteSource},
};

pub const BYTES_PER_SAMPLE: usize = 2;

/// The raw PCM bytes of a sample.
///
/// There is no length field, the region reaches up to the header of the next
/// sample (`next_header`) or the end of the file.
pub fn pcm_region<'a>(
    source: &'a ByteSource,
    header: &SampleHeader,
    next_header: Option<AbsoluteOffset>,
) -> Result<&'a [u8], EntryError> {
    let end = next_header.unwrap_or(source.end()).min(source.end());
    if end < header.pcm_offset {
        // the next header starts inside this one
        return Err(EntryError::TruncatedHeader {
            offset: header.header_offset,
            available: end.get().saturating_sub(header.header_offset.get()),
        });
    }
    source
        .range(header.pcm_offset..end)
        .ok_or(EntryError::TruncatedHeader {
            offset: header.header_offset,
            available: source.len().saturating_sub(header.header_offset.get()),
        })
}

/// Converts big endian PCM to little endian interleaved PCM.
///
/// Stereo data is already interleaved and only gets its byte order swapped. Mono
/// data is stored planar with a second copy of the channel, only the first half
/// of the samples is kept.
pub fn transcode(layout: ChannelLayout, raw: &[u8]) -> Result<Vec<u8>, EntryError> {
    if raw.len() % BYTES_PER_SAMPLE != 0 {
        return Err(EntryError::OddByteCount { len: raw.len() });
    }
    let sample_count = raw.len() / BYTES_PER_SAMPLE;
    let kept_samples = match layout {
        ChannelLayout::Mono => sample_count / 2,
        // only whole frames
        ChannelLayout::Stereo => sample_count - sample_count % 2,
    };
    if layout == ChannelLayout::Stereo && kept_samples != sample_count {
        debug!("dropping dangling half frame of stereo sample");
    }
    Ok(raw[..kept_samples * BYTES_PER_SAMPLE]
        .chunks_exact(BYTES_PER_SAMPLE)
        .flat_map(|s| i16::from_be_bytes([s[0], s[1]]).to_le_bytes())
        .collect())
}

pub fn transcode_sample(
    source: &ByteSource,
    header: &SampleHeader,
    next_header: Option<AbsoluteOffset>,
) -> Result<Vec<u8>, EntryError> {
    transcode(header.layout, pcm_region(source, header, next_header)?)
}
