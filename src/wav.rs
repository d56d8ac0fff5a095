use std::io::Cursor;

use binrw::BinWriterExt;

use crate::{error::EntryError, header::ChannelLayout, pcm::BYTES_PER_SAMPLE, structs::WavHeader};

pub const BITS_PER_SAMPLE: u16 = 16;

impl WavHeader {
    pub fn for_pcm(layout: ChannelLayout, sample_rate: u32, data_size: u32) -> Self {
        let channels = layout.channels();
        let block_align = channels * BYTES_PER_SAMPLE as u16;
        Self {
            // WAVE id, fmt chunk and data chunk header
            riff_size: data_size + WavHeader::byte_len() as u32 - 8,
            channels,
            sample_rate,
            byte_rate: sample_rate * block_align as u32,
            block_align,
            bits_per_sample: BITS_PER_SAMPLE,
            data_size,
        }
    }
}

/// Writes a 16 bit PCM WAVE file, `pcm` has to be little endian and interleaved.
pub fn encode_wav(
    layout: ChannelLayout,
    sample_rate: u32,
    pcm: &[u8],
) -> Result<Vec<u8>, EntryError> {
    let data_size = u32::try_from(pcm.len())
        .ok()
        .filter(|size| size.checked_add(WavHeader::byte_len() as u32).is_some())
        .ok_or(EntryError::PayloadTooLarge { len: pcm.len() })?;
    let header = WavHeader::for_pcm(layout, sample_rate, data_size);
    let mut out = Vec::with_capacity(WavHeader::byte_len() + pcm.len());
    Cursor::new(&mut out).write_le(&header)?;
    out.extend_from_slice(pcm);
    Ok(out)
}
