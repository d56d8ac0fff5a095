//! Builds synthetic containers byte by byte for the tests.

use crate::{
    container::DWAV_POINTER_OFFSET,
    entries::ENTRY_TABLE_START,
    source::{AbsoluteOffset, ByteSource},
    structs::{EntryRecord, SampleHeaderRecord},
};

enum Slot {
    Sample {
        index: u32,
        name: Vec<u8>,
        sample_rate: u16,
        channel_code: u8,
        pcm: Vec<u8>,
    },
    Raw {
        index: u32,
        pointer: u32,
    },
}

pub struct ContainerBuilder {
    dwav_offset: usize,
    slots: Vec<Slot>,
    trailing: Vec<u8>,
}

pub fn be_samples(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_be_bytes()).collect()
}

impl ContainerBuilder {
    pub fn new(dwav_offset: usize) -> Self {
        assert!(dwav_offset >= DWAV_POINTER_OFFSET.get() + 4);
        Self {
            dwav_offset,
            slots: Vec::new(),
            trailing: Vec::new(),
        }
    }

    pub fn sample(
        &mut self,
        index: u32,
        name: &[u8],
        sample_rate: u16,
        channel_code: u8,
        pcm: Vec<u8>,
    ) -> &mut Self {
        self.slots.push(Slot::Sample {
            index,
            name: name.to_vec(),
            sample_rate,
            channel_code,
            pcm,
        });
        self
    }

    pub fn stereo_sample(
        &mut self,
        index: u32,
        name: &str,
        sample_rate: u16,
        interleaved: &[i16],
    ) -> &mut Self {
        self.sample(index, name.as_bytes(), sample_rate, 2, be_samples(interleaved))
    }

    /// stored planar, the samples followed by a copy of them
    pub fn mono_sample(
        &mut self,
        index: u32,
        name: &str,
        sample_rate: u16,
        samples: &[i16],
    ) -> &mut Self {
        let mut pcm = be_samples(samples);
        pcm.extend_from_within(..);
        self.sample(index, name.as_bytes(), sample_rate, 0, pcm)
    }

    pub fn raw_slot(&mut self, index: u32, pointer: u32) -> &mut Self {
        self.slots.push(Slot::Raw { index, pointer });
        self
    }

    pub fn empty_slots(&mut self, count: usize) -> &mut Self {
        for _ in 0..count {
            self.raw_slot(0, 0);
        }
        self
    }

    /// bytes appended after the last sample
    pub fn trailing(&mut self, bytes: &[u8]) -> &mut Self {
        self.trailing.extend_from_slice(bytes);
        self
    }

    /// returns the container and the header offsets of all added samples
    pub fn build(&self) -> (ByteSource, Vec<AbsoluteOffset>) {
        let slot_len = EntryRecord::byte_len();
        let table_start = self.dwav_offset + ENTRY_TABLE_START;
        // one extra slot for the terminator
        let mut data_start = table_start + (self.slots.len() + 1) * slot_len;
        let mut data = vec![0u8; data_start];
        let pointer_pos = DWAV_POINTER_OFFSET.get();
        data[pointer_pos..pointer_pos + 4].copy_from_slice(&(self.dwav_offset as u32).to_be_bytes());
        data[self.dwav_offset..self.dwav_offset + 4].copy_from_slice(b"DWAV");

        let mut headers = Vec::new();
        for (i, slot) in self.slots.iter().enumerate() {
            let slot_pos = table_start + i * slot_len;
            let (index, pointer) = match slot {
                Slot::Raw { index, pointer } => (*index, *pointer),
                Slot::Sample {
                    index,
                    name,
                    sample_rate,
                    channel_code,
                    pcm,
                } => {
                    let header_pos = data_start;
                    let mut header = [0u8; 80];
                    header[..name.len()].copy_from_slice(name);
                    header[0x36..0x38].copy_from_slice(&sample_rate.to_be_bytes());
                    header[0x49] = *channel_code;
                    data.extend_from_slice(&header);
                    data.extend_from_slice(pcm);
                    data_start = data.len();
                    headers.push(AbsoluteOffset(header_pos));
                    (*index, (header_pos - self.dwav_offset) as u32)
                }
            };
            data[slot_pos..slot_pos + 4].copy_from_slice(&index.to_be_bytes());
            data[slot_pos + 8..slot_pos + 12].copy_from_slice(&pointer.to_be_bytes());
        }
        let terminator = table_start + self.slots.len() * slot_len;
        data[terminator..terminator + 4].copy_from_slice(&u32::MAX.to_be_bytes());
        data.extend_from_slice(&self.trailing);
        debug_assert!(headers
            .iter()
            .all(|h| h.get() + SampleHeaderRecord::byte_len() <= data.len()));
        (ByteSource::new(data), headers)
    }
}
