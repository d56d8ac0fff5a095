use std::borrow::Cow;

use log::debug;

use crate::{
    container::ContainerOffsets,
    entries::{Entry, EntryWalker},
    error::{EntryError, EntryFailure, MalformedContainer},
    header::{ChannelLayout, SampleHeader},
    pcm::transcode_sample,
    source::{AbsoluteOffset, ByteSource},
    structs::WavHeader,
    wav::encode_wav,
};

#[derive(Debug, Clone)]
pub struct ExtractedSample {
    pub index: u32,
    pub name: Option<String>,
    pub sample_rate: u16,
    pub layout: ChannelLayout,
    /// complete WAVE file
    pub wav: Vec<u8>,
}

impl ExtractedSample {
    /// the stored name, or `sample_{index}` for unnamed samples
    pub fn display_name(&self) -> Cow<'_, str> {
        match &self.name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("sample_{}", self.index)),
        }
    }

    pub fn pcm_len(&self) -> usize {
        self.wav.len().saturating_sub(WavHeader::byte_len())
    }
}

/// Runs header reading, transcoding and encoding for a single entry.
///
/// `next_header` is the header offset of the following entry, it bounds the PCM data.
pub fn extract_entry(
    source: &ByteSource,
    entry: &Entry,
    next_header: Option<AbsoluteOffset>,
) -> Result<ExtractedSample, EntryFailure> {
    let run = || -> Result<_, EntryError> {
        let header = SampleHeader::read(source, entry.header_offset)?;
        let pcm = transcode_sample(source, &header, next_header)?;
        let wav = encode_wav(header.layout, header.sample_rate.into(), &pcm)?;
        Ok(ExtractedSample {
            index: entry.index,
            name: header.name,
            sample_rate: header.sample_rate,
            layout: header.layout,
            wav,
        })
    };
    run().map_err(|error| EntryFailure::new(entry.index, error))
}

/// Lazily extracts every entry of a container, in table order.
///
/// Created by [`extract`]. The entry table is walked up front, samples are only
/// decoded when the iterator is advanced.
pub struct Extraction<'a> {
    source: &'a ByteSource,
    offsets: ContainerOffsets,
    slots: std::vec::IntoIter<(Result<Entry, EntryFailure>, Option<AbsoluteOffset>)>,
}

impl<'a> Extraction<'a> {
    pub fn offsets(&self) -> ContainerOffsets {
        self.offsets
    }
}

impl<'a> Iterator for Extraction<'a> {
    type Item = Result<ExtractedSample, EntryFailure>;

    fn next(&mut self) -> Option<Self::Item> {
        let (slot, next_header) = self.slots.next()?;
        Some(slot.and_then(|entry| extract_entry(self.source, &entry, next_header)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<'a> ExactSizeIterator for Extraction<'a> {}

pub fn extract(source: &ByteSource) -> Result<Extraction<'_>, MalformedContainer> {
    let offsets = ContainerOffsets::locate(source)?;
    debug!("DWAV section found at offset {}", offsets.dwav_offset);
    let walked: Vec<_> = EntryWalker::new(source, offsets).collect();
    // every entry is bounded by the next entry that has a valid header offset
    let mut slots = Vec::with_capacity(walked.len());
    let mut next_header = None;
    for slot in walked.into_iter().rev() {
        let bound = next_header;
        if let Ok(entry) = &slot {
            next_header = Some(entry.header_offset);
        }
        slots.push((slot, bound));
    }
    slots.reverse();
    debug!("found {} audio entries", slots.len());
    Ok(Extraction {
        source,
        offsets,
        slots: slots.into_iter(),
    })
}

/// counts extracted samples and collects the reasons entries were skipped
#[derive(Debug, Default)]
pub struct ExtractionReport {
    pub extracted: usize,
    pub skipped: Vec<EntryFailure>,
    /// extracted, but the output couldn't be written
    pub write_failures: usize,
}

impl ExtractionReport {
    pub fn record_success(&mut self) {
        self.extracted += 1;
    }

    pub fn record_failure(&mut self, failure: EntryFailure) {
        self.skipped.push(failure);
    }

    pub fn record_write_failure(&mut self) {
        self.write_failures += 1;
    }

    pub fn total(&self) -> usize {
        self.extracted + self.skipped.len() + self.write_failures
    }
}
