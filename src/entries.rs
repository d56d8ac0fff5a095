use std::io::Cursor;

use binrw::BinReaderExt;
use log::{debug, trace};

use crate::{
    container::ContainerOffsets,
    error::{EntryError, EntryFailure},
    source::{AbsoluteOffset, ByteSource, RelativeOffset},
    structs::{EntryRecord, SampleHeaderRecord},
};

/// the entry table starts this far into the DWAV section
pub const ENTRY_TABLE_START: usize = 0x20;
/// slots with a higher index mark the end of the table
pub const MAX_ENTRY_INDEX: u32 = 0xFFFF;
/// this many unused slots in a row end the table
pub const MAX_EMPTY_SLOTS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub index: u32,
    pub relative_pointer: RelativeOffset,
    /// start of the sample header, `dwav_offset + relative_pointer`
    pub header_offset: AbsoluteOffset,
}

/// Walks the entry table of the DWAV section.
///
/// Unused slots (relative pointer 0) are skipped. The walk ends at the end of the
/// file, at a slot with an index above [`MAX_ENTRY_INDEX`], or after more than
/// [`MAX_EMPTY_SLOTS`] unused slots in a row. Entries whose header would not fit
/// into the file are reported as [`EntryError::OutOfBoundsEntry`] and the walk
/// continues with the next slot.
#[derive(Debug, Clone)]
pub struct EntryWalker<'a> {
    source: &'a ByteSource,
    dwav_offset: AbsoluteOffset,
    next_slot: Option<AbsoluteOffset>,
    empty_run: usize,
}

impl<'a> EntryWalker<'a> {
    pub fn new(source: &'a ByteSource, offsets: ContainerOffsets) -> Self {
        Self {
            source,
            dwav_offset: offsets.dwav_offset,
            next_slot: offsets.dwav_offset.checked_add(ENTRY_TABLE_START),
            empty_run: 0,
        }
    }

    fn finish(&mut self) -> Option<Result<Entry, EntryFailure>> {
        self.next_slot = None;
        None
    }
}

impl<'a> Iterator for EntryWalker<'a> {
    type Item = Result<Entry, EntryFailure>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let slot = self.next_slot?;
            let Some(bytes) = self.source.slice(slot, EntryRecord::byte_len()) else {
                trace!("entry slot at {slot} doesn't fit into the file, table ends");
                return self.finish();
            };
            let Ok(record) = Cursor::new(bytes).read_be::<EntryRecord>() else {
                return self.finish();
            };
            self.next_slot = slot.checked_add(EntryRecord::byte_len());

            if record.index > MAX_ENTRY_INDEX {
                debug!("slot at {slot} has index {:#x}, table ends", record.index);
                return self.finish();
            }
            if record.relative_pointer == 0 {
                self.empty_run += 1;
                if self.empty_run > MAX_EMPTY_SLOTS {
                    debug!("{} unused slots in a row, table ends", self.empty_run);
                    return self.finish();
                }
                trace!("slot at {slot} is unused");
                continue;
            }
            self.empty_run = 0;

            let relative_pointer = RelativeOffset(record.relative_pointer);
            let header_offset = self.dwav_offset.resolve(relative_pointer);
            return Some(match header_offset {
                Some(header_offset)
                    if self
                        .source
                        .contains(header_offset, SampleHeaderRecord::byte_len()) =>
                {
                    trace!("entry {} has its header at {header_offset}", record.index);
                    Ok(Entry {
                        index: record.index,
                        relative_pointer,
                        header_offset,
                    })
                }
                _ => Err(EntryFailure::new(
                    record.index,
                    EntryError::OutOfBoundsEntry {
                        offset: header_offset.unwrap_or(AbsoluteOffset(usize::MAX)),
                    },
                )),
            });
        }
    }
}
