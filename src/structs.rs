use binrw::binrw;

// note: all MTA structures are big endian, the produced WAVE file is little endian

/// one 32 byte slot of the entry table that follows the DWAV section header
#[binrw]
#[brw(big)]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    pub index: u32,
    // relative to the start of the DWAV section
    #[brw(pad_before = 4, pad_after = 20)]
    pub relative_pointer: u32,
}

impl EntryRecord {
    pub fn byte_len() -> usize {
        32
    }
}

#[binrw]
#[brw(big)]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SampleHeaderRecord {
    // ASCII, NUL padded
    pub name: [u8; 16],
    // 0x36
    #[brw(pad_before = 0x26)]
    pub sample_rate: u16,
    // 0x49, 0 is mono, 2 is stereo
    #[brw(pad_before = 0x11, pad_after = 6)]
    pub channel_code: u8,
}

impl SampleHeaderRecord {
    pub fn byte_len() -> usize {
        80
    }
}

/// canonical 44 byte RIFF/WAVE header for uncompressed PCM
#[binrw]
#[brw(little, magic = b"RIFF")]
#[br(assert(fmt_size == 16), assert(format_tag == 1))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WavHeader {
    // everything after this field
    pub riff_size: u32,
    #[brw(magic = b"WAVEfmt ")]
    #[br(temp)]
    #[bw(calc = 16)]
    fmt_size: u32,
    #[br(temp)]
    #[bw(calc = 1)]
    format_tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    #[brw(magic = b"data")]
    pub data_size: u32,
}

impl WavHeader {
    pub fn byte_len() -> usize {
        44
    }
}
