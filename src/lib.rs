//! Reads the samples stored in MTA containers and turns them into WAVE files.
//!
//! ```no_run
//! let source = mta::ByteSource::new(std::fs::read("kit.mta").unwrap());
//! for sample in mta::extract(&source).unwrap() {
//!     match sample {
//!         Ok(sample) => println!("{:03} {}", sample.index, sample.display_name()),
//!         Err(failure) => eprintln!("{failure}"),
//!     }
//! }
//! ```

pub mod container;
pub mod entries;
pub mod error;
mod extract;
pub mod header;
pub mod pcm;
pub mod source;
pub mod structs;
pub mod wav;

pub use error::{EntryError, EntryFailure, MalformedContainer};
pub use extract::*;
pub use source::{AbsoluteOffset, ByteSource, RelativeOffset};

#[cfg(test)]
mod test_support;
