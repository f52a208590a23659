//! Demuxer for the interleaved metadata/payload capture stream

pub mod error;
pub mod reader;
pub mod types;

pub use error::{StreamError, StreamResult};
pub use reader::RecordReader;
pub use types::{EntryMetadata, MetaEntry, NameEntry, Record, REGULAR_FILE_TYPE};
