//! Triage-stream demux tools
//!
//! A forensic-triage capture is a sequential stream of alternating units:
//! one JSON metadata line describing a filesystem entry, an 8-byte
//! little-endian physical length, and that many raw payload bytes. This
//! crate demuxes that stream and drives three consumers over it: content
//! hashing, selective file export, and path/ID indexing of the
//! metadata-only stream variant.

pub mod common;
pub mod logging;
pub mod ops;
pub mod stream;
