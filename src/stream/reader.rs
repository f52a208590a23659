//! Cursor-based demuxer for the interleaved metadata/payload stream

use std::io::{BufRead, ErrorKind, Read};

use tracing::trace;

use super::error::{StreamError, StreamResult};
use super::types::{EntryMetadata, Record, SIZE_PREFIX_LEN};

/// Demuxes one unit per call from a single exclusively-owned input handle.
///
/// Each unit is one JSON metadata line, an 8-byte little-endian physical
/// length, and that many raw payload bytes. Byte-offset bookkeeping for
/// subsequent records depends on every prior record being correctly sized,
/// so parse and truncation failures are fatal: no resynchronization is
/// attempted. The only state kept across calls is the stream cursor.
pub struct RecordReader<R: BufRead> {
    input: R,
    line_buf: String,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(input: R) -> Self {
        RecordReader {
            input,
            line_buf: String::new(),
        }
    }

    /// Read the next unit. `Ok(None)` signals normal end-of-stream; an empty
    /// read on the metadata line is the only normal termination condition.
    pub fn next_record(&mut self) -> StreamResult<Option<Record>> {
        self.line_buf.clear();
        if self.input.read_line(&mut self.line_buf)? == 0 {
            return Ok(None);
        }
        let line = self.line_buf.trim_end_matches(['\n', '\r']);
        let metadata: EntryMetadata =
            serde_json::from_str(line).map_err(|e| StreamError::MalformedMetadata {
                line: line.to_string(),
                source: e,
            })?;

        let mut prefix = [0u8; SIZE_PREFIX_LEN];
        let got = read_full(&mut self.input, &mut prefix)?;
        if got < SIZE_PREFIX_LEN {
            return Err(StreamError::StreamTruncated {
                expected: SIZE_PREFIX_LEN as u64,
                actual: got as u64,
                path: metadata.full_path().0,
            });
        }
        let physical_len = u64::from_le_bytes(prefix);

        let mut payload = vec![0u8; physical_len as usize];
        let got = read_full(&mut self.input, &mut payload)?;
        if (got as u64) < physical_len {
            return Err(StreamError::StreamTruncated {
                expected: physical_len,
                actual: got as u64,
                path: metadata.full_path().0,
            });
        }

        trace!(
            path = %metadata.path,
            name = %metadata.name.name,
            physical_len,
            "Demuxed record"
        );
        Ok(Some(Record {
            metadata,
            physical_len,
            payload,
        }))
    }
}

/// Read until `buf` is full or the stream ends; returns the bytes actually
/// read so truncation can be reported with both counts
fn read_full<R: Read>(input: &mut R, buf: &mut [u8]) -> StreamResult<usize> {
    let mut filled = 0usize;
    while filled < buf.len() {
        match input.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(StreamError::Io(e)),
        }
    }
    Ok(filled)
}
