//! Content hashing consumer
//!
//! Emits one tab-delimited line per record and a trailing count line.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::common::hash::{compute_hash, HashAlgorithm};
use crate::stream::error::StreamResult;
use crate::stream::reader::RecordReader;

/// Digest every record on `input`, writing
/// `path<TAB>name<TAB>length<TAB>hexdigest` per record followed by a
/// `read N files` summary line. Only the effective (logical) bytes of each
/// payload are hashed; padding is discarded. Returns the record count.
pub fn hash_stream<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    algorithm: HashAlgorithm,
) -> StreamResult<u64> {
    let mut reader = RecordReader::new(input);
    let mut files_read = 0u64;

    while let Some(record) = reader.next_record()? {
        let effective = record.effective_payload();
        let digest = compute_hash(effective, algorithm);
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            record.metadata.path,
            record.metadata.name.name,
            effective.len(),
            digest
        )?;
        files_read += 1;
    }

    writeln!(out, "read {} files", files_read)?;
    debug!(files_read, algorithm = algorithm.name(), "Hash pass complete");
    Ok(files_read)
}
