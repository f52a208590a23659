//! Path/ID indexing consumer for the metadata-only stream variant
//!
//! Each input line is a JSON object of shape
//! `{id, t:{fsmd:{path, name:{name,...}, meta:{...}, fs:{...}}}}` with no
//! trailing binary blob. Missing mandatory keys are diagnosed on the error
//! channel but never abort the run; the output line is emitted with whatever
//! could be extracted.

use std::io::{BufRead, Write};

use serde_json::Value;
use tracing::debug;

use crate::stream::error::{StreamError, StreamResult};

/// Index every line on `input`, writing `id<TAB>fullpath` to `out` and a
/// `** no <key> on <line>` diagnostic to `err` for each missing mandatory
/// key. Returns the number of lines processed.
pub fn index_stream<R: BufRead, W: Write, E: Write>(
    input: R,
    out: &mut W,
    err: &mut E,
) -> StreamResult<u64> {
    let mut lines_read = 0u64;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let metadata: Value =
            serde_json::from_str(line).map_err(|e| StreamError::MalformedMetadata {
                line: line.to_string(),
                source: e,
            })?;

        if metadata.get("id").is_none() {
            writeln!(err, "** no id on {}", line)?;
        }
        let id = text(metadata.get("id"));

        let t = metadata.get("t");
        if t.is_none() {
            writeln!(err, "** no t on {}", line)?;
        }
        let fsmd = t.and_then(|t| t.get("fsmd"));
        if t.is_some() && fsmd.is_none() {
            writeln!(err, "** no fsmd in t on {}", line)?;
        }

        let path = fsmd.and_then(|f| f.get("path"));
        if fsmd.is_some() && path.is_none() {
            writeln!(err, "** no path in fsmd on {}", line)?;
        }
        let name = fsmd.and_then(|f| f.get("name")).and_then(|n| n.get("name"));
        if fsmd.is_some() && name.is_none() {
            writeln!(err, "** no name in fsmd on {}", line)?;
        }

        // Same concatenation rule as the binary-stream path builder
        writeln!(out, "{}\t{}{}", id, text(path), text(name))?;
        lines_read += 1;
    }

    debug!(lines_read, "Index pass complete");
    Ok(lines_read)
}

/// Best-effort text extraction: absent keys become the empty string rather
/// than dropping the line
fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
