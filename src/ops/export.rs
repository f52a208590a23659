//! Selective export consumer
//!
//! Filters records by path pattern and entry type, mirroring matching
//! payloads into a directory tree under an output root.

use std::fs::{self, File};
use std::io::{BufRead, Write};
use std::path::{Component, Path, PathBuf};

use regex::Regex;
use tracing::{debug, trace, warn};

use crate::stream::error::{StreamError, StreamResult};
use crate::stream::reader::RecordReader;
use crate::stream::types::REGULAR_FILE_TYPE;

/// Export every record whose full logical path matches `pattern`, whose
/// entry type is the regular-file code, and whose bare name is not the
/// `.`/`..` pseudo-entry. Writes the effective (logical) bytes only;
/// colliding paths are last-write-wins. Returns the number of files written.
pub fn export_stream<R: BufRead>(
    input: R,
    pattern: &Regex,
    output_root: &Path,
) -> StreamResult<u64> {
    let mut reader = RecordReader::new(input);
    let mut files_written = 0u64;

    while let Some(record) = reader.next_record()? {
        let (full_path, bare_name) = record.metadata.full_path();
        if !pattern.is_match(&full_path) {
            continue;
        }
        if record.metadata.name.entry_type != REGULAR_FILE_TYPE {
            trace!(path = %full_path, entry_type = record.metadata.name.entry_type, "Skipping non-file entry");
            continue;
        }
        if bare_name == "." || bare_name == ".." {
            continue;
        }

        let Some(destination) = destination(output_root, &full_path) else {
            warn!(path = %full_path, "Refusing path that would escape the output root");
            continue;
        };

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|e| StreamError::Filesystem {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
        let data = record.effective_payload();
        write_file(&destination, data)?;

        files_written += 1;
        debug!(path = %full_path, bytes = data.len(), "Exported file");
    }

    Ok(files_written)
}

/// Map a logical capture path onto the output root.
///
/// Leading separators are dropped and any `.`/`..` component disqualifies
/// the path, so an export can never land outside the root.
fn destination(root: &Path, full_path: &str) -> Option<PathBuf> {
    let relative = full_path.trim_start_matches('/');
    if relative.is_empty() {
        return None;
    }
    let candidate = Path::new(relative);
    for component in candidate.components() {
        match component {
            Component::Normal(_) => {}
            _ => return None,
        }
    }
    Some(root.join(candidate))
}

fn write_file(path: &Path, data: &[u8]) -> StreamResult<()> {
    let mut file = File::create(path).map_err(|e| StreamError::Filesystem {
        path: path.display().to_string(),
        source: e,
    })?;
    file.write_all(data).map_err(|e| StreamError::Filesystem {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn unit(json: &str, payload: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(json.as_bytes());
        buf.push(b'\n');
        buf.extend_from_slice(&(payload.len() as u64).to_le_bytes());
        buf.extend_from_slice(payload);
        buf
    }

    #[test]
    fn test_exports_effective_bytes() {
        let dir = tempdir().unwrap();
        let stream = unit(
            r#"{"path":"/a/","name":{"name":"b.txt","type":5},"meta":{"size":3}}"#,
            b"HELLO",
        );
        let pattern = Regex::new(r"b\.txt$").unwrap();
        let written = export_stream(Cursor::new(stream), &pattern, dir.path()).unwrap();

        assert_eq!(written, 1);
        let exported = fs::read(dir.path().join("a/b.txt")).unwrap();
        assert_eq!(exported, b"HEL");
    }

    #[test]
    fn test_non_file_entry_type_is_skipped() {
        let dir = tempdir().unwrap();
        let stream = unit(
            r#"{"path":"/a/","name":{"name":"b.txt","type":4},"meta":{"size":3}}"#,
            b"HELLO",
        );
        let pattern = Regex::new(r"b\.txt$").unwrap();
        let written = export_stream(Cursor::new(stream), &pattern, dir.path()).unwrap();

        assert_eq!(written, 0);
        assert!(!dir.path().join("a/b.txt").exists());
    }

    #[test]
    fn test_dot_entries_never_materialized() {
        let dir = tempdir().unwrap();
        let mut stream = unit(r#"{"path":"/a/","name":{"name":".","type":5}}"#, b"xx");
        stream.extend(unit(r#"{"path":"/a/","name":{"name":"..","type":5}}"#, b"yy"));
        let pattern = Regex::new(".").unwrap();
        let written = export_stream(Cursor::new(stream), &pattern, dir.path()).unwrap();

        assert_eq!(written, 0);
        assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_pattern_mismatch_is_skipped() {
        let dir = tempdir().unwrap();
        let stream = unit(r#"{"path":"/a/","name":{"name":"b.txt","type":5}}"#, b"abc");
        let pattern = Regex::new(r"\.jpg$").unwrap();
        let written = export_stream(Cursor::new(stream), &pattern, dir.path()).unwrap();
        assert_eq!(written, 0);
    }

    #[test]
    fn test_pattern_is_unanchored_search() {
        let dir = tempdir().unwrap();
        let stream = unit(
            r#"{"path":"/docs/2012/","name":{"name":"report.txt","type":5}}"#,
            b"data",
        );
        let pattern = Regex::new("2012").unwrap();
        let written = export_stream(Cursor::new(stream), &pattern, dir.path()).unwrap();
        assert_eq!(written, 1);
        assert!(dir.path().join("docs/2012/report.txt").exists());
    }

    #[test]
    fn test_traversal_components_are_refused() {
        let dir = tempdir().unwrap();
        let stream = unit(
            r#"{"path":"/a/../../","name":{"name":"evil.txt","type":5}}"#,
            b"nope",
        );
        let pattern = Regex::new("evil").unwrap();
        let written = export_stream(Cursor::new(stream), &pattern, dir.path()).unwrap();
        assert_eq!(written, 0);
    }

    #[test]
    fn test_colliding_paths_last_write_wins() {
        let dir = tempdir().unwrap();
        let mut stream = unit(r#"{"path":"/a/","name":{"name":"b.txt","type":5}}"#, b"first");
        stream.extend(unit(
            r#"{"path":"/a/","name":{"name":"b.txt","type":5}}"#,
            b"second",
        ));
        let pattern = Regex::new(r"b\.txt$").unwrap();
        let written = export_stream(Cursor::new(stream), &pattern, dir.path()).unwrap();

        assert_eq!(written, 2);
        assert_eq!(fs::read(dir.path().join("a/b.txt")).unwrap(), b"second");
    }

    #[test]
    fn test_truncated_stream_reports_path_in_flight() {
        let dir = tempdir().unwrap();
        let mut stream = Vec::new();
        stream.extend_from_slice(br#"{"path":"/a/","name":{"name":"b.txt","type":5}}"#);
        stream.push(b'\n');
        stream.extend_from_slice(&10u64.to_le_bytes());
        stream.extend_from_slice(b"HELL");

        let pattern = Regex::new(".").unwrap();
        let err = export_stream(Cursor::new(stream), &pattern, dir.path()).unwrap_err();
        match err {
            StreamError::StreamTruncated {
                expected,
                actual,
                path,
            } => {
                assert_eq!(expected, 10);
                assert_eq!(actual, 4);
                assert_eq!(path, "/a/b.txt");
            }
            other => panic!("expected StreamTruncated, got {:?}", other),
        }
    }
}
