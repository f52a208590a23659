//! Type definitions for the triage capture stream

use serde::Deserialize;

/// Name-type code for a regular file, as emitted by the capture walker
pub const REGULAR_FILE_TYPE: u32 = 5;

/// Byte length of the little-endian physical size prefix
pub const SIZE_PREFIX_LEN: usize = 8;

/// One line of structured metadata describing a filesystem entry
#[derive(Debug, Clone, Deserialize)]
pub struct EntryMetadata {
    /// Directory portion of the logical location; may be empty and carries
    /// its own trailing separator when one is wanted
    #[serde(default)]
    pub path: String,
    pub name: NameEntry,
    #[serde(default)]
    pub meta: Option<MetaEntry>,
}

/// Directory-entry name record
#[derive(Debug, Clone, Deserialize)]
pub struct NameEntry {
    pub name: String,
    #[serde(rename = "type", default)]
    pub entry_type: u32,
    #[serde(default)]
    pub flags: Option<serde_json::Value>,
}

/// Declared (logical) metadata for an entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetaEntry {
    /// Declared logical size; physical bytes beyond this are padding
    #[serde(default)]
    pub size: Option<u64>,
}

impl EntryMetadata {
    /// Logical length to expose to consumers: the physical length, clamped
    /// by the declared size when one is present. Never exceeds `physical_len`.
    pub fn effective_len(&self, physical_len: u64) -> u64 {
        match self.meta.as_ref().and_then(|m| m.size) {
            Some(declared) => physical_len.min(declared),
            None => physical_len,
        }
    }

    /// Full logical path and bare entry name. Plain concatenation: the
    /// trailing separator, if any, is already part of `path`.
    pub fn full_path(&self) -> (String, &str) {
        let mut full = String::with_capacity(self.path.len() + self.name.name.len());
        full.push_str(&self.path);
        full.push_str(&self.name.name);
        (full, self.name.name.as_str())
    }
}

/// One demuxed unit: metadata plus the physically stored payload.
///
/// Created per iteration and consumed immediately by one downstream call;
/// never retained past a single processing step.
#[derive(Debug)]
pub struct Record {
    pub metadata: EntryMetadata,
    pub physical_len: u64,
    pub payload: Vec<u8>,
}

impl Record {
    /// Payload slice trimmed to the logical length; padding bytes beyond it
    /// must never be hashed, exported or counted
    pub fn effective_payload(&self) -> &[u8] {
        let len = self.metadata.effective_len(self.physical_len) as usize;
        &self.payload[..len.min(self.payload.len())]
    }
}
