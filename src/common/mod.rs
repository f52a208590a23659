// Common utilities shared across the stream consumers

pub mod hash;

// Re-exports for convenience
pub use hash::{compute_hash, HashAlgorithm};
