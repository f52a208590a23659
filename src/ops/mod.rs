//! Stream consumers built on the record demuxer
//!
//! Each consumer fully drains its input before returning; there is no
//! overlap between reading record N+1 and processing record N.

pub mod export;
pub mod hash;
pub mod index;
