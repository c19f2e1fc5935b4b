//! Provides file input/output for ReaxFF parameter documents.
//!
//! This module exposes a trait-based interface for reading and writing
//! parameter files from paths or arbitrary readers/writers. Output is always
//! rendered in full before any bytes are written, so a formatting error
//! never leaves a truncated file on disk.

pub mod reaxff;
pub mod traits;
