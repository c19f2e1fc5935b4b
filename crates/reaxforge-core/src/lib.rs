//! # ReaxForge Core Library
//!
//! A library for parsing and re-serializing ReaxFF reactive-force-field
//! parameter files, the fixed-layout plain-text format used by reactive
//! molecular-dynamics codes.
//!
//! ## Architectural Philosophy
//!
//! The library is split into three layers with a strict separation of concerns:
//!
//! - **[`model`]: The Data.** Owns the parsed representation of a parameter
//!   file (`ForceFieldDocument`) as seven ordered sections of tokenized rows.
//!   Values are kept as opaque string tokens; no force-field semantics are
//!   interpreted at this layer.
//!
//! - **[`format`]: The Codec.** The block-structured text parser and the
//!   fixed-column-width formatter. The parser splits a file into its seven
//!   sections by declared item counts; the formatter reconstructs
//!   byte-stable fixed-width text from the tokenized rows.
//!
//! - **[`io`]: The Boundary.** A trait-based file interface for reading and
//!   writing documents from paths or arbitrary readers/writers, with
//!   buffered, all-or-nothing output.

pub mod format;
pub mod io;
pub mod model;
