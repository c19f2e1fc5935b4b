//! Implements the ReaxFF text codec.
//!
//! The [`parser`] splits raw text into the seven fixed sections by their
//! declared item counts; the [`writer`] renders a parsed document back to
//! fixed-column-width text using one row template per section kind. Parsing
//! followed by formatting normalizes a file to a stable fixed point.

pub mod parser;
pub mod writer;
