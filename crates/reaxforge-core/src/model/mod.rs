//! Provides the data model for parsed ReaxFF parameter files.
//!
//! This module contains the owned, mutable-by-the-caller representation of a
//! force-field file: a verbatim header line plus seven positional sections of
//! whitespace-tokenized rows. All values are stored as opaque strings; type
//! coercion happens only when the formatter renders a row back to text.

pub mod document;
pub mod section;
